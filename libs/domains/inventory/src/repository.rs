use async_trait::async_trait;

use crate::error::InventoryResult;
use crate::models::Product;

/// Repository trait for the product collection
///
/// The collection is read and written as a whole; there is no per-product
/// access. Implementations must make `save_all` atomic: a reader sees either
/// the previous collection or the new one, never a partial write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Load every product, in stored order
    async fn load_all(&self) -> InventoryResult<Vec<Product>>;

    /// Replace the stored collection
    async fn save_all(&self, products: &[Product]) -> InventoryResult<()>;
}
