//! Inventory Service - Business logic layer

use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::error::{InventoryError, InventoryResult, ValidationError};
use crate::models::{whole_u64, Product, ProductId, UpdateStockRequest};
use crate::repository::ProductRepository;

/// Validates a requested stock quantity.
///
/// Checks run in a fixed order: presence, then numeric type, then sign. A
/// non-numeric value is therefore always reported as "not a number", even a
/// string such as `"-5"`.
pub fn validate_quantity(raw: &Value) -> Result<u64, ValidationError> {
    let Value::Number(n) = raw else {
        return Err(ValidationError::NotANumber);
    };

    if let Some(q) = n.as_u64() {
        return Ok(q);
    }
    if n.as_i64().is_some() {
        return Err(ValidationError::NegativeQuantity);
    }

    let f = n.as_f64().ok_or(ValidationError::NotANumber)?;
    if !f.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if f < 0.0 {
        return Err(ValidationError::NegativeQuantity);
    }
    if f.fract() != 0.0 {
        return Err(ValidationError::NotWholeNumber);
    }
    whole_u64(f).ok_or(ValidationError::TooLarge)
}

/// Inventory service providing the list and stock-update operations.
///
/// Stock updates are read-modify-write cycles over the whole collection. They
/// are serialized through one mutex shared by all clones of the service, so
/// two concurrent updates cannot overwrite each other. Reads take no lock.
pub struct InventoryService<R: ProductRepository> {
    repository: Arc<R>,
    write_lock: Arc<Mutex<()>>,
}

impl<R: ProductRepository> InventoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// List all products, freshly loaded from storage
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> InventoryResult<Vec<Product>> {
        self.repository.load_all().await
    }

    /// Validate an update request and apply it.
    #[instrument(skip(self, request))]
    pub async fn update_stock(&self, request: UpdateStockRequest) -> InventoryResult<Product> {
        let (Some(raw_id), Some(raw_quantity)) = (request.id, request.new_quantity) else {
            return Err(ValidationError::MissingField.into());
        };

        let quantity = validate_quantity(&raw_quantity)?;

        // An id of a type no product can carry can never match.
        let Some(id) = ProductId::from_json(&raw_id) else {
            return Err(InventoryError::NotFound {
                id: raw_id.to_string(),
            });
        };

        self.set_stock(&id, quantity).await
    }

    /// Set a product's stock to exactly `quantity` and persist the collection.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn set_stock(&self, id: &ProductId, quantity: u64) -> InventoryResult<Product> {
        let _guard = self.write_lock.lock().await;

        let mut products = self.repository.load_all().await?;

        let product = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| InventoryError::NotFound { id: id.to_string() })?;

        let previous = product.stock;
        product.stock = quantity;
        let updated = product.clone();

        self.repository.save_all(&products).await?;

        info!(previous, stock = quantity, "Stock updated");
        Ok(updated)
    }
}

impl<R: ProductRepository> Clone for InventoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}
