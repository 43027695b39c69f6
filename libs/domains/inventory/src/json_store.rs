//! Flat-file product repository.
//!
//! The whole collection lives in one pretty-printed JSON array. Writes go to
//! a sibling `<file>.tmp` first and are then renamed over the document, so a
//! concurrent reader never observes a half-written file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, instrument};

use crate::error::{InventoryError, InventoryResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// [`ProductRepository`] backed by a single JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileProductRepository {
    path: PathBuf,
}

impl JsonFileProductRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "products.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_error(&self, reason: impl ToString) -> InventoryError {
        let reason = reason.to_string();
        error!(path = %self.path.display(), %reason, "Error reading products");
        InventoryError::StorageRead {
            path: self.path.clone(),
            reason,
        }
    }

    fn write_error(&self, reason: impl ToString) -> InventoryError {
        let reason = reason.to_string();
        error!(path = %self.path.display(), %reason, "Error writing products");
        InventoryError::StorageWrite {
            path: self.path.clone(),
            reason,
        }
    }
}

#[async_trait]
impl ProductRepository for JsonFileProductRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_all(&self) -> InventoryResult<Vec<Product>> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.read_error(e))?;

        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|e| self.read_error(e))?;

        debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    #[instrument(skip(self, products), fields(path = %self.path.display(), count = products.len()))]
    async fn save_all(&self, products: &[Product]) -> InventoryResult<()> {
        let json = serde_json::to_string_pretty(products).map_err(|e| self.write_error(e))?;

        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| self.write_error(e))?;

        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(self.write_error(e));
        }

        debug!("Saved products");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample() -> serde_json::Value {
        json!([
            { "id": 1, "name": "Laptop", "price": 2499, "stock": 5, "lowStockThreshold": 3 },
            { "id": 2, "name": "Mouse", "price": 19.99, "stock": 0, "lowStockThreshold": 2,
              "image": "https://example.com/mouse.png" }
        ])
    }

    async fn seeded(dir: &TempDir) -> JsonFileProductRepository {
        let path = dir.path().join("products.json");
        fs::write(&path, serde_json::to_string_pretty(&sample()).unwrap())
            .await
            .unwrap();
        JsonFileProductRepository::new(path)
    }

    #[tokio::test]
    async fn test_load_all_preserves_order() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir).await;

        let products = repo.load_all().await.unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec![ProductId::Number(1), ProductId::Number(2)]);
        assert_eq!(products[1].image.as_deref(), Some("https://example.com/mouse.png"));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileProductRepository::new(dir.path().join("absent.json"));

        let err = repo.load_all().await.unwrap_err();
        assert!(matches!(err, InventoryError::StorageRead { .. }));
    }

    #[tokio::test]
    async fn test_load_invalid_json_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        fs::write(&path, "[{ \"id\": 1, ").await.unwrap();

        let err = JsonFileProductRepository::new(path).load_all().await.unwrap_err();
        assert!(matches!(err, InventoryError::StorageRead { .. }));
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips_document() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir).await;

        let mut products = repo.load_all().await.unwrap();
        products[0].stock = 9;
        repo.save_all(&products).await.unwrap();

        let raw = fs::read_to_string(repo.path()).await.unwrap();
        let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let mut expected = sample();
        expected[0]["stock"] = json!(9);
        assert_eq!(stored, expected);
        assert!(raw.contains("\n  {"), "document is pretty-printed");
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir).await;

        let products = repo.load_all().await.unwrap();
        repo.save_all(&products).await.unwrap();

        assert!(!dir.path().join("products.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileProductRepository::new(dir.path().join("nested/products.json"));

        let err = repo.save_all(&[]).await.unwrap_err();
        assert!(matches!(err, InventoryError::StorageWrite { .. }));
    }
}
