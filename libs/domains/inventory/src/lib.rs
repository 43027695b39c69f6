//! Inventory Domain
//!
//! Product listing and stock updates over a flat JSON document.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, {success, data | error} envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, read-modify-write of one product
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Whole-collection load/save (trait + JSON file)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, request/response types
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{handlers, InventoryService, JsonFileProductRepository};
//!
//! let repository = JsonFileProductRepository::new("data/products.json");
//! let service = InventoryService::new(repository);
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod json_store;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{InventoryError, InventoryResult, ValidationError};
pub use handlers::ApiDoc;
pub use json_store::JsonFileProductRepository;
pub use models::{ApiResponse, InventoryStats, Price, Product, ProductId, UpdateStockRequest};
pub use repository::ProductRepository;
pub use service::InventoryService;
