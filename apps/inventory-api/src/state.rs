//! Application state management

use domain_inventory::{InventoryService, JsonFileProductRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub inventory: InventoryService<JsonFileProductRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let repository = JsonFileProductRepository::new(&config.storage.products_file);
        Self {
            inventory: InventoryService::new(repository),
            config,
        }
    }
}
