//! Inventory API routes

use axum::Router;
use domain_inventory::handlers;

use crate::state::AppState;

/// Create inventory router (`/products`, `/update-stock`)
pub fn router(state: &AppState) -> Router {
    handlers::router(state.inventory.clone())
}
