//! API routes module

pub mod products;

use axum::Router;
use axum_helpers::health_router;

use crate::state::AppState;

/// Create all API routes, mounted at the root
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(products::router(state))
        .merge(health_router())
}
