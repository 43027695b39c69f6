//! Inventory API - REST server over a flat JSON product document

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Starting {} v{} ({:?})",
        config.app.name, config.app.version, config.environment
    );
    info!(
        "Serving products from {}",
        config.storage.products_file.display()
    );

    let state = AppState::new(config);

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state));

    let base_url = state.config.server.local_url();
    info!("Products endpoint: {}/products", base_url);
    info!("Update stock endpoint: {}/update-stock", base_url);
    info!("Health check: {}/health", base_url);

    create_production_app(
        router,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("No connections to close; product document is written per request");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}
