//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Service-level documentation: info, servers and the health check
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "Product listing and stock management over a JSON document",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(axum_helpers::server::health::health_handler),
    components(schemas(axum_helpers::HealthResponse)),
    tags(
        (name = "Health", description = "Liveness check")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for Inventory API.
///
/// Inventory routes are mounted at the root, so the domain document is merged
/// rather than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_inventory::ApiDoc::openapi());
        doc
    }
}
