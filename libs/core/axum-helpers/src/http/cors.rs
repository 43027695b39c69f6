use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// CORS layer accepting requests from any origin.
///
/// The inventory API has no origin allow-list; browsers on any host may call
/// it. Credentials are not allowed, which `Any` origins require.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_any_origin_is_allowed() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_permissive_cors_layer());

        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "http://dashboard.example")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
