//! HTTP handlers for the Inventory API

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    JsonBody,
};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::InventoryResult;
use crate::models::{ApiResponse, Price, Product, ProductId, UpdateStockRequest};
use crate::repository::ProductRepository;
use crate::service::InventoryService;

/// OpenAPI documentation for the Inventory API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, update_stock),
    components(
        schemas(Product, ProductId, Price, UpdateStockRequest),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Inventory", description = "Product listing and stock updates")
    )
)]
pub struct ApiDoc;

/// Create the inventory router (`GET /products`, `POST /update-stock`)
pub fn router<R: ProductRepository + 'static>(service: InventoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route("/update-stock", post(update_stock))
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Inventory",
    responses(
        (status = 200, description = "All products in stored order", body = ApiResponse<Vec<Product>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
) -> InventoryResult<Json<ApiResponse<Vec<Product>>>> {
    let products = service.list_products().await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// Set a product's stock to an absolute quantity
#[utoipa::path(
    post,
    path = "/update-stock",
    tag = "Inventory",
    request_body = UpdateStockRequest,
    responses(
        (status = 200, description = "Stock updated", body = ApiResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_stock<R: ProductRepository>(
    State(service): State<Arc<InventoryService<R>>>,
    JsonBody(body): JsonBody<Value>,
) -> InventoryResult<Json<ApiResponse<Product>>> {
    let product = service.update_stock(UpdateStockRequest::from(body)).await?;
    Ok(Json(ApiResponse::ok(product)))
}
