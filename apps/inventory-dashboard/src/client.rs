//! HTTP client for the inventory API

use domain_inventory::{ApiResponse, Product, ProductId, UpdateStockRequest};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Shown when the product list cannot be fetched at all
pub const LOAD_CONNECTION_MESSAGE: &str =
    "Failed to connect to server. Please ensure the backend is running.";
/// Shown when an update request cannot be completed at all
pub const UPDATE_CONNECTION_MESSAGE: &str = "Failed to update stock. Please check your connection.";

const LOAD_FALLBACK_MESSAGE: &str = "Failed to load products";
const UPDATE_FALLBACK_MESSAGE: &str = "Failed to update stock";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for inventory API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with `success: false`; carries its `error` text,
    /// which may be empty.
    #[error("API error: {0}")]
    Api(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Banner text for a failed product load
    pub fn load_message(&self) -> String {
        self.banner(LOAD_CONNECTION_MESSAGE, LOAD_FALLBACK_MESSAGE)
    }

    /// Banner text for a failed stock update
    pub fn update_message(&self) -> String {
        self.banner(UPDATE_CONNECTION_MESSAGE, UPDATE_FALLBACK_MESSAGE)
    }

    fn banner(&self, transport: &str, fallback: &str) -> String {
        match self {
            ClientError::Api(message) if !message.is_empty() => message.clone(),
            ClientError::Api(_) => fallback.to_string(),
            ClientError::Network(_) | ClientError::Decode(_) => transport.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Client for `GET /products` and `POST /update-stock`
#[derive(Clone, Debug)]
pub struct InventoryClient {
    http: Client,
    base_url: String,
}

impl InventoryClient {
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        let response = self
            .http
            .get(format!("{}/products", self.base_url))
            .send()
            .await?;

        let products: Vec<Product> = decode(response).await?;
        debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url, product_id = %id))]
    pub async fn update_stock(&self, id: &ProductId, new_quantity: u64) -> ClientResult<Product> {
        let response = self
            .http
            .post(format!("{}/update-stock", self.base_url))
            .json(&UpdateStockRequest::new(id, new_quantity))
            .send()
            .await?;

        decode(response).await
    }
}

/// Unwraps the `{success, data | error}` envelope regardless of status code.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let body = response.text().await?;

    let envelope: ApiResponse<T> = serde_json::from_str(&body).map_err(|e| {
        warn!(%status, error = %e, "Unexpected response body");
        ClientError::Decode(e.to_string())
    })?;

    match envelope {
        ApiResponse {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        ApiResponse { success: true, .. } => {
            Err(ClientError::Decode("response has no data".to_string()))
        }
        ApiResponse { error, .. } => {
            debug!(%status, ?error, "Request rejected");
            Err(ClientError::Api(error.unwrap_or_default()))
        }
    }
}
