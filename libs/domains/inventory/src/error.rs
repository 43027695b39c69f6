use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::path::PathBuf;
use thiserror::Error;

/// Rejections of a stock update request, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: id and newQuantity")]
    MissingField,

    #[error("Stock quantity must be a valid number")]
    NotANumber,

    #[error("Stock quantity must be a whole number")]
    NotWholeNumber,

    #[error("Stock quantity cannot be negative")]
    NegativeQuantity,

    #[error("Stock quantity is too large")]
    TooLarge,
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Product not found")]
    NotFound { id: String },

    #[error("Failed to read products data")]
    StorageRead { path: PathBuf, reason: String },

    #[error("Failed to save products data")]
    StorageWrite { path: PathBuf, reason: String },
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Convert InventoryError to AppError for standardized error responses
impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::Validation(e) => AppError::BadRequest(e.to_string()),
            e @ InventoryError::NotFound { .. } => AppError::NotFound(e.to_string()),
            e @ (InventoryError::StorageRead { .. } | InventoryError::StorageWrite { .. }) => {
                AppError::InternalServerError(e.to_string())
            }
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                InventoryError::from(ValidationError::NegativeQuantity),
                StatusCode::BAD_REQUEST,
            ),
            (
                InventoryError::NotFound { id: "99".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                InventoryError::StorageRead {
                    path: "data/products.json".into(),
                    reason: "missing".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                InventoryError::StorageWrite {
                    path: "data/products.json".into(),
                    reason: "read-only".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_storage_messages_hide_reason() {
        let err = InventoryError::StorageRead {
            path: "/srv/products.json".into(),
            reason: "No such file or directory".into(),
        };
        assert_eq!(err.to_string(), "Failed to read products data");
    }
}
