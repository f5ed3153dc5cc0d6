//! HTTP mapping of service errors.
//!
//! Every failure is answered with `{"code": "...", "message": "..."}` and a status that
//! tells the caller whether retrying the same request can help.

use crate::placement::PlacementError;
use crate::ports::StoreError;
use crate::product_actor::ProductError;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A path segment that should be a document id is not one.
    #[error("Invalid product ID format: {0}")]
    InvalidId(String),
}

impl ApiError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Placement(e) => match e {
                PlacementError::InvalidIdentifier(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_identifier")
                }
                PlacementError::ProductNotFound(_) => (StatusCode::NOT_FOUND, "product_not_found"),
                PlacementError::InsufficientStock { .. } => {
                    (StatusCode::BAD_REQUEST, "insufficient_stock")
                }
                PlacementError::EmptyOrder => (StatusCode::UNPROCESSABLE_ENTITY, "empty_order"),
                PlacementError::InvalidQuantity { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "invalid_quantity")
                }
                PlacementError::TotalOverflow { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "total_overflow")
                }
                PlacementError::StoreUnavailable(_) => {
                    (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable")
                }
                PlacementError::OrderRejected(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "order_rejected")
                }
            },
            ApiError::Product(e) => match e {
                ProductError::NotFound(_) => (StatusCode::NOT_FOUND, "product_not_found"),
                ProductError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_product"),
                ProductError::ActorCommunicationError(_) => {
                    (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable")
                }
            },
            ApiError::Store(e) => match e {
                StoreError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
                StoreError::Rejected(_) => (StatusCode::INTERNAL_SERVER_ERROR, "order_rejected"),
            },
            ApiError::InvalidId(_) => (StatusCode::BAD_REQUEST, "invalid_identifier"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        } else {
            tracing::debug!(error = %self, code, "Request rejected");
        }
        let body = ErrorBody {
            code: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_statuses() {
        let cases = [
            (PlacementError::InvalidIdentifier("x".into()), StatusCode::BAD_REQUEST),
            (PlacementError::ProductNotFound("x".into()), StatusCode::NOT_FOUND),
            (
                PlacementError::InsufficientStock {
                    product_id: "x".into(),
                    name: "n".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (PlacementError::EmptyOrder, StatusCode::UNPROCESSABLE_ENTITY),
            (
                PlacementError::InvalidQuantity {
                    product_id: "x".into(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                PlacementError::TotalOverflow {
                    product_id: "x".into(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                PlacementError::StoreUnavailable("down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                PlacementError::OrderRejected("bad".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status_and_code().0, status);
        }
    }

    #[test]
    fn test_catalog_validation_is_unprocessable() {
        let (status, code) =
            ApiError::from(ProductError::Validation("price".into())).status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "invalid_product");
    }
}
