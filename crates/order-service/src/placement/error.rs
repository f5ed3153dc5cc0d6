//! Error types for order placement.

use crate::ports::StoreError;
use thiserror::Error;

/// Why an order was not placed. Exactly one is reported per request: the first failing
/// line, in request order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlacementError {
    /// The product reference is not a well-formed document id.
    #[error("Invalid product ID format: {0}")]
    InvalidIdentifier(String),

    #[error("Product with ID {0} not found")]
    ProductNotFound(String),

    /// No single size bucket of the product can cover the requested quantity.
    #[error("Not enough stock for product '{name}' (ID: {product_id})")]
    InsufficientStock { product_id: String, name: String },

    #[error("Order has no items")]
    EmptyOrder,

    #[error("Quantity for product {product_id} must be at least 1")]
    InvalidQuantity { product_id: String },

    /// Price × quantity, summed over the lines so far, is not a finite number.
    #[error("Order total is out of range at product {product_id}")]
    TotalOverflow { product_id: String },

    /// The store failed; whether earlier lines were applied is not reported.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store refused the finished order as malformed.
    #[error("Order rejected by store: {0}")]
    OrderRejected(String),
}

impl From<StoreError> for PlacementError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(msg) => PlacementError::StoreUnavailable(msg),
            StoreError::Rejected(msg) => PlacementError::OrderRejected(msg),
        }
    }
}
