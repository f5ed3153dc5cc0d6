//! # Store Ports
//!
//! The two capabilities the placement engine and the query service are written against.
//! Production wires them to the collection clients in [`clients`](crate::clients); tests may
//! substitute anything that implements them.

use crate::model::{Order, OrderCreate, OrderId, Product, ProductId};
use crate::product_actor::Decrement;
use async_trait::async_trait;
use store_framework::{Found, Window};
use thiserror::Error;

/// Failures of the backing store, as opposed to domain outcomes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The store could not be reached or did not answer.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store refused a write as malformed.
    #[error("Store rejected write: {0}")]
    Rejected(String),
}

/// Product reads and the atomic stock primitive.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// `Ok(None)` when no product has this id.
    async fn find_product(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Sets the bucket to `quantity - amount` only if `quantity >= amount`, atomically.
    /// A missing product or bucket reports `Insufficient { available: 0 }`.
    async fn decrement_size(
        &self,
        id: ProductId,
        size: &str,
        amount: u32,
    ) -> Result<Decrement, StoreError>;
}

/// Append-only order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Stores the order and returns the identity assigned to it.
    async fn insert_order(&self, order: OrderCreate) -> Result<OrderId, StoreError>;

    /// A user's orders, ascending by id, windowed. `total` counts all of the user's orders.
    async fn find_orders_by_user(
        &self,
        user_id: &str,
        window: Window,
    ) -> Result<Found<Order>, StoreError>;
}
