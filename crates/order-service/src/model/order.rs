/// Represents a placed order.
///
/// # Store Framework
/// This struct implements the [`ActorEntity`](store_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](store_framework::ResourceActor).
///
/// Orders are written once by the placement engine and never changed afterwards.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use store_framework::DocumentId;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub DocumentId);

impl From<DocumentId> for OrderId {
    fn from(id: DocumentId) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Copy of the product as it was when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRecord {
    pub product_details: ProductSnapshot,
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: String,
    pub items: Vec<OrderLineRecord>,
    pub total: f64,
}

impl Order {
    /// Creates a new Order instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (minted by the collection)
    /// * `user_id` - Owner; not checked against any user store
    /// * `items` - Line snapshots in request order
    /// * `total` - Server-computed sum of price × quantity
    pub fn new(id: OrderId, user_id: impl Into<String>, items: Vec<OrderLineRecord>, total: f64) -> Self {
        Self {
            id,
            user_id: user_id.into(),
            items,
            total,
        }
    }
}

/// Payload for persisting a finished order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub user_id: String,
    pub items: Vec<OrderLineRecord>,
    pub total: f64,
}

/// One requested (product, quantity) pair, as sent by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product_id: String,
    pub qty: u32,
}

impl OrderLineRequest {
    pub fn new(product_id: impl Into<String>, qty: u32) -> Self {
        Self {
            product_id: product_id.into(),
            qty,
        }
    }
}

/// Selection for order listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub user_id: Option<String>,
}

impl OrderFilter {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.user_id.as_deref().map_or(true, |u| u == order.user_id)
    }
}
