//! # Order Actor
//!
//! The order collection: an append-only store of finished orders. Orders are inserted by
//! the [`placement`](crate::placement) engine and read back by the
//! [`query`](crate::query) service; nothing updates them.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use store_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
