//! # Product Actor
//!
//! The product collection: catalog documents with per-size stock buckets.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](store_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! // Read one bucket
//! let left = product_client.check_stock(product_id, "M").await?;
//!
//! // Conditional decrement: applied only if the bucket still holds enough
//! match product_client.decrement_size(product_id, "M", 2).await? {
//!     Decrement::Applied { remaining } => { /* reserved */ }
//!     Decrement::Insufficient { available } => { /* lost the race */ }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use order_service::product_actor::{self, Decrement};
//! use order_service::clients::ProductClient;
//! use order_service::model::{ProductCreate, SizeStock};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!
//!     // Start the actor (no dependencies)
//!     tokio::spawn(actor.run(()));
//!
//!     let params = ProductCreate {
//!         name: "Widget".to_string(),
//!         price: 29.99,
//!         sizes: vec![SizeStock::new("M", 3)],
//!     };
//!     let id = client.create_product(params).await?;
//!
//!     let outcome = client.decrement_size(id, "M", 2).await?;
//!     assert_eq!(outcome, Decrement::Applied { remaining: 1 });
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use store_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
