//! Custom actions for the Product actor.
//!
//! This module defines the domain-specific operations (Actions) that can be performed
//! on a [`Product`](crate::model::Product) document beyond CRUD: reading one bucket's stock
//! and the conditional decrement used by order placement.
//! These actions are handled by [`ActorEntity::handle_action`](store_framework::ActorEntity::handle_action).

/// Custom actions for Product documents.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the quantity left in one bucket without modifying it.
    CheckStock { size: String },
    /// Subtracts `amount` from the bucket labelled `size`, only if it holds at least
    /// `amount`. Runs as one actor message, so it cannot interleave with another decrement.
    DecrementSize { size: String, amount: u32 },
}

/// Outcome of a conditional decrement.
///
/// A shortfall is a normal answer, not an error: the caller decides whether to look for
/// another bucket or give up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decrement {
    Applied { remaining: u32 },
    /// Nothing was changed. An unknown label reports `available: 0`.
    Insufficient { available: u32 },
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Bucket quantity, or `None` when the product has no such bucket
    CheckStock(Option<u32>),
    DecrementSize(Decrement),
}
