//! # ActorEntity Trait
//!
//! The contract a document type implements to live in a [`ResourceActor`](crate::ResourceActor)
//! collection. Associated types pin down the id, the create/update/action payloads, the
//! filter used by `Find`, the injected context and the error type, so a product payload can
//! never reach the order collection.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.

use crate::id::DocumentId;
use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any document type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they may call other collections. The `Context` is handed to
/// `run()` rather than `new()`, which lets actors that depend on each other be created
/// first and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Document identifier. The actor mints a [`DocumentId`] for every create and
    /// converts it; the `Ord` bound is what gives `Find` its id-ascending order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<DocumentId>;

    /// Payload for creating a document.
    type Create: Send + Sync + Debug;

    /// Payload for updating a document. Use [`std::convert::Infallible`] for documents
    /// that are immutable once written.
    type Update: Send + Sync + Debug;

    /// Entity-specific operations (e.g. `DecrementSize`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Selection criteria for `Find`.
    type Filter: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error enum per entity, shared by all of its hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the document from its freshly minted id and the create payload.
    /// Called synchronously before `on_create`; reject invalid payloads here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the document is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the document is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether this document belongs in a `Find` result for `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;
}
