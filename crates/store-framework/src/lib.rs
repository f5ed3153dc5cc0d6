//! # Store Framework
//!
//! Building blocks for an in-process document store where each collection is an actor.
//!
//! A collection (products, orders, …) is a [`ResourceActor`] task that owns every document
//! of one type in an id-ordered map. Callers talk to it through a cloneable
//! [`ResourceClient`]; requests are queued on a bounded channel and served strictly one at
//! a time. That single rule is what the rest of the system leans on:
//!
//! - **Per-document atomicity**: a custom [`Action`](ResourceRequest::Action) such as
//!   "decrement this bucket if it still holds enough" runs to completion before the next
//!   request is looked at, so two racing callers can never both win.
//! - **No locks**: the store is plain data owned by one task.
//! - **Parallel collections**: different collections run in different tasks.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the document type, its payloads and hooks.
//! 2. **Runtime** ([`ResourceActor`]) - message loop, id minting, `Find` evaluation.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed async calls.
//!
//! ## Identifiers and ordering
//!
//! Every create mints a [`DocumentId`] from the collection's [`IdGenerator`]. Ids from one
//! generator strictly increase, so "ascending by id" is "oldest first", which is the order
//! [`Find`](ResourceRequest::Find) returns and the order pagination relies on.
//!
//! ## Context Injection
//!
//! Dependencies are passed to [`ResourceActor::run`], not to `new`, so collections that
//! reference each other can all be created before any of them is started.
//!
//! ## Testing
//!
//! [`mock::MockClient`] scripts the replies of a collection, including transport failures,
//! for tests of code that sits in front of a collection.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;
pub mod query;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use id::{DocumentId, IdGenerator, InvalidDocumentId};
pub use message::{ResourceRequest, Response};
pub use query::{Found, Window};
