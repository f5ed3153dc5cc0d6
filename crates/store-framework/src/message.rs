//! # Collection Messages
//!
//! The request type a [`ResourceClient`](crate::ResourceClient) sends to a
//! [`ResourceActor`](crate::ResourceActor), with a one-shot reply channel per request.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::query::{Found, Window};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Operations a collection actor serves.
///
/// The per-document variants map to CRUD plus `Action` for entity-specific mutations
/// (for example a conditional stock decrement). `Find` is the only collection-wide read:
/// it walks the store in id order, keeps the documents that satisfy
/// [`ActorEntity::matches`], and applies a [`Window`].
///
/// Because one actor drains its mailbox one message at a time, each variant is atomic with
/// respect to every other request on the same collection.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Find {
        filter: T::Filter,
        window: Window,
        respond_to: Response<Found<T>>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Variant name, for logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Create { .. } => "Create",
            Self::Get { .. } => "Get",
            Self::Update { .. } => "Update",
            Self::Delete { .. } => "Delete",
            Self::Action { .. } => "Action",
            Self::Find { .. } => "Find",
        }
    }
}
