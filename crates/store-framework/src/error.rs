//! # Framework Errors
//!
//! Errors raised by the collection plumbing itself, as opposed to the domain errors each
//! entity defines for its own hooks.

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The collection actor is gone; its mailbox no longer accepts requests.
    #[error("Collection actor closed")]
    ActorClosed,
    /// The actor dropped the reply channel without answering.
    #[error("Collection actor dropped response channel")]
    ActorDropped,
    #[error("Document not found: {0}")]
    NotFound(String),
    /// An entity hook rejected the operation.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True when the failure is in the transport to the actor, not in the request.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ActorClosed | Self::ActorDropped)
    }

    /// Borrows the entity's own error if this wraps one of type `E`.
    pub fn entity_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
