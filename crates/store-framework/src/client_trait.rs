//! # ActorClient Trait
//!
//! Shared surface for typed collection clients: implement `inner` and `map_error`, get
//! `get`, `delete` and `find` for free with the client's own error type.
use crate::{ActorEntity, FrameworkError, Found, ResourceClient, Window};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard reads and deletes.
///
/// # Example
///
/// ```rust
/// use store_framework::{ActorClient, ActorEntity, DocumentId, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: DocumentId }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct NoteError(String);
///
/// impl From<String> for NoteError {
///     fn from(s: String) -> Self { NoteError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = DocumentId;
///     type Create = NoteCreate;
///     type Update = std::convert::Infallible;
///     type Action = std::convert::Infallible;
///     type ActionResult = ();
///     type Filter = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: DocumentId, _: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id }) }
///     async fn on_update(&mut self, u: Self::Update, _: &()) -> Result<(), NoteError> { match u {} }
///     async fn handle_action(&mut self, a: Self::Action, _: &()) -> Result<(), NoteError> { match a {} }
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// struct NoteClient { inner: ResourceClient<Note> }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &ResourceClient<Note> { &self.inner }
///     fn map_error(e: FrameworkError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient, id: DocumentId) {
///     let _ = client.get(id).await;
///     let _ = client.delete(id).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The collection-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the collection's error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a document by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Id-ordered, windowed matches for `filter`.
    #[tracing::instrument(skip(self))]
    async fn find(&self, filter: T::Filter, window: Window) -> Result<Found<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(filter, window).await.map_err(Self::map_error)
    }
}
