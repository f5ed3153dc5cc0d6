//! # Collection Actor
//!
//! `ResourceActor` owns one collection of documents and is the only code that ever touches
//! it. Requests arrive over a bounded channel and are handled one at a time, so every
//! request is atomic with respect to the others on the same collection and the store needs
//! no `Mutex`.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::id::IdGenerator;
use crate::message::ResourceRequest;
use crate::query::Found;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of documents.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use store_framework::{ActorEntity, DocumentId, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: DocumentId, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
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
///     fn from_create_params(id: DocumentId, p: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: p.text })
///     }
///     async fn on_update(&mut self, u: Self::Update, _: &()) -> Result<(), NoteError> { match u {} }
///     async fn handle_action(&mut self, a: Self::Action, _: &()) -> Result<(), NoteError> { match a {} }
///     fn matches(&self, _: &()) -> bool { true }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///     let id = client.create(NoteCreate { text: "hi".into() }).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().text, "hi");
/// }
/// ```
///
/// # Operations
///
/// * **Create**: mint an id, `from_create_params`, `on_create`, insert, reply with the id.
///   A hook failure leaves the store untouched.
/// * **Get**: clone of the document, or `None`.
/// * **Update**: `on_update` on the stored document; replies with the new state.
/// * **Delete**: `on_delete`, then remove.
/// * **Action**: `handle_action` on the stored document; replies with its result.
/// * **Find**: walk the store in id order, keep matches, count them, apply the window.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    ids: IdGenerator,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            ids: IdGenerator::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.ids.next_id());

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // Hooks mutate a scratch copy so a failed update leaves no trace.
                    let mut draft = item.clone();
                    match draft.on_update(update, &context).await {
                        Ok(()) => {
                            *item = draft.clone();
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(draft));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(outcome) => info!(entity_type, %id, ?outcome, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Find {
                    filter,
                    window,
                    respond_to,
                } => {
                    let matching: Vec<&T> =
                        self.store.values().filter(|doc| doc.matches(&filter)).collect();
                    let total = matching.len();
                    let items: Vec<T> = window.apply(matching.into_iter()).cloned().collect();
                    debug!(entity_type, ?filter, ?window, total, returned = items.len(), "Find");
                    let _ = respond_to.send(Ok(Found { items, total }));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
