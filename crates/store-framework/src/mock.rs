//! # Mock Collections
//!
//! Stand-ins for a [`ResourceActor`](crate::ResourceActor) that let a test script exactly
//! what a collection answers, including failures that a real actor cannot be coaxed into
//! (a closed mailbox, a dropped reply).
//!
//! | | `MockClient` | Real actor |
//! |---|---|---|
//! | State | none, scripted replies | real documents |
//! | Use case | code that *calls* a collection | the entity hooks themselves |
//! | Error injection | `return_err` | hard |
//!
//! Two styles are offered:
//!
//! * [`MockClient`]: queue expectations up front, hand out [`MockClient::client`], and call
//!   [`MockClient::verify`] at the end. Requests must arrive in the queued order and carry
//!   the expected id, otherwise the mock task panics and the caller sees `ActorDropped`.
//! * [`create_mock_client`] plus the `expect_*` helpers: receive each raw request and reply
//!   by hand, useful when the test wants to inspect the payload.
//!
//! ```rust
//! use store_framework::mock::MockClient;
//! use store_framework::{ActorEntity, DocumentId, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Note { id: DocumentId }
//! #[derive(Debug)] struct NoteCreate;
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = DocumentId; type Create = NoteCreate;
//!     type Update = std::convert::Infallible; type Action = std::convert::Infallible;
//!     type ActionResult = (); type Filter = (); type Context = (); type Error = NoteError;
//!     fn from_create_params(id: DocumentId, _: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, u: Self::Update, _: &()) -> Result<(), NoteError> { match u {} }
//!     async fn handle_action(&mut self, a: Self::Action, _: &()) -> Result<(), NoteError> { match a {} }
//!     fn matches(&self, _: &()) -> bool { true }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let id: DocumentId = "65a1b2c3d4e5f60718293a4b".parse().unwrap();
//!     let mut mock = MockClient::<Note>::new();
//!     mock.expect_get(id).return_err(FrameworkError::ActorClosed);
//!
//!     let result = mock.client().get(id).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::query::{Found, Window};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Find {
        window: Window,
        response: Result<Found<T>, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .expect("mock expectation queue poisoned")
        .push_back(expectation);
}

/// A scripted collection with expectation tracking.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Find {
                            window, respond_to, ..
                        },
                        Some(Expectation::Find {
                            window: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(window, expected, "find called with unexpected window");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!(
                            "Unexpected {} request or expectation mismatch",
                            request.kind()
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    pub fn expect_find(&mut self, window: Window) -> ExpectationBuilder<T, Found<T>> {
        self.builder(move |response| Expectation::Find { window, response })
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every queued expectation has been consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation by choosing its reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        push(&self.expectations, (self.make)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, (self.make)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// A client plus the receiving end of its channel, for tests that answer by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Find.
pub async fn expect_find<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Filter,
    Window,
    oneshot::Sender<Result<Found<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find {
            filter,
            window,
            respond_to,
        }) => Some((filter, window, respond_to)),
        _ => None,
    }
}
