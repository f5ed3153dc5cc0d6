//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the collection actors the service runs on.
//!
//! ## The OrderSystem Pattern
//!
//! [`OrderSystem`] creates both collections, spawns their run loops and hands out the
//! typed clients:
//!
//! ```rust,ignore
//! let system = OrderSystem::new(config.channel_buffer);
//! let state = AppState::from_system(&system);
//! // ... serve ...
//! system.shutdown().await?;
//! ```
//!
//! Neither collection depends on the other (`Context = ()`): cross-collection work is done
//! by [`OrderPlacement`](crate::placement::OrderPlacement) through the store ports, not by
//! actor hooks.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - every actor task is joined
//!
//! Clones held elsewhere (router state, in-flight requests) keep a collection alive, so
//! shut the HTTP server down first.

pub mod order_system;

pub use order_system::*;
