//! # Observability & Tracing
//!
//! One call sets up structured logging for every collection and service in the process.
//!
//! Collection actors log with an `entity_type` field instead of a module path, so the
//! formatter hides targets and uses the compact layout. Actor logs carry no caller span
//! because each collection runs in its own task.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle + state changes
//! RUST_LOG=debug cargo run    # payloads, finds, stock scans
//! ```
//!
//! Typical `info` output for one order:
//!
//! ```text
//! INFO Action ok entity_type="Product" id=65a1... outcome=DecrementSize(Applied { remaining: 0 })
//! INFO Created entity_type="Order" id=65a1... size=1
//! INFO place_order{user_id="u1" lines=1}: Order placed order_id=65a1... total=10.0
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// `RUST_LOG` wins when it is set and parses; otherwise `default_filter` is used.
/// Calling this twice is harmless: the second install is ignored.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
