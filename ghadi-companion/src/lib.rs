//! Ghadi Companion Library
//!
//! Phone-side companion for Ghadi watchfaces. On the host's ready signal it
//! requests one position fix, normalizes the outcome into a fixed-key
//! location fact, and relays it to the watch through the host messaging
//! bridge. It also relays settings posted back by the configuration page.
//!
//! # Example
//!
//! ```ignore
//! use ghadi_companion::Companion;
//! use ghadi_host::SystemClock;
//!
//! #[tokio::main]
//! async fn main() {
//!     let companion = Companion::new(my_source, my_sink, SystemClock);
//!
//!     // Called from the host's lifecycle hook when the companion
//!     // context is ready
//!     companion.on_ready().await;
//! }
//! ```

mod adapter;

pub use adapter::Companion;

// Re-export the host seams and message types callers wire up
pub use ghadi_host::{
    LocalClock, MessageSink, PositionRequest, PositionResolution, PositionSource, SystemClock,
};
pub use ghadi_proto::{Dictionary, LocationFact, SettingsUpdate};
