//! Messaging Bridge Abstraction
//!
//! Trait for handing dictionaries to the phone-to-watch messaging bridge.

use std::fmt::Display;

use ghadi_proto::Dictionary;

/// Trait for the phone-to-watch messaging bridge
///
/// Host-platform crates implement this over their bridge API. `send`
/// resolves once the bridge reports the dictionary accepted or failed;
/// delivery, retries and queuing beyond that point belong to the bridge.
#[allow(async_fn_in_trait)]
pub trait MessageSink {
    /// Error type for send operations
    type Error: Display;

    /// Hand a dictionary to the bridge
    async fn send(&self, dict: &Dictionary) -> Result<(), Self::Error>;
}
