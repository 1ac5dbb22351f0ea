//! Location relay adapter - one position request per ready signal

use ghadi_host::{LocalClock, MessageSink, PositionRequest, PositionResolution, PositionSource};
use ghadi_proto::{Dictionary, LocationFact, SettingsUpdate};

/// Phone-side companion adapter
///
/// Stateless across invocations: each ready signal runs an independent
/// request/relay cycle, and a failed send changes nothing for the next one.
pub struct Companion<P, M, C> {
    source: P,
    sink: M,
    clock: C,
    request: PositionRequest,
}

impl<P: PositionSource, M: MessageSink, C: LocalClock> Companion<P, M, C> {
    /// Companion with the standard request constraints
    /// (15 s timeout, 60 s acceptable cache age)
    pub fn new(source: P, sink: M, clock: C) -> Self {
        Self::with_request(source, sink, clock, PositionRequest::default())
    }

    /// Companion with custom request constraints
    pub fn with_request(source: P, sink: M, clock: C, request: PositionRequest) -> Self {
        Self { source, sink, clock, request }
    }

    /// Host lifecycle hook: the companion context is ready.
    ///
    /// Issues exactly one position request and relays the outcome to the
    /// watch. Fix or not, exactly one dictionary is forwarded.
    pub async fn on_ready(&self) {
        let resolution = self.source.request_position(&self.request).await;
        let fact = self.fact_from_resolution(resolution);
        self.forward(fact).await;
    }

    fn fact_from_resolution(&self, resolution: PositionResolution) -> LocationFact {
        let offset = self.clock.timezone_offset_minutes();
        match resolution {
            PositionResolution::Fix { longitude, latitude } => {
                log::info!("position fix: longitude={longitude} latitude={latitude} offset={offset}");
                LocationFact::from_fix(longitude, latitude, offset)
            }
            PositionResolution::NoFix => {
                log::info!("no position fix, relaying sentinel coordinates (offset={offset})");
                LocationFact::no_fix(offset)
            }
        }
    }

    /// Relay a location fact to the watch
    pub async fn forward(&self, fact: LocationFact) {
        self.send_dictionary(fact.to_dictionary()).await;
    }

    /// Relay settings posted back by the configuration page
    pub async fn on_settings(&self, update: &SettingsUpdate) {
        self.send_dictionary(update.to_dictionary()).await;
    }

    // Fire-and-forget: the bridge reports accepted or failed, and a failure
    // is logged and swallowed. No retry, no propagation.
    async fn send_dictionary(&self, dict: Dictionary) {
        if let Err(e) = self.sink.send(&dict).await {
            log::error!("error sending dictionary to watch: {e}");
        }
    }
}
