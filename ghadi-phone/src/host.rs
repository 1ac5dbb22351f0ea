//! Stub host implementations for the simulator

use std::convert::Infallible;

use ghadi_companion::{MessageSink, PositionRequest, PositionResolution, PositionSource};
use ghadi_proto::Dictionary;

/// Position source that always resolves the same way
pub struct FixedPositionSource {
    coords: Option<(f64, f64)>,
}

impl FixedPositionSource {
    pub fn new(coords: Option<(f64, f64)>) -> Self {
        Self { coords }
    }
}

impl PositionSource for FixedPositionSource {
    async fn request_position(&self, _req: &PositionRequest) -> PositionResolution {
        match self.coords {
            Some((longitude, latitude)) => PositionResolution::Fix { longitude, latitude },
            None => PositionResolution::NoFix,
        }
    }
}

/// Bridge stand-in that prints each dictionary
pub struct ConsoleSink;

impl MessageSink for ConsoleSink {
    type Error = Infallible;

    async fn send(&self, dict: &Dictionary) -> Result<(), Infallible> {
        println!("-> watch: {}", dict.to_json());
        Ok(())
    }
}
