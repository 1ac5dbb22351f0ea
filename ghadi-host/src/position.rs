//! Geolocation Provider Abstraction
//!
//! Trait for requesting a single position fix from the host platform.

/// Constraints for one position request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRequest {
    /// The request must settle (fix or not) within this many milliseconds
    pub timeout_ms: u32,
    /// A cached fix up to this old is acceptable
    pub maximum_age_ms: u32,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self { timeout_ms: 15_000, maximum_age_ms: 60_000 }
    }
}

/// Outcome of a position request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionResolution {
    /// A usable fix, possibly cached within `maximum_age_ms`
    Fix { longitude: f64, latitude: f64 },
    /// No usable fix within the constraints
    NoFix,
}

/// Trait for the host geolocation provider
///
/// Host-platform crates implement this using their location stack. The
/// provider owns timeout, cache-age and permission semantics; a request that
/// cannot settle within `timeout_ms` resolves `NoFix`. Acquisition failure
/// is a resolution, not an error.
#[allow(async_fn_in_trait)]
pub trait PositionSource {
    /// Request a single position fix
    async fn request_position(&self, req: &PositionRequest) -> PositionResolution;
}
