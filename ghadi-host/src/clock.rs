//! Local Clock Abstraction
//!
//! Trait for reading the local clock's UTC offset.

/// Trait for the host's local clock
pub trait LocalClock {
    /// Minutes the local clock is behind UTC (UTC+2 -> -120, UTC-5 -> 300)
    fn timezone_offset_minutes(&self) -> i32;
}

/// System clock backed by chrono's local offset
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl LocalClock for SystemClock {
    fn timezone_offset_minutes(&self) -> i32 {
        // chrono reports seconds east of UTC; the watch expects minutes
        // behind UTC
        let seconds_east = chrono::Local::now().offset().local_minus_utc();
        -(seconds_east / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_offset_is_a_real_utc_offset() {
        // UTC offsets span UTC-12 to UTC+14
        let offset = SystemClock.timezone_offset_minutes();
        assert!((-14 * 60..=12 * 60).contains(&offset), "offset = {offset}");
    }
}
