//! Chrome readouts for a progress run
//!
//! These types turn simulator state into the strings and fill levels the
//! host renders inside the progress dialog. They hold no timer state.

use crate::duration::format_duration;

/// Fill contributed by one tick, in percent
pub const METER_SEGMENT_PERCENT: f32 = 10.0;

/// The segmented progress bar of the legacy chrome
#[derive(Clone, Copy, Debug)]
pub struct Meter {
    segment_percent: f32,
}

impl Default for Meter {
    fn default() -> Self {
        Self {
            segment_percent: METER_SEGMENT_PERCENT,
        }
    }
}

impl Meter {
    /// Meter with the standard segment width
    pub fn new() -> Self {
        Self::default()
    }

    /// Meter with a custom segment width
    pub fn with_segment(segment_percent: f32) -> Self {
        Self { segment_percent }
    }

    /// Fill level for a tick count, clamped to a full bar
    pub fn fill_percent(&self, tick: u32) -> f32 {
        (tick as f32 * self.segment_percent).min(100.0)
    }
}

/// Text lines shown under the meter
///
/// The rate is derived once from the static inputs of the run; it models an
/// assumed constant throughput and is never re-derived per tick.
#[derive(Clone, Debug)]
pub struct ProgressReadout {
    rate_line: Option<String>,
}

impl ProgressReadout {
    /// Build the readout for a run of `bound` ticks of `interval_ms` each.
    ///
    /// `total_size_kb` only feeds the cosmetic rate line; `None` (or a
    /// non-positive size) suppresses the line entirely.
    pub fn new(total_size_kb: Option<f64>, bound: u32, interval_ms: f64) -> Self {
        let run_secs = interval_ms * f64::from(bound) / 1000.0;
        let rate_line = total_size_kb
            .filter(|kb| *kb > 0.0)
            .map(|kb| format!("Deleting {:.2}KB per second", kb / run_secs));
        Self { rate_line }
    }

    /// The remaining-time line for the current simulated remainder
    pub fn remaining_line(&self, remaining_ms: u64) -> String {
        format!("Time remaining: {}", format_duration(remaining_ms))
    }

    /// The rate line, if a size was given
    pub fn rate_line(&self) -> Option<&str> {
        self.rate_line.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{TICK_BOUND, TICK_INTERVAL_MS};

    #[test]
    fn test_meter_fill() {
        let meter = Meter::new();
        assert!((meter.fill_percent(0) - 0.0).abs() < 0.001);
        assert!((meter.fill_percent(3) - 30.0).abs() < 0.001);
        assert!((meter.fill_percent(10) - 100.0).abs() < 0.001);
        // Over-ticking never overflows the bar
        assert!((meter.fill_percent(15) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_meter_custom_segment() {
        let meter = Meter::with_segment(25.0);
        assert!((meter.fill_percent(2) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_rate_is_computed_from_static_inputs() {
        // 100 KB over a 2-second simulated run
        let readout = ProgressReadout::new(Some(100.0), TICK_BOUND, TICK_INTERVAL_MS);
        assert_eq!(readout.rate_line(), Some("Deleting 50.00KB per second"));
    }

    #[test]
    fn test_no_size_means_no_rate_line() {
        let readout = ProgressReadout::new(None, TICK_BOUND, TICK_INTERVAL_MS);
        assert_eq!(readout.rate_line(), None);

        let readout = ProgressReadout::new(Some(0.0), TICK_BOUND, TICK_INTERVAL_MS);
        assert_eq!(readout.rate_line(), None);
    }

    #[test]
    fn test_remaining_line() {
        let readout = ProgressReadout::new(None, TICK_BOUND, TICK_INTERVAL_MS);
        assert_eq!(readout.remaining_line(2000), "Time remaining: 2 seconds");
        assert_eq!(readout.remaining_line(1800), "Time remaining: 1 second");
        // A finished run leaves the label with an empty remainder
        assert_eq!(readout.remaining_line(0), "Time remaining: ");
    }
}
