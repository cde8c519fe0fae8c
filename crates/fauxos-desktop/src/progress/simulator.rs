//! Discrete countdown state machine
//!
//! The simulator owns a single armed deadline and is driven by the host's
//! clock: the host calls [`ProgressSimulator::poll`] with the current time
//! (milliseconds, same scale the render loop uses) and reacts to the
//! returned event. Ticks are strictly sequential; the next deadline is armed
//! only after the current tick has been handled, and nothing re-arms after
//! completion or cancellation.

use tracing::{debug, trace};

/// Number of ticks in a full simulated run
pub const TICK_BOUND: u32 = 10;

/// Milliseconds between ticks
pub const TICK_INTERVAL_MS: f64 = 200.0;

/// Observable state of a progress run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulatorState {
    /// Counting up; `tick` is in `0..bound`
    Running {
        /// Ticks elapsed so far
        tick: u32,
    },
    /// The counter reached its bound (terminal)
    Complete,
}

/// Outcome of a single [`ProgressSimulator::poll`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickEvent {
    /// No deadline is armed (the run completed or was cancelled)
    Idle,
    /// The armed deadline has not elapsed yet
    Waiting,
    /// The counter advanced by one and the next deadline was armed
    Advanced {
        /// The counter value after advancing
        tick: u32,
    },
    /// The counter reached its bound; the run is over
    Finished,
}

/// Fixed-duration simulated countdown
///
/// Dropping the simulator before completion is the teardown path: the armed
/// deadline goes with it and no further tick can fire.
#[derive(Debug)]
pub struct ProgressSimulator {
    tick: u32,
    bound: u32,
    interval_ms: f64,
    /// The one outstanding deadline. `None` means nothing will fire.
    next_due: Option<f64>,
}

impl ProgressSimulator {
    /// Start a run with the standard bound and interval, arming the first tick
    pub fn start(now: f64) -> Self {
        Self::with_timing(now, TICK_BOUND, TICK_INTERVAL_MS)
    }

    /// Start a run with explicit timing
    pub fn with_timing(now: f64, bound: u32, interval_ms: f64) -> Self {
        debug_assert!(bound > 0, "a progress run needs at least one tick");
        Self {
            tick: 0,
            bound,
            interval_ms,
            next_due: Some(now + interval_ms),
        }
    }

    /// Advance the run against the host clock.
    ///
    /// At most one tick fires per call. A due poll consumes the armed
    /// deadline before anything else happens, so a duplicate poll at the
    /// same instant reports [`TickEvent::Waiting`] instead of double-firing.
    pub fn poll(&mut self, now: f64) -> TickEvent {
        let due = match self.next_due {
            Some(due) => due,
            None => return TickEvent::Idle,
        };
        if now < due {
            return TickEvent::Waiting;
        }

        self.next_due = None;
        self.tick += 1;
        if self.tick >= self.bound {
            debug!(tick = self.tick, "progress run finished");
            return TickEvent::Finished;
        }
        trace!(tick = self.tick, "progress tick advanced");
        self.next_due = Some(now + self.interval_ms);
        TickEvent::Advanced { tick: self.tick }
    }

    /// Disarm the pending deadline. No tick fires after cancellation.
    pub fn cancel(&mut self) {
        if self.next_due.take().is_some() {
            debug!(tick = self.tick, "progress run cancelled");
        }
    }

    /// Current state of the run
    pub fn state(&self) -> SimulatorState {
        if self.is_complete() {
            SimulatorState::Complete
        } else {
            SimulatorState::Running { tick: self.tick }
        }
    }

    /// Ticks elapsed so far
    pub fn tick(&self) -> u32 {
        self.tick
    }

    /// Whether the counter reached its bound
    pub fn is_complete(&self) -> bool {
        self.tick >= self.bound
    }

    /// Simulated time left: `(bound - tick) × interval`
    pub fn remaining_ms(&self) -> u64 {
        (f64::from(self.bound.saturating_sub(self.tick)) * self.interval_ms) as u64
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A run of any bound finishes after exactly `bound` due polls,
        /// reporting Finished once and Idle forever after
        #[test]
        fn run_length_matches_bound(bound in 1u32..50, interval in 1.0f64..5_000.0) {
            let mut sim = ProgressSimulator::with_timing(0.0, bound, interval);
            let mut now = 0.0;
            let mut finished = 0u32;

            for _ in 0..bound {
                now += interval;
                match sim.poll(now) {
                    TickEvent::Advanced { .. } => {}
                    TickEvent::Finished => finished += 1,
                    other => prop_assert!(false, "unexpected event: {:?}", other),
                }
            }

            prop_assert_eq!(finished, 1);
            prop_assert!(sim.is_complete());
            prop_assert_eq!(sim.poll(now + interval), TickEvent::Idle);
        }

        /// Cancellation at any point silences the run for good
        #[test]
        fn cancelled_runs_stay_silent(cancel_after in 0u32..TICK_BOUND) {
            let mut sim = ProgressSimulator::start(0.0);
            let mut now = 0.0;
            for _ in 0..cancel_after {
                now += TICK_INTERVAL_MS;
                sim.poll(now);
            }

            sim.cancel();
            for _ in 0..20 {
                now += TICK_INTERVAL_MS;
                prop_assert_eq!(sim.poll(now), TickEvent::Idle);
            }
            prop_assert_eq!(sim.tick(), cancel_after);
        }
    }
}
