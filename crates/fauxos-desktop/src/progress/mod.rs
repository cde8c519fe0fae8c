//! Simulated progress runs and their readouts
//!
//! A progress run is a fixed-length countdown that advances one tick per
//! timer interval, independent of any real workload. The simulator is the
//! state machine, the display types turn its state into chrome text, and
//! the dialog composes both behind the modal deletion prompt.

mod dialog;
mod display;
mod simulator;

pub use dialog::{ProgressDialog, DELETE_ARTWORK};
pub use display::{Meter, ProgressReadout, METER_SEGMENT_PERCENT};
pub use simulator::{
    ProgressSimulator, SimulatorState, TickEvent, TICK_BOUND, TICK_INTERVAL_MS,
};
