//! Desktop chrome core for FauxOS
//!
//! This crate provides the pure state layer behind the FauxOS web desktop,
//! a browser-hosted recreation of a legacy OS shell:
//!
//! - Modal dialogs (alert prompts, button rows, sound cues)
//! - Simulated progress runs with remaining-time and rate readouts
//! - Duration formatting for countdown display
//! - Select-box interaction and selection state for browser windows
//! - Window cascade and sizing geometry
//! - State snapshots for storage
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`duration`]: Millisecond-to-text decomposition
//! - [`progress`]: Countdown state machine, meter, and progress dialog
//! - [`dialog`]: Modal dialog model and placement
//! - [`window`]: Browser-window chrome geometry and listings
//! - [`selection`]: Rubber-band selection state
//! - [`persistence`]: State serialization for storage
//!
//! ## Example
//!
//! ```rust
//! use fauxos_desktop::{ProgressDialog, TickEvent, TICK_INTERVAL_MS};
//!
//! let mut dialog = ProgressDialog::open("Deleting 'old_games'", Some(64.0), 0.0, || {});
//! assert_eq!(dialog.remaining_line(), "Time remaining: 2 seconds");
//!
//! // The host's timer loop drives the run with its own clock
//! assert_eq!(dialog.poll(TICK_INTERVAL_MS), TickEvent::Advanced { tick: 1 });
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without a browser
//! 2. **Time Abstraction**: Countdowns use injectable time sources for deterministic testing
//! 3. **Host Renders, Core Decides**: no DOM, audio, or asset handling in this crate

pub mod dialog;
pub mod duration;
pub mod math;
pub mod persistence;
pub mod progress;
pub mod selection;
pub mod window;

mod error;
mod types;

// Re-export core types for convenience
pub use dialog::{place_centered, Dialog, DialogButton, DialogConfig, SoundCue};
pub use duration::{decompose, format_duration, DurationComponent};
pub use error::{DesktopError, DesktopResult};
pub use math::{Rect, Size, Vec2};
pub use persistence::{PersistedWindow, Snapshot};
pub use progress::{
    Meter, ProgressDialog, ProgressReadout, ProgressSimulator, SimulatorState, TickEvent,
};
pub use selection::{SelectBox, Selection};
pub use types::WindowId;
pub use window::{DirEntry, WindowConfig};

/// Number of ticks in a full simulated progress run
pub use progress::TICK_BOUND;

/// Milliseconds between progress ticks
pub use progress::TICK_INTERVAL_MS;
