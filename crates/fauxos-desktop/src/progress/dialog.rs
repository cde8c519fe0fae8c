//! The modal deletion-progress dialog
//!
//! Composes a close-suppressed dialog with a progress run and its readout.
//! The host drives [`ProgressDialog::poll`] from its timer loop; when the
//! run finishes, the completion callback fires first and the close callback
//! second, each at most once. Dropping the dialog mid-run is the teardown
//! path and fires neither.

use tracing::debug;

use crate::dialog::{Dialog, DialogConfig};

use super::display::{Meter, ProgressReadout};
use super::simulator::{ProgressSimulator, TickEvent, TICK_BOUND, TICK_INTERVAL_MS};

/// Artwork shown beside the deletion meter
pub const DELETE_ARTWORK: &str = "delete-file";

type Callback = Box<dyn FnOnce()>;

/// A progress dialog simulating a fixed-length operation
pub struct ProgressDialog {
    dialog: Dialog,
    simulator: ProgressSimulator,
    readout: ProgressReadout,
    meter: Meter,
    on_complete: Option<Callback>,
    on_close: Option<Callback>,
}

impl ProgressDialog {
    /// Open a deletion-progress dialog and arm its first tick.
    ///
    /// `total_size_kb` feeds only the cosmetic rate line. `on_close` runs
    /// exactly once, after the optional completion callback, when the run
    /// finishes on its own; a dialog dropped early invokes neither.
    pub fn open(
        title: impl Into<String>,
        total_size_kb: Option<f64>,
        now: f64,
        on_close: impl FnOnce() + 'static,
    ) -> Self {
        let config = DialogConfig {
            title: title.into(),
            allow_close: false,
            artwork: Some(DELETE_ARTWORK.to_string()),
            buttons: Vec::new(),
            ..Default::default()
        };
        Self {
            dialog: Dialog::open(config),
            simulator: ProgressSimulator::start(now),
            readout: ProgressReadout::new(total_size_kb, TICK_BOUND, TICK_INTERVAL_MS),
            meter: Meter::new(),
            on_complete: None,
            on_close: Some(Box::new(on_close)),
        }
    }

    /// Attach a completion callback, invoked just before close
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Drive the run against the host clock.
    ///
    /// Forwards the simulator's event; on [`TickEvent::Finished`] the
    /// callbacks have already run by the time this returns.
    pub fn poll(&mut self, now: f64) -> TickEvent {
        let event = self.simulator.poll(now);
        if event == TickEvent::Finished {
            if let Some(complete) = self.on_complete.take() {
                complete();
            }
            if let Some(close) = self.on_close.take() {
                close();
            }
            debug!("progress dialog closed");
        }
        event
    }

    /// Abandon the run; no tick or callback fires afterwards
    pub fn cancel(&mut self) {
        self.simulator.cancel();
    }

    /// Ticks elapsed so far
    pub fn tick(&self) -> u32 {
        self.simulator.tick()
    }

    /// Whether the run finished
    pub fn is_complete(&self) -> bool {
        self.simulator.is_complete()
    }

    /// Meter fill for the current tick, in percent
    pub fn meter_percent(&self) -> f32 {
        self.meter.fill_percent(self.simulator.tick())
    }

    /// The remaining-time line for the current tick
    pub fn remaining_line(&self) -> String {
        self.readout.remaining_line(self.simulator.remaining_ms())
    }

    /// The rate line, if a size was given
    pub fn rate_line(&self) -> Option<&str> {
        self.readout.rate_line()
    }

    /// The dialog chrome configuration
    pub fn config(&self) -> &DialogConfig {
        self.dialog.config()
    }
}

impl std::fmt::Debug for ProgressDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressDialog")
            .field("dialog", &self.dialog)
            .field("simulator", &self.simulator)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_deletion_chrome() {
        let dialog = ProgressDialog::open("Deleting 'report.doc'", Some(64.0), 0.0, || {});
        let config = dialog.config();

        assert!(!config.allow_close);
        assert!(config.buttons.is_empty());
        assert_eq!(config.artwork.as_deref(), Some(DELETE_ARTWORK));
        assert_eq!(config.title, "Deleting 'report.doc'");
    }

    #[test]
    fn test_meter_tracks_ticks() {
        let mut dialog = ProgressDialog::open("Deleting", None, 0.0, || {});
        assert!((dialog.meter_percent() - 0.0).abs() < 0.001);

        dialog.poll(TICK_INTERVAL_MS);
        dialog.poll(2.0 * TICK_INTERVAL_MS);
        assert!((dialog.meter_percent() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_cancel_prevents_callbacks() {
        let closed = Rc::new(Cell::new(false));
        let closed_probe = Rc::clone(&closed);

        let mut dialog =
            ProgressDialog::open("Deleting", None, 0.0, move || closed_probe.set(true));
        dialog.poll(TICK_INTERVAL_MS);
        dialog.cancel();

        assert_eq!(dialog.poll(1_000_000.0), TickEvent::Idle);
        assert!(!closed.get());
    }
}
