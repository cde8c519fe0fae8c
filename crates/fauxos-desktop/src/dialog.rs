//! Modal dialog model
//!
//! The state behind the chrome's prompt windows: title bar, artwork, label,
//! a row of buttons, and an optional one-shot sound cue. Rendering, drag
//! wiring, and audio playback belong to the host; this module decides what
//! a dialog contains and when it closes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DesktopError, DesktopResult};
use crate::math::{Size, Vec2};

/// Default dialog width, px
pub const DIALOG_WIDTH: f32 = 360.0;

/// Default dialog height, px
pub const DIALOG_HEIGHT: f32 = 125.0;

/// Largest placement jitter a host should apply, px
pub const PLACEMENT_JITTER_MAX: f32 = 30.0;

/// One-shot sound cue played when a dialog appears
///
/// Data only; the host owns the audio assets and playback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// The alert chord
    Boop,
    /// The notification ding
    Ding,
}

/// A dialog button and its press action
///
/// The action returns whether the press should also close the dialog, so a
/// confirmation can keep the dialog open by returning `false`.
pub struct DialogButton {
    label: String,
    action: Box<dyn FnMut() -> bool>,
}

impl DialogButton {
    /// Create a button
    pub fn new(label: impl Into<String>, action: impl FnMut() -> bool + 'static) -> Self {
        Self {
            label: label.into(),
            action: Box::new(action),
        }
    }

    /// Button caption
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Debug for DialogButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogButton")
            .field("label", &self.label)
            .finish()
    }
}

/// Configuration for a modal dialog
#[derive(Debug)]
pub struct DialogConfig {
    /// Title bar text
    pub title: String,
    /// Body text next to the artwork
    pub label: String,
    /// Whether the title bar offers a close control
    pub allow_close: bool,
    /// Asset id of the artwork shown beside the label
    pub artwork: Option<String>,
    /// Sound cue to play on open
    pub sound: Option<SoundCue>,
    /// Dialog width, px
    pub width: f32,
    /// Dialog height, px
    pub height: f32,
    /// Button row, left to right
    pub buttons: Vec<DialogButton>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            label: String::new(),
            allow_close: true,
            artwork: None,
            sound: None,
            width: DIALOG_WIDTH,
            height: DIALOG_HEIGHT,
            buttons: vec![DialogButton::new("OK", || true)],
        }
    }
}

/// An open modal dialog
#[derive(Debug)]
pub struct Dialog {
    config: DialogConfig,
    closed: bool,
}

impl Dialog {
    /// Open a dialog with the given configuration
    pub fn open(config: DialogConfig) -> Self {
        Self {
            config,
            closed: false,
        }
    }

    /// The dialog's configuration
    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    /// Whether a press or close request has dismissed the dialog
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Press the button at `index`, running its action.
    ///
    /// Returns whether the dialog closed as a result: the dialog is
    /// dismissed exactly when the action reports `true`.
    pub fn press(&mut self, index: usize) -> DesktopResult<bool> {
        let count = self.config.buttons.len();
        let button = self
            .config
            .buttons
            .get_mut(index)
            .ok_or(DesktopError::ButtonOutOfRange { index, count })?;

        let close = (button.action)();
        if close {
            debug!(button = %button.label, "dialog dismissed by button");
            self.closed = true;
        }
        Ok(close)
    }

    /// Dismiss via the title bar close control.
    ///
    /// Rejected when the dialog was opened without one.
    pub fn request_close(&mut self) -> DesktopResult<()> {
        if !self.config.allow_close {
            return Err(DesktopError::InvalidOperation {
                op: "close_dialog",
                reason: "close control is disabled",
            });
        }
        self.closed = true;
        Ok(())
    }
}

/// Dialog spawn position: viewport-centered with a small positive jitter.
///
/// The jitter keeps stacked dialogs from hiding each other completely;
/// hosts sample each component from `1..=PLACEMENT_JITTER_MAX`. The result
/// is clamped so the dialog never escapes the top-left desktop bounds.
pub fn place_centered(viewport: Size, dialog: Size, jitter: Vec2) -> Vec2 {
    let x = jitter.x + viewport.width / 2.0 - dialog.width / 2.0;
    let y = jitter.y + viewport.height / 2.0 - dialog.height;
    Vec2::new(x.max(0.0), y.max(0.0))
}
