//! Browser-window chrome geometry
//!
//! Placement and sizing rules for the file-browser windows: where the n-th
//! window of a cascade spawns, how large it opens, and how far a maximized
//! frame reaches. Z-order and minimize/maximize transitions are managed by
//! the host shell; this module only answers the geometry questions.

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};

/// Smallest size a window can be resized to
pub const MIN_WINDOW_SIZE: Size = Size::new(200.0, 200.0);

/// Gap left along the right and bottom desktop edges by a maximized window
pub const DESKTOP_EDGE_INSET: f32 = 5.0;

/// Per-window cascade step, px
const CASCADE_STEP: Vec2 = Vec2::new(14.0, 37.0);

/// The cascade stops marching past this offset
const CASCADE_LIMIT: Vec2 = Vec2::new(98.0, 259.0);

/// Cascade offset for the n-th window on the stack
pub fn cascade_offset(stack_index: u32) -> Vec2 {
    let n = stack_index as f32;
    Vec2::new(
        (n * CASCADE_STEP.x).min(CASCADE_LIMIT.x),
        (n * CASCADE_STEP.y).min(CASCADE_LIMIT.y),
    )
}

/// Spawn position for the n-th window.
///
/// Both the horizontal base and the vertical drop derive from the viewport
/// width.
pub fn spawn_position(viewport: Size, stack_index: u32) -> Vec2 {
    Vec2::new(viewport.width / 4.0, viewport.width / 20.0) + cascade_offset(stack_index)
}

/// Default size of a freshly opened window, derived from the viewport width
pub fn default_size(viewport: Size) -> Size {
    Size::new(viewport.width / 2.0, viewport.width / 3.0)
}

/// Clamp a resize so the window never shrinks below the chrome minimum
pub fn clamp_size(size: Size) -> Size {
    Size::new(
        size.width.max(MIN_WINDOW_SIZE.width),
        size.height.max(MIN_WINDOW_SIZE.height),
    )
}

/// Frame of a maximized window: the whole viewport minus the edge inset
pub fn maximized_rect(viewport: Size) -> Rect {
    Rect::new(
        0.0,
        0.0,
        viewport.width - DESKTOP_EDGE_INSET,
        viewport.height - DESKTOP_EDGE_INSET,
    )
}

/// Configuration of a browser window
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Explicit window title
    pub title: String,
    /// Filesystem path the window is browsing
    pub path: Option<String>,
}

impl WindowConfig {
    /// Title-bar text: the explicit title, else the backing path, else empty
    pub fn title_bar_text(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else {
            self.path.as_deref().unwrap_or("")
        }
    }
}

/// One entry of a directory listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Display name
    pub name: String,
    /// Full path
    pub path: String,
    /// Folders sort ahead of files
    pub is_folder: bool,
}

/// Sort a listing folders-first, keeping the incoming order within each group
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by_key(|entry| !entry.is_folder);
}
