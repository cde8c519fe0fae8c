//! Select-box interaction and selection state
//!
//! The rubber-band selection of the file-browser windows: a drag opens a
//! rectangle, releasing it selects every icon the rectangle touches, and
//! plain clicks adjust or clear the selection. Coordinates arrive in screen
//! space and are translated into the window's local frame, so the box stays
//! aligned while the window itself is dragged around.

use tracing::trace;

use crate::math::{Rect, Vec2};
use crate::window::DirEntry;

/// Phase of the select-box drag
#[derive(Clone, Copy, Debug, PartialEq)]
enum SelectPhase {
    Idle,
    Dragging {
        anchor: Vec2,
        cursor: Vec2,
        moved: bool,
    },
}

/// Rubber-band selection rectangle owned by one browser window
#[derive(Clone, Debug)]
pub struct SelectBox {
    /// Window origin in screen space; drag points are translated against it
    origin: Vec2,
    phase: SelectPhase,
    enabled: bool,
}

impl SelectBox {
    /// Select box for a window whose content area sits at `origin`
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            phase: SelectPhase::Idle,
            enabled: true,
        }
    }

    /// Keep the box aligned while the window is dragged
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Inactive windows do not rubber-band; disabling cancels a live drag
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.phase = SelectPhase::Idle;
        }
        self.enabled = enabled;
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, SelectPhase::Dragging { .. })
    }

    /// Start a drag at a screen-space point
    pub fn begin(&mut self, point: Vec2) {
        if !self.enabled {
            return;
        }
        let local = point - self.origin;
        self.phase = SelectPhase::Dragging {
            anchor: local,
            cursor: local,
            moved: false,
        };
    }

    /// Move the drag cursor to a screen-space point
    pub fn drag_to(&mut self, point: Vec2) {
        let local = point - self.origin;
        if let SelectPhase::Dragging {
            anchor,
            cursor,
            moved,
        } = &mut self.phase
        {
            *cursor = local;
            *moved |= *cursor != *anchor;
        }
    }

    /// The live rectangle in window-local coordinates
    pub fn rect(&self) -> Option<Rect> {
        match self.phase {
            SelectPhase::Dragging { anchor, cursor, .. } => {
                Some(Rect::from_corners(anchor, cursor))
            }
            SelectPhase::Idle => None,
        }
    }

    /// End the drag, returning the final rectangle.
    ///
    /// A press released without movement is a plain click, not a
    /// rubber-band selection, and yields `None`.
    pub fn release(&mut self) -> Option<Rect> {
        let rect = match self.phase {
            SelectPhase::Dragging {
                anchor,
                cursor,
                moved: true,
            } => Some(Rect::from_corners(anchor, cursor)),
            _ => None,
        };
        self.phase = SelectPhase::Idle;
        rect
    }
}

/// The set of selected item names in one browser window
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    items: Vec<String>,
}

impl Selection {
    /// Empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected names, in selection order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop the whole selection
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// A click on the window background clears the selection, unless it is
    /// the click that ends a rubber-band drag.
    pub fn click_background(&mut self, ending_drag: bool) {
        if !ending_drag {
            self.clear();
        }
    }

    /// A click on an item collapses an existing selection to that item;
    /// on an empty selection it simply selects it.
    pub fn click_item(&mut self, name: &str) {
        if !self.items.is_empty() {
            self.items.clear();
            self.items.push(name.to_string());
            return;
        }
        if !self.items.iter().any(|n| n == name) {
            self.items.push(name.to_string());
        }
    }

    /// Replace the selection with every item whose bounds intersect `rect`.
    ///
    /// Item bounds are window-local, the same frame [`SelectBox::release`]
    /// reports its rectangle in.
    pub fn select_intersecting(&mut self, rect: Rect, items: &[(String, Rect)]) {
        self.items = items
            .iter()
            .filter(|(_, bounds)| rect.intersects(bounds))
            .map(|(name, _)| name.clone())
            .collect();
        trace!(count = self.items.len(), "rubber-band selection applied");
    }

    /// Listing entries whose path resolves to `<window path>/<selected name>`
    pub fn selected_entries<'a>(
        &self,
        window_path: &str,
        entries: &'a [DirEntry],
    ) -> Vec<&'a DirEntry> {
        entries
            .iter()
            .filter(|entry| {
                self.items
                    .iter()
                    .any(|name| entry.path == format!("{}/{}", window_path, name))
            })
            .collect()
    }
}
