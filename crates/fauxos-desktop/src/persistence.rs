//! State serialization for host storage
//!
//! The host shell persists open windows across reloads. The snapshot is
//! plain data: geometry and flags, never live interaction state.

use serde::{Deserialize, Serialize};

use crate::error::{DesktopError, DesktopResult};
use crate::math::Rect;
use crate::types::WindowId;

/// Persisted state of one browser window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedWindow {
    /// Window identifier
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Filesystem path the window was browsing
    pub path: Option<String>,
    /// Restored frame (position and size)
    pub frame: Rect,
    /// Whether the window was minimized
    pub minimized: bool,
    /// Whether the window was maximized
    pub maximized: bool,
}

/// Snapshot of the desktop's windows
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Open windows, bottom of the stack first
    pub windows: Vec<PersistedWindow>,
}

impl Snapshot {
    /// Encode as JSON for the host's storage backend
    pub fn to_json(&self) -> DesktopResult<String> {
        serde_json::to_string(self).map_err(|e| DesktopError::Serialization(e.to_string()))
    }

    /// Decode a snapshot previously produced by [`Snapshot::to_json`]
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        serde_json::from_str(json).map_err(|e| DesktopError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        Snapshot {
            windows: vec![PersistedWindow {
                id: 7,
                title: "My Documents".into(),
                path: Some("C:/docs".into()),
                frame: Rect::new(120.0, 80.0, 512.0, 341.0),
                minimized: false,
                maximized: true,
            }],
        }
    }

    #[test]
    fn test_snapshot_round_trips() {
        let snapshot = sample();
        let json = snapshot.to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"title\":\"My Documents\""));
        assert!(json.contains("\"maximized\":true"));
    }

    #[test]
    fn test_garbage_is_a_serialization_error() {
        let err = Snapshot::from_json("not json").unwrap_err();
        assert!(matches!(err, DesktopError::Serialization(_)));
    }

    #[test]
    fn test_empty_snapshot() {
        let json = Snapshot::default().to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap();
        assert!(restored.windows.is_empty());
    }
}
