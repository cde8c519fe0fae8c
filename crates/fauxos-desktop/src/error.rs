//! Error types for the desktop chrome
//!
//! This module provides structured error types for all fallible operations
//! in the desktop crate, following the project's error handling conventions.

/// Errors that can occur in desktop chrome operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// A dialog button index beyond the configured buttons
    ButtonOutOfRange {
        /// The requested button index
        index: usize,
        /// The actual number of buttons
        count: usize,
    },

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    Serialization(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ButtonOutOfRange { index, count } => {
                write!(f, "button index {} out of range (count: {})", index, count)
            }
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
            Self::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
