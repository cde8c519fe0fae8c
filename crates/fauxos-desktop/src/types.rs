//! Core type definitions for the desktop chrome
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer
/// allocated by the host shell when a window is opened.
pub type WindowId = u64;
