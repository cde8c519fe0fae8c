//! Core geometry types for the desktop chrome
//!
//! These types provide the basic 2D math used for window placement,
//! dialog positioning, and select-box hit testing.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
