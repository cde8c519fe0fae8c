//! Axis-aligned rectangle

use serde::{Deserialize, Serialize};

use super::size::Size;
use super::vec2::Vec2;

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Create the axis-aligned rectangle spanning two arbitrary corners.
    ///
    /// The corners may be given in any order; a select-box dragged up or to
    /// the left still yields a non-negative width and height.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Get position (top-left)
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Check if two rectangles intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 40.0)));
        assert!(!rect.contains(Vec2::new(5.0, 40.0)));
        assert!(!rect.contains(Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let c = Rect::new(200.0, 200.0, 50.0, 50.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_rect_from_corners_normalizes() {
        // Dragging up-left produces the same rect as dragging down-right
        let down_right = Rect::from_corners(Vec2::new(10.0, 10.0), Vec2::new(40.0, 30.0));
        let up_left = Rect::from_corners(Vec2::new(40.0, 30.0), Vec2::new(10.0, 10.0));

        assert_eq!(down_right, up_left);
        assert!((down_right.x - 10.0).abs() < 0.001);
        assert!((down_right.width - 30.0).abs() < 0.001);
        assert!((down_right.height - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::from_pos_size(Vec2::new(5.0, 6.0), Size::new(10.0, 20.0));
        assert!((rect.right() - 15.0).abs() < 0.001);
        assert!((rect.bottom() - 26.0).abs() < 0.001);
    }
}
