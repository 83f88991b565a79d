use serde::{Deserialize, Serialize};

use super::{Size, Vec2};

/// Axis-aligned rectangle, anchored at its top-left corner
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

    /// Get position (top-left)
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle (right/bottom edges exclusive)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Get the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Translate by a delta, keeping the size
    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = Rect::new(0.0, 56.0, 400.0, 300.0);
        assert!(r.contains(Vec2::new(0.0, 56.0)));
        assert!(r.contains(Vec2::new(399.9, 355.9)));
        assert!(!r.contains(Vec2::new(400.0, 100.0)));
        assert!(!r.contains(Vec2::new(10.0, 356.0)));
    }

    #[test]
    fn test_translated_keeps_size() {
        let r = Rect::new(60.0, 60.0, 700.0, 420.0).translated(-100.0, 15.0);
        assert_eq!(r, Rect::new(-40.0, 75.0, 700.0, 420.0));
        assert_eq!(r.right(), 660.0);
        assert_eq!(r.bottom(), 495.0);
    }
}
