//! Core geometry types for the panel workspace
//!
//! Positions and sizes are in CSS pixels, anchored at the top-left
//! corner of the workspace element.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

/// Round half up to the nearest integer pixel.
///
/// Matches the browser's `Math.round`, which rounds `x.5` towards
/// positive infinity (so `-0.5` rounds to `0`, not `-1`).
#[inline]
pub fn round_px(value: f32) -> f32 {
    (value + 0.5).floor()
}
