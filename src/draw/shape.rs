//! Shape definitions for the drawing board.

use super::color::Color;

/// A surface-local point in logical units.
///
/// Coordinates are non-negative in practice (they come from pointer events
/// over the surface) but nothing validates that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal offset from the surface's left edge
    pub x: f64,
    /// Vertical offset from the surface's top edge
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A committed shape on the board.
///
/// Each variant stores the geometry exactly as the drag produced it, plus an
/// optional stroke color. Shapes without a color are stroked with the
/// renderer's fallback color.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle outline.
    ///
    /// `x`/`y` is the drag anchor, not the top-left corner: `width` and
    /// `height` keep the sign of the drag and may be negative when the drag
    /// moved up or left. The renderer normalizes before stroking.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Option<Color>,
    },
    /// Circle outline centered on the drag anchor.
    ///
    /// `radius` is the Euclidean distance from anchor to release point,
    /// always >= 0. Zero-radius circles render as a degenerate stroke.
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Option<Color>,
    },
    /// Straight segment from the drag anchor to the release point, in order.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Option<Color>,
    },
}

impl Shape {
    /// Returns the shape's own stroke color, if it has one.
    pub fn color(&self) -> Option<Color> {
        match self {
            Shape::Rect { color, .. } | Shape::Circle { color, .. } | Shape::Line { color, .. } => {
                *color
            }
        }
    }
}
