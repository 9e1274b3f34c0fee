//! Generic pointer event types, independent of the hosting toolkit.

use crate::draw::shape::Point;

/// On-screen position of the drawing surface's bounding rectangle.
///
/// The host reads this from wherever it placed the surface and keeps the
/// board updated. Pointer events arrive in absolute coordinates; subtracting
/// the bounds' origin yields surface-local points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    /// Absolute X of the surface's left edge
    pub left: f64,
    /// Absolute Y of the surface's top edge
    pub top: f64,
}

/// A pointer down/move/up event as delivered by the host.
///
/// Carries absolute pointer coordinates; which handler it is fed to encodes
/// whether it is a press, a move, or a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Absolute pointer X coordinate
    pub client_x: f64,
    /// Absolute pointer Y coordinate
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }

    /// Converts the absolute event position to surface-local coordinates.
    pub fn to_local(self, bounds: SurfaceBounds) -> Point {
        Point::new(self.client_x - bounds.left, self.client_y - bounds.top)
    }
}
