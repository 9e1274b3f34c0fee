//! Frame container for the committed shapes of a session.

use super::shape::Shape;

/// Container for all shapes committed during the current session.
///
/// The shape list is insertion-ordered and append-only: committed shapes are
/// never mutated or removed while the board is mounted. [`Frame::clear`]
/// exists for the host tearing the whole board down.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Vector of all shapes in draw order (first = bottom layer, last = top layer)
    pub shapes: Vec<Shape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a new shape to the frame (drawn on top of existing shapes).
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Attempts to add a shape, enforcing a maximum shape count when `max` > 0.
    ///
    /// Returns `true` if the shape was added, `false` if the limit would be exceeded.
    pub fn try_add_shape(&mut self, shape: Shape, max: usize) -> bool {
        if max == 0 || self.shapes.len() < max {
            self.shapes.push(shape);
            true
        } else {
            false
        }
    }

    /// Removes all shapes. Only meaningful when the host unmounts the board.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
