//! Input handling and drag state machine.
//!
//! This module translates host pointer events into board state changes. It
//! converts absolute pointer coordinates to surface-local ones, tracks the
//! in-progress drag, and commits a shape to the frame when the drag ends.

pub mod events;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use events::{PointerEvent, SurfaceBounds};
pub use mode::Mode;
pub use state::{BoardState, Drag};
