//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the board:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Shape`]: the committed shape variants (rectangle, circle, line)
//! - [`Frame`]: insertion-ordered container for committed shapes
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod frame;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::Frame;
pub use render::{Style, clear_surface, render_preview, render_shape, render_shapes};
pub use shape::Shape;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GRAY, GREEN, ORANGE, RED, WHITE, YELLOW};
