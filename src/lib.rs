//! Drag-to-draw shape board widget.
//!
//! The hosting application owns the event loop, the on-screen surface, and the
//! three mode buttons; this crate owns everything in between: pointer-event to
//! surface-local coordinate conversion, the in-progress drag, the committed
//! shape list, and the Cairo render pass (committed shapes plus a live preview
//! of the shape being dragged).

pub mod config;
pub mod draw;
pub mod input;

pub use config::Config;
pub use input::BoardState;
