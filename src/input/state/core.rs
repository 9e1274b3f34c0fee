//! Board state: committed shapes, active mode, and the in-progress drag.

use crate::config::Config;
use crate::draw::{Color, Frame, Shape, shape::Point};
use crate::input::events::SurfaceBounds;
use crate::input::mode::Mode;

/// The transient drag between pointer-down and pointer-up.
///
/// Held as a single `Option<Drag>` so the start and current points are both
/// present or both absent; a drag can never be half-set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    /// Anchor point captured at pointer-down
    pub start: Point,
    /// Last tracked pointer position
    pub current: Point,
}

/// Main board state for one widget instance.
///
/// Holds the frame of committed shapes, the active mode, the optional drag,
/// and the surface bounds the host supplies for coordinate conversion. All
/// mutation happens through the pointer handlers and [`BoardState::set_mode`]
/// on the host's UI thread; rendering takes `&self`.
pub struct BoardState {
    /// Committed shapes in draw order
    pub frame: Frame,
    /// Shape type the next pointer-up commits
    pub mode: Mode,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// In-progress drag, if the pointer is down over the surface
    pub(super) drag: Option<Drag>,
    /// On-screen position of the surface; handlers no-op while unset
    pub(super) surface_bounds: Option<SurfaceBounds>,
    /// Maximum number of shapes allowed in the frame (0 = unlimited)
    pub(super) max_shapes: usize,
    /// Stroke color assigned to committed rectangles
    pub(super) rectangle_color: Color,
    /// Stroke color assigned to committed lines
    pub(super) line_color: Color,
}

impl BoardState {
    /// Creates board state from configuration.
    ///
    /// The surface bounds start unset; the host must call
    /// [`BoardState::set_surface_bounds`] once it knows where the surface
    /// sits on screen, or every pointer handler stays a no-op.
    pub fn new(config: &Config) -> Self {
        Self {
            frame: Frame::new(),
            mode: Mode::default(),
            needs_redraw: true,
            drag: None,
            surface_bounds: None,
            max_shapes: config.drawing.max_shapes,
            rectangle_color: config.drawing.rectangle_color.to_color(),
            line_color: config.drawing.line_color.to_color(),
        }
    }

    /// Updates the surface's on-screen position after the host (re)places it.
    pub fn set_surface_bounds(&mut self, bounds: SurfaceBounds) {
        self.surface_bounds = Some(bounds);
    }

    /// Selects which shape type the next pointer-up commits.
    ///
    /// Pure assignment; an in-progress drag keeps its captured start point.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Returns the in-progress drag, if any.
    pub fn drag(&self) -> Option<Drag> {
        self.drag
    }

    /// Returns whether a drag is currently active.
    pub fn is_drawing(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns and clears the redraw flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Builds the shape the given drag produces under the given mode.
    ///
    /// Committed rectangles keep the signed drag dimensions; circles carry no
    /// color and fall back to the renderer default. The same geometry feeds
    /// both the commit at pointer-up and the live preview.
    pub(super) fn shape_for(&self, mode: Mode, start: Point, current: Point) -> Shape {
        match mode {
            Mode::Rectangle => Shape::Rect {
                x: start.x,
                y: start.y,
                width: current.x - start.x,
                height: current.y - start.y,
                color: Some(self.rectangle_color),
            },
            Mode::Circle => Shape::Circle {
                cx: start.x,
                cy: start.y,
                radius: (current.x - start.x).hypot(current.y - start.y),
                color: None,
            },
            Mode::Line => Shape::Line {
                x1: start.x,
                y1: start.y,
                x2: current.x,
                y2: current.y,
                color: Some(self.line_color),
            },
        }
    }
}
