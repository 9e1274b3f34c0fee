//! Drawing mode selection.

/// Which shape the next completed drag commits.
///
/// Selected by the host's three mode buttons; a mode change mid-drag applies
/// to the commit at release, using the already-captured start point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Rectangle outline from the drag anchor to the release point (default)
    #[default]
    Rectangle,
    /// Circle centered on the drag anchor, radius to the release point
    Circle,
    /// Straight line from the drag anchor to the release point
    Line,
}

impl Mode {
    /// All modes in toolbar order, one per mode button.
    pub const ALL: [Mode; 3] = [Mode::Rectangle, Mode::Circle, Mode::Line];

    /// Button label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Rectangle => "Rectangle",
            Mode::Circle => "Circle",
            Mode::Line => "Line",
        }
    }
}
