use log::warn;

use super::{BoardState, Drag};
use crate::input::events::PointerEvent;

impl BoardState {
    /// Processes a pointer press over the surface.
    ///
    /// Converts the event to surface-local coordinates and starts a drag with
    /// start and current both at that point. No-op while the surface bounds
    /// are unknown.
    pub fn on_pointer_down(&mut self, event: PointerEvent) {
        let Some(bounds) = self.surface_bounds else {
            return;
        };

        let local = event.to_local(bounds);
        self.drag = Some(Drag {
            start: local,
            current: local,
        });
        self.needs_redraw = true;
    }

    /// Processes pointer motion.
    ///
    /// Updates the drag's current point and requests a preview redraw. No-op
    /// unless a drag is active, and no-op while the surface bounds are
    /// unknown.
    pub fn on_pointer_move(&mut self, event: PointerEvent) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let Some(bounds) = self.surface_bounds else {
            return;
        };

        drag.current = event.to_local(bounds);
        self.needs_redraw = true;
    }

    /// Processes a pointer release.
    ///
    /// Finalizes the shape from the drag's start and last tracked current
    /// point (not the release event position), appends it to the frame, and
    /// clears the drag. No-op unless a drag is active.
    pub fn on_pointer_up(&mut self) {
        let Some(Drag { start, current }) = self.drag else {
            return;
        };

        let shape = self.shape_for(self.mode, start, current);
        if !self.frame.try_add_shape(shape, self.max_shapes) {
            warn!(
                "Shape limit ({}) reached; discarding new shape",
                self.max_shapes
            );
        }

        self.drag = None;
        self.needs_redraw = true;
    }
}
