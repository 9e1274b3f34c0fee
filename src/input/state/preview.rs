use super::BoardState;
use crate::draw::{Shape, Style, clear_surface, render_preview, render_shapes};

impl BoardState {
    /// Returns the shape the active drag would commit, for live preview.
    ///
    /// Uses the same geometry rule as the commit at pointer-up; the renderer
    /// strokes it in the preview color instead of the shape's own. `None`
    /// when no drag is active.
    pub fn preview_shape(&self) -> Option<Shape> {
        self.drag
            .map(|drag| self.shape_for(self.mode, drag.start, drag.current))
    }

    /// Runs one full render pass into a Cairo context.
    ///
    /// Clears the surface, strokes every committed shape in insertion order,
    /// then strokes the preview shape if a drag is active. Purely a function
    /// of the current frame and drag state; mutates nothing, so re-rendering
    /// unchanged state is pixel-identical.
    pub fn render(&self, ctx: &cairo::Context, style: &Style) {
        clear_surface(ctx);
        render_shapes(ctx, &self.frame.shapes, style);

        if let Some(shape) = self.preview_shape() {
            render_preview(ctx, &shape, style);
        }
    }
}
