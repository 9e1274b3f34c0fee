//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::Shape;

/// Stroke styling shared by a whole render pass.
///
/// Built once from [`crate::config::Config`]; the per-shape stroke color comes
/// from the shape itself, falling back to `fallback` when the shape carries
/// none. The preview shape always uses `preview` regardless of what color the
/// shape would commit with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Stroke width in logical units for every outline
    pub stroke_width: f64,
    /// Stroke color for shapes that carry no color of their own
    pub fallback: Color,
    /// Stroke color for the in-progress preview shape
    pub preview: Color,
}

/// Clears the entire surface back to transparent.
///
/// Must run at the start of every render pass; the pass repaints all
/// committed shapes from scratch afterwards.
pub fn clear_surface(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

/// Renders all shapes in a collection to a Cairo context.
///
/// Shapes are drawn in the order they appear (first shape = bottom layer).
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape], style: &Style) {
    for shape in shapes {
        render_shape(ctx, shape, style);
    }
}

/// Renders a single committed shape to a Cairo context.
///
/// Dispatches on the shape variant; the stroke color is the shape's own color
/// or the style fallback.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, style: &Style) {
    let color = shape.color().unwrap_or(style.fallback);
    stroke_shape(ctx, shape, color, style.stroke_width);
}

/// Renders the in-progress shape with the fixed preview color.
///
/// Same geometry path as [`render_shape`]; only the stroke color differs.
/// Nothing is persisted.
pub fn render_preview(ctx: &cairo::Context, shape: &Shape, style: &Style) {
    stroke_shape(ctx, shape, style.preview, style.stroke_width);
}

fn stroke_shape(ctx: &cairo::Context, shape: &Shape, color: Color, thick: f64) {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            ..
        } => render_rect(ctx, *x, *y, *width, *height, color, thick),
        Shape::Circle {
            cx, cy, radius, ..
        } => render_circle(ctx, *cx, *cy, *radius, color, thick),
        Shape::Line {
            x1, y1, x2, y2, ..
        } => render_line(ctx, *x1, *y1, *x2, *y2, color, thick),
    }
}

/// Render a rectangle outline.
///
/// Width/height keep the sign of the drag; normalize here so a rectangle
/// dragged up-left occupies the same region as its down-right twin.
fn render_rect(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    let (norm_x, norm_w) = if w >= 0.0 { (x, w) } else { (x + w, -w) };
    let (norm_y, norm_h) = if h >= 0.0 { (y, h) } else { (y + h, -h) };

    ctx.rectangle(norm_x, norm_y, norm_w, norm_h);
    let _ = ctx.stroke();
}

/// Render a circle outline as a full arc around the center.
fn render_circle(ctx: &cairo::Context, cx: f64, cy: f64, radius: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);

    ctx.new_path();
    ctx.arc(cx, cy, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Render a straight line segment.
fn render_line(ctx: &cairo::Context, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, thick: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.new_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();
}
