//! Configuration type definitions.

use super::enums::ColorSpec;
use serde::{Deserialize, Serialize};

/// Logical dimensions of the drawing surface.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in logical units
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in logical units
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Stroke styling and shape limits.
///
/// Controls the per-type stroke colors committed shapes carry and the styling
/// the render pass applies. There is no runtime styling UI; these are fixed
/// for the session once loaded.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Stroke width in logical units for every outline (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Stroke color committed rectangles carry - either a named color
    /// (red, green, blue, yellow, orange, gray, white, black) or an RGB
    /// array like `[255, 255, 0]`
    #[serde(default = "default_rectangle_color")]
    pub rectangle_color: ColorSpec,

    /// Stroke color committed lines carry
    #[serde(default = "default_line_color")]
    pub line_color: ColorSpec,

    /// Stroke color for the live preview while dragging
    #[serde(default = "default_preview_color")]
    pub preview_color: ColorSpec,

    /// Stroke color for shapes that carry no color of their own (circles)
    #[serde(default = "default_fallback_color")]
    pub fallback_color: ColorSpec,

    /// Maximum number of shapes allowed in the frame (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            rectangle_color: default_rectangle_color(),
            line_color: default_line_color(),
            preview_color: default_preview_color(),
            fallback_color: default_fallback_color(),
            max_shapes: 0,
        }
    }
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    700
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_rectangle_color() -> ColorSpec {
    ColorSpec::Name("yellow".to_string())
}

fn default_line_color() -> ColorSpec {
    ColorSpec::Name("blue".to_string())
}

fn default_preview_color() -> ColorSpec {
    ColorSpec::Name("gray".to_string())
}

fn default_fallback_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}
