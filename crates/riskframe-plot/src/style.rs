//! Figure-wide styling constants.
//!
//! The backend is the non-interactive SVG backend, fixed at compile time;
//! everything tunable about a figure lives here.

use plotters::style::RGBColor;

/// Figure size in pixels (a 10x6 inch canvas at 100 dpi).
pub const FIGURE_SIZE: (u32, u32) = (1000, 600);

/// Stroke colour of the wireframe surface.
pub const WIREFRAME_COLOR: RGBColor = RGBColor(0, 0, 255);

/// Chart title font.
pub const CAPTION_FONT: (&str, u32) = ("sans-serif", 24);

/// Axis tick and annotation font.
pub const LABEL_FONT: (&str, u32) = ("sans-serif", 13);

/// Outer figure margin in pixels.
pub const MARGIN: u32 = 20;

/// Camera pitch for the 3D projection.
pub const PROJECTION_PITCH: f64 = 0.35;

/// Camera yaw for the 3D projection.
pub const PROJECTION_YAW: f64 = 0.8;

/// Camera scale; one scale for all axes keeps the aspect ratio even.
pub const PROJECTION_SCALE: f64 = 0.85;
