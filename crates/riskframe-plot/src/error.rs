//! Error types for chart rendering.

use riskframe_data::GridAxis;
use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while rendering a risk panel.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Tick-label count does not match the tick positions of an axis.
    #[error("shape mismatch on {axis} axis: {labels} tick labels for {ticks} tick positions")]
    ShapeMismatch {
        /// Axis whose labels were inconsistent with the grid shape.
        axis: GridAxis,
        /// Number of tick labels supplied.
        labels: usize,
        /// Number of tick positions on the axis.
        ticks: usize,
    },

    /// The grid holds no cells, so there is nothing to draw.
    #[error("cannot render an empty risk grid")]
    EmptyGrid,

    /// Error raised by the drawing backend.
    #[error("drawing error: {0}")]
    Draw(String),

    /// IO error while writing the figure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
