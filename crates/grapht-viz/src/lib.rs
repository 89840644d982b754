//! # grapht Viz
//!
//! Rendering for grapht on `plotters` drawing areas.
//!
//! - [`Heatmap`] - binned aggregate heatmaps with masking, count
//!   annotations and a colour bar
//! - [`highlight_edges`] - a graph drawing with chosen edges in red
//! - [`GraphvizLayout`] - the `LayoutEngine` adapter for `neato`, `fdp`
//!   and `sfdp`
//!
//! Everything draws onto any `DrawingArea`; the `render_*_svg` helpers
//! create an in-memory SVG surface when the caller has none.

pub mod colormap;
pub mod graphviz;
pub mod heatmap;
pub mod highlight;

pub use colormap::{Colormap, YL_GN_BU};
pub use graphviz::{GraphvizLayout, GraphvizProgram};
pub use heatmap::{draw_grid, Heatmap};
pub use highlight::{highlight_edges, render_highlight_svg, HighlightStyle};

use grapht_core::error::GraphtError;

/// Wrap a plotters drawing error.
pub(crate) fn render_err<E: std::fmt::Display>(e: E) -> GraphtError {
    GraphtError::Render(e.to_string())
}
