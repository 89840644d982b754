//! # grapht
//!
//! Graph analysis research utilities.
//!
//! ## Quick Start
//!
//! ```rust
//! use grapht::prelude::*;
//!
//! // Bin two columns and aggregate a third
//! let table = ObservationTable::from_rows(
//!     "x", "y", "v",
//!     &[(0.0, 0.0, 10.0), (0.0, 0.0, 20.0), (9.0, 9.0, 5.0)],
//! );
//! let options = HeatmapOptions::default()
//!     .with_bins(1, 1)
//!     .with_xlim(0.0, 10.0)
//!     .with_ylim(0.0, 10.0);
//!
//! let svg = Heatmap::new(&table, "x", "y", "v")
//!     .with_options(options)
//!     .render_svg()
//!     .unwrap();
//! assert!(svg.contains("<rect"));
//! ```
//!
//! ## Architecture
//!
//! - [`grapht_core`] - observation tables, binned grids, sampling, layouts, interop
//! - [`grapht_viz`] - plotters rendering and the Graphviz layout adapter (feature `viz`)
//!
//! ## Masking
//!
//! | `bin_cutoff` | Masked buckets |
//! |--------------|----------------|
//! | 0 | none |
//! | 1 (default) | empty buckets |
//! | n | buckets with fewer than n observations |

pub use grapht_core;
#[cfg(feature = "viz")]
pub use grapht_viz;

pub mod prelude {
    //! Everything needed for typical use.
    pub use grapht_core::prelude::*;

    #[cfg(feature = "viz")]
    pub use grapht_viz::{
        draw_grid, highlight_edges, render_highlight_svg, Colormap, GraphvizLayout,
        GraphvizProgram, Heatmap, HighlightStyle,
    };
}
