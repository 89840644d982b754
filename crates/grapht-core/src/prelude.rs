//! grapht Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use grapht_core::prelude::*;
//! ```

pub use crate::types::{bounds, Position, Positions};

pub use crate::table::{Column, ObservationTable};

pub use crate::heatmap::{round_label, AxisBins, BinnedGrid, Cell, HeatmapOptions};

pub use crate::layout::{CircularLayout, LayoutEngine, SpringLayout};

pub use crate::sampling::{
    dilate, khop_neighbourhood, khop_subgraph, sample_edges, sample_node, sample_nodes,
    KhopSubgraph,
};

pub use crate::graphtools::{has_isolated_nodes, is_pendant, non_pendant_edges};

pub use crate::interop::{from_graph_map, positions_by_index, positions_by_label, to_graph_map};

// Re-export error types
pub use crate::error::{GraphtError, Result};
