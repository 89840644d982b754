//! # grapht Core
//!
//! Backend-free building blocks for graph analysis research:
//!
//! - **heatmap** - bin two continuous columns of an observation table into
//!   a grid of per-bucket means and counts, masking sparse buckets
//! - **sampling** - uniform node/edge sampling and k-hop neighbourhoods
//! - **layout** - the `LayoutEngine` capability plus in-process engines
//! - **interop** - index-keyed vs label-keyed graphs and position maps
//! - **graphtools** - pendant edges and isolated nodes
//!
//! ## Quick Start
//!
//! ```rust
//! use grapht_core::prelude::*;
//!
//! let table = ObservationTable::from_rows("x", "y", "v", &[(0.0, 0.0, 1.0), (1.0, 1.0, 3.0)]);
//! let grid = BinnedGrid::build(&table, "x", "y", "v", &HeatmapOptions::default()).unwrap();
//! assert_eq!(grid.total_count(), 2);
//! ```

pub mod error;
pub mod graphtools;
pub mod heatmap;
pub mod interop;
pub mod layout;
pub mod prelude;
pub mod sampling;
pub mod table;
pub mod types;
