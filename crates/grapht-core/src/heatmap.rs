//! Binned aggregate heatmaps.
//!
//! Two continuous columns of an [`ObservationTable`] are cut into
//! equal-width buckets, and each `(x, y)` bucket gets the mean of a third
//! (hue) column and its observation count. Buckets whose count falls below
//! a cutoff are masked so they render blank.
//!
//! The computation lives here and is backend-free; drawing the grid is
//! done by `grapht-viz`.
//!
//! ```rust
//! use grapht_core::prelude::*;
//!
//! let table = ObservationTable::from_rows(
//!     "x", "y", "v",
//!     &[(0.0, 0.0, 10.0), (0.0, 0.0, 20.0), (9.0, 9.0, 5.0)],
//! );
//! let options = HeatmapOptions::default()
//!     .with_bins(1, 1)
//!     .with_xlim(0.0, 10.0)
//!     .with_ylim(0.0, 10.0);
//! let grid = BinnedGrid::build(&table, "x", "y", "v", &options).unwrap();
//!
//! assert_eq!(grid.count(0, 0), 3);
//! assert_eq!(grid.x_axis().midpoint(0), 5.0);
//! ```

use crate::error::{GraphtError, Result};
use crate::table::ObservationTable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Rendering and binning options for a heatmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapOptions {
    /// Number of equal-width buckets along x.
    #[serde(default = "default_bins")]
    pub xbins: usize,
    /// Number of equal-width buckets along y.
    #[serde(default = "default_bins")]
    pub ybins: usize,
    /// Explicit x bounds; observed min/max when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xlim: Option<(f64, f64)>,
    /// Explicit y bounds; observed min/max when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ylim: Option<(f64, f64)>,
    /// Annotate cells with their observation count.
    #[serde(default)]
    pub bin_numbers: bool,
    /// Buckets with fewer observations than this are masked.
    #[serde(default = "default_bin_cutoff")]
    pub bin_cutoff: usize,
    /// Decimal digits shown in tick labels.
    #[serde(default = "default_rounding")]
    pub rounding: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vmin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vmax: Option<f64>,
    /// Draw a colour-scale legend.
    #[serde(default = "default_cbar")]
    pub cbar: bool,
}

fn default_bins() -> usize { 15 }
fn default_bin_cutoff() -> usize { 1 }
fn default_rounding() -> u32 { 3 }
fn default_cbar() -> bool { true }

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            xbins: default_bins(),
            ybins: default_bins(),
            xlim: None,
            ylim: None,
            bin_numbers: false,
            bin_cutoff: default_bin_cutoff(),
            rounding: default_rounding(),
            vmin: None,
            vmax: None,
            cbar: default_cbar(),
        }
    }
}

impl HeatmapOptions {
    pub fn with_bins(mut self, xbins: usize, ybins: usize) -> Self {
        self.xbins = xbins;
        self.ybins = ybins;
        self
    }

    pub fn with_xlim(mut self, min: f64, max: f64) -> Self {
        self.xlim = Some((min, max));
        self
    }

    pub fn with_ylim(mut self, min: f64, max: f64) -> Self {
        self.ylim = Some((min, max));
        self
    }

    pub fn with_bin_numbers(mut self, bin_numbers: bool) -> Self {
        self.bin_numbers = bin_numbers;
        self
    }

    pub fn with_bin_cutoff(mut self, bin_cutoff: usize) -> Self {
        self.bin_cutoff = bin_cutoff;
        self
    }

    pub fn with_rounding(mut self, rounding: u32) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_color_range(mut self, vmin: Option<f64>, vmax: Option<f64>) -> Self {
        self.vmin = vmin;
        self.vmax = vmax;
        self
    }

    pub fn with_cbar(mut self, cbar: bool) -> Self {
        self.cbar = cbar;
        self
    }

    /// Parse options from TOML; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: HeatmapOptions = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject options that can never produce a grid.
    ///
    /// Limits derived from the data are checked later, in
    /// [`BinnedGrid::build`].
    pub fn validate(&self) -> Result<()> {
        if self.xbins == 0 {
            let (min, max) = self.xlim.unwrap_or((f64::NAN, f64::NAN));
            return Err(GraphtError::invalid_range("xbins", min, max, 0));
        }
        if self.ybins == 0 {
            let (min, max) = self.ylim.unwrap_or((f64::NAN, f64::NAN));
            return Err(GraphtError::invalid_range("ybins", min, max, 0));
        }
        if let Some((min, max)) = self.xlim {
            if !(max > min) {
                return Err(GraphtError::invalid_range("xlim", min, max, self.xbins));
            }
        }
        if let Some((min, max)) = self.ylim {
            if !(max > min) {
                return Err(GraphtError::invalid_range("ylim", min, max, self.ybins));
            }
        }
        if let (Some(vmin), Some(vmax)) = (self.vmin, self.vmax) {
            if vmin > vmax {
                return Err(GraphtError::invalid_option(
                    "vmin",
                    format!("{} is greater than vmax {}", vmin, vmax),
                ));
            }
        }
        Ok(())
    }
}

/// Equal-width half-open partition of one axis.
///
/// Edges are `min + i * step` for `i` in `0..=bins`. A value equal to the
/// upper bound belongs to the last bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisBins {
    min: f64,
    max: f64,
    step: f64,
    bins: usize,
}

impl AxisBins {
    /// Partition `[min, max]` into `bins` buckets.
    ///
    /// `field` only names the axis in the error.
    pub fn new(field: &str, min: f64, max: f64, bins: usize) -> Result<Self> {
        let step = (max - min) / bins as f64;
        if bins == 0 || !(step > 0.0) || !step.is_finite() {
            return Err(GraphtError::invalid_range(field, min, max, bins));
        }
        Ok(Self { min, max, step, bins })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Lower edge of bucket `i` (`i == bins` gives the upper bound).
    pub fn edge(&self, i: usize) -> f64 {
        if i >= self.bins {
            self.max
        } else {
            self.min + i as f64 * self.step
        }
    }

    pub fn edges(&self) -> Vec<f64> {
        (0..=self.bins).map(|i| self.edge(i)).collect()
    }

    pub fn midpoint(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.step
    }

    pub fn midpoints(&self) -> Vec<f64> {
        (0..self.bins).map(|i| self.midpoint(i)).collect()
    }

    /// Bucket containing `value`, or `None` outside `[min, max]` or for NaN.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        if !(value >= self.min && value <= self.max) {
            return None;
        }
        let last = self.bins - 1;
        let mut i = (((value - self.min) / self.step).floor() as usize).min(last);
        // Division can land one bucket off an edge; settle against the edges.
        while i < last && value >= self.edge(i + 1) {
            i += 1;
        }
        while i > 0 && value < self.edge(i) {
            i -= 1;
        }
        Some(i)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

/// One bucket of a [`BinnedGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x_index: usize,
    pub y_index: usize,
    pub x_mid: f64,
    pub y_mid: f64,
    /// Mean hue; `None` when the bucket is empty.
    pub mean: Option<f64>,
    pub count: usize,
    pub masked: bool,
}

/// Dense `ybins × xbins` grid of per-bucket means and counts.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedGrid {
    x_axis: AxisBins,
    y_axis: AxisBins,
    /// Row-major, indexed `y * xbins + x`.
    means: Vec<Option<f64>>,
    counts: Vec<usize>,
    bin_cutoff: usize,
    skipped: usize,
}

impl BinnedGrid {
    /// Bin `table` on `x_field`/`y_field` and aggregate `hue_field`.
    ///
    /// Rows with a NaN in any of the three fields, or with x/y outside
    /// explicit limits, are left out and counted in [`skipped`](Self::skipped).
    pub fn build(
        table: &ObservationTable,
        x_field: &str,
        y_field: &str,
        hue_field: &str,
        options: &HeatmapOptions,
    ) -> Result<Self> {
        options.validate()?;

        let xs = table.numeric(x_field)?;
        let ys = table.numeric(y_field)?;
        let hues = table.numeric(hue_field)?;
        for (field, values) in [(y_field, ys), (hue_field, hues)] {
            if values.len() != xs.len() {
                return Err(GraphtError::ColumnLengthMismatch {
                    field: field.to_string(),
                    expected: xs.len(),
                    actual: values.len(),
                });
            }
        }

        let (xmin, xmax) = options.xlim.unwrap_or_else(|| observed_range(xs));
        let (ymin, ymax) = options.ylim.unwrap_or_else(|| observed_range(ys));
        let x_axis = AxisBins::new(x_field, xmin, xmax, options.xbins)?;
        let y_axis = AxisBins::new(y_field, ymin, ymax, options.ybins)?;

        let mut buckets: HashMap<(usize, usize), Accumulator> = HashMap::new();
        let mut skipped = 0;
        for ((&x, &y), &hue) in xs.iter().zip(ys).zip(hues) {
            let key = match (x_axis.index_of(x), y_axis.index_of(y)) {
                (Some(xi), Some(yi)) if !hue.is_nan() => (yi, xi),
                _ => {
                    skipped += 1;
                    continue;
                }
            };
            let acc = buckets.entry(key).or_default();
            acc.sum += hue;
            acc.count += 1;
        }

        let cells = x_axis.bins() * y_axis.bins();
        let mut means = vec![None; cells];
        let mut counts = vec![0; cells];
        for ((yi, xi), acc) in &buckets {
            let idx = yi * x_axis.bins() + xi;
            means[idx] = Some(acc.sum / acc.count as f64);
            counts[idx] = acc.count;
        }

        debug!(
            rows = table.row_count(),
            skipped,
            occupied = buckets.len(),
            xbins = x_axis.bins(),
            ybins = y_axis.bins(),
            "binned observation table"
        );

        Ok(Self {
            x_axis,
            y_axis,
            means,
            counts,
            bin_cutoff: options.bin_cutoff,
            skipped,
        })
    }

    pub fn x_axis(&self) -> &AxisBins {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &AxisBins {
        &self.y_axis
    }

    pub fn xbins(&self) -> usize {
        self.x_axis.bins()
    }

    pub fn ybins(&self) -> usize {
        self.y_axis.bins()
    }

    pub fn bin_cutoff(&self) -> usize {
        self.bin_cutoff
    }

    /// Rows left out of the aggregation.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn index(&self, y: usize, x: usize) -> usize {
        assert!(x < self.xbins() && y < self.ybins(), "cell ({y}, {x}) out of grid");
        y * self.xbins() + x
    }

    /// Mean hue of bucket `(y, x)`, `None` if empty. Ignores the mask.
    ///
    /// # Panics
    ///
    /// The per-bucket queries ([`mean`](Self::mean), [`count`](Self::count),
    /// [`is_masked`](Self::is_masked), [`visible_mean`](Self::visible_mean),
    /// [`annotation`](Self::annotation)) panic when `y >= ybins()` or
    /// `x >= xbins()`.
    pub fn mean(&self, y: usize, x: usize) -> Option<f64> {
        self.means[self.index(y, x)]
    }

    pub fn count(&self, y: usize, x: usize) -> usize {
        self.counts[self.index(y, x)]
    }

    /// Whether bucket `(y, x)` has fewer observations than the cutoff.
    pub fn is_masked(&self, y: usize, x: usize) -> bool {
        self.count(y, x) < self.bin_cutoff
    }

    /// Mean hue of an unmasked bucket; what gets coloured.
    pub fn visible_mean(&self, y: usize, x: usize) -> Option<f64> {
        if self.is_masked(y, x) {
            None
        } else {
            self.mean(y, x)
        }
    }

    /// Count label for bucket `(y, x)`.
    ///
    /// Unmasked buckets are always labelled; masked buckets only when they
    /// hold observations.
    pub fn annotation(&self, y: usize, x: usize) -> Option<usize> {
        let count = self.count(y, x);
        if !self.is_masked(y, x) || count > 0 {
            Some(count)
        } else {
            None
        }
    }

    /// Mask rows, `mask[y][x]`.
    pub fn mask(&self) -> Vec<Vec<bool>> {
        (0..self.ybins())
            .map(|y| (0..self.xbins()).map(|x| self.is_masked(y, x)).collect())
            .collect()
    }

    /// The same grid with a different cutoff.
    pub fn with_bin_cutoff(&self, bin_cutoff: usize) -> Self {
        Self {
            bin_cutoff,
            ..self.clone()
        }
    }

    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// All buckets, row by row from the lowest y.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.ybins()).flat_map(move |y| {
            (0..self.xbins()).map(move |x| Cell {
                x_index: x,
                y_index: y,
                x_mid: self.x_axis.midpoint(x),
                y_mid: self.y_axis.midpoint(y),
                mean: self.mean(y, x),
                count: self.count(y, x),
                masked: self.is_masked(y, x),
            })
        })
    }

    /// Colour-scale bounds: explicit values win, otherwise the range of
    /// the unmasked means. `None` when nothing is left to colour.
    pub fn color_range(&self, vmin: Option<f64>, vmax: Option<f64>) -> Option<(f64, f64)> {
        let visible = (0..self.ybins())
            .flat_map(|y| (0..self.xbins()).map(move |x| (y, x)))
            .filter_map(|(y, x)| self.visible_mean(y, x));
        let observed = visible.fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        });

        match (vmin, vmax, observed) {
            (Some(lo), Some(hi), _) => Some((lo, hi)),
            (Some(lo), None, Some((_, hi))) => Some((lo, hi.max(lo))),
            (None, Some(hi), Some((lo, _))) => Some((lo.min(hi), hi)),
            (None, None, observed) => observed,
            _ => None,
        }
    }

    pub fn x_tick_labels(&self, rounding: u32) -> Vec<String> {
        tick_labels(&self.x_axis, rounding)
    }

    pub fn y_tick_labels(&self, rounding: u32) -> Vec<String> {
        tick_labels(&self.y_axis, rounding)
    }
}

fn tick_labels(axis: &AxisBins, rounding: u32) -> Vec<String> {
    axis.midpoints()
        .into_iter()
        .map(|mid| round_label(mid, rounding))
        .collect()
}

/// Observed `(min, max)` ignoring NaN. An empty or all-NaN column yields
/// an inverted range, which `AxisBins::new` rejects.
fn observed_range(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Round to `digits` decimal places.
///
/// Values whose scaled form overflows are already exact at that precision
/// and come back unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Tick label text for a bucket midpoint.
pub fn round_label(value: f64, digits: u32) -> String {
    format!("{}", round_to(value, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[(f64, f64, f64)], options: &HeatmapOptions) -> Result<BinnedGrid> {
        let table = ObservationTable::from_rows("x", "y", "v", rows);
        BinnedGrid::build(&table, "x", "y", "v", options)
    }

    #[test]
    fn single_bucket_example() {
        let options = HeatmapOptions::default()
            .with_bins(1, 1)
            .with_xlim(0.0, 10.0)
            .with_ylim(0.0, 10.0);
        let g = grid(&[(0.0, 0.0, 10.0), (0.0, 0.0, 20.0), (9.0, 9.0, 5.0)], &options).unwrap();

        assert_eq!(g.x_axis().midpoint(0), 5.0);
        assert_eq!(g.y_axis().midpoint(0), 5.0);
        assert_eq!(g.count(0, 0), 3);
        assert!((g.mean(0, 0).unwrap() - 35.0 / 3.0).abs() < 1e-12);
        for cutoff in 0..=3 {
            assert!(!g.with_bin_cutoff(cutoff).is_masked(0, 0));
        }
        assert!(g.with_bin_cutoff(4).is_masked(0, 0));
    }

    #[test]
    fn maximum_lands_in_last_bucket() {
        let options = HeatmapOptions::default().with_bins(4, 2);
        let g = grid(&[(0.0, 0.0, 1.0), (10.0, 3.0, 2.0)], &options).unwrap();

        assert_eq!(g.count(0, 0), 1);
        assert_eq!(g.count(1, 3), 1);
        assert_eq!(g.total_count(), 2);
        assert_eq!(g.skipped(), 0);
    }

    #[test]
    fn boundaries_are_left_inclusive() {
        let axis = AxisBins::new("x", 0.0, 10.0, 5).unwrap();
        assert_eq!(axis.index_of(0.0), Some(0));
        assert_eq!(axis.index_of(2.0), Some(1));
        assert_eq!(axis.index_of(1.999), Some(0));
        assert_eq!(axis.index_of(10.0), Some(4));
        assert_eq!(axis.index_of(10.5), None);
        assert_eq!(axis.index_of(-0.1), None);
        assert_eq!(axis.index_of(f64::NAN), None);
    }

    #[test]
    fn edges_agree_with_assignment() {
        let axis = AxisBins::new("x", 0.1, 0.7, 3).unwrap();
        let edges = axis.edges();
        assert_eq!(edges.len(), 4);
        for (i, edge) in edges.iter().take(3).enumerate() {
            assert_eq!(axis.index_of(*edge), Some(i));
        }
    }

    #[test]
    fn empty_buckets_have_count_zero_and_no_mean() {
        let options = HeatmapOptions::default().with_bins(2, 2);
        let g = grid(&[(0.0, 0.0, 1.0), (1.0, 1.0, 3.0)], &options).unwrap();

        assert_eq!(g.count(0, 1), 0);
        assert_eq!(g.mean(0, 1), None);
        assert!(g.is_masked(0, 1));
        assert!(!g.is_masked(0, 0));
        assert_eq!(g.annotation(0, 1), None);
        assert_eq!(g.annotation(1, 1), Some(1));
    }

    #[test]
    fn cutoff_masks_sparse_buckets_but_keeps_labels() {
        let options = HeatmapOptions::default().with_bins(2, 1).with_bin_cutoff(2);
        let g = grid(&[(0.0, 0.0, 1.0), (0.0, 1.0, 1.0), (1.0, 0.0, 4.0)], &options).unwrap();

        assert!(!g.is_masked(0, 0));
        assert!(g.is_masked(0, 1));
        assert_eq!(g.visible_mean(0, 1), None);
        assert_eq!(g.mean(0, 1), Some(4.0));
        assert_eq!(g.annotation(0, 1), Some(1));
    }

    #[test]
    fn zero_cutoff_unmasks_everything() {
        let options = HeatmapOptions::default().with_bins(3, 3).with_bin_cutoff(0);
        let g = grid(&[(0.0, 0.0, 1.0), (1.0, 1.0, 1.0)], &options).unwrap();
        assert!(g.mask().iter().flatten().all(|masked| !masked));
        assert_eq!(g.annotation(1, 0), Some(0));
    }

    #[test]
    fn degenerate_ranges_are_rejected() {
        let err = grid(&[(1.0, 0.0, 1.0), (1.0, 2.0, 1.0)], &HeatmapOptions::default()).unwrap_err();
        assert!(matches!(err, GraphtError::InvalidRange { ref field, .. } if field == "x"));

        let err = grid(&[], &HeatmapOptions::default()).unwrap_err();
        assert!(matches!(err, GraphtError::InvalidRange { .. }));

        let err = grid(&[(0.0, 0.0, 1.0)], &HeatmapOptions::default().with_bins(0, 3)).unwrap_err();
        assert!(matches!(err, GraphtError::InvalidRange { bins: 0, .. }));
    }

    #[test]
    fn constant_axis_with_explicit_limits_is_fine() {
        let options = HeatmapOptions::default().with_bins(2, 2).with_xlim(0.0, 2.0);
        let g = grid(&[(1.0, 0.0, 1.0), (1.0, 2.0, 3.0)], &options).unwrap();
        assert_eq!(g.count(0, 1), 1);
        assert_eq!(g.count(1, 1), 1);
    }

    #[test]
    fn out_of_limit_and_nan_rows_are_skipped() {
        let options = HeatmapOptions::default()
            .with_bins(2, 2)
            .with_xlim(0.0, 1.0)
            .with_ylim(0.0, 1.0);
        let g = grid(
            &[(0.5, 0.5, 1.0), (5.0, 0.5, 1.0), (0.5, f64::NAN, 1.0), (0.5, 0.5, f64::NAN)],
            &options,
        )
        .unwrap();
        assert_eq!(g.total_count(), 1);
        assert_eq!(g.skipped(), 3);
    }

    #[test]
    fn missing_and_text_fields_fail() {
        let table = ObservationTable::from_rows("x", "y", "v", &[(0.0, 1.0, 2.0)])
            .with_column("name", vec!["a"])
            .unwrap();
        let options = HeatmapOptions::default();

        let err = BinnedGrid::build(&table, "x", "y", "nope", &options).unwrap_err();
        assert_eq!(err, GraphtError::MissingField("nope".into()));

        let err = BinnedGrid::build(&table, "name", "y", "v", &options).unwrap_err();
        assert_eq!(err, GraphtError::NonNumericField("name".into()));
    }

    #[test]
    fn color_range_prefers_explicit_bounds() {
        let options = HeatmapOptions::default().with_bins(2, 1);
        let g = grid(&[(0.0, 0.0, 1.0), (1.0, 1.0, 5.0)], &options).unwrap();

        assert_eq!(g.color_range(None, None), Some((1.0, 5.0)));
        assert_eq!(g.color_range(Some(0.0), Some(10.0)), Some((0.0, 10.0)));
        assert_eq!(g.color_range(Some(2.0), None), Some((2.0, 5.0)));
        assert_eq!(g.with_bin_cutoff(5).color_range(None, None), None);
    }

    #[test]
    #[should_panic(expected = "out of grid")]
    fn out_of_grid_query_panics() {
        let options = HeatmapOptions::default().with_bins(2, 2);
        let g = grid(&[(0.0, 0.0, 1.0), (1.0, 1.0, 5.0)], &options).unwrap();
        g.count(0, 2);
    }

    #[test]
    fn tick_labels_are_rounded_midpoints() {
        let options = HeatmapOptions::default().with_bins(3, 1);
        let g = grid(&[(0.0, 0.0, 1.0), (1.0, 1.0, 1.0)], &options).unwrap();
        assert_eq!(g.x_tick_labels(3), vec!["0.167", "0.5", "0.833"]);
        assert_eq!(g.x_tick_labels(0), vec!["0", "1", "1"]);
        assert_eq!(g.y_tick_labels(2), vec!["0.5"]);
    }

    #[test]
    fn round_to_handles_negative_zero() {
        assert_eq!(round_label(-0.0001, 2), "0");
        assert_eq!(round_to(2.345, 1), 2.3);
    }

    #[test]
    fn round_to_survives_overflowing_scale() {
        assert_eq!(round_label(0.5, 400), "0.5");
        assert_eq!(round_to(1e300, 10), 1e300);
        assert_eq!(round_label(f64::MAX, 3), format!("{}", f64::MAX));
        assert_eq!(round_to(-7.25, u32::MAX), -7.25);
    }

    #[test]
    fn options_from_partial_toml() {
        let options = HeatmapOptions::from_toml_str(
            r#"
            xbins = 4
            bin_numbers = true
            xlim = [0.0, 2.0]
            "#,
        )
        .unwrap();
        assert_eq!(options.xbins, 4);
        assert_eq!(options.ybins, 15);
        assert_eq!(options.xlim, Some((0.0, 2.0)));
        assert!(options.bin_numbers);
        assert!(options.cbar);
        assert_eq!(options.bin_cutoff, 1);
    }

    #[test]
    fn invalid_toml_options_fail() {
        assert!(matches!(
            HeatmapOptions::from_toml_str("xbins = \"many\""),
            Err(GraphtError::Config(_))
        ));
        assert!(matches!(
            HeatmapOptions::from_toml_str("vmin = 3.0\nvmax = 1.0"),
            Err(GraphtError::InvalidOption { .. })
        ));
    }

    #[test]
    fn default_options_serialize_to_toml() {
        let text = HeatmapOptions::default().to_toml_string().unwrap();
        assert!(text.contains("xbins = 15"));
        assert!(!text.contains("xlim"));
    }
}
