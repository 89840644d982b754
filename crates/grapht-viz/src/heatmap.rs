//! Heatmap rendering: BinnedGrid → plotters drawing area.
//!
//! Each bucket is a unit cell centred on integer chart coordinates, so
//! tick labels can be looked up by rounding the key point.
//!
//! The y axis increases upward: bucket 0 of y sits at the bottom of the
//! chart, as in a scatter plot of the same data. Matrix-style heatmaps
//! that list the first row at the top read the other way round.

use crate::colormap::{text_color_for, Colormap};
use crate::render_err;
use grapht_core::error::Result;
use grapht_core::heatmap::{BinnedGrid, HeatmapOptions};
use grapht_core::table::ObservationTable;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::debug;

/// Default SVG canvas size.
pub const DEFAULT_SIZE: (u32, u32) = (800, 640);
/// Width reserved for the colour bar.
const COLORBAR_WIDTH: u32 = 110;
/// Gradient steps drawn in the colour bar.
const COLORBAR_STEPS: usize = 100;

/// A binned aggregate heatmap of one table, ready to draw.
///
/// ```rust
/// use grapht_core::prelude::*;
/// use grapht_viz::Heatmap;
///
/// let table = ObservationTable::from_rows("x", "y", "v", &[(0.0, 0.0, 1.0), (1.0, 1.0, 2.0)]);
/// let svg = Heatmap::new(&table, "x", "y", "v")
///     .with_options(HeatmapOptions::default().with_bins(2, 2).with_bin_numbers(true))
///     .render_svg()
///     .unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Clone)]
pub struct Heatmap<'a> {
    table: &'a ObservationTable,
    x_field: &'a str,
    y_field: &'a str,
    hue_field: &'a str,
    options: HeatmapOptions,
    colormap: Colormap,
    size: (u32, u32),
}

impl<'a> Heatmap<'a> {
    pub fn new(table: &'a ObservationTable, x_field: &'a str, y_field: &'a str, hue_field: &'a str) -> Self {
        Self {
            table,
            x_field,
            y_field,
            hue_field,
            options: HeatmapOptions::default(),
            colormap: Colormap::default(),
            size: DEFAULT_SIZE,
        }
    }

    pub fn with_options(mut self, options: HeatmapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    /// Canvas size used by [`render_svg`](Self::render_svg).
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn options(&self) -> &HeatmapOptions {
        &self.options
    }

    /// Bin and aggregate without drawing anything.
    pub fn build_grid(&self) -> Result<BinnedGrid> {
        BinnedGrid::build(
            self.table,
            self.x_field,
            self.y_field,
            self.hue_field,
            &self.options,
        )
    }

    /// Draw onto an existing surface and return the grid that was drawn.
    ///
    /// The grid is fully built before the first draw call, so an error
    /// leaves `area` untouched.
    pub fn draw_on<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<BinnedGrid> {
        let grid = self.build_grid()?;
        draw_grid(area, &grid, &self.options, self.colormap, (self.x_field, self.y_field))?;
        Ok(grid)
    }

    /// Draw onto a fresh SVG surface and return the markup.
    pub fn render_svg(&self) -> Result<String> {
        let grid = self.build_grid()?;
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size).into_drawing_area();
            root.fill(&WHITE).map_err(render_err)?;
            draw_grid(&root, &grid, &self.options, self.colormap, (self.x_field, self.y_field))?;
            root.present().map_err(render_err)?;
        }
        Ok(svg)
    }
}

/// Draw a prepared grid. `axis_names` label the x and y axes.
pub fn draw_grid<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    grid: &BinnedGrid,
    options: &HeatmapOptions,
    colormap: Colormap,
    axis_names: (&str, &str),
) -> Result<()> {
    let color_range = grid.color_range(options.vmin, options.vmax);

    let (width, _) = area.dim_in_pixel();
    let (heat_area, bar_area) = if options.cbar && width > 2 * COLORBAR_WIDTH {
        let (heat, bar) = area.split_horizontally((width - COLORBAR_WIDTH) as i32);
        (heat, Some(bar))
    } else {
        (area.clone(), None)
    };

    let xbins = grid.xbins();
    let ybins = grid.ybins();
    let x_labels = grid.x_tick_labels(options.rounding);
    let y_labels = grid.y_tick_labels(options.rounding);
    let x_formatter = |v: &f64| tick_label(&x_labels, *v);
    let y_formatter = |v: &f64| tick_label(&y_labels, *v);

    let mut chart = ChartBuilder::on(&heat_area)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(xbins as f64 - 0.5), -0.5..(ybins as f64 - 0.5))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(xbins)
        .y_labels(ybins)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style(("sans-serif", 12))
        .axis_desc_style(("sans-serif", 14))
        .x_desc(axis_names.0)
        .y_desc(axis_names.1)
        .draw()
        .map_err(render_err)?;

    let mut drawn = 0usize;
    for cell in grid.cells() {
        let (x, y) = (cell.x_index as f64, cell.y_index as f64);

        if let (Some(mean), Some(range)) = (grid.visible_mean(cell.y_index, cell.x_index), color_range) {
            let fill = colormap.map(mean, range);
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(x - 0.5, y - 0.5), (x + 0.5, y + 0.5)],
                    fill.filled(),
                )))
                .map_err(render_err)?;
            drawn += 1;
        }

        if options.bin_numbers {
            if let Some(count) = grid.annotation(cell.y_index, cell.x_index) {
                let background = match (grid.visible_mean(cell.y_index, cell.x_index), color_range) {
                    (Some(mean), Some(range)) => colormap.map(mean, range),
                    _ => WHITE,
                };
                let style = ("sans-serif", 12)
                    .into_font()
                    .color(&text_color_for(background))
                    .pos(Pos::new(HPos::Center, VPos::Center));
                chart
                    .draw_series(std::iter::once(Text::new(count.to_string(), (x, y), style)))
                    .map_err(render_err)?;
            }
        }
    }

    if let (Some(bar_area), Some(range)) = (bar_area, color_range) {
        draw_colorbar(&bar_area, colormap, range)?;
    }

    debug!(
        cells = xbins * ybins,
        drawn,
        cutoff = grid.bin_cutoff(),
        "rendered heatmap"
    );
    Ok(())
}

fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    colormap: Colormap,
    (lo, hi): (f64, f64),
) -> Result<()> {
    // A flat range still needs a non-empty axis.
    let top = if hi > lo { hi } else { lo + 1.0 };

    let mut bar = ChartBuilder::on(area)
        .margin_top(20)
        .margin_bottom(50)
        .margin_left(10)
        .margin_right(10)
        .x_label_area_size(0)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, lo..top)
        .map_err(render_err)?;

    bar.configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(5)
        .y_label_style(("sans-serif", 12))
        .draw()
        .map_err(render_err)?;

    let span = top - lo;
    bar.draw_series((0..COLORBAR_STEPS).map(|i| {
        let y0 = lo + span * i as f64 / COLORBAR_STEPS as f64;
        let y1 = lo + span * (i + 1) as f64 / COLORBAR_STEPS as f64;
        let t = (i as f64 + 0.5) / COLORBAR_STEPS as f64;
        Rectangle::new([(0.0, y0), (1.0, y1)], colormap.at(t).filled())
    }))
    .map_err(render_err)?;
    Ok(())
}

/// Label for a mesh key point; only bucket centres get text.
fn tick_label(labels: &[String], value: f64) -> String {
    let nearest = value.round();
    if (value - nearest).abs() > 1e-6 || nearest < 0.0 {
        return String::new();
    }
    labels.get(nearest as usize).cloned().unwrap_or_default()
}
