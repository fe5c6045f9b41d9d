//! 3D wireframe rendering of a synthesized risk panel.
//!
//! The wireframe is drawn over the (asset index, risk-factor index) mesh
//! with the cell value on the vertical axis, one layer per time period.
//! Tick labels are validated against the grid shape before anything is
//! drawn: each label sequence must carry exactly one label per tick
//! position on its axis.

use crate::error::{PlotError, Result};
use crate::style;
use ndarray::Axis;
use plotters::coord::Shift;
use plotters::prelude::*;
use riskframe_data::{GridAxis, RiskGrid};
use std::path::Path;

const CHART_TITLE: &str = "Portfolio Risk Data (Example)";
const SERIES_LABEL: &str = "Portfolio Risk";
const X_AXIS_TITLE: &str = "Assets";
const Z_AXIS_TITLE: &str = "Risk Factors";

/// Render the panel as an SVG wireframe chart written to `out`.
///
/// # Errors
///
/// Returns [`PlotError::ShapeMismatch`] if any label sequence length
/// differs from the corresponding grid dimension (the per-cell projections
/// from synthesis fail this way), [`PlotError::EmptyGrid`] for a grid with
/// no cells, and [`PlotError::Draw`] if the backend rejects the figure.
pub fn render_svg(
    grid: &RiskGrid,
    asset_labels: &[String],
    risk_factor_labels: &[String],
    time_period_labels: &[i32],
    out: &Path,
) -> Result<()> {
    let root = SVGBackend::new(out, style::FIGURE_SIZE).into_drawing_area();
    draw(grid, asset_labels, risk_factor_labels, time_period_labels, &root)?;
    root.present().map_err(draw_err)?;
    Ok(())
}

/// Render the panel into an in-memory SVG document.
///
/// Headless twin of [`render_svg`]; same validation and failure modes.
pub fn render_svg_string(
    grid: &RiskGrid,
    asset_labels: &[String],
    risk_factor_labels: &[String],
    time_period_labels: &[i32],
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, style::FIGURE_SIZE).into_drawing_area();
        draw(grid, asset_labels, risk_factor_labels, time_period_labels, &root)?;
        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

fn draw(
    grid: &RiskGrid,
    asset_labels: &[String],
    risk_factor_labels: &[String],
    time_period_labels: &[i32],
    root: &DrawingArea<SVGBackend<'_>, Shift>,
) -> Result<()> {
    let (num_assets, num_risk_factors, num_time_periods) = grid.shape();
    check_ticks(GridAxis::Assets, asset_labels.len(), num_assets)?;
    check_ticks(GridAxis::RiskFactors, risk_factor_labels.len(), num_risk_factors)?;
    check_ticks(GridAxis::TimePeriods, time_period_labels.len(), num_time_periods)?;
    if grid.is_empty() {
        return Err(PlotError::EmptyGrid);
    }

    let values = grid.values();
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let x_max = (num_assets - 1).max(1) as f64;
    let y_max = max_value.max(1.0);
    let z_max = (num_risk_factors - 1).max(1) as f64;

    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(CHART_TITLE, style::CAPTION_FONT)
        .margin(style::MARGIN)
        .build_cartesian_3d(0.0..x_max, 0.0..y_max, 0.0..z_max)
        .map_err(draw_err)?;

    chart.with_projection(|mut pb| {
        pb.pitch = style::PROJECTION_PITCH;
        pb.yaw = style::PROJECTION_YAW;
        pb.scale = style::PROJECTION_SCALE;
        pb.into_matrix()
    });

    let x_fmt = |x: &f64| tick_label(asset_labels, *x);
    let y_fmt = |v: &f64| format!("{v:.0}");
    let z_fmt = |z: &f64| tick_label(risk_factor_labels, *z);
    chart
        .configure_axes()
        .x_labels(num_assets)
        .y_labels(5)
        .z_labels(num_risk_factors)
        .label_style(style::LABEL_FONT)
        .x_formatter(&x_fmt)
        .y_formatter(&y_fmt)
        .z_formatter(&z_fmt)
        .draw()
        .map_err(draw_err)?;

    // One polyline per mesh row and per mesh column, per time slice.
    let mut polylines: Vec<Vec<(f64, f64, f64)>> = Vec::new();
    for k in 0..num_time_periods {
        let slice = values.index_axis(Axis(2), k);
        for i in 0..num_assets {
            polylines.push(
                (0..num_risk_factors)
                    .map(|j| (i as f64, slice[[i, j]], j as f64))
                    .collect(),
            );
        }
        for j in 0..num_risk_factors {
            polylines.push(
                (0..num_assets)
                    .map(|i| (i as f64, slice[[i, j]], j as f64))
                    .collect(),
            );
        }
    }

    let mut series = polylines.into_iter();
    if let Some(first) = series.next() {
        chart
            .draw_series(LineSeries::new(first, &style::WIREFRAME_COLOR))
            .map_err(draw_err)?
            .label(SERIES_LABEL)
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], style::WIREFRAME_COLOR)
            });
    }
    for polyline in series {
        chart
            .draw_series(LineSeries::new(polyline, &style::WIREFRAME_COLOR))
            .map_err(draw_err)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_err)?;

    let periods = time_period_labels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let (width, height) = style::FIGURE_SIZE;
    let annotation_font = style::LABEL_FONT.into_font();
    root.draw(&Text::new(
        X_AXIS_TITLE,
        ((width / 2 - 40) as i32, (height - 25) as i32),
        annotation_font.clone(),
    ))
    .map_err(draw_err)?;
    root.draw(&Text::new(
        Z_AXIS_TITLE,
        ((width - 140) as i32, (height - 120) as i32),
        annotation_font.clone(),
    ))
    .map_err(draw_err)?;
    root.draw(&Text::new(
        format!("Time Period ({periods})"),
        (25, (height - 25) as i32),
        annotation_font,
    ))
    .map_err(draw_err)?;

    Ok(())
}

/// Label for the tick nearest to `coord`, empty off the integer lattice.
fn tick_label<T: ToString>(labels: &[T], coord: f64) -> String {
    let nearest = coord.round();
    if nearest < 0.0 || (coord - nearest).abs() > 0.25 {
        return String::new();
    }
    labels
        .get(nearest as usize)
        .map(ToString::to_string)
        .unwrap_or_default()
}

const fn check_ticks(axis: GridAxis, labels: usize, ticks: usize) -> Result<()> {
    if labels != ticks {
        return Err(PlotError::ShapeMismatch {
            axis,
            labels,
            ticks,
        });
    }
    Ok(())
}

fn draw_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Draw(err.to_string())
}
