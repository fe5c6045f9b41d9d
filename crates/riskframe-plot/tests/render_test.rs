//! Integration tests for the wireframe rendering surface.

use riskframe_data::{GridAxis, synthesize};
use riskframe_plot::{PlotError, render_svg, render_svg_string};
use rstest::rstest;

#[rstest]
#[case(GridAxis::Assets)]
#[case(GridAxis::RiskFactors)]
#[case(GridAxis::TimePeriods)]
fn test_every_axis_is_validated(#[case] short_axis: GridAxis) {
    let synthesis = synthesize(3, 2, 2);
    let mut axes = synthesis.grid.axis_labels();
    match short_axis {
        GridAxis::Assets => {
            axes.assets.pop();
        }
        GridAxis::RiskFactors => {
            axes.risk_factors.pop();
        }
        GridAxis::TimePeriods => {
            axes.time_periods.pop();
        }
    }

    let err = render_svg_string(
        &synthesis.grid,
        &axes.assets,
        &axes.risk_factors,
        &axes.time_periods,
    )
    .unwrap_err();

    match err {
        PlotError::ShapeMismatch { axis, .. } => assert_eq!(axis, short_axis),
        other => panic!("expected shape mismatch, got {other}"),
    }
}

#[test]
fn test_render_with_distinct_axis_labels() {
    let synthesis = synthesize(3, 2, 2);
    let axes = synthesis.grid.axis_labels();

    let svg = render_svg_string(
        &synthesis.grid,
        &axes.assets,
        &axes.risk_factors,
        &axes.time_periods,
    )
    .unwrap();

    assert!(svg.contains("<svg"));
    assert!(svg.contains("Portfolio Risk Data (Example)"));
    assert!(svg.contains("Portfolio Risk"));
    assert!(svg.contains("Assets"));
    assert!(svg.contains("Risk Factors"));
    assert!(svg.contains("Time Period (2022, 2023)"));
}

#[test]
fn test_render_rejects_per_cell_projections() {
    // The projections carry one label per cell (12 for a 3x2x2 panel);
    // the renderer must refuse them instead of drawing a chart with
    // inconsistent ticks.
    let synthesis = synthesize(3, 2, 2);

    let err = render_svg_string(
        &synthesis.grid,
        &synthesis.asset_labels,
        &synthesis.risk_factor_labels,
        &synthesis.time_period_labels,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        PlotError::ShapeMismatch {
            labels: 12,
            ticks: 3,
            ..
        }
    ));
}

#[test]
fn test_render_rejects_empty_grid() {
    let synthesis = synthesize(0, 2, 2);
    let axes = synthesis.grid.axis_labels();

    let err = render_svg_string(
        &synthesis.grid,
        &axes.assets,
        &axes.risk_factors,
        &axes.time_periods,
    )
    .unwrap_err();

    assert!(matches!(err, PlotError::EmptyGrid));
}

#[test]
fn test_render_single_cell_panel() {
    // Degenerate 1x1x1 panel still produces a well-formed figure.
    let synthesis = synthesize(1, 1, 1);
    let axes = synthesis.grid.axis_labels();

    let svg = render_svg_string(
        &synthesis.grid,
        &axes.assets,
        &axes.risk_factors,
        &axes.time_periods,
    )
    .unwrap();

    assert!(svg.contains("Time Period (2022)"));
}

#[test]
fn test_render_to_file() {
    let synthesis = synthesize(3, 2, 2);
    let axes = synthesis.grid.axis_labels();

    let out = std::env::temp_dir().join("riskframe_render_test.svg");
    render_svg(
        &synthesis.grid,
        &axes.assets,
        &axes.risk_factors,
        &axes.time_periods,
        &out,
    )
    .unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("<svg"));
    assert!(content.contains("Portfolio Risk Data (Example)"));

    std::fs::remove_file(out).ok();
}
