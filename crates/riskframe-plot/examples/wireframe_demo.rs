//! Demonstration of riskframe-plot wireframe rendering.
//!
//! Synthesizes the canonical 3x2x2 panel and writes it to
//! `portfolio_risk_demo.svg` in the current directory.

use riskframe_data::synthesize;
use riskframe_plot::render_svg;
use std::path::Path;

fn main() {
    println!("==========================================================");
    println!("          Riskframe Wireframe Rendering - Demo");
    println!("==========================================================\n");

    let synthesis = synthesize(3, 2, 2);
    println!(
        "Synthesized panel: {} assets x {} risk factors x {} time periods ({} cells)",
        synthesis.grid.shape().0,
        synthesis.grid.shape().1,
        synthesis.grid.shape().2,
        synthesis.grid.num_cells()
    );

    let axes = synthesis.grid.axis_labels();
    let out = Path::new("portfolio_risk_demo.svg");
    match render_svg(
        &synthesis.grid,
        &axes.assets,
        &axes.risk_factors,
        &axes.time_periods,
        out,
    ) {
        Ok(()) => println!("write {}", out.display()),
        Err(e) => eprintln!("Error: {e}"),
    }
}
