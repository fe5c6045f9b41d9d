//! Riskframe CLI binary.
//!
//! Synthesizes placeholder portfolio risk panels and optionally renders
//! them as 3D wireframe SVG charts. The default `synthesize` command is
//! data-only; nothing is rendered unless `plot` is asked for.

use clap::{Parser, Subcommand};
use riskframe_data::{Synthesis, synthesize};
use riskframe_plot::render_svg;
use serde_json::json;
use std::path::PathBuf;
use std::process;

const DEFAULT_ASSETS: usize = 3;
const DEFAULT_RISK_FACTORS: usize = 2;
const DEFAULT_TIME_PERIODS: usize = 2;

#[derive(Parser)]
#[command(name = "riskframe")]
#[command(about = "Riskframe: synthetic portfolio risk panels and wireframe charts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic risk panel and print a summary
    Synthesize {
        /// Number of assets in the portfolio
        #[arg(long, default_value_t = DEFAULT_ASSETS)]
        assets: usize,

        /// Number of risk factors considered
        #[arg(long, default_value_t = DEFAULT_RISK_FACTORS)]
        risk_factors: usize,

        /// Number of time periods of data
        #[arg(long, default_value_t = DEFAULT_TIME_PERIODS)]
        time_periods: usize,

        /// Output format (json or text)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Generate a panel and render it as an SVG wireframe chart
    Plot {
        /// Number of assets in the portfolio
        #[arg(long, default_value_t = DEFAULT_ASSETS)]
        assets: usize,

        /// Number of risk factors considered
        #[arg(long, default_value_t = DEFAULT_RISK_FACTORS)]
        risk_factors: usize,

        /// Number of time periods of data
        #[arg(long, default_value_t = DEFAULT_TIME_PERIODS)]
        time_periods: usize,

        /// Output path for the SVG figure
        #[arg(long, default_value = "portfolio_risk.svg")]
        out: PathBuf,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Synthesize {
            assets,
            risk_factors,
            time_periods,
            format,
        } => {
            let synthesis = synthesize(assets, risk_factors, time_periods);
            match format.as_str() {
                "json" => print_json_summary(&synthesis)?,
                _ => print_text_summary(&synthesis),
            }
        }

        Commands::Plot {
            assets,
            risk_factors,
            time_periods,
            out,
        } => {
            let synthesis = synthesize(assets, risk_factors, time_periods);
            let axes = synthesis.grid.axis_labels();
            render_svg(
                &synthesis.grid,
                &axes.assets,
                &axes.risk_factors,
                &axes.time_periods,
                &out,
            )?;
            println!("write {}", out.display());
        }
    }

    Ok(())
}

fn print_text_summary(synthesis: &Synthesis) {
    let (assets, risk_factors, time_periods) = synthesis.grid.shape();
    println!(
        "Synthesized {} cells ({} assets x {} risk factors x {} time periods)\n",
        synthesis.grid.num_cells(),
        assets,
        risk_factors,
        time_periods
    );
    println!(
        "{:<10} {:<15} {:>6} {:>8}",
        "Asset", "Risk Factor", "Year", "Value"
    );
    for sample in synthesis.grid.iter() {
        println!(
            "{:<10} {:<15} {:>6} {:>8.2}",
            sample.asset, sample.risk_factor, sample.time_period, sample.value
        );
    }
}

fn print_json_summary(synthesis: &Synthesis) -> Result<(), serde_json::Error> {
    let (assets, risk_factors, time_periods) = synthesis.grid.shape();
    let summary = json!({
        "shape": {
            "assets": assets,
            "risk_factors": risk_factors,
            "time_periods": time_periods,
        },
        "num_cells": synthesis.grid.num_cells(),
        "cells": synthesis.grid.iter().collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
