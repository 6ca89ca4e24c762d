//! Command implementations for the survey data CLI.
//!
//! Provides subcommands for inspecting the chart registry, validating the
//! chart CSVs, and exporting their normalized long-form records.

use clap::Subcommand;
use mdm_survey::chart::{ChartId, ColumnLayout};
use std::path::PathBuf;

pub mod export;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Check every chart CSV: acquisition, normalization, per-wave counts
    Validate {
        /// Directory holding the chart CSVs (defaults to fixtures/ next to
        /// the executable, then fixtures/ under the working directory)
        #[arg(short = 'd', long)]
        data_dir: Option<PathBuf>,
    },

    /// Write each chart's normalized records to a dated CSV
    Export {
        /// Directory holding the chart CSVs
        #[arg(short = 'd', long)]
        data_dir: Option<PathBuf>,

        /// Output directory for the exported CSVs
        #[arg(short = 'o', long, default_value = "export")]
        out_dir: PathBuf,
    },

    /// Print the chart registry
    List,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Validate { data_dir } => validate::run_validate(data_dir.as_deref()),
        Command::Export { data_dir, out_dir } => export::run_export(data_dir.as_deref(), &out_dir),
        Command::List => {
            list_charts();
            Ok(())
        }
    }
}

/// Print the chart registry to stdout.
fn list_charts() {
    println!(
        "{:<26} {:<40} {:<12} {:<12} {}",
        "SLUG", "TITLE", "KIND", "LAYOUT", "FILE"
    );
    for chart in ChartId::ALL {
        let layout = match chart.layout() {
            ColumnLayout::Wave => "wave",
            ColumnLayout::WaveRubro => "wave_rubro",
        };
        println!(
            "{:<26} {:<40} {:<12} {:<12} {}",
            chart.slug(),
            chart.title(),
            chart.kind().tag(),
            layout,
            chart.file_name()
        );
    }
}
