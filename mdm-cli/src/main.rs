//! mdm-cli - Command line tool for validating and exporting survey chart data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "mdm-cli",
    version,
    about = "Monitor de Marca survey data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: mdm_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    mdm_cmd::run(cli.command)
}
