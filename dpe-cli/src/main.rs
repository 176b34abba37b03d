//! Precip explorer CLI - compare annual WRF and ACIS precipitation.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dpe-cli",
    version,
    about = "WRF / ACIS annual precipitation comparison toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: dpe_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    dpe_cmd::run(cli.command).await
}
