//! WQD CLI - Command line tool for inspecting the sensor and precipitation datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wqd-cli",
    version,
    about = "Sensor & precipitation dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wqd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wqd_cmd::run(cli.command).await
}
