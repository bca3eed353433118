//! Vizallas CLI - Command line tool for querying Hungarian river water levels.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "vza-cli",
    version,
    about = "Hungarian river water level toolkit"
)]
struct Cli {
    #[command(flatten)]
    api: vza_cmd::ApiOptions,

    #[command(subcommand)]
    command: vza_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    vza_cmd::run(cli.api, cli.command).await
}
