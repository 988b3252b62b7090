//! UFO CLI - Command line tool for exploring UFO sighting data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ufo-cli",
    version,
    about = "UFO sightings dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: ufo_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ufo_cmd::run(cli.command).await
}
