//! Quake CLI - look up Chilean earthquakes by region or coordinate box.

use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "quake-cli",
    version,
    about = "Chile earthquake finder"
)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: quake_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
    quake_cmd::run(cli.command).await
}
