//! DA2i CLI - check dashboard layout and URL decisions outside the browser.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "da2i-cli",
    version,
    about = "DA2i dashboard page runtime toolkit"
)]
struct Cli {
    /// JSON config overriding the built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: da2i_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = da2i_cmd::load_config(cli.config.as_deref())?;
    da2i_cmd::run(cli.command, &config)
}
