//! dirprune CLI

use anyhow::Result;
use clap::Parser;
use cli_lib::{cmd, logging, Config};
use std::path::PathBuf;

/// Prune date-named directories by monthly / weekly / daily retention
#[derive(Parser)]
#[command(name = "dirprune")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (YAML, or TOML by extension). Default: ./config.yaml if present
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref())?;
    logging::init(config.verbose)?;

    cmd::prune::run(&config)
}
