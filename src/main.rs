mod cli;
mod config;
mod convert_cmd;
mod export_cmd;
mod logging;
mod preview_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Convert(args) => convert_cmd::run(args),
        Command::Preview(args) => preview_cmd::run(args, &config),
        Command::Generate(args) => export_cmd::run_generate(args, &config),
        Command::Cancel(args) => export_cmd::run_cancel(args, &config),
    }
}
