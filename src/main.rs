mod calendar_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod schedule_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::DatekitConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DatekitConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Calendar(command) => calendar_cmd::run(command, &config),
        Command::Schedule(args) => schedule_cmd::run(args, &config),
    }
}
