//! `tokensmith` - one-shot design-token build.

mod cli;
mod logging;

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use console::style;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbosity());

    match cli::run(&cli, Utc::now()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
