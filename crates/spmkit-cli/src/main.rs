//! # spmkit
//!
//! Bootstraps Swift packages: boilerplate files, git history, and optionally
//! a public GitHub repository.
//!
//! `main` parses arguments and installs logging; everything after that,
//! config loading included, runs inside [`run`] so every failure takes the
//! same path to stderr and an exit code.
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::CliResult,
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Before logging, so RUST_LOG and SPMKIT_* from .env apply.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_code(&e));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && std::io::stderr().is_terminal();

    match run(cli) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            err.log();
            eprint!("{}", err.render(verbose, color));
            ExitCode::from(err.exit_code())
        }
    }
}

/// `--help` and `--version` come back as clap "errors" too.
fn parse_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() { 2 } else { 0 }
}

#[instrument(skip_all, name = "spmkit")]
fn run(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref())?;
    debug!(?config, "Configuration loaded");

    let output = OutputManager::new(&cli.global, &config);
    let config_file = cli.global.config;

    match cli.command {
        Commands::New(args) => commands::new::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, config_file, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, config_file, output),
    }
}
