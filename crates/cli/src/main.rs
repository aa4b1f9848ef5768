// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! graphlint CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use graphlint::cli::{Cli, Command};
use graphlint::error::ExitCode;

mod cmd_lint;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("GRAPHLINT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = run().unwrap_or_else(|e| report(&e));
    std::process::exit(exit_code as i32);
}

/// Print the error and its causes to stderr; pick the exit code.
fn report(err: &anyhow::Error) -> ExitCode {
    let mut chain = err.chain();
    if let Some(top) = chain.next() {
        eprintln!("graphlint: {top}");
    }
    for cause in chain {
        eprintln!("  caused by: {cause}");
    }

    err.downcast_ref::<graphlint::Error>()
        .map_or(ExitCode::InternalError, ExitCode::from)
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Lint(args)) => cmd_lint::run(&cli, args),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
    }
}
