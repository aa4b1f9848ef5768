// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint command implementation.

use graphlint::cli::{Cli, LintArgs};
use graphlint::config::{self, Config};
use graphlint::discovery;
use graphlint::error::ExitCode;
use graphlint::service::LintService;

/// Run the lint command.
pub fn run(cli: &Cli, args: &LintArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config = match discovery::resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(&path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    let options = args.apply_to(config.lint_options());
    let service =
        LintService::new(config.graph_provider(), config.adapter()).with_options(options);

    tracing::trace!("lint command starting");
    service.run(&args.request())?;

    Ok(ExitCode::Success)
}
