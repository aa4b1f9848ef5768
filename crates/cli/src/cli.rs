// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::service::{LintOptions, LintRequest};

/// Lints the sources of a project graph through an external lint engine
#[derive(Parser)]
#[command(name = "graphlint")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "GRAPHLINT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lint (or fix) the sources of the project graph
    Lint(LintArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct LintArgs {
    /// Directory containing the workspace or project
    #[arg(short, long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Lint only this target (default: all internal targets)
    #[arg(short, long, value_name = "NAME")]
    pub target: Option<String>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Correct violations whenever possible
    #[arg(long)]
    pub fix: bool,

    /// Lint engine configuration file (repeatable)
    #[arg(long = "config-file", value_name = "FILE")]
    pub config_files: Vec<String>,

    /// Only report violations
    #[arg(short, long)]
    pub quiet: bool,
}

impl LintArgs {
    /// The invocation these arguments describe.
    pub fn request(&self) -> LintRequest {
        LintRequest {
            path: self.path.clone(),
            target_name: self.target.clone(),
            strict: self.strict,
            fix: self.fix,
        }
    }

    /// Layer command-line options over configured ones.
    ///
    /// Configuration files accumulate; `--quiet` can only switch quiet on.
    pub fn apply_to(&self, mut options: LintOptions) -> LintOptions {
        options
            .configuration_files
            .extend(self.config_files.iter().cloned());
        options.quiet |= self.quiet;
        options
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
