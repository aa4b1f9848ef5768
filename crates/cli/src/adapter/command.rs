// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint engine driven through its command line.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use super::{AdapterError, Leniency, LintAdapter};

/// Engine binary used when none is configured.
pub const DEFAULT_LINT_PROGRAM: &str = "swiftlint";

/// Runs an external lint engine.
///
/// Lint: `<program> lint [--strict] [--quiet] [--config FILE]... -- PATH...`
/// Fix:  `<program> lint --fix [--quiet] [--config FILE]... -- PATH...`
///
/// The engine inherits stdout/stderr so its diagnostics reach the user as-is.
#[derive(Debug, Clone)]
pub struct CommandAdapter {
    program: String,
}

impl CommandAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for a lint run.
    pub fn lint_args(
        paths: &[String],
        configuration_files: &[String],
        leniency: Leniency,
        quiet: bool,
    ) -> Vec<OsString> {
        let mut args = vec![OsString::from("lint")];
        if leniency == Leniency::Strict {
            args.push("--strict".into());
        }
        push_common(&mut args, paths, configuration_files, quiet);
        args
    }

    /// Arguments for a fix run.
    pub fn fix_args(
        paths: &[String],
        configuration_files: &[String],
        quiet: bool,
    ) -> Vec<OsString> {
        let mut args = vec![OsString::from("lint"), OsString::from("--fix")];
        push_common(&mut args, paths, configuration_files, quiet);
        args
    }

    fn execute(&self, args: Vec<OsString>, file_count: usize) -> Result<(), AdapterError> {
        // An empty path list would make the engine lint its working directory.
        if file_count == 0 {
            tracing::info!("no source files to pass to {}", self.program);
            return Ok(());
        }

        tracing::debug!("running {} with {} files", self.program, file_count);

        let status = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| AdapterError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(AdapterError::Failed {
                program: self.program.clone(),
                code: status.code(),
            })
        }
    }
}

impl Default for CommandAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_LINT_PROGRAM)
    }
}

impl LintAdapter for CommandAdapter {
    fn lint(
        &self,
        paths: &[String],
        configuration_files: &[String],
        leniency: Leniency,
        quiet: bool,
    ) -> Result<(), AdapterError> {
        let args = Self::lint_args(paths, configuration_files, leniency, quiet);
        self.execute(args, paths.len())
    }

    fn fix(
        &self,
        paths: &[String],
        configuration_files: &[String],
        quiet: bool,
    ) -> Result<(), AdapterError> {
        let args = Self::fix_args(paths, configuration_files, quiet);
        self.execute(args, paths.len())
    }
}

fn push_common(
    args: &mut Vec<OsString>,
    paths: &[String],
    configuration_files: &[String],
    quiet: bool,
) {
    if quiet {
        args.push("--quiet".into());
    }
    for file in configuration_files {
        args.push("--config".into());
        args.push(file.into());
    }
    args.push("--".into());
    args.extend(paths.iter().map(OsString::from));
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
