// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint engine adapters.
//!
//! graphlint never inspects source code itself. An adapter receives the
//! resolved file list and hands it to a lint engine, which prints its
//! own diagnostics and rewrites files when fixing.
//!
//! ## Adapter Trait
//!
//! - `lint(paths, configuration_files, leniency, quiet)`
//! - `fix(paths, configuration_files, quiet)`
//!
//! Test doubles implement the trait directly; [`CommandAdapter`] drives
//! an engine binary (SwiftLint-compatible command line).

use std::fmt;

pub mod command;

pub use command::{CommandAdapter, DEFAULT_LINT_PROGRAM};

/// Lint strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Leniency {
    /// Warnings stay warnings.
    #[default]
    Default,
    /// Warnings are escalated to errors.
    Strict,
}

impl Leniency {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Leniency::Strict
        } else {
            Leniency::Default
        }
    }
}

impl fmt::Display for Leniency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leniency::Default => f.write_str("default"),
            Leniency::Strict => f.write_str("strict"),
        }
    }
}

/// Lint engine failure.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    /// The engine could not be started.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran and reported failure (violations or a crash).
    #[error("{program} {}", describe_exit(.code))]
    Failed { program: String, code: Option<i32> },
}

/// Human-readable form of a child process exit code.
pub(crate) fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

/// A lint engine that can check and fix source files.
pub trait LintAdapter: Send + Sync {
    /// Lint `paths`, reporting diagnostics as a side effect.
    fn lint(
        &self,
        paths: &[String],
        configuration_files: &[String],
        leniency: Leniency,
        quiet: bool,
    ) -> Result<(), AdapterError>;

    /// Apply automatic corrections to `paths` in place.
    fn fix(
        &self,
        paths: &[String],
        configuration_files: &[String],
        quiet: bool,
    ) -> Result<(), AdapterError>;
}

impl<T: LintAdapter + ?Sized> LintAdapter for &T {
    fn lint(
        &self,
        paths: &[String],
        configuration_files: &[String],
        leniency: Leniency,
        quiet: bool,
    ) -> Result<(), AdapterError> {
        (**self).lint(paths, configuration_files, leniency, quiet)
    }

    fn fix(
        &self,
        paths: &[String],
        configuration_files: &[String],
        quiet: bool,
    ) -> Result<(), AdapterError> {
        (**self).fix(paths, configuration_files, quiet)
    }
}

impl<T: LintAdapter + ?Sized> LintAdapter for Box<T> {
    fn lint(
        &self,
        paths: &[String],
        configuration_files: &[String],
        leniency: Leniency,
        quiet: bool,
    ) -> Result<(), AdapterError> {
        (**self).lint(paths, configuration_files, leniency, quiet)
    }

    fn fix(
        &self,
        paths: &[String],
        configuration_files: &[String],
        quiet: bool,
    ) -> Result<(), AdapterError> {
        (**self).fix(paths, configuration_files, quiet)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
