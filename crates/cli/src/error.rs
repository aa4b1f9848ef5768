// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::adapter::AdapterError;
use crate::graph::GraphLoadError;

/// Graphlint error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The graph provider could not produce a graph.
    ///
    /// The provider's failure is kept as the error source.
    #[error("The project's graph can not be found.")]
    GraphNotFound {
        #[source]
        source: GraphLoadError,
    },

    /// No internal target carries the requested name.
    #[error("A target with a name '{target_name}' not found in the project.")]
    TargetNotFound { target_name: String },

    /// Lint engine failure, passed through untouched.
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using graphlint Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Lint (or fix) completed cleanly
    Success = 0,
    /// The lint engine reported a failure
    LintFailed = 1,
    /// Configuration, argument or graph error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::GraphNotFound { .. }
            | Error::TargetNotFound { .. }
            | Error::Config { .. }
            | Error::Argument(_) => ExitCode::ConfigError,
            Error::Adapter(AdapterError::Failed { .. }) => ExitCode::LintFailed,
            Error::Adapter(AdapterError::Spawn { .. }) => ExitCode::InternalError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
