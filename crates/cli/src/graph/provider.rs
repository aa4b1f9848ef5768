// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Graph providers.
//!
//! A provider turns an optional root directory into a [`Graph`]. Where the
//! graph comes from (a dumped document, an external tool) is the
//! provider's business; callers only see [`GraphProvider::load_graph`].

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::Graph;
use crate::adapter::describe_exit;
use crate::discovery;

/// Default name of the graph document looked up by [`ManifestGraphProvider`].
pub const DEFAULT_GRAPH_FILE: &str = "graph.json";

/// Why a graph could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum GraphLoadError {
    /// No graph document between the start directory and the git root.
    #[error("no graph found from {}", .start.display())]
    NotFound { start: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid graph in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {}: {stderr}", describe_exit(.code))]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{program} printed an invalid graph: {source}")]
    InvalidOutput {
        program: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads the project graph.
pub trait GraphProvider: Send + Sync {
    /// Load the graph for `root`, or for the current directory when `None`.
    fn load_graph(&self, root: Option<&Path>) -> Result<Graph, GraphLoadError>;
}

impl<T: GraphProvider + ?Sized> GraphProvider for &T {
    fn load_graph(&self, root: Option<&Path>) -> Result<Graph, GraphLoadError> {
        (**self).load_graph(root)
    }
}

impl<T: GraphProvider + ?Sized> GraphProvider for Box<T> {
    fn load_graph(&self, root: Option<&Path>) -> Result<Graph, GraphLoadError> {
        (**self).load_graph(root)
    }
}

/// Reads a graph document dumped to disk.
///
/// The document is searched for from the root (or current directory)
/// upward, stopping at the git root. Relative source paths in the
/// document are resolved against the document's directory.
#[derive(Debug, Clone)]
pub struct ManifestGraphProvider {
    file_name: String,
}

impl ManifestGraphProvider {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl Default for ManifestGraphProvider {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_FILE)
    }
}

impl GraphProvider for ManifestGraphProvider {
    fn load_graph(&self, root: Option<&Path>) -> Result<Graph, GraphLoadError> {
        let start = match root {
            Some(path) => path.to_path_buf(),
            None => std::env::current_dir().map_err(|source| GraphLoadError::Io {
                path: PathBuf::from("."),
                source,
            })?,
        };

        if !start.is_dir() {
            return Err(GraphLoadError::NotFound { start });
        }

        let Some(path) = discovery::find_upwards(&start, &self.file_name) else {
            return Err(GraphLoadError::NotFound { start });
        };
        tracing::debug!("reading graph from {}", path.display());

        let content = std::fs::read_to_string(&path).map_err(|source| GraphLoadError::Io {
            path: path.clone(),
            source,
        })?;

        let mut graph = Graph::from_json(&content).map_err(|source| GraphLoadError::Parse {
            path: path.clone(),
            source,
        })?;

        // Sources are relative to the document, the engine runs in the caller's cwd.
        if let Some(base) = path.parent() {
            graph.rebase_sources(base);
        }
        Ok(graph)
    }
}

/// Runs an external tool that prints the graph as JSON on stdout.
///
/// When a root is given it is passed as `--path <root>` after the
/// configured arguments.
#[derive(Debug, Clone)]
pub struct CommandGraphProvider {
    program: String,
    args: Vec<String>,
}

impl CommandGraphProvider {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a full command line (`["tuist", "graph", ...]`).
    ///
    /// Returns `None` for an empty command line.
    pub fn from_command_line(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    fn command(&self, root: Option<&Path>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(root) = root {
            cmd.arg("--path").arg(root);
        }
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd
    }
}

impl GraphProvider for CommandGraphProvider {
    fn load_graph(&self, root: Option<&Path>) -> Result<Graph, GraphLoadError> {
        tracing::debug!("running {} {:?}", self.program, self.args);

        let output = self
            .command(root)
            .output()
            .map_err(|source| GraphLoadError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GraphLoadError::CommandFailed {
                program: self.program.clone(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        serde_json::from_slice(&output.stdout).map_err(|source| GraphLoadError::InvalidOutput {
            program: self.program.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
