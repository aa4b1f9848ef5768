//! graphlint: lint the sources of a project graph.
//!
//! Loads the workspace graph through a [`GraphProvider`], resolves the
//! source files of its internal targets, and dispatches them to a
//! [`LintAdapter`] for linting or fixing.

pub mod adapter;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod resolve;
pub mod service;

pub use adapter::{AdapterError, CommandAdapter, Leniency, LintAdapter};
pub use cli::{Cli, Command, LintArgs};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use graph::{Graph, GraphLoadError, GraphProvider, Project, Target};
pub use resolve::resolve_sources;
pub use service::{LintOptions, LintRequest, LintService};
