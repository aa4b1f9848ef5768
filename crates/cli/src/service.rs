// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint command orchestration.
//!
//! One invocation: load the graph, resolve the sources in scope, hand them
//! to the lint adapter. Any failure ends the invocation.

use std::path::PathBuf;

use crate::adapter::{Leniency, LintAdapter};
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphProvider};
use crate::resolve::resolve_sources;

/// A single lint or fix invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintRequest {
    /// Directory holding the workspace or project (provider default when `None`).
    pub path: Option<PathBuf>,
    /// Lint only this target (all internal targets when `None`).
    pub target_name: Option<String>,
    /// Escalate warnings to errors. Ignored when fixing.
    pub strict: bool,
    /// Correct violations instead of reporting them.
    pub fix: bool,
}

/// Settings forwarded to the adapter on every invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintOptions {
    /// Engine configuration files.
    pub configuration_files: Vec<String>,
    /// Ask the engine to only report violations.
    pub quiet: bool,
}

/// Ties a graph provider and a lint adapter together.
pub struct LintService<G, A> {
    provider: G,
    adapter: A,
    options: LintOptions,
}

impl<G: GraphProvider, A: LintAdapter> LintService<G, A> {
    pub fn new(provider: G, adapter: A) -> Self {
        Self {
            provider,
            adapter,
            options: LintOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LintOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &LintOptions {
        &self.options
    }

    /// Run the invocation described by `request`.
    pub fn run(&self, request: &LintRequest) -> Result<()> {
        let graph = self.graph(request)?;
        tracing::debug!("graph loaded: {} projects", graph.projects.len());

        let sources = resolve_sources(&graph, request.target_name.as_deref())?;
        tracing::debug!("resolved {} source files", sources.len());

        if request.fix {
            tracing::debug!("dispatching fix");
            self.adapter.fix(
                &sources,
                &self.options.configuration_files,
                self.options.quiet,
            )?;
        } else {
            let leniency = Leniency::from_strict(request.strict);
            tracing::debug!("dispatching lint ({leniency})");
            self.adapter.lint(
                &sources,
                &self.options.configuration_files,
                leniency,
                self.options.quiet,
            )?;
        }

        Ok(())
    }

    fn graph(&self, request: &LintRequest) -> Result<Graph> {
        self.provider
            .load_graph(request.path.as_deref())
            .map_err(|source| {
                tracing::debug!("graph load failed: {source}");
                Error::GraphNotFound { source }
            })
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
