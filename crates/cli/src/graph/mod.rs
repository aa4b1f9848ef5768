// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project graph model.
//!
//! The graph is produced by an external tool (a JSON dump of the
//! workspace) and is only ever read here. Field names follow the dump's
//! camelCase keys; fields graphlint does not use are ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

pub mod provider;

pub use provider::{CommandGraphProvider, GraphLoadError, GraphProvider, ManifestGraphProvider};

/// A loaded workspace: projects keyed by their identity (path).
///
/// Projects live in an ordered map, so iteration is stable across runs
/// regardless of the order the dump lists them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graph {
    /// Workspace or project name.
    #[serde(default)]
    pub name: String,
    /// Directory the graph was loaded for.
    #[serde(default)]
    pub path: String,
    /// Projects by identity.
    #[serde(default)]
    pub projects: BTreeMap<String, Project>,
}

/// A project in the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    /// True for third-party (vendored or package-managed) projects.
    #[serde(default)]
    pub is_external: bool,
    /// Targets in declaration order.
    #[serde(default)]
    pub targets: Vec<Target>,
}

/// A lintable unit: a name and its source files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub name: String,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Graph {
    /// Targets of every non-external project.
    ///
    /// Order: project identity ascending, then target declaration order.
    pub fn internal_targets(&self) -> impl Iterator<Item = &Target> {
        self.projects
            .values()
            .filter(|project| !project.is_external)
            .flat_map(|project| project.targets.iter())
    }

    /// Join every relative source path onto `base`.
    ///
    /// Absolute paths are left untouched.
    pub fn rebase_sources(&mut self, base: &Path) {
        let sources = self
            .projects
            .values_mut()
            .flat_map(|project| project.targets.iter_mut())
            .flat_map(|target| target.sources.iter_mut());

        for source in sources {
            if Path::new(source.as_str()).is_relative() {
                *source = base.join(source.as_str()).to_string_lossy().into_owned();
            }
        }
    }

    /// Parse a graph from its JSON dump.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
