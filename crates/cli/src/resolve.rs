// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source resolution: which files of the graph get linted.

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Collect the source files in scope.
///
/// Without a target name, every internal target contributes its sources in
/// graph order. With one, the first internal target named exactly
/// `target_name` is used; targets of external projects never match.
pub fn resolve_sources(graph: &Graph, target_name: Option<&str>) -> Result<Vec<String>> {
    let Some(target_name) = target_name else {
        return Ok(graph
            .internal_targets()
            .flat_map(|target| target.sources.iter().cloned())
            .collect());
    };

    graph
        .internal_targets()
        .find(|target| target.name == target_name)
        .map(|target| target.sources.clone())
        .ok_or_else(|| Error::TargetNotFound {
            target_name: target_name.to_string(),
        })
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
