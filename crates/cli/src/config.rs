// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles graphlint.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::adapter::{CommandAdapter, DEFAULT_LINT_PROGRAM};
use crate::error::{Error, Result};
use crate::graph::provider::DEFAULT_GRAPH_FILE;
use crate::graph::{CommandGraphProvider, GraphProvider, ManifestGraphProvider};
use crate::service::LintOptions;

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys.
const KNOWN_KEYS: &[&str] = &["version", "graph", "lint"];

/// Known keys of the `[graph]` section.
const GRAPH_KEYS: &[&str] = &["file", "command"];

/// Known keys of the `[lint]` section.
const LINT_KEYS: &[&str] = &["program", "configuration_files", "quiet"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config that captures unknown top-level keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    graph: Option<toml::Value>,

    #[serde(default)]
    lint: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Where the project graph comes from.
    pub graph: GraphConfig,

    /// Lint engine settings.
    pub lint: LintConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            graph: GraphConfig::default(),
            lint: LintConfig::default(),
        }
    }
}

/// `[graph]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Name of the graph document searched for from the project path.
    pub file: String,

    /// Command printing the graph as JSON. Takes precedence over `file`.
    pub command: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_GRAPH_FILE.to_string(),
            command: Vec::new(),
        }
    }
}

/// `[lint]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Lint engine executable.
    pub program: String,

    /// Engine configuration files passed on every run.
    pub configuration_files: Vec<String>,

    /// Ask the engine to report violations only.
    pub quiet: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_LINT_PROGRAM.to_string(),
            configuration_files: Vec::new(),
            quiet: false,
        }
    }
}

impl Config {
    /// Graph provider selected by the `[graph]` section.
    pub fn graph_provider(&self) -> Box<dyn GraphProvider> {
        match CommandGraphProvider::from_command_line(&self.graph.command) {
            Some(provider) => Box::new(provider),
            None => Box::new(ManifestGraphProvider::new(self.graph.file.clone())),
        }
    }

    /// Lint engine adapter selected by the `[lint]` section.
    pub fn adapter(&self) -> CommandAdapter {
        CommandAdapter::new(self.lint.program.clone())
    }

    /// Options forwarded to the adapter on every run.
    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            configuration_files: self.lint.configuration_files.clone(),
            quiet: self.lint.quiet,
        }
    }
}

/// Load config, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade graphlint to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let graph: GraphConfig = parse_section(flexible.graph, "graph", GRAPH_KEYS, path)?;
    let lint: LintConfig = parse_section(flexible.lint, "lint", LINT_KEYS, path)?;

    if graph.file.trim().is_empty() {
        return Err(Error::Config {
            message: "graph.file must not be empty".to_string(),
            path: Some(path.to_path_buf()),
        });
    }

    if lint.program.trim().is_empty() {
        return Err(Error::Config {
            message: "lint.program must not be empty".to_string(),
            path: Some(path.to_path_buf()),
        });
    }

    Ok(Config {
        version: flexible.version,
        graph,
        lint,
    })
}

/// Deserialize one section, warning about keys outside `known`.
fn parse_section<T>(
    value: Option<toml::Value>,
    section: &str,
    known: &[&str],
    path: &Path,
) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(value) = value else {
        return Ok(T::default());
    };

    for key in section_unknown_keys(&value, known) {
        warn_unknown_key(path, &format!("{section}.{key}"));
    }

    value.try_into().map_err(|e: toml::de::Error| Error::Config {
        message: format!("[{section}] {e}"),
        path: Some(path.to_path_buf()),
    })
}

/// Keys of a section table that are not in `known`.
fn section_unknown_keys<'a>(value: &'a toml::Value, known: &[&str]) -> Vec<&'a str> {
    match value {
        toml::Value::Table(table) => table
            .keys()
            .map(String::as_str)
            .filter(|key| !known.contains(key))
            .collect(),
        _ => Vec::new(),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "graphlint: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
