// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File discovery.
//!
//! Walks from a starting directory up to the git root looking for
//! graphlint.toml or the graph document.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Name of the graphlint configuration file.
pub const CONFIG_FILE_NAME: &str = "graphlint.toml";

/// Find `file_name` starting from `start_dir` and walking up to git root.
pub fn find_upwards(start_dir: &Path, file_name: &str) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let candidate = current.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Locate the graphlint.toml to load, if any.
///
/// An explicit path (`-C`/`--config` or `GRAPHLINT_CONFIG`) must name an
/// existing file; otherwise the file is searched for from `cwd` upward.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_upwards(cwd, CONFIG_FILE_NAME));
    };

    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
