// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Build configuration: which documents to index, in which format, with
//! which stop-words and parallelism. Populated from CLI flags, optionally
//! merged on top of a TOML file so repeated builds don't need to restate
//! every flag.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{IndexError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Cacm,
    Inex,
}

/// Indexing configuration. Every field is optional at the TOML layer so a
/// config file can supply defaults that CLI flags override.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub shards: Option<Vec<PathBuf>>,
    pub format: Option<Format>,
    pub stop_words_file: Option<PathBuf>,
    /// 0 or absent means "use all available cores"; 1 forces sequential.
    pub jobs: Option<usize>,
    pub output: Option<PathBuf>,
}

impl Config {
    /// Loads a TOML config file. Missing fields are fine; they're meant to
    /// be filled in by CLI flags.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| IndexError::io(path.to_path_buf(), e))?;
        toml::from_str(&content)
            .map_err(|e| IndexError::input_format(format!("invalid config file: {e}")))
    }

    /// Merges `override_with` on top of `self`: any field set in the
    /// override wins.
    pub fn merged_with(self, over: Config) -> Config {
        Config {
            shards: over.shards.or(self.shards),
            format: over.format.or(self.format),
            stop_words_file: over.stop_words_file.or(self.stop_words_file),
            jobs: over.jobs.or(self.jobs),
            output: over.output.or(self.output),
        }
    }

    /// Resolves the worker count: `None`/`Some(0)` means "all available
    /// cores".
    pub fn resolved_jobs(&self) -> usize {
        match self.jobs {
            None | Some(0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            Some(n) => n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_file_values() {
        let file_cfg = Config {
            jobs: Some(4),
            output: Some(PathBuf::from("from-file.idx")),
            ..Default::default()
        };
        let flag_cfg = Config {
            jobs: Some(1),
            ..Default::default()
        };
        let merged = file_cfg.merged_with(flag_cfg);
        assert_eq!(merged.jobs, Some(1));
        assert_eq!(merged.output, Some(PathBuf::from("from-file.idx")));
    }

    #[test]
    fn zero_jobs_resolves_to_available_parallelism() {
        let cfg = Config {
            jobs: Some(0),
            ..Default::default()
        };
        assert!(cfg.resolved_jobs() >= 1);
    }
}
