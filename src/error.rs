// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the retrieval engine.
//!
//! One variant per failure category so callers can match on kind while still
//! getting a human-readable message via `Display`. Parsing, indexing, and
//! serialization all funnel through this single type rather than inventing
//! their own.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("input format error: {0}")]
    InputFormat(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("usage error: {0}")]
    Usage(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl IndexError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn input_format(msg: impl Into<String>) -> Self {
        IndexError::InputFormat(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        IndexError::Parse(msg.into())
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        IndexError::Usage(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        IndexError::Serialization(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
