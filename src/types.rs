// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The building blocks of the index: document identifiers, tokens, and the
//! forward/inverted structures built from them.
//!
//! # Invariants
//!
//! - **(I1)** `inverted[t][d] == forward[d].counts[t]` for every token `t` and
//!   document `d` in which `t` appears.
//! - **(I2)** every token in any `forward[d].counts` appears as a key in `inverted`.
//! - **(I3)** no stop-word token is a key in `inverted`.
//! - **(I4)** all counts are strictly positive.
//! - **(I5)** `document_count == forward.len()`.
//!
//! These are checked at the end of construction and after deserialization by
//! [`crate::contracts`], not re-derived ad hoc at call sites.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A document identifier, unique within a corpus and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl From<DocId> for u32 {
    fn from(id: DocId) -> Self {
        id.0
    }
}

/// A stemmed, stop-word-filtered term. Tokens compare by byte equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Token(pub String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token(s)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token(s.to_string())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A forward-index entry: everything needed to answer queries about, and
/// re-read, one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub source: PathBuf,
    pub start_line: usize,
    pub end_line: usize,
    pub counts: HashMap<Token, u32>,
}

impl DocumentRecord {
    pub fn term_frequency(&self, token: &Token) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

/// The set of documents containing a token, each with its in-document count.
pub type PostingList = HashMap<DocId, u32>;

/// The whole index: forward map, inverted map, and the stop-word set used to
/// build it (needed so queries tokenize consistently with the corpus).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    pub(crate) forward: HashMap<DocId, DocumentRecord>,
    pub(crate) inverted: HashMap<Token, PostingList>,
    pub(crate) document_count: usize,
    pub(crate) stop_words: std::collections::HashSet<String>,
}
