// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lowercase, split, filter stop-words, stem. The same pipeline runs over
//! document content and over query text, so the two ever speak the same
//! vocabulary.
//!
//! Stop-word comparison happens against the lowercased, unstemmed surface
//! form (before the Porter pass), matching the reference implementation.
//! Load the stop-word file with [`load_stop_words`] rather than pushing it
//! through [`tokenize`] yourself, or the comparison will silently drift.

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::error::{IndexError, Result};
use crate::types::Token;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w]+").unwrap());

fn stemmer() -> Stemmer {
    Stemmer::create(Algorithm::English)
}

/// Splits `text` into lowercase alphanumeric fragments, in order, dropping
/// anything that isn't a word character.
fn split_words(text: &str) -> Vec<String> {
    NON_WORD
        .split(&text.to_lowercase())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}

/// Tokenizes `text`: lowercase, split on non-word runs, drop stop-words
/// (compared pre-stem), stem what remains. Order is preserved; empty or
/// all-punctuation input yields an empty sequence.
pub fn tokenize(text: &str, stop_words: &HashSet<String>) -> Vec<Token> {
    let stemmer = stemmer();
    split_words(text)
        .into_iter()
        .filter(|w| !stop_words.contains(w))
        .map(|w| Token(stemmer.stem(&w).into_owned()))
        .collect()
}

/// Counts the tokens `text` yields under [`tokenize`], equivalent to tallying
/// occurrences in the tokenized sequence.
pub fn count_terms(
    text: &str,
    stop_words: &HashSet<String>,
) -> std::collections::HashMap<Token, u32> {
    let mut counts = std::collections::HashMap::new();
    for token in tokenize(text, stop_words) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Loads a stop-word file: one lowercased word per line, trailing newlines
/// and blank lines tolerated (blank lines become empty strings that never
/// match a real token).
pub fn load_stop_words(path: &Path) -> Result<HashSet<String>> {
    let content =
        std::fs::read_to_string(path).map_err(|e| IndexError::io(path.to_path_buf(), e))?;
    Ok(content.lines().map(|l| l.trim().to_lowercase()).collect())
}
