// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ranked retrieval: a cosine family with pluggable term weighting (tf-idf,
//! normalized count), and a probabilistic (BIR-style) scorer.
//!
//! All three share the same query preparation step — tokenize the query
//! text exactly like document text — and the same output contract: an
//! ordered `(DocId, score)` sequence, highest score first, ties broken by
//! ascending [`DocId`] so repeated runs are bit-for-bit identical.

mod cosine;
mod probabilistic;

pub use cosine::{norm_count_weight, tfidf_weight, CosineQuery};
pub use probabilistic::ProbabilisticQuery;

use crate::types::DocId;

/// One ranked result.
pub type Ranked = Vec<(DocId, f64)>;

fn sort_ranked(mut results: Ranked) -> Ranked {
    results.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    results
}

pub(crate) use sort_ranked as sort;
