// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cosine similarity between a query vector and each candidate document
//! vector, under a pluggable per-term weight.

use std::collections::{HashMap, HashSet};

use super::{sort, Ranked};
use crate::tokenizer;
use crate::types::{DocId, Index, Token};

/// A per-term weighting function: given the term, the vector it came from
/// (query or document), and the index for global statistics, returns a
/// weight. Both built-in weights are plain function pointers; the type
/// alias keeps call sites free of lifetime noise.
pub type Weight = fn(&Token, &HashMap<Token, u32>, &Index) -> f64;

/// `W(t, vec, index) = tfidf(vec[t], document_frequency(t), document_count)`.
pub fn tfidf_weight(term: &Token, vec: &HashMap<Token, u32>, index: &Index) -> f64 {
    let tf = vec.get(term).copied().unwrap_or(0);
    index.tfidf(tf, index.document_frequency(term), index.document_count())
}

/// `W(t, vec, index) = vec[t] / max(vec.values())`.
pub fn norm_count_weight(term: &Token, vec: &HashMap<Token, u32>, _index: &Index) -> f64 {
    let max = vec.values().copied().max().unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    vec.get(term).copied().unwrap_or(0) as f64 / max as f64
}

/// A cosine-scored vectorial query: tokenize the query, weight each query
/// and candidate-document term the same way, score by normalized dot
/// product.
pub struct CosineQuery {
    text: String,
    weight: Weight,
}

impl CosineQuery {
    pub fn new(text: impl Into<String>, weight: Weight) -> Self {
        CosineQuery {
            text: text.into(),
            weight,
        }
    }

    pub fn tfidf(text: impl Into<String>) -> Self {
        Self::new(text, tfidf_weight)
    }

    pub fn norm_count(text: impl Into<String>) -> Self {
        Self::new(text, norm_count_weight)
    }

    pub fn execute(&self, index: &Index) -> Ranked {
        let q = tokenizer::count_terms(&self.text, index.stop_words());

        let qw: HashMap<Token, f64> = q
            .keys()
            .map(|t| (t.clone(), (self.weight)(t, &q, index)))
            .collect();
        let q_norm = (qw.values().map(|w| w * w).sum::<f64>()).sqrt();

        let candidates: HashSet<DocId> = q
            .keys()
            .flat_map(|t| index.postings_for(t).keys().copied().collect::<Vec<_>>())
            .collect();

        let mut results = Vec::with_capacity(candidates.len());
        for doc_id in candidates {
            let Some(record) = index.record(doc_id) else {
                continue;
            };
            let dw: HashMap<Token, f64> = record
                .counts
                .keys()
                .map(|t| (t.clone(), (self.weight)(t, &record.counts, index)))
                .collect();
            let d_norm = (dw.values().map(|w| w * w).sum::<f64>()).sqrt();

            let score = if q_norm == 0.0 || d_norm == 0.0 {
                0.0
            } else {
                let dot: f64 = qw
                    .iter()
                    .map(|(t, w)| w * dw.get(t).copied().unwrap_or(0.0))
                    .sum();
                dot / (q_norm * d_norm)
            };
            results.push((doc_id, score));
        }
        sort(results)
    }
}
