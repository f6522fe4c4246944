// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binary Independence Retrieval-style additive scoring: no cosine, no
//! norms, just a per-term log-odds weight accumulated over the documents
//! that contain it.

use std::collections::HashMap;

use super::{sort, Ranked};
use crate::tokenizer;
use crate::types::{DocId, Index};

pub struct ProbabilisticQuery {
    text: String,
}

impl ProbabilisticQuery {
    pub fn new(text: impl Into<String>) -> Self {
        ProbabilisticQuery { text: text.into() }
    }

    pub fn execute(&self, index: &Index) -> Ranked {
        let q = tokenizer::count_terms(&self.text, index.stop_words());
        let n = index.document_count() as f64;

        let mut scores: HashMap<DocId, f64> = HashMap::new();
        for term in q.keys() {
            let df = index.document_frequency(term) as f64;
            if df == 0.0 {
                continue;
            }
            let p_irrel = df / n;
            let p_rel = 1.0 / 3.0 + (2.0 / 3.0) * df / n;
            let weight = (p_rel / (1.0 - p_rel)).ln() - (p_irrel / (1.0 - p_irrel)).ln();
            for doc_id in index.postings_for(term).keys() {
                *scores.entry(*doc_id).or_insert(0.0) += weight;
            }
        }
        sort(scores.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::parse::Cacm;
    use std::io::Write;

    fn two_doc_corpus() -> (tempfile::NamedTempFile, Index) {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            ".I 1\n.T\nPreliminary Report-International Algebraic Language\n.W\nThe preliminary report on the international algebraic language.\n.I 2\n.T\nRepeated subtractions\n.W\nRepeated subtractions on digital computers extract roots language extraction.\n"
        )
        .unwrap();
        let index = build_index(&[f.path().to_path_buf()], &Cacm, Default::default(), 1).unwrap();
        (f, index)
    }

    #[test]
    fn documents_without_any_query_term_are_not_returned() {
        let (_f, idx) = two_doc_corpus();
        let q = ProbabilisticQuery::new("algebraic");
        let results = q.execute(&idx);
        assert!(results.iter().all(|(d, _)| d.get() == 1));
    }

    #[test]
    fn scoring_is_idempotent() {
        let (_f, idx) = two_doc_corpus();
        let q = ProbabilisticQuery::new("language extraction");
        assert_eq!(q.execute(&idx), q.execute(&idx));
    }
}
