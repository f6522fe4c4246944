// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runtime contracts for the index invariants (I1)-(I5).
//!
//! Zero-cost in release builds (`debug_assert!`); checked after construction
//! and after every deserialization so a broken invariant fails loudly and
//! close to its cause instead of surfacing as a wrong query result later.

use crate::types::Index;

/// Checks (I1)-(I5). Only active in debug builds; in release this compiles
/// to nothing.
#[inline]
pub fn check_index_well_formed(index: &Index) {
    check_forward_inverted_agree(index);
    check_all_counts_positive(index);
    check_no_stop_words_in_vocabulary(index);
    check_document_count(index);
}

/// (I1) and (I2): every (token, doc, count) triple in the forward map has a
/// matching entry in the inverted map, and vice versa.
#[inline]
pub fn check_forward_inverted_agree(index: &Index) {
    for (doc_id, record) in &index.forward {
        for (token, &count) in &record.counts {
            let posting_count = index.inverted.get(token).and_then(|p| p.get(doc_id));
            debug_assert_eq!(
                posting_count,
                Some(&count),
                "contract violation (I1/I2): forward[{:?}].counts[{:?}] = {} but inverted disagrees",
                doc_id,
                token,
                count
            );
        }
    }
}

/// (I4): counts are strictly positive everywhere.
#[inline]
pub fn check_all_counts_positive(index: &Index) {
    for record in index.forward.values() {
        for &count in record.counts.values() {
            debug_assert!(count > 0, "contract violation (I4): non-positive count");
        }
    }
    for postings in index.inverted.values() {
        for &count in postings.values() {
            debug_assert!(count > 0, "contract violation (I4): non-positive posting count");
        }
    }
}

/// (I3): no stop-word survives into the vocabulary.
#[inline]
pub fn check_no_stop_words_in_vocabulary(index: &Index) {
    for token in index.inverted.keys() {
        debug_assert!(
            !index.stop_words.contains(token.as_str()),
            "contract violation (I3): stop-word {:?} present in inverted index",
            token
        );
    }
}

/// (I5): document_count matches the number of forward entries.
#[inline]
pub fn check_document_count(index: &Index) {
    debug_assert_eq!(
        index.document_count,
        index.forward.len(),
        "contract violation (I5): document_count out of sync with forward map"
    );
}
