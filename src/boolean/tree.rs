// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The boolean query tree and its evaluator.
//!
//! AND/OR nodes are n-ary rather than binary-only: equivalent results, fewer
//! allocations per level. The tree holds no reference back to an index —
//! [`Node::postings`] takes one as an explicit argument.

use std::collections::HashSet;

use crate::types::{DocId, Index};

/// A leaf carries the raw surface word from the query text, not a [`Token`].
/// It's run through the index's own tokenizer (stop-words, stemming) at
/// evaluation time via [`Index::search`], exactly like any other search
/// term — a word that happens to be a stop-word simply matches nothing.
///
/// [`Token`]: crate::types::Token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(String),
    And(Vec<Node>),
    Or(Vec<Node>),
    Not(Box<Node>),
}

impl Node {
    /// Evaluates this node against `index`, returning the matching document
    /// ids as a set (order is not meaningful).
    pub fn postings(&self, index: &Index) -> HashSet<DocId> {
        match self {
            Node::Leaf(word) => index.search(word).keys().copied().collect(),
            Node::Not(inner) => index
                .document_ids()
                .difference(&inner.postings(index))
                .copied()
                .collect(),
            Node::And(operands) => {
                let mut iter = operands.iter();
                let first = match iter.next() {
                    Some(op) => op.postings(index),
                    None => return HashSet::new(),
                };
                iter.fold(first, |acc, op| {
                    acc.intersection(&op.postings(index)).copied().collect()
                })
            }
            Node::Or(operands) => {
                let mut result = HashSet::new();
                for op in operands {
                    result.extend(op.postings(index));
                }
                result
            }
        }
    }
}
