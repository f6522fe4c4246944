// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boolean queries: `+` (OR), `*` (AND), `!` (NOT), with parentheses.
//!
//! ```
//! # use cacmex::boolean::BooleanQuery;
//! let query = BooleanQuery::parse("algebraic + extraction").unwrap();
//! ```

mod lexer;
mod parser;
mod tree;

pub use tree::Node;

use std::collections::HashSet;

use crate::error::Result;
use crate::types::{DocId, Index};

/// A parsed boolean expression, ready to evaluate against any [`Index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanQuery {
    root: Node,
}

impl BooleanQuery {
    pub fn parse(expr: &str) -> Result<Self> {
        Ok(BooleanQuery {
            root: parser::parse(expr)?,
        })
    }

    pub fn execute(&self, index: &Index) -> HashSet<DocId> {
        self.root.postings(index)
    }
}
