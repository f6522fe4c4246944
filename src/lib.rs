// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! An in-memory boolean and vectorial retrieval engine over CACM/INEX-style
//! document collections.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  tokenizer  │────▶│  index       │────▶│  boolean    │
//! │  parse      │     │  (forward +  │     │  vectorial  │
//! │             │     │   inverted)  │     │  harness    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! Build an index from one or more shard files with [`index::build_index`],
//! then query it with [`boolean::BooleanQuery`] or [`vectorial::CosineQuery`]
//! / [`vectorial::ProbabilisticQuery`]. [`serialize::save`] and
//! [`serialize::load`] round-trip an index to disk.

pub mod boolean;
pub mod config;
pub mod contracts;
pub mod error;
pub mod harness;
pub mod index;
pub mod parse;
pub mod serialize;
pub mod tokenizer;
pub mod types;
pub mod vectorial;

pub use error::{IndexError, Result};
pub use types::{DocId, DocumentRecord, Index, PostingList, Token};
