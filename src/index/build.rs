// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Map / reduce / invert: the three passes that turn a list of shard paths
//! into a built [`Index`].
//!
//! Map is embarrassingly parallel (shards are independent); reduce and
//! invert are serial. When `parallelism > 1` the map phase runs on a
//! dedicated rayon thread pool sized to it, mirroring a fixed worker pool
//! rather than reaching for the global rayon pool (so callers can tune N
//! without affecting unrelated parallel work elsewhere in the process).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, info_span};

use crate::contracts::check_index_well_formed;
use crate::error::{IndexError, Result};
use crate::parse::{self, DocumentFormat};
use crate::tokenizer;
use crate::types::{DocId, DocumentRecord, Index};

type ShardMap = HashMap<DocId, DocumentRecord>;

/// Builds an [`Index`] from `shards` using `format` to segment each file and
/// `stop_words` to filter tokens. `parallelism` of 0 or 1 runs the map phase
/// sequentially on the caller's thread; otherwise a pool of that many
/// workers processes shards concurrently.
pub fn build_index<F: DocumentFormat + Sync>(
    shards: &[PathBuf],
    format: &F,
    stop_words: std::collections::HashSet<String>,
    parallelism: usize,
) -> Result<Index> {
    let shard_maps = {
        let _span = info_span!("map", shards = shards.len(), parallelism).entered();
        map_shards(shards, format, &stop_words, parallelism)?
    };

    let forward = {
        let _span = info_span!("reduce", shard_count = shard_maps.len()).entered();
        reduce_shards(shard_maps)?
    };

    let document_count = forward.len();
    let inverted = {
        let _span = info_span!("invert", document_count).entered();
        invert(&forward)
    };

    info!(document_count, term_count = inverted.len(), "index built");

    let index = Index {
        forward,
        inverted,
        document_count,
        stop_words,
    };
    check_index_well_formed(&index);
    Ok(index)
}

fn map_shards<F: DocumentFormat + Sync>(
    shards: &[PathBuf],
    format: &F,
    stop_words: &std::collections::HashSet<String>,
    parallelism: usize,
) -> Result<Vec<ShardMap>> {
    if parallelism > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parallelism)
            .build()
            .map_err(|e| IndexError::input_format(format!("failed to build worker pool: {e}")))?;
        pool.install(|| {
            shards
                .par_iter()
                .map(|path| map_shard(path, format, stop_words))
                .collect()
        })
    } else {
        shards
            .iter()
            .map(|path| map_shard(path, format, stop_words))
            .collect()
    }
}

fn map_shard<F: DocumentFormat>(
    path: &Path,
    format: &F,
    stop_words: &std::collections::HashSet<String>,
) -> Result<ShardMap> {
    let mut local: ShardMap = HashMap::new();
    for entry in parse::documents(path, format)? {
        let (start, end, doc) = entry?;
        let counts = tokenizer::count_terms(&doc.indexable, stop_words);
        let record = DocumentRecord {
            source: path.to_path_buf(),
            start_line: start,
            end_line: end,
            counts,
        };
        let id = DocId::from(doc.id);
        if local.insert(id, record).is_some() {
            return Err(IndexError::input_format(format!(
                "duplicate document id {} within shard {}",
                doc.id,
                path.display()
            )));
        }
    }
    Ok(local)
}

fn reduce_shards(shard_maps: Vec<ShardMap>) -> Result<HashMap<DocId, DocumentRecord>> {
    let mut forward = HashMap::new();
    for shard in shard_maps {
        for (id, record) in shard {
            if forward.insert(id, record).is_some() {
                return Err(IndexError::input_format(format!(
                    "document id {} appears in more than one shard",
                    id.get()
                )));
            }
        }
    }
    Ok(forward)
}

/// Rebuilds the inverted index from a forward map. Exposed so the
/// deserializer can reconstruct it without persisting it to disk.
pub fn invert(
    forward: &HashMap<DocId, DocumentRecord>,
) -> HashMap<crate::types::Token, crate::types::PostingList> {
    let mut inverted: HashMap<crate::types::Token, crate::types::PostingList> = HashMap::new();
    for (doc_id, record) in forward {
        for (token, &count) in &record.counts {
            inverted
                .entry(token.clone())
                .or_default()
                .insert(*doc_id, count);
        }
    }
    inverted
}
