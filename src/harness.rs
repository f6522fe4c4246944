// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Offline evaluation: run a batch of queries against an index and compute
//! averaged recall/precision curves against a set of relevance judgements.
//!
//! Rendering the curves to an image is the plotting front-end's job and is
//! out of scope here; this module produces the two numeric sequences a
//! front-end would plot.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{IndexError, Result};
use crate::types::{DocId, Index};
use crate::vectorial::Ranked;

/// A labelled query set: query id → query text.
pub type Queries = HashMap<u32, String>;

/// Relevance judgements: query id → the document ids considered relevant.
pub type Judgements = HashMap<u32, Vec<DocId>>;

/// Reads the CACM query file format: `.I n` starts a record, `.W` starts the
/// query text, `.N` ends it.
pub fn read_queries(path: &Path) -> Result<Queries> {
    let content =
        std::fs::read_to_string(path).map_err(|e| IndexError::io(path.to_path_buf(), e))?;

    let mut queries = Queries::new();
    let mut current_id: Option<u32> = None;
    let mut buffer = String::new();
    let mut collecting = false;

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(".I") {
            current_id = Some(rest.trim().parse::<u32>().map_err(|_| {
                IndexError::input_format(format!("unparsable query id in {:?}", line))
            })?);
            collecting = false;
        } else if line.starts_with(".W") {
            buffer.clear();
            collecting = true;
        } else if line.starts_with(".N") {
            let id = current_id.ok_or_else(|| {
                IndexError::input_format(".N encountered before any .I record".to_string())
            })?;
            queries.insert(id, buffer.trim().to_string());
            collecting = false;
        } else if collecting {
            buffer.push_str(line);
            buffer.push(' ');
        }
    }
    Ok(queries)
}

/// Reads a relevance judgements file: whitespace-separated `qid did ...`
/// lines, trailing tokens ignored, multiple lines per qid accumulate.
pub fn read_judgements(path: &Path) -> Result<Judgements> {
    let content =
        std::fs::read_to_string(path).map_err(|e| IndexError::io(path.to_path_buf(), e))?;

    let mut judgements = Judgements::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let qid = parts
            .next()
            .ok_or_else(|| IndexError::input_format(format!("empty judgements line: {:?}", line)))?
            .parse::<u32>()
            .map_err(|_| IndexError::input_format(format!("unparsable query id: {:?}", line)))?;
        let did = parts
            .next()
            .ok_or_else(|| {
                IndexError::input_format(format!("judgements line missing doc id: {:?}", line))
            })?
            .parse::<u32>()
            .map_err(|_| IndexError::input_format(format!("unparsable doc id: {:?}", line)))?;
        judgements.entry(qid).or_default().push(DocId::from(did));
    }
    Ok(judgements)
}

/// A single recall/precision pair, averaged across the query set at one
/// cutoff percentage of the ranked list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecallPrecisionPoint {
    pub recall: f64,
    pub precision: f64,
}

/// Runs `queries` through `rank` once each (caching the full ranked output),
/// then sweeps cutoff percentages 1..iterations-1 computing the average
/// recall and precision at each cutoff.
pub fn recall_precision_curve(
    queries: &Queries,
    judgements: &Judgements,
    index: &Index,
    iterations: u32,
    rank: impl Fn(&Index, &str) -> Ranked,
) -> Vec<RecallPrecisionPoint> {
    let mut cache: HashMap<u32, Ranked> = HashMap::new();
    for (qid, text) in queries {
        cache.insert(*qid, rank(index, text));
    }

    let mut curve = Vec::with_capacity(iterations.saturating_sub(1) as usize);
    for percentage in 1..iterations {
        let mut total_recall = 0.0;
        let mut total_precision = 0.0;
        for qid in queries.keys() {
            let relevant = judgements.get(qid).cloned().unwrap_or_default();
            let relevant_len = relevant.len();
            let results = &cache[qid];

            let top = ((results.len() as f64) * (percentage as f64) / 100.0).ceil() as usize;
            let top = top.min(results.len());
            let retrieved: std::collections::HashSet<DocId> =
                results[..top].iter().map(|(d, _)| *d).collect();

            let found = relevant.iter().filter(|d| retrieved.contains(d)).count();
            let recall = if relevant_len > 0 {
                found as f64 / relevant_len as f64
            } else {
                1.0
            };
            let precision = if top > 0 { found as f64 / top as f64 } else { 0.0 };

            total_recall += recall;
            total_precision += precision;
        }
        let n = queries.len().max(1) as f64;
        curve.push(RecallPrecisionPoint {
            recall: total_recall / n,
            precision: total_precision / n,
        });
    }
    curve
}
