// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Durable, versioned, checksummed persistence for an [`Index`].
//!
//! The inverted map is never written: only the forward map and the
//! stop-word set are the durable payload, and the loader rebuilds the
//! inverted map by re-running the invert pass. This mirrors the reference
//! implementation, which re-derives its inverted index from the forward map
//! on load rather than persisting two copies of the same information.
//!
//! On-disk layout: 4 magic bytes, 1 version byte, a postcard-encoded body,
//! then a trailing 4-byte CRC32 over everything before it. A version bump
//! is the only way the body format ever changes; old files fail fast with a
//! `SerializationError` rather than silently misparsing.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;

use crc32fast::Hasher as Crc32;
use serde::{Deserialize, Serialize};

use crate::contracts::check_index_well_formed;
use crate::error::{IndexError, Result};
use crate::index;
use crate::types::{DocId, DocumentRecord, Index};

const MAGIC: [u8; 4] = *b"CIDX";
const VERSION: u8 = 1;

#[derive(Serialize, Deserialize)]
struct Payload {
    forward: HashMap<DocId, DocumentRecord>,
    stop_words: std::collections::HashSet<String>,
}

/// Serializes `index` and writes it to `path`.
pub fn save(index: &Index, path: &Path) -> Result<()> {
    let payload = Payload {
        forward: index.forward.clone(),
        stop_words: index.stop_words.clone(),
    };
    let body = postcard::to_allocvec(&payload)
        .map_err(|e| IndexError::serialization(format!("failed to encode index: {e}")))?;

    let mut hasher = Crc32::new();
    hasher.update(&MAGIC);
    hasher.update(&[VERSION]);
    hasher.update(&body);
    let checksum = hasher.finalize();

    let mut file = std::fs::File::create(path).map_err(|e| IndexError::io(path.to_path_buf(), e))?;
    file.write_all(&MAGIC)
        .and_then(|_| file.write_all(&[VERSION]))
        .and_then(|_| file.write_all(&body))
        .and_then(|_| file.write_all(&checksum.to_le_bytes()))
        .map_err(|e| IndexError::io(path.to_path_buf(), e))?;
    Ok(())
}

/// Reads and decodes an [`Index`] from `path`, rebuilding the inverted map
/// and re-checking invariants (I1)-(I5).
pub fn load(path: &Path) -> Result<Index> {
    let mut bytes = Vec::new();
    std::fs::File::open(path)
        .and_then(|mut f| f.read_to_end(&mut bytes))
        .map_err(|e| IndexError::io(path.to_path_buf(), e))?;

    if bytes.len() < MAGIC.len() + 1 + 4 {
        return Err(IndexError::serialization("file too small to be a valid index"));
    }
    let (header, rest) = bytes.split_at(MAGIC.len() + 1);
    if header[..4] != MAGIC {
        return Err(IndexError::serialization("bad magic bytes"));
    }
    let version = header[4];
    if version != VERSION {
        return Err(IndexError::serialization(format!(
            "unsupported format version {version}, expected {VERSION}"
        )));
    }

    let (body, checksum_bytes) = rest.split_at(rest.len() - 4);
    let expected = u32::from_le_bytes(checksum_bytes.try_into().unwrap());

    let mut hasher = Crc32::new();
    hasher.update(&MAGIC);
    hasher.update(&[version]);
    hasher.update(body);
    if hasher.finalize() != expected {
        return Err(IndexError::serialization("checksum mismatch: file is corrupt"));
    }

    let payload: Payload = postcard::from_bytes(body)
        .map_err(|e| IndexError::serialization(format!("failed to decode index: {e}")))?;

    let document_count = payload.forward.len();
    let inverted = index::invert(&payload.forward);
    let loaded = Index {
        forward: payload.forward,
        inverted,
        document_count,
        stop_words: payload.stop_words,
    };
    check_index_well_formed(&loaded);
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::BooleanQuery;
    use crate::index::build_index;
    use crate::parse::Cacm;
    use crate::vectorial::CosineQuery;
    use std::io::Write as _;

    fn two_doc_corpus() -> Index {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            ".I 1\n.T\nPreliminary Report-International Algebraic Language\n.W\nThe preliminary report on the international algebraic language.\n.I 2\n.T\nRepeated subtractions\n.W\nRepeated subtractions on digital computers extract roots language extraction.\n"
        )
        .unwrap();
        build_index(&[f.path().to_path_buf()], &Cacm, Default::default(), 1).unwrap()
    }

    #[test]
    fn round_trip_preserves_query_results() {
        let original = two_doc_corpus();
        let out = tempfile::NamedTempFile::new().unwrap();
        save(&original, out.path()).unwrap();
        let reloaded = load(out.path()).unwrap();

        assert_eq!(original.document_count(), reloaded.document_count());
        assert_eq!(original.search("language"), reloaded.search("language"));

        let q = BooleanQuery::parse("algebraic + extraction").unwrap();
        assert_eq!(q.execute(&original), q.execute(&reloaded));

        let v = CosineQuery::tfidf("algebraic");
        assert_eq!(v.execute(&original), v.execute(&reloaded));
    }

    #[test]
    fn corrupted_checksum_is_rejected() {
        let original = two_doc_corpus();
        let out = tempfile::NamedTempFile::new().unwrap();
        save(&original, out.path()).unwrap();

        let mut bytes = std::fs::read(out.path()).unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xFF;
        std::fs::write(out.path(), &bytes).unwrap();

        assert!(matches!(load(out.path()), Err(IndexError::Serialization(_))));
    }

    #[test]
    fn bad_magic_is_rejected() {
        let out = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(out.path(), b"not an index file at all").unwrap();
        assert!(matches!(load(out.path()), Err(IndexError::Serialization(_))));
    }
}
