//! Shared test fixtures.

#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;

use cacmex::index::build_index;
use cacmex::parse::Cacm;
use cacmex::Index;

/// The two-document CACM-style corpus used across most integration tests:
/// doc 1 is the "preliminary report" record, doc 2 the "repeated
/// subtractions" record. Both share the stem "languag".
pub fn two_doc_corpus() -> (tempfile::NamedTempFile, Index) {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        ".I 1\n\
         .T\n\
         Preliminary Report-International Algebraic Language\n\
         .W\n\
         The preliminary report on the international algebraic language.\n\
         .I 2\n\
         .T\n\
         Repeated subtractions\n\
         .W\n\
         Repeated subtractions on digital computers extract roots language extraction.\n"
    )
    .unwrap();
    let index = build_index(&[f.path().to_path_buf()], &Cacm, Default::default(), 1).unwrap();
    (f, index)
}

pub fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f
}

pub fn doc_ids(index: &Index) -> HashSet<u32> {
    index.document_ids().into_iter().map(|d| d.get()).collect()
}

/// Asserts the invariants the contracts module also checks in debug builds,
/// so a release-mode test run still exercises them once.
pub fn assert_index_well_formed(index: &Index) {
    assert_eq!(index.document_count(), doc_ids(index).len());
    for id in index.document_ids() {
        let record = index.record(id).expect("document_ids entry has no record");
        for (token, &count) in &record.counts {
            assert!(count > 0, "non-positive count for {token:?}");
            let postings = index.postings_for(token);
            assert_eq!(
                postings.get(&id).copied(),
                Some(count),
                "forward/inverted disagreement for {token:?} in doc {id:?}"
            );
        }
    }
}
