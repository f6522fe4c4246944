//! The offline recall/precision harness run against a small labelled query
//! set, and index persistence round-tripped through a harness run.

mod common;

use std::io::Write;

use cacmex::harness::{read_judgements, read_queries, recall_precision_curve};
use cacmex::serialize;
use cacmex::vectorial::CosineQuery;

use common::write_temp;

#[test]
fn recall_precision_curve_is_well_formed() {
    let (_f, idx) = common::two_doc_corpus();

    let queries_file = write_temp(".I 1\n.W\nlanguage\n.N\n.I 2\n.W\nextraction\n.N\n");
    let judgements_file = write_temp("1 1\n1 2\n2 2\n");

    let queries = read_queries(queries_file.path()).unwrap();
    let judgements = read_judgements(judgements_file.path()).unwrap();

    let curve = recall_precision_curve(&queries, &judgements, &idx, 101, |index, text| {
        CosineQuery::tfidf(text).execute(index)
    });

    assert_eq!(curve.len(), 100);
    for point in &curve {
        assert!((0.0..=1.0).contains(&point.recall));
        assert!((0.0..=1.0).contains(&point.precision));
    }
    // At a 100% cutoff every relevant document has been retrieved.
    let last = curve.last().unwrap();
    assert!((last.recall - 1.0).abs() < 1e-9);
}

#[test]
fn a_query_with_no_judged_relevant_documents_gets_perfect_recall() {
    let (_f, idx) = common::two_doc_corpus();
    let mut queries = cacmex::harness::Queries::new();
    queries.insert(1, "language".to_string());
    let judgements = cacmex::harness::Judgements::new();

    let curve = recall_precision_curve(&queries, &judgements, &idx, 5, |index, text| {
        CosineQuery::tfidf(text).execute(index)
    });
    assert!(curve.iter().all(|p| (p.recall - 1.0).abs() < 1e-9));
}

#[test]
fn an_index_built_then_saved_then_loaded_answers_queries_identically() {
    let (_f, original) = common::two_doc_corpus();
    let mut out = tempfile::NamedTempFile::new().unwrap();
    serialize::save(&original, out.path()).unwrap();
    out.flush().unwrap();

    let reloaded = serialize::load(out.path()).unwrap();
    assert_eq!(original.document_count(), reloaded.document_count());

    let q = CosineQuery::tfidf("algebraic language");
    assert_eq!(q.execute(&original), q.execute(&reloaded));
}
