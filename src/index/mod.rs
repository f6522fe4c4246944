// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The built [`Index`] and its query surface: search, document lookup,
//! document-frequency and tf-idf accounting, and the one I/O path
//! (`document_content`) that re-reads source files after indexing.

mod build;

pub use build::{build_index, invert};

use std::collections::HashSet;
use std::io::{BufRead, BufReader};

use crate::error::{IndexError, Result};
use crate::tokenizer;
use crate::types::{DocId, DocumentRecord, Index, PostingList, Token};

impl Index {
    /// Tokenizes `word` through the same pipeline used at index time and
    /// looks it up. Returns the empty posting list for anything that doesn't
    /// tokenize to a known term — never an error.
    pub fn search(&self, word: &str) -> PostingList {
        let tokens = tokenizer::tokenize(word, &self.stop_words);
        match tokens.first() {
            Some(token) => self.inverted.get(token).cloned().unwrap_or_default(),
            None => PostingList::new(),
        }
    }

    /// Looks up a single already-tokenized term directly, without
    /// re-tokenizing. Used by query evaluators that already hold `Token`s.
    pub fn postings_for(&self, token: &Token) -> PostingList {
        self.inverted.get(token).cloned().unwrap_or_default()
    }

    pub fn document_ids(&self) -> HashSet<DocId> {
        self.forward.keys().copied().collect()
    }

    pub fn record(&self, id: DocId) -> Option<&DocumentRecord> {
        self.forward.get(&id)
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn document_frequency(&self, token: &Token) -> usize {
        self.inverted.get(token).map(|p| p.len()).unwrap_or(0)
    }

    /// `log10(tf + 1) * log10(N / df)`; zero if `term_frequency` is zero.
    pub fn tfidf(&self, term_frequency: u32, document_frequency: usize, n: usize) -> f64 {
        if term_frequency == 0 || document_frequency == 0 {
            return 0.0;
        }
        (term_frequency as f64 + 1.0).log10() * (n as f64 / document_frequency as f64).log10()
    }

    /// Re-opens the document's source file and returns the inclusive
    /// `[start_line, end_line]` slice of lines, joined with `\n`.
    pub fn document_content(&self, id: DocId) -> Result<String> {
        let record = self
            .record(id)
            .ok_or_else(|| IndexError::usage(format!("no such document id {}", id.get())))?;
        let file = std::fs::File::open(&record.source)
            .map_err(|e| IndexError::io(record.source.clone(), e))?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| IndexError::io(record.source.clone(), e))?;
            if i >= record.start_line && i <= record.end_line {
                lines.push(line);
            }
            if i > record.end_line {
                break;
            }
        }
        Ok(lines.join("\n"))
    }

    pub fn stop_words(&self) -> &HashSet<String> {
        &self.stop_words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Cacm;
    use std::io::Write;

    fn two_doc_corpus() -> (tempfile::NamedTempFile, Index) {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            ".I 1\n.T\nPreliminary Report-International Algebraic Language\n.W\nThe preliminary report on the international algebraic language.\n.I 2\n.T\nRepeated subtractions\n.W\nRepeated subtractions on digital computers extract roots language extraction.\n"
        )
        .unwrap();
        let index = build_index(
            &[f.path().to_path_buf()],
            &Cacm,
            Default::default(),
            1,
        )
        .unwrap();
        (f, index)
    }

    #[test]
    fn search_language_returns_both_documents() {
        let (_f, index) = two_doc_corpus();
        let postings = index.search("Language");
        let mut ids: Vec<u32> = postings.keys().map(|d| d.get()).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn search_unknown_word_returns_empty_posting_list() {
        let (_f, index) = two_doc_corpus();
        assert!(index.search("zzzznonexistent").is_empty());
    }

    #[test]
    fn tfidf_is_zero_when_term_frequency_is_zero() {
        let (_f, index) = two_doc_corpus();
        assert_eq!(index.tfidf(0, 1, 2), 0.0);
    }

    #[test]
    fn document_content_reads_back_inclusive_line_range() {
        let (_f, index) = two_doc_corpus();
        let content = index.document_content(DocId::from(1)).unwrap();
        assert!(content.contains(".I 1"));
        assert!(!content.contains(".I 2"));
    }
}
