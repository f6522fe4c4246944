// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document segmentation: stream a multi-document file, yield one
//! `(start_line, end_line, ParsedDocument)` per document.
//!
//! Two concrete formats share a streaming skeleton; format-specific bits
//! (start marker, field extraction) are a small capability trait rather than
//! a class hierarchy, so the skeleton stays generic over the format.

mod cacm;
mod inex;

pub use cacm::Cacm;
pub use inex::Inex;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{IndexError, Result};

/// One segmented document: its id and the text to index.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub id: u32,
    pub title: String,
    pub indexable: String,
}

/// Format-specific extraction rules. A `DocumentFormat` is stateless; all the
/// state lives in the raw text handed to each method.
pub trait DocumentFormat {
    /// A line starting with this prefix begins a new document.
    fn start_marker(&self) -> &str;

    /// Extracts the integer document id from one document's raw text.
    fn extract_id(&self, raw: &str) -> Result<u32>;

    /// Extracts the (possibly empty) title.
    fn extract_title(&self, raw: &str) -> String;

    /// Extracts the text that should be tokenized and indexed.
    fn extract_indexable(&self, raw: &str) -> String;
}

/// Streams `path` line by line and yields one entry per document recognized
/// by `format`. Single-pass: re-open the file to iterate again.
pub fn documents<'a, F: DocumentFormat>(
    path: &'a Path,
    format: &'a F,
) -> Result<impl Iterator<Item = Result<(usize, usize, ParsedDocument)>> + 'a> {
    let file = File::open(path).map_err(|e| IndexError::io(path.to_path_buf(), e))?;
    let reader = BufReader::new(file);
    let lines: Vec<String> = reader
        .lines()
        .collect::<std::io::Result<_>>()
        .map_err(|e| IndexError::io(path.to_path_buf(), e))?;

    Ok(DocumentStream {
        lines,
        pos: 0,
        format,
        path,
    })
}

struct DocumentStream<'a, F: DocumentFormat> {
    lines: Vec<String>,
    pos: usize,
    format: &'a F,
    path: &'a Path,
}

impl<'a, F: DocumentFormat> Iterator for DocumentStream<'a, F> {
    type Item = Result<(usize, usize, ParsedDocument)>;

    fn next(&mut self) -> Option<Self::Item> {
        // Skip forward to the next start marker.
        while self.pos < self.lines.len()
            && !self.lines[self.pos].starts_with(self.format.start_marker())
        {
            self.pos += 1;
        }
        if self.pos >= self.lines.len() {
            return None;
        }
        let start = self.pos;
        let mut end = self.pos;
        let mut body = String::new();
        body.push_str(&self.lines[self.pos]);
        body.push('\n');
        let mut scan = self.pos + 1;
        while scan < self.lines.len()
            && !self.lines[scan].starts_with(self.format.start_marker())
        {
            body.push_str(&self.lines[scan]);
            body.push('\n');
            end = scan;
            scan += 1;
        }
        self.pos = scan;

        let id = match self.format.extract_id(&body) {
            Ok(id) => id,
            Err(e) => return Some(Err(augment_path(e, self.path))),
        };
        let doc = ParsedDocument {
            id,
            title: self.format.extract_title(&body),
            indexable: self.format.extract_indexable(&body),
        };
        Some(Ok((start, end, doc)))
    }
}

fn augment_path(err: IndexError, path: &Path) -> IndexError {
    match err {
        IndexError::InputFormat(msg) => {
            IndexError::input_format(format!("{} (in {})", msg, path.display()))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn file_without_start_marker_yields_no_documents() {
        let f = write_temp("just some text\nwith no markers\n");
        let docs: Vec<_> = documents(f.path(), &Cacm).unwrap().collect();
        assert!(docs.is_empty());
    }
}
