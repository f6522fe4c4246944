// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! INEX XML-ish format: `<article>` starts a document, the id lives in the
//! first `<name id="...">` element and its text content is the title.

use once_cell::sync::Lazy;
use regex::Regex;

use super::DocumentFormat;
use crate::error::{IndexError, Result};

static ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<name id="(?P<id>\d+)">"#).unwrap());
static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<name.*?>(?P<title>.+?)</name>").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<.*?>").unwrap());

/// The INEX document format: `<article>` starts a record.
pub struct Inex;

impl DocumentFormat for Inex {
    fn start_marker(&self) -> &str {
        "<article>"
    }

    fn extract_id(&self, raw: &str) -> Result<u32> {
        ID_RE
            .captures(raw)
            .and_then(|c| c.name("id"))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .ok_or_else(|| IndexError::input_format("missing or unparsable INEX <name id=\"...\">"))
    }

    fn extract_title(&self, raw: &str) -> String {
        TITLE_RE
            .captures(raw)
            .and_then(|c| c.name("title"))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn extract_indexable(&self, raw: &str) -> String {
        TAG_RE.replace_all(raw, "").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
<article>
<name id=\"42\">Repeated Subtractions</name>
<body>Repeated subtractions on digital computers extract roots.</body>
</article>
";

    #[test]
    fn extracts_id_and_title() {
        let fmt = Inex;
        assert_eq!(fmt.extract_id(SAMPLE).unwrap(), 42);
        assert_eq!(fmt.extract_title(SAMPLE), "Repeated Subtractions");
    }

    #[test]
    fn strips_all_tags_from_indexable_content() {
        let fmt = Inex;
        let content = fmt.extract_indexable(SAMPLE);
        assert!(!content.contains('<'));
        assert!(content.contains("Repeated subtractions"));
    }

    #[test]
    fn missing_id_is_input_format_error() {
        let fmt = Inex;
        assert!(fmt.extract_id("<article>\n<name>no id</name>\n</article>\n").is_err());
    }
}
