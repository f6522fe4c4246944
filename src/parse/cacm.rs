// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CACM bibliographic record format: `.I` starts a document, `.T .W .K .B .A
//! .N .X` are fields (`.K` may repeat; both occurrences are the same field).

use once_cell::sync::Lazy;
use regex::Regex;

use super::DocumentFormat;
use crate::error::{IndexError, Result};

const FIELDS: &[&str] = &[".I", ".T", ".W", ".K", ".B", ".A", ".N", ".X", ".K"];
const FOCUS_FIELDS: &[&str] = &[".T", ".W", ".K"];

fn field_regex(marker: &str) -> Regex {
    let alternation = FIELDS
        .iter()
        .map(|f| regex::escape(f))
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r"(?mis)^{}(?P<extracted>.*?)(?:{}|\z)",
        regex::escape(marker),
        alternation
    );
    Regex::new(&pattern).expect("static CACM field pattern is valid")
}

static TITLE_RE: Lazy<Regex> = Lazy::new(|| field_regex(".T"));
static ID_RE: Lazy<Regex> = Lazy::new(|| field_regex(".I"));
static FOCUS_RES: Lazy<Vec<Regex>> = Lazy::new(|| FOCUS_FIELDS.iter().map(|f| field_regex(f)).collect());

fn extract_field(re: &Regex, content: &str) -> String {
    re.captures(content)
        .and_then(|c| c.name("extracted"))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// The CACM document format: `.I` starts a record.
pub struct Cacm;

impl DocumentFormat for Cacm {
    fn start_marker(&self) -> &str {
        ".I"
    }

    fn extract_id(&self, raw: &str) -> Result<u32> {
        let field = extract_field(&ID_RE, raw);
        field
            .trim()
            .parse::<u32>()
            .map_err(|_| IndexError::input_format(format!("unparsable CACM id: {:?}", field)))
    }

    fn extract_title(&self, raw: &str) -> String {
        extract_field(&TITLE_RE, raw).trim().to_string()
    }

    fn extract_indexable(&self, raw: &str) -> String {
        FOCUS_RES
            .iter()
            .map(|re| extract_field(re, raw).trim().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
.I 1
.T
Preliminary Report-International Algebraic Language
.W
The preliminary report on the international algebraic
language was published in 1958.
.B
CACM December, 1959
.A
Perlis, A. J.
.N
.X
";

    #[test]
    fn extracts_id_title_and_indexable_content() {
        let fmt = Cacm;
        assert_eq!(fmt.extract_id(SAMPLE).unwrap(), 1);
        assert!(fmt.extract_title(SAMPLE).starts_with("Preliminary Report"));
        let content = fmt.extract_indexable(SAMPLE);
        assert!(content.contains("preliminary report"));
        assert!(content.contains("algebraic"));
        assert!(!content.contains("CACM December"));
    }

    #[test]
    fn unparsable_id_is_input_format_error() {
        let fmt = Cacm;
        assert!(fmt.extract_id(".I not-a-number\n.T\nx\n").is_err());
    }
}
