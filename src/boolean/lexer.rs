// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splits a boolean query string into atoms: words, parentheses, and the
//! `+` (OR) `*` (AND) `!` (NOT) operators. Whitespace is insignificant and
//! dropped here.

use crate::error::{IndexError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    Word(String),
    LParen,
    RParen,
    Or,
    And,
    Not,
}

pub fn lex(expr: &str) -> Result<Vec<Atom>> {
    let mut atoms = Vec::new();
    let mut chars = expr.chars().peekable();
    let mut word = String::new();

    macro_rules! flush_word {
        () => {
            if !word.is_empty() {
                atoms.push(Atom::Word(std::mem::take(&mut word)));
            }
        };
    }

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                flush_word!();
                chars.next();
            }
            '(' => {
                flush_word!();
                atoms.push(Atom::LParen);
                chars.next();
            }
            ')' => {
                flush_word!();
                atoms.push(Atom::RParen);
                chars.next();
            }
            '+' => {
                flush_word!();
                atoms.push(Atom::Or);
                chars.next();
            }
            '*' => {
                flush_word!();
                atoms.push(Atom::And);
                chars.next();
            }
            '!' => {
                flush_word!();
                atoms.push(Atom::Not);
                chars.next();
            }
            c if c.is_alphanumeric() || c == '_' => {
                word.push(c);
                chars.next();
            }
            other => {
                return Err(IndexError::parse(format!(
                    "unexpected character {:?} in boolean expression",
                    other
                )));
            }
        }
    }
    flush_word!();
    Ok(atoms)
}
