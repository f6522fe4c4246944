// Copyright 2025-present the cacmex authors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recursive-descent parser over the atom stream from [`super::lexer`].
//!
//! Precedence, low to high: OR, AND, NOT, primary (word or parenthesized
//! sub-expression). Produces an immutable [`Node`] tree.

use super::lexer::{lex, Atom};
use super::tree::Node;
use crate::error::{IndexError, Result};

pub fn parse(expr: &str) -> Result<Node> {
    let atoms = lex(expr)?;
    if atoms.is_empty() {
        return Err(IndexError::parse("empty boolean expression"));
    }
    let mut parser = Parser { atoms, pos: 0 };
    let tree = parser.parse_or()?;
    if parser.pos != parser.atoms.len() {
        return Err(IndexError::parse(format!(
            "unexpected trailing input at token {}",
            parser.pos
        )));
    }
    Ok(tree)
}

struct Parser {
    atoms: Vec<Atom>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Atom> {
        self.atoms.get(self.pos)
    }

    fn advance(&mut self) -> Option<Atom> {
        let atom = self.atoms.get(self.pos).cloned();
        if atom.is_some() {
            self.pos += 1;
        }
        atom
    }

    fn parse_or(&mut self) -> Result<Node> {
        let mut operands = vec![self.parse_and()?];
        while matches!(self.peek(), Some(Atom::Or)) {
            self.advance();
            operands.push(self.parse_and()?);
        }
        Ok(if operands.len() == 1 {
            operands.pop().unwrap()
        } else {
            Node::Or(operands)
        })
    }

    fn parse_and(&mut self) -> Result<Node> {
        let mut operands = vec![self.parse_not()?];
        while matches!(self.peek(), Some(Atom::And)) {
            self.advance();
            operands.push(self.parse_not()?);
        }
        Ok(if operands.len() == 1 {
            operands.pop().unwrap()
        } else {
            Node::And(operands)
        })
    }

    fn parse_not(&mut self) -> Result<Node> {
        if matches!(self.peek(), Some(Atom::Not)) {
            self.advance();
            let operand = self.parse_not()?;
            Ok(Node::Not(Box::new(operand)))
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Node> {
        match self.advance() {
            Some(Atom::Word(w)) => Ok(Node::Leaf(w)),
            Some(Atom::LParen) => {
                let inner = self.parse_or()?;
                match self.advance() {
                    Some(Atom::RParen) => Ok(inner),
                    _ => Err(IndexError::parse("unbalanced parentheses: missing ')'")),
                }
            }
            Some(Atom::RParen) => Err(IndexError::parse("unbalanced parentheses: unexpected ')'")),
            Some(Atom::Or) | Some(Atom::And) => {
                Err(IndexError::parse("binary operator missing left operand"))
            }
            Some(Atom::Not) => unreachable!("NOT is consumed by parse_not"),
            None => Err(IndexError::parse("unexpected end of expression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_as_leaf() {
        assert_eq!(parse("algebraic").unwrap(), Node::Leaf("algebraic".into()));
    }

    #[test]
    fn parses_or_as_nary() {
        let tree = parse("a + b + c").unwrap();
        assert_eq!(
            tree,
            Node::Or(vec![
                Node::Leaf("a".into()),
                Node::Leaf("b".into()),
                Node::Leaf("c".into())
            ])
        );
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let tree = parse("a + b * c").unwrap();
        assert_eq!(
            tree,
            Node::Or(vec![
                Node::Leaf("a".into()),
                Node::And(vec![Node::Leaf("b".into()), Node::Leaf("c".into())])
            ])
        );
    }

    #[test]
    fn not_binds_tighter_than_and() {
        let tree = parse("!a * b").unwrap();
        assert_eq!(
            tree,
            Node::And(vec![
                Node::Not(Box::new(Node::Leaf("a".into()))),
                Node::Leaf("b".into())
            ])
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        let tree = parse("(algebraic + extraction) * !algebraic").unwrap();
        assert_eq!(
            tree,
            Node::And(vec![
                Node::Or(vec![
                    Node::Leaf("algebraic".into()),
                    Node::Leaf("extraction".into())
                ]),
                Node::Not(Box::new(Node::Leaf("algebraic".into())))
            ])
        );
    }

    #[test]
    fn nested_mixed_expression_parses() {
        assert!(parse("algebraic * (language + !expression)").is_ok());
    }

    #[test]
    fn empty_expression_is_parse_error() {
        assert!(matches!(parse(""), Err(IndexError::Parse(_))));
    }

    #[test]
    fn unbalanced_parentheses_is_parse_error() {
        assert!(matches!(
            parse("algebraic * (language + expression"),
            Err(IndexError::Parse(_))
        ));
    }

    #[test]
    fn dangling_not_is_parse_error() {
        assert!(matches!(parse("a * !"), Err(IndexError::Parse(_))));
    }

    #[test]
    fn dangling_binary_operator_is_parse_error() {
        assert!(matches!(parse("a +"), Err(IndexError::Parse(_))));
        assert!(matches!(parse("+ a"), Err(IndexError::Parse(_))));
    }
}
