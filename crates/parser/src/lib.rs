// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # sqlsense - Parsing Layer
//!
//! Turns SQL text into a token-list tree by tokenizing it and running a fixed
//! sequence of grouping passes over the flat token stream.
//!
//! ## Overview
//!
//! ```text
//! text → Tokenizer → [Item] → Query → statement split → grouping passes → tree
//! ```
//!
//! The parser runs on every keystroke of an unfinished statement, so it never
//! rejects incomplete SQL: a missing `)` leaves the `(` ungrouped, a trailing
//! `a.` becomes a member identifier without child. Only input the tokenizer
//! refuses (an unterminated block comment, a lone `!`) is an error.
//!
//! ## Usage
//!
//! ```rust
//! use sqlsense_parser::parse;
//! use sqlsense_ast::NodeType;
//!
//! let query = parse("SELECT ci.ID FROM city AS ci").unwrap();
//! assert_eq!(query.node_type(), NodeType::Query);
//! assert_eq!(query.to_string(), "SELECT ci.ID FROM city AS ci");
//! ```

pub mod error;
mod passes;

pub use error::{ErrorSeverity, ParseError, ParseResult};

use sqlsense_ast::{Node, TokenList};
use sqlsense_grammar::{Dialect, DialectKind, ParseOptions, Tokenizer};
use tracing::{debug, instrument, trace};

/// Grouping parser bound to one dialect
#[derive(Debug)]
pub struct Parser {
    dialect: Box<dyn Dialect>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(DialectKind::default())
    }
}

impl Parser {
    pub fn new(dialect: DialectKind) -> Self {
        Self {
            dialect: dialect.dialect(),
        }
    }

    pub fn with_options(options: &ParseOptions) -> Self {
        Self::new(options.dialect)
    }

    /// Get the dialect used for tokenizing
    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// Parse `text` into a `Query` root
    ///
    /// The root owns one `Statement` per `;`-terminated unit plus a final
    /// unterminated one. Fails only when tokenizing fails.
    #[instrument(skip_all, fields(dialect = self.dialect.name(), len = text.len()))]
    pub fn parse(&self, text: &str) -> ParseResult<Node> {
        let tokens = Tokenizer::new(self.dialect.as_ref(), text).tokenize()?;
        trace!(tokens = tokens.len(), "tokenized");

        let items = tokens.into_iter().map(Node::Item).collect();
        let mut root = Node::Query(TokenList::new(items)).map_children(passes::group_statements);
        for (name, pass) in passes::PASSES {
            root = passes::apply(root, *pass);
            trace!(pass = name, "applied grouping pass");
        }

        debug!(
            statements = root.children().map_or(0, <[Node]>::len),
            "parsed query"
        );
        Ok(root)
    }
}

/// Parse with the generic dialect
pub fn parse(text: &str) -> ParseResult<Node> {
    Parser::default().parse(text)
}

/// Parse with the dialect named by `options`
pub fn parse_with(text: &str, options: &ParseOptions) -> ParseResult<Node> {
    Parser::with_options(options).parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlsense_ast::NodeType;

    #[test]
    fn test_parse_empty() {
        let root = parse("").unwrap();
        assert_eq!(root.node_type(), NodeType::Query);
        assert_eq!(root.children().unwrap().len(), 0);
    }

    #[test]
    fn test_parse_splits_statements() {
        let root = parse("select 1; select 2").unwrap();
        let stmts = root.children().unwrap();
        assert_eq!(stmts.len(), 2);
        assert!(stmts.iter().all(|s| s.node_type() == NodeType::Statement));
    }

    #[test]
    fn test_parse_fails_on_tokenize_error() {
        let err = parse("select /* open").unwrap_err();
        assert!(matches!(err, ParseError::Tokenize(_)));
    }

    #[test]
    fn test_parse_with_dialect() {
        let options = ParseOptions {
            dialect: DialectKind::MySql,
        };
        let root = parse_with("select `a` from t", &options).unwrap();
        assert_eq!(root.to_string(), "select `a` from t");
        assert_eq!(Parser::with_options(&options).dialect().name(), "mysql");
    }
}
