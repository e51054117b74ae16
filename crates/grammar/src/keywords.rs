// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL keyword table
//!
//! The closed set of words the tokenizer treats as keywords, each with its
//! [`KeywordKind`]. Anything not listed here is an identifier.

use crate::token::{KeywordKind, SqlWord};
use std::collections::HashMap;
use std::sync::LazyLock;

const DML_KEYWORDS: &[&str] = &["SELECT", "INSERT", "UPDATE", "DELETE", "MERGE", "UPSERT"];

const DDL_KEYWORDS: &[&str] = &["CREATE", "ALTER", "DROP", "TRUNCATE", "RENAME"];

const DCL_KEYWORDS: &[&str] = &["GRANT", "REVOKE"];

const GENERIC_KEYWORDS: &[&str] = &[
    "ADD",
    "ALL",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "BEGIN",
    "BETWEEN",
    "BY",
    "CASCADE",
    "CASE",
    "CAST",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "COMMIT",
    "CONSTRAINT",
    "CROSS",
    "CURRENT",
    "DATABASE",
    "DEFAULT",
    "DESC",
    "DESCRIBE",
    "DISTINCT",
    "DISTINCTROW",
    "ELSE",
    "END",
    "ESCAPE",
    "EXCEPT",
    "EXISTS",
    "EXPLAIN",
    "FALSE",
    "FETCH",
    "FIRST",
    "FOR",
    "FOREIGN",
    "FROM",
    "FULL",
    "GROUP",
    "HAVING",
    "IF",
    "IGNORE",
    "ILIKE",
    "IN",
    "INDEX",
    "INNER",
    "INTERSECT",
    "INTERVAL",
    "INTO",
    "IS",
    "JOIN",
    "KEY",
    "LATERAL",
    "LEFT",
    "LIKE",
    "LIMIT",
    "NATURAL",
    "NOT",
    "NULL",
    "NULLS",
    "OFFSET",
    "ON",
    "OR",
    "ORDER",
    "OUTER",
    "OVER",
    "PARTITION",
    "PRIMARY",
    "RECURSIVE",
    "REFERENCES",
    "REGEXP",
    "RETURNING",
    "RIGHT",
    "ROLLBACK",
    "ROWS",
    "SCHEMA",
    "SET",
    "SHOW",
    "STRAIGHT_JOIN",
    "TABLE",
    "THEN",
    "TO",
    "TRANSACTION",
    "TRUE",
    "UNION",
    "UNIQUE",
    "USE",
    "USING",
    "VALUES",
    "VIEW",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
    "XOR",
];

static KEYWORDS: LazyLock<HashMap<&'static str, KeywordKind>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    let groups = [
        (GENERIC_KEYWORDS, KeywordKind::Matched),
        (DML_KEYWORDS, KeywordKind::Dml),
        (DDL_KEYWORDS, KeywordKind::Ddl),
        (DCL_KEYWORDS, KeywordKind::Dcl),
    ];
    for (words, kind) in groups {
        for word in words {
            table.insert(*word, kind);
        }
    }
    table
});

/// Look up the category of an uppercased word
pub fn keyword_kind(upper: &str) -> KeywordKind {
    KEYWORDS
        .get(upper)
        .copied()
        .unwrap_or(KeywordKind::Unmatched)
}

/// Check whether `word` (any case) is a keyword
pub fn is_keyword(word: &str) -> bool {
    keyword_kind(&word.to_uppercase()) != KeywordKind::Unmatched
}

/// Build a [`SqlWord`], classifying it against `lookup`
///
/// Delimited identifiers are never keywords.
pub fn make_keyword_with(
    word: &str,
    quote_style: Option<char>,
    lookup: impl Fn(&str) -> KeywordKind,
) -> SqlWord {
    let keyword = word.to_uppercase();
    let kind = match quote_style {
        Some(_) => KeywordKind::Unmatched,
        None => lookup(&keyword),
    };
    SqlWord {
        value: word.to_string(),
        keyword,
        quote_style,
        kind,
    }
}

/// Build a [`SqlWord`] classified against the shared keyword table
pub fn make_keyword(word: &str, quote_style: Option<char>) -> SqlWord {
    make_keyword_with(word, quote_style, keyword_kind)
}
