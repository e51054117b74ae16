// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Syntax Position
//!
//! Classifies what kind of SQL fragment the cursor is in, so completion knows
//! whether to offer columns, tables, aliases or values.
//!
//! Rules are tried in a fixed order and the first hit wins. Most rules look at
//! the significant sibling before the enclosing node at any depth: in
//! `SELECT a.| FROM t` the `SELECT` keyword precedes the member identifier the
//! cursor sits in.

use crate::walker::NodeWalker;
use serde::Serialize;
use sqlsense_ast::{NodeMatcher, NodeType};
use sqlsense_grammar::Kind;
use std::fmt;
use tracing::{debug, instrument};

/// Kind of fragment enclosing the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxPosition {
    /// Column name after `SET`, `ORDER BY`, `GROUP BY` or a qualifier
    ColName,
    /// Select list expression
    SelectExpr,
    /// After `AS`
    AliasName,
    /// Condition after `WHERE`, `HAVING` or a logical operator
    WhereCondition,
    /// Branch of a `CASE` expression
    CaseValue,
    /// Table name after `FROM`, `UPDATE`, `INSERT INTO` and friends
    TableReference,
    /// Column list of an `INSERT`
    InsertColumn,
    /// Value tuple of an `INSERT`
    InsertValue,
    /// Table after a join keyword, with no `ON` written yet
    JoinClause,
    /// Start of a join condition
    JoinOn,
    Unknown,
}

impl SyntaxPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyntaxPosition::ColName => "col_name",
            SyntaxPosition::SelectExpr => "select_expr",
            SyntaxPosition::AliasName => "alias_name",
            SyntaxPosition::WhereCondition => "where_condition",
            SyntaxPosition::CaseValue => "case_value",
            SyntaxPosition::TableReference => "table_reference",
            SyntaxPosition::InsertColumn => "insert_column",
            SyntaxPosition::InsertValue => "insert_value",
            SyntaxPosition::JoinClause => "join_clause",
            SyntaxPosition::JoinOn => "join_on",
            SyntaxPosition::Unknown => "unknown",
        }
    }

    /// Check if columns are the natural candidates here
    pub fn expects_column(&self) -> bool {
        matches!(
            self,
            SyntaxPosition::ColName
                | SyntaxPosition::SelectExpr
                | SyntaxPosition::WhereCondition
                | SyntaxPosition::CaseValue
                | SyntaxPosition::InsertColumn
                | SyntaxPosition::JoinOn
        )
    }

    /// Check if tables are the natural candidates here
    pub fn expects_table(&self) -> bool {
        matches!(
            self,
            SyntaxPosition::TableReference | SyntaxPosition::JoinClause
        )
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SyntaxPosition::Unknown)
    }
}

impl fmt::Display for SyntaxPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const COL_NAME: NodeMatcher = NodeMatcher::keywords(&["SET", "ORDER BY", "GROUP BY"]);

const SELECT_EXPR: NodeMatcher =
    NodeMatcher::keywords(&["ALL", "DISTINCT", "DISTINCTROW", "SELECT"]);

const ALIAS_NAME: NodeMatcher = NodeMatcher::keywords(&["AS"]);

const WHERE_CONDITION: NodeMatcher =
    NodeMatcher::keywords(&["WHERE", "HAVING", "AND", "OR", "XOR"]);

const CASE_VALUE: NodeMatcher = NodeMatcher::keywords(&["CASE", "WHEN", "THEN", "ELSE"]);

const TABLE_REFERENCE: NodeMatcher = NodeMatcher::keywords(&[
    "FROM",
    "UPDATE",
    "DELETE FROM",
    "INSERT INTO",
    "CROSS JOIN",
    "DESCRIBE",
    "DESC",
    "TRUNCATE",
]);

const JOIN_ON: NodeMatcher = NodeMatcher::keywords(&["ON"]);

const JOIN: NodeMatcher = NodeMatcher::keywords(&[
    "JOIN",
    "INNER JOIN",
    "OUTER JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "LEFT OUTER JOIN",
    "RIGHT OUTER JOIN",
]);

const PARENTHESIS: NodeMatcher = NodeMatcher::types(&[NodeType::Parenthesis]);

const VALUES_OR_COMMA: NodeMatcher = NodeMatcher {
    expect_tokens: &[Kind::Comma],
    expect_keyword: &["VALUES"],
    ..NodeMatcher::EMPTY
};

const EQ: NodeMatcher = NodeMatcher::tokens(&[Kind::Eq]);

/// Classify the fragment enclosing the walker's cursor
#[instrument(skip_all, fields(pos = %walker.pos))]
pub fn check_syntax_position(walker: &NodeWalker<'_>) -> SyntaxPosition {
    let position = classify(walker);
    debug!(%position, "classified cursor");
    position
}

fn classify(walker: &NodeWalker<'_>) -> SyntaxPosition {
    if walker.prev_nodes_is(true, &COL_NAME) {
        return SyntaxPosition::ColName;
    }
    if walker.prev_nodes_is(true, &SELECT_EXPR) {
        return SyntaxPosition::SelectExpr;
    }
    if walker.prev_nodes_is(true, &ALIAS_NAME) {
        return SyntaxPosition::AliasName;
    }
    if walker.prev_nodes_is(true, &WHERE_CONDITION) {
        return SyntaxPosition::WhereCondition;
    }
    if walker.prev_nodes_is(true, &CASE_VALUE) {
        return SyntaxPosition::CaseValue;
    }
    if walker.prev_nodes_is(true, &TABLE_REFERENCE) {
        return SyntaxPosition::TableReference;
    }
    if walker.prev_nodes_is(true, &JOIN_ON) {
        return join_condition(walker);
    }
    if walker.prev_nodes_is(true, &JOIN) {
        return if walker.peek_nodes_is(true, &JOIN_ON) {
            SyntaxPosition::TableReference
        } else {
            SyntaxPosition::JoinClause
        };
    }
    if let Some(depth) = walker.cur_node_depth(&PARENTHESIS) {
        return if walker.prev_node_is_at(true, &VALUES_OR_COMMA, depth) {
            SyntaxPosition::InsertValue
        } else {
            SyntaxPosition::InsertColumn
        };
    }
    SyntaxPosition::Unknown
}

/// `ON |` starts a condition, `ON a.|` wants a column, anything later is a
/// plain condition
fn join_condition(walker: &NodeWalker<'_>) -> SyntaxPosition {
    let Some(bottom) = walker.paths.last() else {
        return SyntaxPosition::WhereCondition;
    };
    match bottom.cur_node {
        Some(node) if node.is_token_kind(Kind::Period) => SyntaxPosition::ColName,
        Some(node) if node.is_whitespace() && !bottom.prev_node_is(true, &EQ) => {
            SyntaxPosition::JoinOn
        }
        _ => SyntaxPosition::WhereCondition,
    }
}
