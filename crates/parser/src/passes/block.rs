// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Passes grouping delimited blocks: statements, parentheses, `CASE ... END`
//! and `WHERE` clauses

use sqlsense_ast::{Node, Parenthesis, TokenList};
use sqlsense_grammar::Kind;
use std::collections::VecDeque;

/// Tokens that end a `WHERE` clause when they follow it
const WHERE_CLOSERS: &[&str] = &[
    "ORDER",
    "GROUP",
    "LIMIT",
    "UNION",
    "EXCEPT",
    "HAVING",
    "RETURNING",
    "INTO",
];

/// Split the root level at `;`, the separator staying with its statement
pub(crate) fn group_statements(nodes: Vec<Node>) -> Vec<Node> {
    let mut statements = Vec::new();
    let mut current = Vec::new();
    for node in nodes {
        let is_end = node.is_token_kind(Kind::Semicolon);
        current.push(node);
        if is_end {
            statements.push(Node::Statement(TokenList::new(std::mem::take(
                &mut current,
            ))));
        }
    }
    if !current.is_empty() {
        statements.push(Node::Statement(TokenList::new(current)));
    }
    statements
}

pub(crate) fn group_parenthesis(nodes: Vec<Node>) -> Vec<Node> {
    group_nested(
        nodes,
        |n| n.is_token_kind(Kind::LParen),
        |n| n.is_token_kind(Kind::RParen),
        |toks| Node::Parenthesis(Parenthesis::new(toks)),
    )
}

pub(crate) fn group_switch_case(nodes: Vec<Node>) -> Vec<Node> {
    group_nested(
        nodes,
        |n| n.is_keyword("CASE"),
        |n| n.is_keyword("END"),
        |toks| Node::SwitchCase(TokenList::new(toks)),
    )
}

/// Group balanced `open ... close` runs, nesting allowed
///
/// Frames still open at the end are spliced back into their parent, so an
/// opener without its closer stays a plain sibling.
fn group_nested(
    nodes: Vec<Node>,
    is_open: fn(&Node) -> bool,
    is_close: fn(&Node) -> bool,
    wrap: fn(Vec<Node>) -> Node,
) -> Vec<Node> {
    let mut frames: Vec<Vec<Node>> = vec![Vec::with_capacity(nodes.len())];
    for node in nodes {
        if is_open(&node) {
            frames.push(vec![node]);
            continue;
        }
        if is_close(&node) && frames.len() > 1 {
            if let Some(mut frame) = frames.pop() {
                frame.push(node);
                push_top(&mut frames, wrap(frame));
            }
            continue;
        }
        push_top(&mut frames, node);
    }
    frames.into_iter().flatten().collect()
}

fn push_top(frames: &mut [Vec<Node>], node: Node) {
    if let Some(top) = frames.last_mut() {
        top.push(node);
    }
}

/// Group `WHERE` with everything up to the next clause keyword
///
/// Without a closing keyword the clause runs to the end of the level.
pub(crate) fn group_where(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut input: VecDeque<Node> = nodes.into();
    while let Some(node) = input.pop_front() {
        if !node.is_keyword("WHERE") {
            out.push(node);
            continue;
        }
        let end = input.iter().position(closes_where).unwrap_or(input.len());
        let mut toks = vec![node];
        toks.extend(input.drain(..end));
        out.push(Node::Where(TokenList::new(toks)));
    }
    out
}

fn closes_where(node: &Node) -> bool {
    node.is_token_kind(Kind::RParen)
        || node.is_token_kind(Kind::Semicolon)
        || WHERE_CLOSERS.iter().any(|k| node.is_keyword(k))
}
