// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Passes driven by words: function calls and keyword phrases

use sqlsense_ast::{FunctionLiteral, MultiKeyword, Node};
use sqlsense_grammar::KeywordKind;
use std::collections::VecDeque;

/// Keywords that are directly followed by `(` without being a call
const NOT_FUNCTIONS: &[&str] = &[
    "ALL", "AND", "ANY", "AS", "BETWEEN", "BY", "CASE", "DISTINCT", "ELSE", "EXCEPT", "EXISTS",
    "FROM", "HAVING", "IN", "INTERSECT", "INTO", "IS", "JOIN", "KEY", "LIKE", "NOT", "ON", "OR",
    "OVER", "PRIMARY", "REFERENCES", "SET", "TABLE", "THEN", "UNION", "UNIQUE", "USING", "VALUES",
    "WHEN", "WHERE", "WINDOW", "WITH", "XOR",
];

/// Keyword phrases, longest first so `LEFT OUTER JOIN` wins over `OUTER JOIN`
const MULTI_KEYWORDS: &[&[&str]] = &[
    &["LEFT", "OUTER", "JOIN"],
    &["RIGHT", "OUTER", "JOIN"],
    &["FULL", "OUTER", "JOIN"],
    &["NATURAL", "LEFT", "JOIN"],
    &["NATURAL", "RIGHT", "JOIN"],
    &["NATURAL", "JOIN"],
    &["CROSS", "JOIN"],
    &["INNER", "JOIN"],
    &["OUTER", "JOIN"],
    &["FULL", "JOIN"],
    &["LEFT", "JOIN"],
    &["RIGHT", "JOIN"],
    &["ORDER", "BY"],
    &["GROUP", "BY"],
    &["INSERT", "INTO"],
    &["DELETE", "FROM"],
    &["UNION", "ALL"],
];

/// Merge `name` with an immediately following parenthesis
pub(crate) fn group_functions(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if matches!(node, Node::Parenthesis(_)) && out.last().is_some_and(is_function_name) {
            if let Some(name) = out.pop() {
                out.push(Node::FunctionLiteral(FunctionLiteral::new(vec![name, node])));
                continue;
            }
        }
        out.push(node);
    }
    out
}

fn is_function_name(node: &Node) -> bool {
    let Node::Item(tok) = node else {
        return false;
    };
    tok.word().is_some_and(|w| match w.kind {
        KeywordKind::Unmatched => true,
        KeywordKind::Matched => !NOT_FUNCTIONS.contains(&w.keyword.as_str()),
        _ => false,
    })
}

pub(crate) fn group_multi_keywords(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut input: VecDeque<Node> = nodes.into();
    while let Some(node) = input.pop_front() {
        match phrase_len(&node, &input) {
            Some(len) => {
                let mut toks = vec![node];
                toks.extend(input.drain(..len));
                out.push(Node::MultiKeyword(MultiKeyword::new(toks)));
            }
            None => out.push(node),
        }
    }
    out
}

/// Number of nodes after `first` that complete a keyword phrase
fn phrase_len(first: &Node, rest: &VecDeque<Node>) -> Option<usize> {
    if first.keyword().is_none() {
        return None;
    }
    MULTI_KEYWORDS.iter().find_map(|phrase| {
        let (head, tail) = phrase.split_first()?;
        if !first.is_keyword(head) {
            return None;
        }
        let mut consumed = 0;
        for word in tail {
            let skip = rest
                .iter()
                .skip(consumed)
                .take_while(|n| n.is_whitespace())
                .count();
            let next = rest.get(consumed + skip)?;
            if skip == 0 || !next.is_keyword(word) {
                return None;
            }
            consumed += skip + 1;
        }
        Some(consumed)
    })
}
