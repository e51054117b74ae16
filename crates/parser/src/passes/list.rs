// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Passes over runs of items: aliases and comma separated lists

use super::is_literal;
use sqlsense_ast::{Aliased, IdentifierList, Node};
use sqlsense_grammar::Kind;
use std::collections::VecDeque;

/// Group `real_name [AS] alias`
pub(crate) fn group_aliases(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut input: VecDeque<Node> = nodes.into();
    while let Some(node) = input.pop_front() {
        let span = if is_alias_target(&node) {
            alias_span(&input)
        } else {
            None
        };
        match span {
            Some((len, is_as)) => {
                let mut toks = vec![node];
                toks.extend(input.drain(..len));
                out.push(Node::Aliased(Aliased::new(toks, is_as)));
            }
            None => out.push(node),
        }
    }
    out
}

fn is_alias_target(node: &Node) -> bool {
    match node {
        Node::Identifier(ident) => !ident.is_wildcard(),
        Node::MemberIdentifier(_)
        | Node::Parenthesis(_)
        | Node::FunctionLiteral(_)
        | Node::SwitchCase(_) => true,
        _ => false,
    }
}

fn is_alias_name(node: &Node) -> bool {
    matches!(node, Node::Identifier(ident) if !ident.is_wildcard())
}

/// Nodes to take after the real name, and whether `AS` was written
fn alias_span(input: &VecDeque<Node>) -> Option<(usize, bool)> {
    let mut significant = input
        .iter()
        .enumerate()
        .filter(|(_, n)| !n.is_whitespace());
    let (i, first) = significant.next()?;
    if i == 0 {
        return None;
    }
    if first.is_keyword("AS") {
        let (j, alias) = significant.next()?;
        return is_alias_name(alias).then_some((j + 1, true));
    }
    is_alias_name(first).then_some((i + 1, false))
}

/// Group comma separated items
///
/// `Parenthesis` is not an item, so `VALUES (...), (...)` tuples stay
/// siblings. A trailing comma ends the list together with the whitespace
/// after it.
pub(crate) fn group_identifier_lists(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut input: VecDeque<Node> = nodes.into();
    while let Some(node) = input.pop_front() {
        if !is_list_item(&node) || next_significant(&input).is_none_or(|i| !is_comma(&input[i])) {
            out.push(node);
            continue;
        }
        let mut toks = vec![node];
        while let Some(comma) = next_significant(&input).filter(|&i| is_comma(&input[i])) {
            toks.extend(input.drain(..=comma));
            match next_significant(&input) {
                Some(i) if is_list_item(&input[i]) => toks.extend(input.drain(..=i)),
                Some(i) => {
                    toks.extend(input.drain(..i));
                    break;
                }
                None => {
                    toks.extend(input.drain(..));
                    break;
                }
            }
        }
        out.push(Node::IdentifierList(IdentifierList::new(toks)));
    }
    out
}

fn next_significant(input: &VecDeque<Node>) -> Option<usize> {
    input.iter().position(|n| !n.is_whitespace())
}

fn is_comma(node: &Node) -> bool {
    node.is_token_kind(Kind::Comma)
}

fn is_list_item(node: &Node) -> bool {
    match node {
        Node::Identifier(_)
        | Node::MemberIdentifier(_)
        | Node::Aliased(_)
        | Node::Operator(_)
        | Node::Comparison(_)
        | Node::FunctionLiteral(_)
        | Node::SwitchCase(_) => true,
        Node::Item(_) => is_literal(node),
        _ => false,
    }
}
