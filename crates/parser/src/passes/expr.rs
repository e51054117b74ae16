// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Passes over expressions: member access, identifiers and binary operators

use super::is_operand;
use sqlsense_ast::{BinaryParts, FunctionLiteral, Identifier, MemberIdentifier, Node};
use sqlsense_grammar::{Kind, KeywordKind};
use std::collections::VecDeque;

/// Group `parent.child` chains
///
/// `a.b.c` nests to the left, so the parent of the outer member is `a.b`. A
/// trailing `.` yields a member without child.
pub(crate) fn group_members(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut input: VecDeque<Node> = nodes.into();
    while let Some(node) = input.pop_front() {
        if !is_plain_word(&node) || !next_is_period(&input) {
            out.push(node);
            continue;
        }
        let mut parent = into_identifier(node);
        while next_is_period(&input) {
            let Some(dot) = input.pop_front() else {
                break;
            };
            let mut toks = vec![parent, dot];
            match input.pop_front() {
                Some(Node::FunctionLiteral(func)) if is_plain_word(func.name()) => {
                    parent = qualified_call(toks, func);
                    break;
                }
                Some(child) if is_member_child(&child) => {
                    toks.push(into_identifier(child));
                    parent = Node::MemberIdentifier(MemberIdentifier::new(toks));
                }
                other => {
                    if let Some(other) = other {
                        input.push_front(other);
                    }
                    parent = Node::MemberIdentifier(MemberIdentifier::new(toks));
                    break;
                }
            }
        }
        out.push(parent);
    }
    out
}

fn next_is_period(input: &VecDeque<Node>) -> bool {
    input.front().is_some_and(|n| n.is_token_kind(Kind::Period))
}

/// Unmatched word, quoted or not
fn is_plain_word(node: &Node) -> bool {
    matches!(node, Node::Item(tok) if tok.keyword_kind() == Some(KeywordKind::Unmatched))
}

fn is_member_child(node: &Node) -> bool {
    is_plain_word(node) || node.is_token_kind(Kind::Mult)
}

/// `schema.name(...)`: the member becomes the name of the call
fn qualified_call(mut toks: Vec<Node>, func: FunctionLiteral) -> Node {
    let mut parts = func.into_tokens().into_iter();
    if let Some(name) = parts.next() {
        toks.push(into_identifier(name));
    }
    let member = Node::MemberIdentifier(MemberIdentifier::new(toks));
    Node::FunctionLiteral(FunctionLiteral::new(
        std::iter::once(member).chain(parts).collect(),
    ))
}

fn into_identifier(node: Node) -> Node {
    match node {
        Node::Item(tok) => Node::Identifier(Identifier::new(tok)),
        other => other,
    }
}

/// Turn plain words and wildcard `*` into identifiers
///
/// `*` is a wildcard when nothing precedes it or it follows a keyword, `,`
/// or `(`; elsewhere it stays an operator.
pub(crate) fn wrap_identifiers(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        let wildcard = node.is_token_kind(Kind::Mult)
            && starts_operand(out.iter().rev().find(|n| !n.is_whitespace()));
        let node = if is_plain_word(&node) || wildcard {
            into_identifier(node)
        } else {
            node
        };
        out.push(node);
    }
    out
}

fn starts_operand(prev: Option<&Node>) -> bool {
    match prev {
        None => true,
        Some(node) => {
            node.keyword().is_some()
                || node.is_token_kind(Kind::Comma)
                || node.is_token_kind(Kind::LParen)
        }
    }
}

pub(crate) fn group_operators(nodes: Vec<Node>) -> Vec<Node> {
    group_binary(
        nodes,
        |n| {
            n.token().is_some_and(|t| {
                matches!(
                    t.kind,
                    Kind::Plus | Kind::Minus | Kind::Mult | Kind::Div | Kind::Mod | Kind::Caret
                )
            })
        },
        false,
        |toks| Node::Operator(BinaryParts::new(toks)),
    )
}

/// Comparisons keep a missing right side, taking the whitespace after the
/// operator so a cursor there lands inside the comparison
pub(crate) fn group_comparisons(nodes: Vec<Node>) -> Vec<Node> {
    group_binary(
        nodes,
        |n| {
            n.token().is_some_and(|t| {
                matches!(
                    t.kind,
                    Kind::Eq | Kind::Neq | Kind::Lt | Kind::Gt | Kind::LtEq | Kind::GtEq
                )
            })
        },
        true,
        |toks| Node::Comparison(BinaryParts::new(toks)),
    )
}

/// Left associative grouping of `left op right`
fn group_binary(
    nodes: Vec<Node>,
    is_op: fn(&Node) -> bool,
    keep_missing_right: bool,
    wrap: fn(Vec<Node>) -> Node,
) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    let mut input: VecDeque<Node> = nodes.into();
    while let Some(node) = input.pop_front() {
        if !is_op(&node) {
            out.push(node);
            continue;
        }
        let left = out
            .iter()
            .rposition(|n| !n.is_whitespace())
            .filter(|&i| is_operand(&out[i]));
        let right = input.iter().position(|n| !n.is_whitespace());
        let has_right = right.is_some_and(|i| is_operand(&input[i]));
        let Some(left) = left else {
            out.push(node);
            continue;
        };
        if !has_right && !keep_missing_right {
            out.push(node);
            continue;
        }
        let take = match right {
            Some(i) if has_right => i + 1,
            Some(i) => i,
            None => input.len(),
        };
        let mut toks: Vec<Node> = out.drain(left..).collect();
        toks.push(node);
        toks.extend(input.drain(..take));
        out.push(wrap(toks));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passes::block::group_parenthesis;
    use crate::passes::keyword::group_functions;
    use sqlsense_ast::NodeType;
    use sqlsense_grammar::tokenize;

    fn items(sql: &str) -> Vec<Node> {
        tokenize(sql).unwrap().into_iter().map(Node::Item).collect()
    }

    fn significant(nodes: &[Node]) -> Vec<&Node> {
        nodes.iter().filter(|n| !n.is_whitespace()).collect()
    }

    #[test]
    fn test_member_identifier() {
        let nodes = group_members(items("a.b"));
        assert_eq!(nodes.len(), 1);
        let Node::MemberIdentifier(member) = &nodes[0] else {
            panic!("expected member identifier");
        };
        assert_eq!(member.parent_name(), "a");
        assert_eq!(member.child_name(), "b");
    }

    #[test]
    fn test_member_identifier_trailing_period() {
        let nodes = group_members(items("a."));
        let Node::MemberIdentifier(member) = &nodes[0] else {
            panic!("expected member identifier");
        };
        assert_eq!(member.parent_name(), "a");
        assert!(member.child().is_null());
    }

    #[test]
    fn test_member_identifier_wildcard_child() {
        let nodes = group_members(items("a.*"));
        let Node::MemberIdentifier(member) = &nodes[0] else {
            panic!("expected member identifier");
        };
        assert_eq!(member.child().to_string(), "*");
        assert!(member.child_ident().is_some_and(Identifier::is_wildcard));
    }

    #[test]
    fn test_schema_qualified_call() {
        let grouped = group_functions(group_parenthesis(items("world.city(ID, Name)")));
        let nodes = group_members(grouped);
        assert_eq!(nodes.len(), 1);
        let Node::FunctionLiteral(func) = &nodes[0] else {
            panic!("expected function literal");
        };
        let Node::MemberIdentifier(member) = func.name() else {
            panic!("expected member name");
        };
        assert_eq!(member.parent_name(), "world");
        assert_eq!(member.child_name(), "city");
        assert!(func.parenthesis().is_some());
        assert_eq!(nodes[0].to_string(), "world.city(ID, Name)");
    }

    #[test]
    fn test_keyword_call_is_not_a_member_child() {
        let grouped = group_functions(group_parenthesis(items("a.left(1)")));
        let nodes = group_members(grouped);
        let Node::MemberIdentifier(member) = &nodes[0] else {
            panic!("expected member identifier");
        };
        assert!(member.child().is_null());
        assert_eq!(nodes[1].node_type(), NodeType::FunctionLiteral);
    }

    #[test]
    fn test_member_identifier_chain_nests_left() {
        let nodes = group_members(items("world.city.ID"));
        assert_eq!(nodes.len(), 1);
        let Node::MemberIdentifier(member) = &nodes[0] else {
            panic!("expected member identifier");
        };
        assert_eq!(member.parent().node_type(), NodeType::MemberIdentifier);
        assert_eq!(member.parent().to_string(), "world.city");
        assert_eq!(member.child_name(), "ID");
    }

    #[test]
    fn test_wildcard_versus_multiplication() {
        let nodes = wrap_identifiers(items("select * , a * 2"));
        let sig = significant(&nodes);
        assert_eq!(sig[1].node_type(), NodeType::Identifier);
        assert_eq!(sig[3].node_type(), NodeType::Identifier);
        assert_eq!(sig[4].node_type(), NodeType::Item);
    }

    #[test]
    fn test_operator_left_associative() {
        let nodes = group_operators(wrap_identifiers(items("a + b - 1")));
        assert_eq!(nodes.len(), 1);
        let Node::Operator(parts) = &nodes[0] else {
            panic!("expected operator");
        };
        assert_eq!(parts.left().to_string(), "a + b");
        assert_eq!(parts.operator().to_string(), "-");
        assert_eq!(parts.right().to_string(), "1");
    }

    #[test]
    fn test_operator_without_right_side_is_ungrouped() {
        let nodes = group_operators(wrap_identifiers(items("a + ")));
        assert!(nodes.iter().all(|n| n.node_type() != NodeType::Operator));
    }

    #[test]
    fn test_comparison() {
        let nodes = group_comparisons(wrap_identifiers(items("a >= 'x'")));
        assert_eq!(nodes.len(), 1);
        let Node::Comparison(parts) = &nodes[0] else {
            panic!("expected comparison");
        };
        assert_eq!(parts.left().to_string(), "a");
        assert_eq!(parts.operator().to_string(), ">=");
        assert_eq!(parts.right().to_string(), "'x'");
    }

    #[test]
    fn test_comparison_missing_right_absorbs_whitespace() {
        let nodes = group_comparisons(wrap_identifiers(items("a =  ")));
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].to_string(), "a =  ");
        let Node::Comparison(parts) = &nodes[0] else {
            panic!("expected comparison");
        };
        assert!(parts.right().is_null());
    }

    #[test]
    fn test_comparison_missing_right_stops_at_keyword() {
        let nodes = group_comparisons(wrap_identifiers(items("a = and")));
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].to_string(), "a = ");
        assert!(nodes[1].is_keyword("AND"));
    }
}
