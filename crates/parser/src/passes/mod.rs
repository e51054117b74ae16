// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Grouping Passes
//!
//! Each pass rewrites one level of siblings, replacing runs of nodes with a
//! new composite node. [`apply`] runs a pass bottom-up over a whole tree: the
//! children of every composite are rewritten before the composite's own level.
//!
//! Passes are total. A run that does not complete a group (a `(` without
//! `)`, a `CASE` without `END`) is left as it was.
//!
//! | Order | Pass            | Produces                              |
//! |-------|-----------------|---------------------------------------|
//! | 1     | statement       | `Statement` (root level only)         |
//! | 2     | parenthesis     | `Parenthesis`                         |
//! | 3     | case            | `SwitchCase`                          |
//! | 4     | function        | `FunctionLiteral`                     |
//! | 5     | where           | `Where`                               |
//! | 6     | multi keyword   | `MultiKeyword`                        |
//! | 7     | member          | `MemberIdentifier`                    |
//! | 8     | identifier      | `Identifier`                          |
//! | 9     | operator        | `Operator`                            |
//! | 10    | comparison      | `Comparison`                          |
//! | 11    | alias           | `Aliased`                             |
//! | 12    | identifier list | `IdentifierList`                      |

mod block;
mod expr;
mod keyword;
mod list;

pub(crate) use block::group_statements;

use sqlsense_ast::Node;
use sqlsense_grammar::Kind;

/// Rewrites the children of one composite node
pub(crate) type Pass = fn(Vec<Node>) -> Vec<Node>;

/// Passes run after the statement split, in order
pub(crate) const PASSES: &[(&str, Pass)] = &[
    ("parenthesis", block::group_parenthesis),
    ("case", block::group_switch_case),
    ("function", keyword::group_functions),
    ("where", block::group_where),
    ("multi_keyword", keyword::group_multi_keywords),
    ("member", expr::group_members),
    ("identifier", expr::wrap_identifiers),
    ("operator", expr::group_operators),
    ("comparison", expr::group_comparisons),
    ("alias", list::group_aliases),
    ("identifier_list", list::group_identifier_lists),
];

/// Run `pass` over every level of `node`, deepest levels first
pub(crate) fn apply(node: Node, pass: Pass) -> Node {
    node.map_children(|children| {
        let children = children.into_iter().map(|child| apply(child, pass)).collect();
        pass(children)
    })
}

/// Value-like node that can stand on either side of an operator
pub(crate) fn is_operand(node: &Node) -> bool {
    match node {
        Node::Identifier(ident) => !ident.is_wildcard(),
        Node::MemberIdentifier(_)
        | Node::Parenthesis(_)
        | Node::FunctionLiteral(_)
        | Node::SwitchCase(_)
        | Node::Operator(_) => true,
        Node::Item(_) => is_literal(node),
        _ => false,
    }
}

/// Number, string or one of the literal keywords
pub(crate) fn is_literal(node: &Node) -> bool {
    let Some(tok) = node.token() else {
        return false;
    };
    match tok.kind {
        Kind::Number | Kind::SingleQuotedString | Kind::NationalStringLiteral => true,
        Kind::SqlKeyword => ["NULL", "TRUE", "FALSE", "DEFAULT"]
            .iter()
            .any(|k| tok.is_keyword(k)),
        _ => false,
    }
}
