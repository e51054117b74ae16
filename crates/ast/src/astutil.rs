// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Tree Navigation
//!
//! [`NodeMatcher`] describes which nodes a search is interested in and
//! [`NodeReader`] walks one level of a composite node with a cursor. Readers
//! only borrow the tree; cloning a reader gives an independent cursor over the
//! same children, which is how speculative lookahead is done.

use crate::node::{Node, NodeType};
use sqlsense_grammar::{Kind, KeywordKind, Pos, compare_pos};
use std::cmp::Ordering;

/// Declarative OR-matcher over nodes
///
/// A node matches when any configured dimension matches. Token kind and
/// keyword category are only consulted for leaves; `Null` never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeMatcher {
    pub node_types: &'static [NodeType],
    pub expect_tokens: &'static [Kind],
    pub expect_sql_type: &'static [KeywordKind],
    pub expect_keyword: &'static [&'static str],
}

impl NodeMatcher {
    pub const EMPTY: NodeMatcher = NodeMatcher {
        node_types: &[],
        expect_tokens: &[],
        expect_sql_type: &[],
        expect_keyword: &[],
    };

    pub const fn types(node_types: &'static [NodeType]) -> Self {
        NodeMatcher {
            node_types,
            ..Self::EMPTY
        }
    }

    pub const fn tokens(expect_tokens: &'static [Kind]) -> Self {
        NodeMatcher {
            expect_tokens,
            ..Self::EMPTY
        }
    }

    pub const fn keywords(expect_keyword: &'static [&'static str]) -> Self {
        NodeMatcher {
            expect_keyword,
            ..Self::EMPTY
        }
    }

    pub fn is_match(&self, node: &Node) -> bool {
        if node.is_null() {
            return false;
        }
        if self.node_types.contains(&node.node_type()) {
            return true;
        }
        let keyword_hit = node.keyword().is_some_and(|keyword| {
            self.expect_keyword
                .iter()
                .any(|k| k.eq_ignore_ascii_case(&keyword))
        });
        if keyword_hit {
            return true;
        }
        match node.token() {
            Some(tok) => {
                self.expect_tokens.contains(&tok.kind)
                    || (tok.kind == Kind::SqlKeyword
                        && tok
                            .keyword_kind()
                            .is_some_and(|k| self.expect_sql_type.contains(&k)))
            }
            None => false,
        }
    }
}

/// Inclusive containment of `pos` in the span of `node`
pub fn is_enclose(node: &Node, pos: Pos) -> bool {
    compare_pos(pos, node.pos()) != Ordering::Less && compare_pos(node.end(), pos) != Ordering::Less
}

/// Cursor over the children of one composite node
///
/// `index` always points one past `cur_node`.
#[derive(Debug, Clone)]
pub struct NodeReader<'a> {
    pub node: &'a Node,
    pub cur_node: Option<&'a Node>,
    pub index: usize,
}

impl<'a> NodeReader<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self {
            node,
            cur_node: None,
            index: 0,
        }
    }

    /// Children of the underlying node, empty for leaves
    pub fn nodes(&self) -> &'a [Node] {
        self.node.children().unwrap_or_default()
    }

    fn has_next(&self) -> bool {
        self.index < self.nodes().len()
    }

    /// Advance to the next child, returning `false` at the end
    pub fn next_node(&mut self, ignore_whitespace: bool) -> bool {
        while self.has_next() {
            let node = &self.nodes()[self.index];
            self.cur_node = Some(node);
            self.index += 1;
            if !(ignore_whitespace && node.is_whitespace()) {
                return true;
            }
        }
        false
    }

    /// Sibling before the current node, without moving
    pub fn prev_node(&self, ignore_whitespace: bool) -> Option<&'a Node> {
        if self.index < 2 {
            return None;
        }
        self.nodes()[..self.index - 1]
            .iter()
            .rev()
            .find(|n| !(ignore_whitespace && n.is_whitespace()))
    }

    /// Sibling after the current node with its index, without moving
    pub fn peek_node(&self, ignore_whitespace: bool) -> Option<(usize, &'a Node)> {
        self.nodes()
            .iter()
            .enumerate()
            .skip(self.index)
            .find(|(_, n)| !(ignore_whitespace && n.is_whitespace()))
    }

    pub fn peek_node_is(&self, ignore_whitespace: bool, matcher: &NodeMatcher) -> bool {
        self.peek_node(ignore_whitespace)
            .is_some_and(|(_, n)| matcher.is_match(n))
    }

    pub fn cur_node_is(&self, matcher: &NodeMatcher) -> bool {
        self.cur_node.is_some_and(|n| matcher.is_match(n))
    }

    pub fn prev_node_is(&self, ignore_whitespace: bool, matcher: &NodeMatcher) -> bool {
        self.prev_node(ignore_whitespace)
            .is_some_and(|n| matcher.is_match(n))
    }

    /// First matching sibling from the cursor onwards
    pub fn find_node(&self, ignore_whitespace: bool, matcher: &NodeMatcher) -> Option<(usize, &'a Node)> {
        self.nodes()
            .iter()
            .enumerate()
            .skip(self.index)
            .filter(|(_, n)| !(ignore_whitespace && n.is_whitespace()))
            .find(|(_, n)| matcher.is_match(n))
    }

    /// Every matching descendant from the cursor onwards, in pre-order
    pub fn find_recursive(&self, matcher: &NodeMatcher) -> Vec<&'a Node> {
        self.matches_recursive(*matcher).collect()
    }

    /// Lazy form of [`NodeReader::find_recursive`]
    pub fn matches_recursive(&self, matcher: NodeMatcher) -> impl Iterator<Item = &'a Node> + use<'a> {
        let start = self.index.min(self.nodes().len());
        PreOrder::new(&self.nodes()[start..]).filter(move |n| matcher.is_match(n))
    }

    pub fn tail_node(&self) -> Option<&'a Node> {
        self.nodes().last()
    }

    pub fn cur_node_encloses(&self, pos: Pos) -> bool {
        self.cur_node.is_some_and(|n| is_enclose(n, pos))
    }
}

/// Depth-first pre-order traversal over a forest of nodes
pub struct PreOrder<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> PreOrder<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(node) => {
                    if let Some(children) = node.children() {
                        self.stack.push(children.iter());
                    }
                    return Some(node);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
