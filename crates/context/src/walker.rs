// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Cursor Paths
//!
//! A [`NodeWalker`] records, for every depth of the tree, the reader whose
//! current node encloses the cursor. Depth 0 walks the children of the root,
//! the last depth sits on the innermost enclosing node.
//!
//! Enclosure is inclusive at both ends, so at a boundary between two siblings
//! the earlier one wins.

use sqlsense_ast::{Node, NodeMatcher, NodeReader};
use sqlsense_grammar::Pos;
use tracing::debug;

/// Readers positioned on the nodes enclosing a cursor, outermost first
#[derive(Debug, Clone)]
pub struct NodeWalker<'a> {
    pub paths: Vec<NodeReader<'a>>,
    pub pos: Pos,
}

impl<'a> NodeWalker<'a> {
    pub fn new(root: &'a Node, pos: Pos) -> Self {
        let paths = ast_paths(root, pos);
        debug!(%pos, depth = paths.len(), "built cursor paths");
        Self { paths, pos }
    }

    /// Number of recorded depths
    pub fn depth(&self) -> usize {
        self.paths.len()
    }

    /// Whether any depth sits on a matching node
    pub fn cur_node_is(&self, matcher: &NodeMatcher) -> bool {
        self.paths.iter().any(|reader| reader.cur_node_is(matcher))
    }

    /// Outermost depth whose current node matches
    pub fn cur_node_depth(&self, matcher: &NodeMatcher) -> Option<usize> {
        self.paths
            .iter()
            .position(|reader| reader.cur_node_is(matcher))
    }

    /// Innermost node enclosing the cursor
    pub fn cur_node_bottom(&self) -> Option<&'a Node> {
        self.paths.last().and_then(|reader| reader.cur_node)
    }

    /// Whether the sibling before the enclosing node matches at any depth
    pub fn prev_nodes_is(&self, ignore_whitespace: bool, matcher: &NodeMatcher) -> bool {
        self.paths
            .iter()
            .any(|reader| reader.prev_node_is(ignore_whitespace, matcher))
    }

    pub fn prev_node_is_at(&self, ignore_whitespace: bool, matcher: &NodeMatcher, depth: usize) -> bool {
        self.paths
            .get(depth)
            .is_some_and(|reader| reader.prev_node_is(ignore_whitespace, matcher))
    }

    /// Whether the sibling after the enclosing node matches at any depth
    pub fn peek_nodes_is(&self, ignore_whitespace: bool, matcher: &NodeMatcher) -> bool {
        self.paths
            .iter()
            .any(|reader| reader.peek_node_is(ignore_whitespace, matcher))
    }
}

fn ast_paths(root: &Node, pos: Pos) -> Vec<NodeReader<'_>> {
    let mut paths = Vec::new();
    let mut reader = NodeReader::new(root);
    loop {
        let mut found = None;
        while reader.next_node(false) {
            if reader.cur_node_encloses(pos) {
                found = reader.cur_node;
                break;
            }
        }
        let Some(node) = found else {
            break;
        };
        paths.push(reader);
        if !node.is_token_list() {
            break;
        }
        reader = NodeReader::new(node);
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlsense_ast::NodeType;
    use sqlsense_grammar::Kind;
    use sqlsense_parser::parse;

    #[test]
    fn test_paths_reach_leaf() {
        let root = parse("select a.b from t").unwrap();
        let walker = NodeWalker::new(&root, Pos::new(0, 10));
        let types: Vec<_> = walker
            .paths
            .iter()
            .map(|r| r.cur_node.unwrap().node_type())
            .collect();
        assert_eq!(
            types,
            vec![NodeType::Statement, NodeType::MemberIdentifier, NodeType::Identifier]
        );
        assert_eq!(walker.cur_node_bottom().unwrap().to_string(), "b");
    }

    #[test]
    fn test_boundary_prefers_earlier_sibling() {
        let root = parse("select a.b from t").unwrap();
        // col 8 is both the end of `a` and the start of `.`
        let walker = NodeWalker::new(&root, Pos::new(0, 8));
        assert_eq!(walker.cur_node_bottom().unwrap().to_string(), "a");
    }

    #[test]
    fn test_empty_text_has_no_paths() {
        let root = parse("").unwrap();
        let walker = NodeWalker::new(&root, Pos::new(0, 0));
        assert_eq!(walker.depth(), 0);
        assert!(walker.cur_node_bottom().is_none());
    }

    #[test]
    fn test_matcher_queries() {
        let root = parse("insert into t (a) values (1, 2)").unwrap();
        let walker = NodeWalker::new(&root, Pos::new(0, 27));
        let paren = NodeMatcher::types(&[NodeType::Parenthesis]);
        assert!(walker.cur_node_is(&paren));
        assert_eq!(walker.cur_node_depth(&paren), Some(1));
        assert!(walker.prev_node_is_at(true, &NodeMatcher::keywords(&["VALUES"]), 1));
        assert!(!walker.prev_node_is_at(true, &NodeMatcher::keywords(&["VALUES"]), 9));
        assert!(walker.cur_node_bottom().unwrap().is_token_kind(Kind::Number));
    }

    #[test]
    fn test_peek_nodes() {
        let root = parse("select * from a join b on a.id = b.id").unwrap();
        let walker = NodeWalker::new(&root, Pos::new(0, 22));
        assert!(walker.peek_nodes_is(true, &NodeMatcher::keywords(&["ON"])));
        assert!(walker.prev_nodes_is(true, &NodeMatcher::keywords(&["JOIN"])));
    }
}
