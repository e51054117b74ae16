// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # sqlsense - Syntax Tree
//!
//! The token-list tree produced by the grouping parser and the helpers used to
//! navigate it.
//!
//! - [`node`]: the closed [`Node`] variant set, spans and rendering
//! - [`astutil`]: [`NodeMatcher`], [`NodeReader`] and enclosure tests
//!
//! Trees are built once by the parser and only read afterwards.

pub mod astutil;
pub mod node;

// Re-export commonly used types
pub use astutil::{NodeMatcher, NodeReader, PreOrder, is_enclose};
pub use node::{
    Aliased, BinaryParts, FunctionLiteral, Identifier, IdentifierList, KeywordCase,
    MemberIdentifier, MultiKeyword, Node, NodeType, Parenthesis, RenderOptions, TokenList,
};
