// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Node Representation
//!
//! The AST is a token-list tree: leaves wrap exactly one [`Token`], composite
//! nodes own an ordered list of child nodes. No source text is lost; the
//! [`Display`](std::fmt::Display) of any node is the exact source it covers.
//!
//! ## Spans
//!
//! A composite node never stores its own span. [`Node::pos`] is the position
//! of its first leaf and [`Node::end`] the end of its last leaf, found by
//! descending through nested lists.
//!
//! ## Typed accessors
//!
//! Variants with a fixed shape (member identifiers, aliases, binary
//! operators) derive their parts from the children on every call. Accessors
//! that can miss return the [`Node::Null`] sentinel instead of an `Option`,
//! so callers can always ask for `.to_string()` or `.pos()`.

use serde::Serialize;
use sqlsense_grammar::{Kind, KeywordKind, Pos, Token, compare_pos};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

static NULL_NODE: Node = Node::Null;

/// Discriminant of a [`Node`], used by matchers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeType {
    Item,
    Identifier,
    Query,
    Statement,
    Parenthesis,
    Where,
    MemberIdentifier,
    Aliased,
    Operator,
    Comparison,
    IdentifierList,
    MultiKeyword,
    SwitchCase,
    FunctionLiteral,
    Null,
}

/// Keyword casing applied by [`Node::render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordCase {
    #[default]
    Preserve,
    Upper,
    Lower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub keyword_case: KeywordCase,
}

/// Ordered children of a composite node
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TokenList {
    toks: Vec<Node>,
}

impl TokenList {
    pub fn new(toks: Vec<Node>) -> Self {
        Self { toks }
    }

    pub fn tokens(&self) -> &[Node] {
        &self.toks
    }

    pub fn into_tokens(self) -> Vec<Node> {
        self.toks
    }

    /// Replace every child
    pub fn set_tokens(&mut self, toks: Vec<Node>) {
        self.toks = toks;
    }

    fn pos(&self) -> Pos {
        self.toks.first().map(Node::pos).unwrap_or_default()
    }

    fn end(&self) -> Pos {
        self.toks.last().map(Node::end).unwrap_or_default()
    }

    /// The `n`-th child that is not whitespace
    fn nth_significant(&self, n: usize) -> Option<&Node> {
        self.toks.iter().filter(|t| !t.is_whitespace()).nth(n)
    }
}

/// Leaf identifier (or `*` wildcard)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    tok: Token,
}

impl Identifier {
    pub fn new(tok: Token) -> Self {
        Self { tok }
    }

    pub fn token(&self) -> &Token {
        &self.tok
    }

    /// Name without delimiting quotes
    pub fn name(&self) -> &str {
        self.tok.text()
    }

    pub fn is_wildcard(&self) -> bool {
        self.tok.kind == Kind::Mult
    }
}

/// `( ... )` including both delimiters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parenthesis {
    list: TokenList,
}

impl Parenthesis {
    pub fn new(toks: Vec<Node>) -> Self {
        Self {
            list: TokenList::new(toks),
        }
    }

    /// Children between the parentheses
    pub fn inner(&self) -> &[Node] {
        let toks = self.list.tokens();
        match toks.len() {
            0 | 1 => &[],
            n => &toks[1..n - 1],
        }
    }

    /// Whether the content starts with `SELECT`
    pub fn is_subquery(&self) -> bool {
        self.inner()
            .iter()
            .find(|n| !n.is_whitespace())
            .is_some_and(|n| n.is_keyword("SELECT"))
    }
}

/// `parent.child`, where the child may still be missing (`a.`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberIdentifier {
    list: TokenList,
}

impl MemberIdentifier {
    pub fn new(toks: Vec<Node>) -> Self {
        Self {
            list: TokenList::new(toks),
        }
    }

    pub fn parent(&self) -> &Node {
        self.list.tokens().first().unwrap_or(&NULL_NODE)
    }

    pub fn child(&self) -> &Node {
        self.list.tokens().get(2).unwrap_or(&NULL_NODE)
    }

    pub fn parent_ident(&self) -> Option<&Identifier> {
        match self.parent() {
            Node::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    pub fn child_ident(&self) -> Option<&Identifier> {
        match self.child() {
            Node::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    pub fn parent_tok(&self) -> Option<&Token> {
        self.parent().token()
    }

    pub fn child_tok(&self) -> Option<&Token> {
        self.child().token()
    }

    /// Parent name without quotes, nested parents render as written
    pub fn parent_name(&self) -> String {
        node_name(self.parent())
    }

    /// Child name without quotes, empty when the child is missing
    pub fn child_name(&self) -> String {
        node_name(self.child())
    }
}

/// `real_name [AS] aliased_name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aliased {
    list: TokenList,
    is_as: bool,
}

impl Aliased {
    pub fn new(toks: Vec<Node>, is_as: bool) -> Self {
        Self {
            list: TokenList::new(toks),
            is_as,
        }
    }

    pub fn real_name(&self) -> &Node {
        self.list.nth_significant(0).unwrap_or(&NULL_NODE)
    }

    pub fn aliased_name(&self) -> &Node {
        self.list
            .tokens()
            .iter()
            .rev()
            .find(|n| !n.is_whitespace())
            .unwrap_or(&NULL_NODE)
    }

    /// Whether the alias was introduced with an explicit `AS`
    pub fn is_as(&self) -> bool {
        self.is_as
    }

    /// Alias without quotes
    pub fn alias(&self) -> String {
        node_name(self.aliased_name())
    }
}

/// Left operand, operator, right operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryParts {
    list: TokenList,
}

impl BinaryParts {
    pub fn new(toks: Vec<Node>) -> Self {
        Self {
            list: TokenList::new(toks),
        }
    }

    pub fn left(&self) -> &Node {
        self.list.nth_significant(0).unwrap_or(&NULL_NODE)
    }

    pub fn operator(&self) -> &Node {
        self.list.nth_significant(1).unwrap_or(&NULL_NODE)
    }

    pub fn right(&self) -> &Node {
        self.list.nth_significant(2).unwrap_or(&NULL_NODE)
    }
}

/// Comma separated sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifierList {
    list: TokenList,
}

impl IdentifierList {
    pub fn new(toks: Vec<Node>) -> Self {
        Self {
            list: TokenList::new(toks),
        }
    }

    /// Items, without commas and whitespace
    pub fn identifiers(&self) -> Vec<&Node> {
        self.list
            .tokens()
            .iter()
            .filter(|n| !n.is_whitespace() && !n.is_token_kind(Kind::Comma))
            .collect()
    }

    pub fn commas(&self) -> Vec<&Node> {
        self.list
            .tokens()
            .iter()
            .filter(|n| n.is_token_kind(Kind::Comma))
            .collect()
    }

    /// Zero-based slot `pos` falls into: the number of commas before it
    pub fn get_index(&self, pos: Pos) -> usize {
        self.commas()
            .iter()
            .filter(|c| compare_pos(c.pos(), pos) == Ordering::Less)
            .count()
    }
}

/// A keyword phrase such as `GROUP BY` or `LEFT OUTER JOIN`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiKeyword {
    list: TokenList,
}

impl MultiKeyword {
    pub fn new(toks: Vec<Node>) -> Self {
        Self {
            list: TokenList::new(toks),
        }
    }

    pub fn keywords(&self) -> Vec<&Token> {
        self.list
            .tokens()
            .iter()
            .filter_map(Node::token)
            .filter(|t| !t.is_whitespace())
            .collect()
    }

    /// Uppercased words joined by single spaces
    pub fn keyword_string(&self) -> String {
        self.keywords()
            .iter()
            .filter_map(|t| t.word())
            .map(|w| w.keyword.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `name(...)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionLiteral {
    list: TokenList,
}

impl FunctionLiteral {
    pub fn new(toks: Vec<Node>) -> Self {
        Self {
            list: TokenList::new(toks),
        }
    }

    pub fn name(&self) -> &Node {
        self.list.tokens().first().unwrap_or(&NULL_NODE)
    }

    pub fn parenthesis(&self) -> Option<&Parenthesis> {
        match self.list.tokens().last() {
            Some(Node::Parenthesis(paren)) => Some(paren),
            _ => None,
        }
    }

    /// Name and parenthesis, in order
    pub fn into_tokens(self) -> Vec<Node> {
        self.list.into_tokens()
    }
}

/// A node of the token-list tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    /// Any token not grouped into something more specific
    Item(Token),
    Identifier(Identifier),
    /// Whole document
    Query(TokenList),
    /// One `;`-terminated unit, the `;` included
    Statement(TokenList),
    Parenthesis(Parenthesis),
    /// `WHERE` and its condition
    Where(TokenList),
    MemberIdentifier(MemberIdentifier),
    Aliased(Aliased),
    Operator(BinaryParts),
    Comparison(BinaryParts),
    IdentifierList(IdentifierList),
    MultiKeyword(MultiKeyword),
    /// `CASE ... END`
    SwitchCase(TokenList),
    FunctionLiteral(FunctionLiteral),
    Null,
}

impl Node {
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Item(_) => NodeType::Item,
            Node::Identifier(_) => NodeType::Identifier,
            Node::Query(_) => NodeType::Query,
            Node::Statement(_) => NodeType::Statement,
            Node::Parenthesis(_) => NodeType::Parenthesis,
            Node::Where(_) => NodeType::Where,
            Node::MemberIdentifier(_) => NodeType::MemberIdentifier,
            Node::Aliased(_) => NodeType::Aliased,
            Node::Operator(_) => NodeType::Operator,
            Node::Comparison(_) => NodeType::Comparison,
            Node::IdentifierList(_) => NodeType::IdentifierList,
            Node::MultiKeyword(_) => NodeType::MultiKeyword,
            Node::SwitchCase(_) => NodeType::SwitchCase,
            Node::FunctionLiteral(_) => NodeType::FunctionLiteral,
            Node::Null => NodeType::Null,
        }
    }

    /// The wrapped token of a leaf node
    pub fn token(&self) -> Option<&Token> {
        match self {
            Node::Item(tok) => Some(tok),
            Node::Identifier(ident) => Some(ident.token()),
            _ => None,
        }
    }

    fn list(&self) -> Option<&TokenList> {
        match self {
            Node::Query(list)
            | Node::Statement(list)
            | Node::Where(list)
            | Node::SwitchCase(list) => Some(list),
            Node::Parenthesis(paren) => Some(&paren.list),
            Node::MemberIdentifier(member) => Some(&member.list),
            Node::Aliased(aliased) => Some(&aliased.list),
            Node::Operator(parts) | Node::Comparison(parts) => Some(&parts.list),
            Node::IdentifierList(ids) => Some(&ids.list),
            Node::MultiKeyword(mk) => Some(&mk.list),
            Node::FunctionLiteral(func) => Some(&func.list),
            Node::Item(_) | Node::Identifier(_) | Node::Null => None,
        }
    }

    fn list_mut(&mut self) -> Option<&mut TokenList> {
        match self {
            Node::Query(list)
            | Node::Statement(list)
            | Node::Where(list)
            | Node::SwitchCase(list) => Some(list),
            Node::Parenthesis(paren) => Some(&mut paren.list),
            Node::MemberIdentifier(member) => Some(&mut member.list),
            Node::Aliased(aliased) => Some(&mut aliased.list),
            Node::Operator(parts) | Node::Comparison(parts) => Some(&mut parts.list),
            Node::IdentifierList(ids) => Some(&mut ids.list),
            Node::MultiKeyword(mk) => Some(&mut mk.list),
            Node::FunctionLiteral(func) => Some(&mut func.list),
            Node::Item(_) | Node::Identifier(_) | Node::Null => None,
        }
    }

    /// Children of a composite node, `None` for leaves and `Null`
    pub fn children(&self) -> Option<&[Node]> {
        self.list().map(TokenList::tokens)
    }

    pub fn is_token_list(&self) -> bool {
        self.list().is_some()
    }

    /// Replace every child of a composite node
    ///
    /// Returns `false` (and drops `toks`) when called on a leaf.
    pub fn set_tokens(&mut self, toks: Vec<Node>) -> bool {
        match self.list_mut() {
            Some(list) => {
                list.set_tokens(toks);
                true
            }
            None => false,
        }
    }

    /// Overwrite the child at `index`, returning the previous child
    pub fn replace_child(&mut self, index: usize, node: Node) -> Option<Node> {
        let list = self.list_mut()?;
        let slot = list.toks.get_mut(index)?;
        Some(std::mem::replace(slot, node))
    }

    /// Rebuild the children of a composite node through `f`
    pub fn map_children(mut self, f: impl FnOnce(Vec<Node>) -> Vec<Node>) -> Node {
        if let Some(list) = self.list_mut() {
            let toks = std::mem::take(&mut list.toks);
            list.toks = f(toks);
        }
        self
    }

    pub fn pos(&self) -> Pos {
        match self {
            Node::Item(tok) => tok.from,
            Node::Identifier(ident) => ident.tok.from,
            Node::Null => Pos::default(),
            _ => self.list().map(TokenList::pos).unwrap_or_default(),
        }
    }

    pub fn end(&self) -> Pos {
        match self {
            Node::Item(tok) => tok.to,
            Node::Identifier(ident) => ident.tok.to,
            Node::Null => Pos::default(),
            _ => self.list().map(TokenList::end).unwrap_or_default(),
        }
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Node::Item(tok) if tok.is_whitespace())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_token_kind(&self, kind: Kind) -> bool {
        self.token().is_some_and(|t| t.kind == kind)
    }

    /// Keyword text for matching
    ///
    /// Unquoted keyword leaves give their uppercased word, multi-keyword
    /// phrases their joined words; every other node has none.
    pub fn keyword(&self) -> Option<Cow<'_, str>> {
        match self {
            Node::Item(tok) => tok
                .word()
                .filter(|w| w.quote_style.is_none() && w.kind != KeywordKind::Unmatched)
                .map(|w| Cow::Borrowed(w.keyword.as_str())),
            Node::MultiKeyword(mk) => Some(Cow::Owned(mk.keyword_string())),
            _ => None,
        }
    }

    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.keyword()
            .is_some_and(|k| k.eq_ignore_ascii_case(keyword))
    }

    /// Render with keyword casing applied
    pub fn render(&self, opts: &RenderOptions) -> String {
        let mut out = String::new();
        self.render_into(&mut out, opts);
        out
    }

    fn render_into(&self, out: &mut String, opts: &RenderOptions) {
        match self {
            Node::Item(tok) => {
                let is_keyword = tok
                    .word()
                    .is_some_and(|w| w.quote_style.is_none() && w.kind != KeywordKind::Unmatched);
                let text = tok.render();
                match (is_keyword, opts.keyword_case) {
                    (true, KeywordCase::Upper) => out.push_str(&text.to_uppercase()),
                    (true, KeywordCase::Lower) => out.push_str(&text.to_lowercase()),
                    _ => out.push_str(&text),
                }
            }
            Node::Identifier(ident) => out.push_str(&ident.tok.render()),
            Node::Null => {}
            _ => {
                for child in self.children().unwrap_or_default() {
                    child.render_into(out, opts);
                }
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Item(tok) => write!(f, "{}", tok),
            Node::Identifier(ident) => write!(f, "{}", ident.tok),
            Node::Null => Ok(()),
            _ => {
                for child in self.children().unwrap_or_default() {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for IdentifierList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in self.list.tokens() {
            write!(f, "{}", child)?;
        }
        Ok(())
    }
}

impl fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in self.list.tokens() {
            write!(f, "{}", child)?;
        }
        Ok(())
    }
}

/// Name of an identifier-like node without quotes
fn node_name(node: &Node) -> String {
    match node {
        Node::Identifier(ident) => ident.name().to_string(),
        Node::Item(tok) => tok.text().to_string(),
        Node::Null => String::new(),
        other => other.to_string(),
    }
}
