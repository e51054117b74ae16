// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Context Extraction
//!
//! Pulls the facts completion needs out of the statement under the cursor:
//! referenced tables, sub-query views, the shape of an `INSERT`, aliases and
//! identifiers.
//!
//! ## Scope
//!
//! A parenthesised sub-query that does not enclose the cursor is opaque: its
//! tables are not visible outside, only the view its alias exposes. Once the
//! cursor is inside, the sub-query's own tables are visible together with
//! the outer ones.

use crate::error::{ExtractError, ExtractResult};
use crate::walker::NodeWalker;
use serde::Serialize;
use sqlsense_ast::{Aliased, IdentifierList, Node, NodeMatcher, NodeType, PreOrder, is_enclose};
use sqlsense_grammar::{Kind, Pos, compare_pos};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Table referenced by a statement
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TableInfo {
    /// Schema qualifier (`world` in `world.city`)
    pub schema: Option<String>,
    pub name: String,
    pub alias: Option<String>,
}

impl TableInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Check if `qualifier` refers to this table, by alias or by name
    pub fn is_referred_by(&self, qualifier: &str) -> bool {
        self.alias
            .as_deref()
            .is_some_and(|a| a.eq_ignore_ascii_case(qualifier))
            || self.name.eq_ignore_ascii_case(qualifier)
    }
}

/// Columns a sub-query takes from one of its sources
///
/// For a source that is itself an aliased sub-query, `table.name` is that
/// sub-query's alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubQueryView {
    pub table: TableInfo,
    pub columns: Vec<String>,
}

/// Aliased sub-query and the views it exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubQueryInfo {
    pub name: String,
    pub views: Vec<SubQueryView>,
}

impl SubQueryInfo {
    /// Every column name the sub-query exposes, in view order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.views
            .iter()
            .flat_map(|view| view.columns.iter().map(String::as_str))
    }
}

/// Entry of a select list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectColumn {
    /// Table or alias in front of the column, if written
    pub qualifier: Option<String>,
    /// Column name, the alias when one is given, or `*`
    pub name: String,
}

impl SelectColumn {
    pub fn is_wildcard(&self) -> bool {
        self.name == "*"
    }

    fn belongs_to(&self, table: &TableInfo) -> bool {
        self.qualifier
            .as_deref()
            .is_none_or(|q| table.is_referred_by(q))
    }
}

/// Table, column list and active value tuple of an `INSERT`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertInfo {
    pub table: Option<TableInfo>,
    pub columns: Option<IdentifierList>,
    /// Tuple enclosing the cursor, or the first one
    pub values: Option<IdentifierList>,
}

impl InsertInfo {
    /// Index of the column the cursor is on
    pub fn column_index(&self, pos: Pos) -> Option<usize> {
        self.columns.as_ref().map(|list| list.get_index(pos))
    }

    /// Index of the value the cursor is on
    pub fn value_index(&self, pos: Pos) -> Option<usize> {
        self.values.as_ref().map(|list| list.get_index(pos))
    }

    /// Names of the listed columns
    pub fn column_names(&self) -> Vec<String> {
        self.columns
            .as_ref()
            .map(|list| list.identifiers().into_iter().filter_map(column_name).collect())
            .unwrap_or_default()
    }

    /// Column the value under the cursor is inserted into
    pub fn column_for_value(&self, pos: Pos) -> Option<String> {
        let index = self.value_index(pos)?;
        self.column_names().into_iter().nth(index)
    }
}

const TABLE_PREFIX: NodeMatcher = NodeMatcher::keywords(&[
    "FROM",
    "UPDATE",
    "INSERT INTO",
    "DELETE FROM",
    "JOIN",
    "INNER JOIN",
    "CROSS JOIN",
    "OUTER JOIN",
    "LEFT JOIN",
    "RIGHT JOIN",
    "LEFT OUTER JOIN",
    "RIGHT OUTER JOIN",
    "DESCRIBE",
    "DESC",
    "TRUNCATE",
]);

const SELECT_MODIFIERS: NodeMatcher = NodeMatcher::keywords(&["ALL", "DISTINCT", "DISTINCTROW"]);

const IDENTIFIERS: NodeMatcher =
    NodeMatcher::types(&[NodeType::Identifier, NodeType::MemberIdentifier]);

/// Statement enclosing the cursor
pub fn extract_focused_statement(parsed: &Node, pos: Pos) -> ExtractResult<&Node> {
    let statements = match parsed {
        Node::Query(_) => parsed.children().unwrap_or_default(),
        Node::Statement(_) => std::slice::from_ref(parsed),
        other => {
            return Err(ExtractError::UnexpectedNode {
                expected: "Query".to_string(),
                found: format!("{:?}", other.node_type()),
            });
        }
    };
    statements
        .iter()
        .find(|stmt| is_enclose(stmt, pos))
        .ok_or_else(|| {
            debug!(%pos, "no statement encloses cursor");
            ExtractError::StatementNotFound { pos }
        })
}

/// Tables visible from the cursor
#[instrument(skip_all, fields(%pos))]
pub fn extract_table(parsed: &Node, pos: Pos) -> ExtractResult<Vec<TableInfo>> {
    let stmt = extract_focused_statement(parsed, pos)?;
    let mut tables = Vec::new();
    collect_tables(stmt.children().unwrap_or_default(), pos, &mut tables);
    debug!(count = tables.len(), "extracted tables");
    Ok(tables)
}

/// Aliased sub-queries visible from the cursor
#[instrument(skip_all, fields(%pos))]
pub fn extract_sub_query_views(parsed: &Node, pos: Pos) -> ExtractResult<Vec<SubQueryInfo>> {
    let stmt = extract_focused_statement(parsed, pos)?;
    let mut infos = Vec::new();
    collect_sub_queries(stmt.children().unwrap_or_default(), pos, &mut infos);
    debug!(count = infos.len(), "extracted sub-query views");
    Ok(infos)
}

/// Shape of the `INSERT` under the cursor, `None` for other statements
#[instrument(skip_all, fields(%pos))]
pub fn extract_insert(parsed: &Node, pos: Pos) -> ExtractResult<Option<InsertInfo>> {
    let stmt = extract_focused_statement(parsed, pos)?;
    let nodes = stmt.children().unwrap_or_default();
    let Some(start) = nodes.iter().position(|n| n.is_keyword("INSERT INTO")) else {
        return Ok(None);
    };

    let mut info = InsertInfo {
        table: None,
        columns: None,
        values: None,
    };
    let mut rest = significant_from(nodes, start + 1);
    match rest.next() {
        Some((_, Node::FunctionLiteral(func))) => {
            info.table = table_info(func.name());
            info.columns = func
                .parenthesis()
                .and_then(|paren| tuple_list(paren.inner()));
        }
        Some((_, node)) => {
            info.table = table_info(node);
            let columns = rest
                .next()
                .filter(|(_, n)| info.table.is_some() && is_tuple_start(n));
            if let Some((i, _)) = columns {
                info.columns = tuple_at(nodes, i).and_then(|t| tuple_list(t.content));
            }
        }
        None => {}
    }

    if let Some(values) = nodes.iter().position(|n| n.is_keyword("VALUES")) {
        let tuples: Vec<Tuple<'_>> = significant_from(nodes, values + 1)
            .filter(|(_, n)| is_tuple_start(n))
            .filter_map(|(i, _)| tuple_at(nodes, i))
            .collect();
        let active = tuples
            .iter()
            .find(|t| t.encloses(pos))
            .or_else(|| tuples.first());
        info.values = active.and_then(|t| tuple_list(t.content));
    }

    debug!(table = ?info.table.as_ref().map(|t| &t.name), "extracted insert");
    Ok(Some(info))
}

/// Every aliased node of the statement under the cursor
pub fn extract_aliased(parsed: &Node, pos: Pos) -> ExtractResult<Vec<&Aliased>> {
    let stmt = extract_focused_statement(parsed, pos)?;
    Ok(PreOrder::new(stmt.children().unwrap_or_default())
        .filter_map(|node| match node {
            Node::Aliased(aliased) => Some(aliased),
            _ => None,
        })
        .collect())
}

/// Every identifier and member identifier of the statement under the cursor
pub fn extract_identifiers(parsed: &Node, pos: Pos) -> ExtractResult<Vec<&Node>> {
    let stmt = extract_focused_statement(parsed, pos)?;
    Ok(PreOrder::new(stmt.children().unwrap_or_default())
        .filter(|node| IDENTIFIERS.is_match(node))
        .collect())
}

/// Innermost identifier list enclosing the cursor
pub fn extract_identifier_list(parsed: &Node, pos: Pos) -> Option<&IdentifierList> {
    let walker = NodeWalker::new(parsed, pos);
    walker
        .paths
        .iter()
        .rev()
        .find_map(|reader| match reader.cur_node {
            Some(Node::IdentifierList(list)) => Some(list),
            _ => None,
        })
}

/// Select list of a statement or a parenthesised sub-query
pub fn extract_select_columns(scope: &Node) -> Vec<SelectColumn> {
    match scope {
        Node::Parenthesis(paren) => select_columns(paren.inner()),
        other => select_columns(other.children().unwrap_or_default()),
    }
}

fn significant_from(nodes: &[Node], start: usize) -> impl Iterator<Item = (usize, &Node)> {
    nodes
        .iter()
        .enumerate()
        .skip(start)
        .filter(|(_, n)| !n.is_whitespace())
}

/// Descend unless the node is a sub-query the cursor is outside of
fn scope_children(node: &Node, pos: Pos) -> Option<&[Node]> {
    match node {
        Node::Parenthesis(_) if !is_enclose(node, pos) => None,
        other => other.children(),
    }
}

/// Tables named right after a table prefix on one level
fn level_tables(nodes: &[Node]) -> Vec<TableInfo> {
    let mut tables = Vec::new();
    let mut prefixed = false;
    for (_, node) in significant_from(nodes, 0) {
        if prefixed {
            tables.extend(table_infos(node));
        }
        prefixed = TABLE_PREFIX.is_match(node);
    }
    tables
}

fn collect_tables(nodes: &[Node], pos: Pos, out: &mut Vec<TableInfo>) {
    out.extend(level_tables(nodes));
    for node in nodes {
        if let Some(children) = scope_children(node, pos) {
            collect_tables(children, pos, out);
        }
    }
}

fn table_infos(node: &Node) -> Vec<TableInfo> {
    match node {
        Node::IdentifierList(list) => list.identifiers().into_iter().filter_map(table_info).collect(),
        Node::FunctionLiteral(func) => table_info(func.name()).into_iter().collect(),
        other => table_info(other).into_iter().collect(),
    }
}

fn table_info(node: &Node) -> Option<TableInfo> {
    match node {
        Node::Identifier(ident) if !ident.is_wildcard() => Some(TableInfo::new(ident.name())),
        Node::MemberIdentifier(member) if !member.child().is_null() => {
            Some(TableInfo::new(member.child_name()).with_schema(member.parent_name()))
        }
        Node::Aliased(aliased) => {
            table_info(aliased.real_name()).map(|info| info.with_alias(aliased.alias()))
        }
        _ => None,
    }
}

fn collect_sub_queries(nodes: &[Node], pos: Pos, out: &mut Vec<SubQueryInfo>) {
    for node in nodes {
        if let Some(info) = sub_query_info(node) {
            out.push(info);
        }
        if let Some(children) = scope_children(node, pos) {
            collect_sub_queries(children, pos, out);
        }
    }
}

fn sub_query_info(node: &Node) -> Option<SubQueryInfo> {
    let Node::Aliased(aliased) = node else {
        return None;
    };
    match aliased.real_name() {
        Node::Parenthesis(paren) if paren.is_subquery() => Some(SubQueryInfo {
            name: aliased.alias(),
            views: resolve_views(paren.inner()),
        }),
        _ => None,
    }
}

/// Attribute the select list of one query level to its sources
///
/// A qualified column goes to the source it names, an unqualified one to
/// every source. `*` over a nested sub-query expands to that sub-query's
/// columns.
fn resolve_views(nodes: &[Node]) -> Vec<SubQueryView> {
    let columns = select_columns(nodes);
    let mut views: Vec<SubQueryView> = level_tables(nodes)
        .into_iter()
        .map(|table| SubQueryView {
            columns: columns
                .iter()
                .filter(|c| c.belongs_to(&table))
                .map(|c| c.name.clone())
                .collect(),
            table,
        })
        .collect();

    for (_, node) in significant_from(nodes, 0) {
        let Some(nested) = sub_query_info(node) else {
            continue;
        };
        let table = TableInfo::new(nested.name.clone());
        let mut names = Vec::new();
        for column in columns.iter().filter(|c| c.belongs_to(&table)) {
            if column.is_wildcard() {
                names.extend(nested.columns().map(str::to_string));
            } else {
                names.push(column.name.clone());
            }
        }
        views.push(SubQueryView {
            table,
            columns: names,
        });
    }
    views
}

fn select_columns(nodes: &[Node]) -> Vec<SelectColumn> {
    let Some(select) = nodes.iter().position(|n| n.is_keyword("SELECT")) else {
        return Vec::new();
    };
    let Some((_, list)) = significant_from(nodes, select + 1).find(|(_, n)| !SELECT_MODIFIERS.is_match(n))
    else {
        return Vec::new();
    };
    match list {
        Node::IdentifierList(list) => list.identifiers().into_iter().filter_map(select_column).collect(),
        other => select_column(other).into_iter().collect(),
    }
}

fn select_column(node: &Node) -> Option<SelectColumn> {
    match node {
        Node::Identifier(ident) => Some(SelectColumn {
            qualifier: None,
            name: ident.name().to_string(),
        }),
        Node::MemberIdentifier(member) if !member.child().is_null() => Some(SelectColumn {
            qualifier: Some(member.parent_name()),
            name: member.child_name(),
        }),
        Node::Aliased(aliased) => {
            let qualifier = match aliased.real_name() {
                Node::MemberIdentifier(member) => Some(member.parent_name()),
                _ => None,
            };
            Some(SelectColumn {
                qualifier,
                name: aliased.alias(),
            })
        }
        _ => None,
    }
}

fn column_name(node: &Node) -> Option<String> {
    match node {
        Node::Identifier(ident) => Some(ident.name().to_string()),
        Node::MemberIdentifier(member) => Some(member.child_name()),
        _ => None,
    }
}

/// Parenthesised tuple, possibly missing its `)`
struct Tuple<'a> {
    start: Pos,
    end: Option<Pos>,
    content: &'a [Node],
}

impl Tuple<'_> {
    fn encloses(&self, pos: Pos) -> bool {
        compare_pos(self.start, pos) != Ordering::Greater
            && self
                .end
                .is_none_or(|end| compare_pos(pos, end) != Ordering::Greater)
    }
}

fn is_tuple_start(node: &Node) -> bool {
    matches!(node, Node::Parenthesis(_)) || node.is_token_kind(Kind::LParen)
}

/// Tuple starting at `nodes[index]`; an unclosed `(` runs to the end
fn tuple_at(nodes: &[Node], index: usize) -> Option<Tuple<'_>> {
    match nodes.get(index)? {
        Node::Parenthesis(paren) => Some(Tuple {
            start: nodes[index].pos(),
            end: Some(nodes[index].end()),
            content: paren.inner(),
        }),
        node if node.is_token_kind(Kind::LParen) => Some(Tuple {
            start: node.pos(),
            end: None,
            content: &nodes[index + 1..],
        }),
        _ => None,
    }
}

/// Tuple content as a list, wrapping a lone value
fn tuple_list(content: &[Node]) -> Option<IdentifierList> {
    let items: Vec<&Node> = content
        .iter()
        .filter(|n| !n.is_whitespace() && !n.is_token_kind(Kind::RParen))
        .collect();
    match items.as_slice() {
        [] => None,
        [Node::IdentifierList(list)] => Some((*list).clone()),
        _ => Some(IdentifierList::new(items.into_iter().cloned().collect())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlsense_parser::parse;

    #[test]
    fn test_table_info_builders() {
        let info = TableInfo::new("city").with_schema("world").with_alias("ci");
        assert_eq!(info.schema.as_deref(), Some("world"));
        assert!(info.is_referred_by("CI"));
        assert!(info.is_referred_by("city"));
        assert!(!info.is_referred_by("world"));
    }

    #[test]
    fn test_focused_statement() {
        let root = parse("select 1; select 2").unwrap();
        let stmt = extract_focused_statement(&root, Pos::new(0, 12)).unwrap();
        assert_eq!(stmt.to_string(), " select 2");
    }

    #[test]
    fn test_focused_statement_not_found() {
        let root = parse("").unwrap();
        let err = extract_focused_statement(&root, Pos::new(0, 0)).unwrap_err();
        assert!(matches!(err, ExtractError::StatementNotFound { .. }));
    }

    #[test]
    fn test_focused_statement_rejects_leaf() {
        let root = parse("select").unwrap();
        let leaf = root.children().unwrap()[0].children().unwrap()[0].clone();
        let err = extract_focused_statement(&leaf, Pos::new(0, 0)).unwrap_err();
        assert!(matches!(err, ExtractError::UnexpectedNode { .. }));
    }

    #[test]
    fn test_select_columns() {
        let root = parse("select a, t.b, c.d as e, count(*) from t").unwrap();
        let stmt = &root.children().unwrap()[0];
        let columns = extract_select_columns(stmt);
        let names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "e"]);
        assert_eq!(columns[1].qualifier.as_deref(), Some("t"));
        assert_eq!(columns[2].qualifier.as_deref(), Some("c"));
    }

    #[test]
    fn test_select_columns_skip_distinct() {
        let root = parse("select distinct a from t").unwrap();
        let stmt = &root.children().unwrap()[0];
        let columns = extract_select_columns(stmt);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].name, "a");
    }

    #[test]
    fn test_tuple_list_wraps_single_value() {
        let root = parse("insert into t (a) values (1)").unwrap();
        let info = extract_insert(&root, Pos::new(0, 27)).unwrap().unwrap();
        assert_eq!(info.column_names(), vec!["a".to_string()]);
        assert_eq!(info.values.unwrap().identifiers().len(), 1);
    }
}
