// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Everything completion needs to know about one cursor position

use crate::error::ExtractResult;
use crate::extract::{
    InsertInfo, SubQueryInfo, TableInfo, extract_insert, extract_sub_query_views, extract_table,
};
use crate::position::{SyntaxPosition, check_syntax_position};
use crate::walker::NodeWalker;
use serde::Serialize;
use sqlsense_ast::Node;
use sqlsense_grammar::Pos;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorContext {
    pub pos: Pos,
    pub position: SyntaxPosition,
    pub tables: Vec<TableInfo>,
    pub sub_queries: Vec<SubQueryInfo>,
    pub insert: Option<InsertInfo>,
}

impl CursorContext {
    /// Analyze a parsed query at `pos`
    ///
    /// Fails only when no statement encloses the cursor.
    #[instrument(skip_all, fields(%pos))]
    pub fn analyze(parsed: &Node, pos: Pos) -> ExtractResult<Self> {
        let walker = NodeWalker::new(parsed, pos);
        Ok(Self {
            pos,
            position: check_syntax_position(&walker),
            tables: extract_table(parsed, pos)?,
            sub_queries: extract_sub_query_views(parsed, pos)?,
            insert: extract_insert(parsed, pos)?,
        })
    }

    /// Table or sub-query view a qualifier such as `ci` in `ci.|` refers to
    pub fn resolve_qualifier(&self, qualifier: &str) -> Option<Qualified<'_>> {
        if let Some(table) = self.tables.iter().find(|t| t.is_referred_by(qualifier)) {
            return Some(Qualified::Table(table));
        }
        self.sub_queries
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(qualifier))
            .map(Qualified::SubQuery)
    }
}

/// Target of a qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualified<'a> {
    Table(&'a TableInfo),
    SubQuery(&'a SubQueryInfo),
}
