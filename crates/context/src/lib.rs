// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # sqlsense - Cursor Context
//!
//! Answers "where is the cursor and what is around it" for a parsed query.
//!
//! ## Overview
//!
//! - [`walker`]: readers positioned on every node enclosing the cursor
//! - [`position`]: classification into a [`SyntaxPosition`]
//! - [`extract`]: tables, sub-query views, `INSERT` shape, aliases
//! - [`cursor`]: all of the above bundled as a [`CursorContext`]
//!
//! ## Usage
//!
//! ```rust
//! use sqlsense_context::{CursorContext, SyntaxPosition};
//! use sqlsense_grammar::Pos;
//! use sqlsense_parser::parse;
//!
//! let query = parse("select * from city ci where ci.").unwrap();
//! let ctx = CursorContext::analyze(&query, Pos::new(0, 31)).unwrap();
//! assert_eq!(ctx.position, SyntaxPosition::WhereCondition);
//! assert_eq!(ctx.tables[0].alias.as_deref(), Some("ci"));
//! ```

pub mod cursor;
pub mod error;
pub mod extract;
pub mod position;
pub mod walker;

// Re-export commonly used types
pub use cursor::{CursorContext, Qualified};
pub use error::{ExtractError, ExtractResult};
pub use extract::{
    InsertInfo, SelectColumn, SubQueryInfo, SubQueryView, TableInfo, extract_aliased,
    extract_focused_statement, extract_identifier_list, extract_identifiers, extract_insert,
    extract_select_columns, extract_sub_query_views, extract_table,
};
pub use position::{SyntaxPosition, check_syntax_position};
pub use walker::NodeWalker;
