// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # sqlsense - Grammar Layer
//!
//! Source positions, the token vocabulary, SQL dialects and the tokenizer.
//!
//! ## Usage
//!
//! ```rust
//! use sqlsense_grammar::{Kind, Pos, tokenize};
//!
//! let tokens = tokenize("SELECT id FROM users").unwrap();
//! assert_eq!(tokens[0].kind, Kind::SqlKeyword);
//! assert_eq!(tokens[2].from, Pos::new(0, 7));
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod keywords;
pub mod pos;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use config::{DialectKind, InvalidDialect, ParseOptions};
pub use dialect::{
    Dialect, GenericSqlDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect, SqliteDialect,
};
pub use error::{TokenizeError, TokenizeResult};
pub use keywords::{is_keyword, make_keyword};
pub use pos::{Pos, compare_pos};
pub use token::{Kind, KeywordKind, SqlWord, Token, TokenValue};
pub use tokenizer::{Tokenizer, tokenize, tokenize_with};
