// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Support
//!
//! A [`Dialect`] decides which characters start and continue an identifier and
//! which characters open a delimited (quoted) identifier. Keyword
//! classification defaults to the shared table in [`crate::keywords`].
//!
//! | Dialect      | Delimited identifiers | Extra identifier characters |
//! |--------------|-----------------------|-----------------------------|
//! | Generic      | `"`                   | `$` (part)                  |
//! | MySQL        | `` ` ``, `"`          | `$`, `@` (part)             |
//! | PostgreSQL   | `"`                   | `$` (part)                  |
//! | SQL Server   | `[`, `"`              | `@`, `#` (start and part)   |
//! | SQLite       | `"`, `` ` ``, `[`     |                             |

use crate::keywords;
use crate::token::KeywordKind;
use std::fmt;

/// Pluggable identifier rules consulted by the tokenizer
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Returns the name of the dialect
    fn name(&self) -> &'static str;

    fn is_identifier_start(&self, ch: char) -> bool;

    fn is_identifier_part(&self, ch: char) -> bool;

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '"'
    }

    /// Classify an uppercased word
    fn keyword_kind(&self, upper: &str) -> KeywordKind {
        keywords::keyword_kind(upper)
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_ident_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// ANSI-flavoured default rules
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericSqlDialect;

impl Dialect for GenericSqlDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        is_ident_start(ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        is_ident_part(ch) || ch == '$'
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        is_ident_start(ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        is_ident_part(ch) || ch == '$' || ch == '@'
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '`' || ch == '"'
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PostgreSqlDialect;

impl Dialect for PostgreSqlDialect {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        is_ident_start(ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        is_ident_part(ch) || ch == '$'
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MsSqlDialect;

impl Dialect for MsSqlDialect {
    fn name(&self) -> &'static str {
        "mssql"
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        is_ident_start(ch) || ch == '@' || ch == '#'
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        is_ident_part(ch) || ch == '@' || ch == '#' || ch == '$'
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        ch == '[' || ch == '"'
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteDialect;

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn is_identifier_start(&self, ch: char) -> bool {
        is_ident_start(ch)
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        is_ident_part(ch)
    }

    fn is_delimited_identifier_start(&self, ch: char) -> bool {
        matches!(ch, '"' | '`' | '[')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_identifier_rules() {
        let d = GenericSqlDialect;
        assert!(d.is_identifier_start('a'));
        assert!(d.is_identifier_start('_'));
        assert!(!d.is_identifier_start('1'));
        assert!(d.is_identifier_part('1'));
        assert!(d.is_identifier_part('$'));
        assert!(d.is_delimited_identifier_start('"'));
        assert!(!d.is_delimited_identifier_start('`'));
    }

    #[test]
    fn test_delimited_identifier_starts() {
        assert!(MySqlDialect.is_delimited_identifier_start('`'));
        assert!(MsSqlDialect.is_delimited_identifier_start('['));
        assert!(!PostgreSqlDialect.is_delimited_identifier_start('['));
        assert!(SqliteDialect.is_delimited_identifier_start('['));
    }

    #[test]
    fn test_default_keyword_lookup() {
        assert_eq!(GenericSqlDialect.keyword_kind("SELECT"), KeywordKind::Dml);
        assert_eq!(MsSqlDialect.keyword_kind("FOO"), KeywordKind::Unmatched);
    }
}
