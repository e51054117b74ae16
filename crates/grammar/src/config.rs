// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Parse configuration
//!
//! Options a host passes in (for example from LSP initialization options)
//! to choose the dialect used for tokenizing.
//!
//! ```
//! use sqlsense_grammar::{DialectKind, ParseOptions};
//!
//! let options = ParseOptions::from_json(r#"{ "dialect": "mysql" }"#).unwrap();
//! assert_eq!(options.dialect, DialectKind::MySql);
//! ```

use crate::dialect::{
    Dialect, GenericSqlDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect, SqliteDialect,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported SQL dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Generic,
    #[serde(alias = "mariadb")]
    MySql,
    #[serde(alias = "postgres")]
    PostgreSql,
    #[serde(alias = "sqlserver")]
    MsSql,
    Sqlite,
}

impl DialectKind {
    /// Get all supported dialects
    pub fn all() -> &'static [DialectKind] {
        &[
            DialectKind::Generic,
            DialectKind::MySql,
            DialectKind::PostgreSql,
            DialectKind::MsSql,
            DialectKind::Sqlite,
        ]
    }

    /// Get dialect name as string
    pub fn name(&self) -> &'static str {
        match self {
            DialectKind::Generic => "generic",
            DialectKind::MySql => "mysql",
            DialectKind::PostgreSql => "postgresql",
            DialectKind::MsSql => "mssql",
            DialectKind::Sqlite => "sqlite",
        }
    }

    /// Identifier rules for this dialect
    pub fn dialect(&self) -> Box<dyn Dialect> {
        match self {
            DialectKind::Generic => Box::new(GenericSqlDialect),
            DialectKind::MySql => Box::new(MySqlDialect),
            DialectKind::PostgreSql => Box::new(PostgreSqlDialect),
            DialectKind::MsSql => Box::new(MsSqlDialect),
            DialectKind::Sqlite => Box::new(SqliteDialect),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised dialect name
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("Invalid dialect value: {0}")]
pub struct InvalidDialect(pub String);

impl FromStr for DialectKind {
    type Err = InvalidDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" | "ansi" => Ok(DialectKind::Generic),
            "mysql" | "mariadb" => Ok(DialectKind::MySql),
            "postgresql" | "postgres" => Ok(DialectKind::PostgreSql),
            "mssql" | "sqlserver" => Ok(DialectKind::MsSql),
            "sqlite" | "sqlite3" => Ok(DialectKind::Sqlite),
            _ => Err(InvalidDialect(s.to_string())),
        }
    }
}

/// Options controlling how text is tokenized and parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub dialect: DialectKind,
}

impl ParseOptions {
    pub fn new(dialect: DialectKind) -> Self {
        Self { dialect }
    }

    /// Read options from a JSON document, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialect_from_str() {
        assert_eq!("mysql".parse::<DialectKind>(), Ok(DialectKind::MySql));
        assert_eq!("MySQL".parse::<DialectKind>(), Ok(DialectKind::MySql));
        assert_eq!("postgres".parse::<DialectKind>(), Ok(DialectKind::PostgreSql));
        assert_eq!("sqlserver".parse::<DialectKind>(), Ok(DialectKind::MsSql));
        assert!("oracle".parse::<DialectKind>().is_err());
    }

    #[test]
    fn test_dialect_display() {
        assert_eq!(DialectKind::MySql.to_string(), "mysql");
        assert_eq!(DialectKind::PostgreSql.to_string(), "postgresql");
        assert_eq!(DialectKind::Generic.to_string(), "generic");
    }

    #[test]
    fn test_name_matches_dialect() {
        for kind in DialectKind::all() {
            assert_eq!(kind.name(), kind.dialect().name());
        }
    }

    #[test]
    fn test_options_from_json() {
        let options = ParseOptions::from_json(r#"{ "dialect": "postgres" }"#).unwrap();
        assert_eq!(options.dialect, DialectKind::PostgreSql);
    }

    #[test]
    fn test_options_default_when_missing() {
        let options = ParseOptions::from_json("{}").unwrap();
        assert_eq!(options, ParseOptions::default());
        assert_eq!(options.dialect, DialectKind::Generic);
    }

    #[test]
    fn test_options_rejects_unknown_dialect() {
        assert!(ParseOptions::from_json(r#"{ "dialect": "db2" }"#).is_err());
    }
}
