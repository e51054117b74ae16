// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types and handling strategy for the parsing layer
//!
//! Grouping never fails: unmatched parentheses, dangling member identifiers
//! and empty clauses all produce partial trees. The only hard failure is a
//! token stream the tokenizer refused to produce.

use serde::Serialize;
use sqlsense_grammar::{Pos, TokenizeError};

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors that can occur while parsing
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum ParseError {
    /// The text could not be tokenized
    #[error("Tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),
}

impl ParseError {
    /// Position of the offending lexeme
    pub fn pos(&self) -> Pos {
        match self {
            ParseError::Tokenize(err) => err.pos(),
        }
    }

    /// Check if this error is recoverable (a partial tree is still usable)
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ParseError::Tokenize(_) => ErrorSeverity::Error,
        }
    }
}

/// Severity level for parsing and extraction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ErrorSeverity {
    /// Informational note
    Info,
    /// Warning (e.g., no result for this cursor position)
    Warning,
    /// Error (e.g., unreadable input)
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_tokenize() {
        let err = ParseError::from(TokenizeError::UnterminatedComment {
            pos: Pos::new(1, 4),
        });
        let msg = format!("{}", err);
        assert!(msg.contains("Tokenize error"));
        assert!(msg.contains("1:4"));
        assert_eq!(err.pos(), Pos::new(1, 4));
    }

    #[test]
    fn test_error_severity() {
        let err = ParseError::from(TokenizeError::IllegalCharacter {
            ch: '!',
            pos: Pos::new(0, 0),
        });
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.is_recoverable());
        assert!(ErrorSeverity::Warning < ErrorSeverity::Error);
    }

    #[test]
    fn test_error_serialization() {
        let err = ParseError::from(TokenizeError::UnterminatedComment {
            pos: Pos::new(0, 0),
        });
        let json = serde_json::to_string(&err);
        assert!(json.is_ok());
    }
}
