// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for the tokenizer

use crate::pos::Pos;
use serde::Serialize;

/// Result type alias for tokenizer operations
pub type TokenizeResult<T> = Result<T, TokenizeError>;

/// Errors that abort tokenization
///
/// Unterminated strings and delimited identifiers are not errors; only
/// lexemes that leave the rest of the stream unreadable are.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum TokenizeError {
    /// A `/*` comment without its closing `*/`
    #[error("Unterminated block comment starting at {pos}")]
    UnterminatedComment { pos: Pos },

    /// A character that cannot start any token (e.g. a lone `!`)
    #[error("Illegal character '{ch}' at {pos}")]
    IllegalCharacter { ch: char, pos: Pos },
}

impl TokenizeError {
    /// Position where the offending lexeme starts
    pub fn pos(&self) -> Pos {
        match self {
            TokenizeError::UnterminatedComment { pos } => *pos,
            TokenizeError::IllegalCharacter { pos, .. } => *pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TokenizeError::IllegalCharacter {
            ch: '!',
            pos: Pos::new(0, 7),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("'!'"));
        assert!(msg.contains("0:7"));
    }

    #[test]
    fn test_error_pos() {
        let err = TokenizeError::UnterminatedComment {
            pos: Pos::new(2, 3),
        };
        assert_eq!(err.pos(), Pos::new(2, 3));
    }

    #[test]
    fn test_error_serialization() {
        let err = TokenizeError::UnterminatedComment {
            pos: Pos::new(0, 0),
        };
        let json = serde_json::to_string(&err);
        assert!(json.is_ok());
    }
}
