// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for context extraction
//!
//! Missing or partial structure is never an error: extraction returns empty
//! results. An error means the anchor of the request could not be found at
//! all, and callers treat it as "nothing to offer here".

use serde::Serialize;
use sqlsense_grammar::Pos;
use sqlsense_parser::ErrorSeverity;

/// Result type alias for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum ExtractError {
    /// No statement encloses the cursor
    #[error("No statement found at {pos}")]
    StatementNotFound { pos: Pos },

    /// A node of an unexpected type was handed to an extractor
    #[error("Unexpected node type: expected '{expected}', found '{found}'")]
    UnexpectedNode { expected: String, found: String },
}

impl ExtractError {
    /// Check if the caller can carry on without the result
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExtractError::StatementNotFound { .. })
    }

    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExtractError::StatementNotFound { .. } => ErrorSeverity::Warning,
            ExtractError::UnexpectedNode { .. } => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractError::StatementNotFound {
            pos: Pos::new(3, 1),
        };
        assert!(format!("{}", err).contains("3:1"));

        let err = ExtractError::UnexpectedNode {
            expected: "Query".to_string(),
            found: "Identifier".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Query"));
        assert!(msg.contains("Identifier"));
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(ExtractError::StatementNotFound { pos: Pos::default() }.is_recoverable());
        assert!(
            !ExtractError::UnexpectedNode {
                expected: "Query".to_string(),
                found: "Item".to_string(),
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_error_severity() {
        let err = ExtractError::StatementNotFound { pos: Pos::default() };
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_error_serialization() {
        let err = ExtractError::StatementNotFound { pos: Pos::new(0, 4) };
        let json = serde_json::to_string(&err);
        assert!(json.is_ok());
    }
}
