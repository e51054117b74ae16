// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Token vocabulary
//!
//! A [`Token`] is the tokenizer's atomic output: a [`Kind`], a [`TokenValue`]
//! and the source span it covers. Words (identifiers and keywords) carry a
//! [`SqlWord`] so later stages can tell a keyword from a plain name without
//! re-reading the source.

use crate::pos::Pos;
use serde::Serialize;
use std::fmt;

/// Token kinds produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    /// Identifier or keyword, value is a [`SqlWord`]
    SqlKeyword,
    Number,
    /// Any character that has no dedicated kind
    Char,
    SingleQuotedString,
    /// `N'...'`
    NationalStringLiteral,
    Comma,
    Whitespace,
    /// `-- ...` up to (excluding) the newline
    Comment,
    /// `/* ... */`
    MultilineComment,
    /// `=`
    Eq,
    /// `<>` or `!=`
    Neq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `^`
    Caret,
    /// `%`
    Mod,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `.`
    Period,
    /// `:`
    Colon,
    /// `::`
    DoubleColon,
    /// `;`
    Semicolon,
    /// `\`
    Backslash,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `&`
    Ampersand,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
}

/// Keyword category of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum KeywordKind {
    /// Not a keyword: a plain identifier
    Unmatched,
    /// Generic keyword
    Matched,
    /// Data manipulation (SELECT, INSERT, ...)
    Dml,
    /// Data definition (CREATE, ALTER, ...)
    Ddl,
    /// Data control (GRANT, REVOKE)
    Dcl,
}

/// An identifier or keyword
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SqlWord {
    /// The text as written, without quotes
    pub value: String,
    /// Uppercased form used for keyword lookups
    pub keyword: String,
    /// Opening quote of a delimited identifier
    pub quote_style: Option<char>,
    pub kind: KeywordKind,
}

impl SqlWord {
    /// Check whether this word is an unquoted keyword equal to `keyword`
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.quote_style.is_none()
            && self.kind != KeywordKind::Unmatched
            && self.keyword.eq_ignore_ascii_case(keyword)
    }

    /// Render the word as it appears in the source
    pub fn render(&self) -> String {
        match self.quote_style {
            Some(open) => {
                let close = closing_quote(open);
                let escaped = self.value.replace(close, &format!("{close}{close}"));
                format!("{}{}{}", open, escaped, close)
            }
            None => self.value.clone(),
        }
    }
}

/// Closing character for a delimited identifier opened by `open`
pub fn closing_quote(open: char) -> char {
    match open {
        '[' => ']',
        other => other,
    }
}

/// Token payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum TokenValue {
    Word(SqlWord),
    Text(String),
}

/// A single lexeme with its source span
///
/// `from` is the position of the first character, `to` the position just past
/// the last one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: Kind,
    pub value: TokenValue,
    pub from: Pos,
    pub to: Pos,
}

impl Token {
    pub fn new(kind: Kind, value: TokenValue, from: Pos, to: Pos) -> Self {
        Self {
            kind,
            value,
            from,
            to,
        }
    }

    /// The word payload, if this token is an identifier or keyword
    pub fn word(&self) -> Option<&SqlWord> {
        match &self.value {
            TokenValue::Word(word) => Some(word),
            TokenValue::Text(_) => None,
        }
    }

    /// Raw payload text (word value without quotes, string contents, operator)
    pub fn text(&self) -> &str {
        match &self.value {
            TokenValue::Word(word) => &word.value,
            TokenValue::Text(text) => text,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == Kind::Whitespace
    }

    /// Check whether this token is the unquoted keyword `keyword`
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.word().is_some_and(|w| w.is_keyword(keyword))
    }

    /// Keyword category, `None` for non-word tokens
    pub fn keyword_kind(&self) -> Option<KeywordKind> {
        self.word().map(|w| w.kind)
    }

    /// Render the token back to its source text
    pub fn render(&self) -> String {
        match (self.kind, &self.value) {
            (_, TokenValue::Word(word)) => word.render(),
            (Kind::SingleQuotedString, TokenValue::Text(text)) => format!("'{}'", text),
            (Kind::NationalStringLiteral, TokenValue::Text(text)) => format!("N'{}'", text),
            (Kind::Comment, TokenValue::Text(text)) => format!("--{}", text),
            (Kind::MultilineComment, TokenValue::Text(text)) => format!("/*{}*/", text),
            (_, TokenValue::Text(text)) => text.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(value: &str, quote_style: Option<char>, kind: KeywordKind) -> SqlWord {
        SqlWord {
            value: value.to_string(),
            keyword: value.to_uppercase(),
            quote_style,
            kind,
        }
    }

    #[test]
    fn test_render_delimited_identifiers() {
        assert_eq!(word("col", Some('"'), KeywordKind::Unmatched).render(), "\"col\"");
        assert_eq!(word("col", Some('`'), KeywordKind::Unmatched).render(), "`col`");
        assert_eq!(word("col", Some('['), KeywordKind::Unmatched).render(), "[col]");
    }

    #[test]
    fn test_quoted_word_is_never_keyword() {
        assert!(word("select", None, KeywordKind::Dml).is_keyword("SELECT"));
        assert!(!word("select", Some('"'), KeywordKind::Unmatched).is_keyword("SELECT"));
    }

    #[test]
    fn test_render_string_kinds() {
        let pos = Pos::default();
        let s = Token::new(
            Kind::SingleQuotedString,
            TokenValue::Text("it''s".to_string()),
            pos,
            pos,
        );
        assert_eq!(s.to_string(), "'it''s'");

        let n = Token::new(
            Kind::NationalStringLiteral,
            TokenValue::Text("abc".to_string()),
            pos,
            pos,
        );
        assert_eq!(n.to_string(), "N'abc'");

        let c = Token::new(
            Kind::MultilineComment,
            TokenValue::Text(" note ".to_string()),
            pos,
            pos,
        );
        assert_eq!(c.to_string(), "/* note */");
    }
}
