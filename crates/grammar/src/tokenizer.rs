// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Tokenizer
//!
//! Turns SQL text into a flat sequence of [`Token`]s. Every character of the
//! input ends up in exactly one token (whitespace and comments included), so
//! rendering the tokens back reproduces the source.
//!
//! The tokenizer is tolerant of text that is still being typed: a string or a
//! delimited identifier that runs into the end of input yields its partial
//! contents. Only an unterminated block comment and a lone `!` are errors.

use crate::dialect::{Dialect, GenericSqlDialect};
use crate::error::{TokenizeError, TokenizeResult};
use crate::keywords::{make_keyword, make_keyword_with};
use crate::pos::{Pos, TAB_WIDTH};
use crate::token::{Kind, Token, TokenValue, closing_quote};
use tracing::debug;

/// Pull-based tokenizer over a borrowed source string
///
/// Iterating yields `Ok(token)` until the end of input; after an error the
/// iterator is exhausted.
pub struct Tokenizer<'a> {
    dialect: &'a dyn Dialect,
    input: &'a str,
    /// Current byte offset into `input`
    offset: usize,
    line: u32,
    col: u32,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(dialect: &'a dyn Dialect, input: &'a str) -> Self {
        Self {
            dialect,
            input,
            offset: 0,
            line: 0,
            col: 0,
            failed: false,
        }
    }

    /// Current source position
    pub fn pos(&self) -> Pos {
        Pos::new(self.line, self.col)
    }

    /// Tokenize the remaining input
    pub fn tokenize(self) -> TokenizeResult<Vec<Token>> {
        self.collect()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.offset..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        match c {
            '\n' => {
                self.line += 1;
                self.col = 0;
            }
            // `\r\n` moves to the next line once, on the `\n`
            '\r' if self.peek() == Some('\n') => {}
            '\r' => {
                self.line += 1;
                self.col = 0;
            }
            '\t' => self.col += TAB_WIDTH,
            _ => self.col += 1,
        }
        Some(c)
    }

    /// Advance while `pred` holds, returning the consumed text
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.offset;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        self.input[start..self.offset].to_string()
    }

    /// Produce the next token, `Ok(None)` at end of input
    pub fn next_token(&mut self) -> TokenizeResult<Option<Token>> {
        let from = self.pos();
        let Some(ch) = self.peek() else {
            return Ok(None);
        };

        let (kind, value) = match ch {
            ' ' | '\t' | '\n' => {
                self.advance();
                (Kind::Whitespace, text(ch.to_string()))
            }
            '\r' => {
                self.advance();
                if self.peek() == Some('\n') {
                    self.advance();
                }
                (Kind::Whitespace, text("\n"))
            }
            'N' if self.peek_next() == Some('\'') => {
                self.advance();
                self.advance();
                (Kind::NationalStringLiteral, text(self.scan_quoted('\'')))
            }
            c if self.dialect.is_identifier_start(c) => {
                let dialect = self.dialect;
                let word = self.take_while(|c| dialect.is_identifier_part(c));
                let word = make_keyword_with(&word, None, |k| dialect.keyword_kind(k));
                (Kind::SqlKeyword, TokenValue::Word(word))
            }
            '\'' => {
                self.advance();
                (Kind::SingleQuotedString, text(self.scan_quoted('\'')))
            }
            c if self.dialect.is_delimited_identifier_start(c) => {
                self.advance();
                let value = self.scan_delimited(closing_quote(c));
                (Kind::SqlKeyword, TokenValue::Word(make_keyword(&value, Some(c))))
            }
            '0'..='9' => (Kind::Number, text(self.scan_number())),
            '-' if self.peek_next() == Some('-') => {
                self.advance();
                self.advance();
                (Kind::Comment, text(self.take_while(|c| c != '\n' && c != '\r')))
            }
            '/' if self.peek_next() == Some('*') => {
                self.advance();
                self.advance();
                (Kind::MultilineComment, text(self.scan_block_comment(from)?))
            }
            '<' => {
                self.advance();
                match self.peek() {
                    Some('=') => self.two_char(Kind::LtEq, "<="),
                    Some('>') => self.two_char(Kind::Neq, "<>"),
                    _ => (Kind::Lt, text("<")),
                }
            }
            '>' => {
                self.advance();
                match self.peek() {
                    Some('=') => self.two_char(Kind::GtEq, ">="),
                    _ => (Kind::Gt, text(">")),
                }
            }
            '!' => {
                self.advance();
                match self.peek() {
                    Some('=') => self.two_char(Kind::Neq, "!="),
                    _ => {
                        let err = TokenizeError::IllegalCharacter { ch: '!', pos: from };
                        debug!(%err, "tokenizer rejected input");
                        return Err(err);
                    }
                }
            }
            ':' => {
                self.advance();
                match self.peek() {
                    Some(':') => self.two_char(Kind::DoubleColon, "::"),
                    _ => (Kind::Colon, text(":")),
                }
            }
            c => {
                self.advance();
                (single_char_kind(c), text(c.to_string()))
            }
        };

        Ok(Some(Token::new(kind, value, from, self.pos())))
    }

    fn two_char(&mut self, kind: Kind, lexeme: &str) -> (Kind, TokenValue) {
        self.advance();
        (kind, text(lexeme))
    }

    /// Scan a quoted string body after its opening quote
    ///
    /// A doubled quote is an escaped quote and stays in the value as written.
    fn scan_quoted(&mut self, quote: char) -> String {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c == quote {
                if self.peek_next() == Some(quote) {
                    self.advance();
                    self.advance();
                    value.push(quote);
                    value.push(quote);
                    continue;
                }
                self.advance();
                return value;
            }
            self.advance();
            value.push(c);
        }
        value
    }

    /// Scan a delimited identifier after its opening quote
    ///
    /// A doubled closing quote stands for one quote character in the name.
    fn scan_delimited(&mut self, close: char) -> String {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            self.advance();
            if c != close {
                value.push(c);
            } else if self.peek() == Some(close) {
                self.advance();
                value.push(close);
            } else {
                break;
            }
        }
        value
    }

    fn scan_number(&mut self) -> String {
        let start = self.offset;
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.advance();
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let signed = matches!(self.peek_next(), Some('+' | '-'));
            let mut rest = self.input[self.offset..].chars().skip(if signed { 2 } else { 1 });
            if rest.next().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
                if signed {
                    self.advance();
                }
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        self.input[start..self.offset].to_string()
    }

    fn scan_block_comment(&mut self, from: Pos) -> TokenizeResult<String> {
        let start = self.offset;
        loop {
            match self.peek() {
                Some('*') if self.peek_next() == Some('/') => {
                    let body = self.input[start..self.offset].to_string();
                    self.advance();
                    self.advance();
                    return Ok(body);
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    let err = TokenizeError::UnterminatedComment { pos: from };
                    debug!(%err, "tokenizer rejected input");
                    return Err(err);
                }
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = TokenizeResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

fn text(value: impl Into<String>) -> TokenValue {
    TokenValue::Text(value.into())
}

fn single_char_kind(c: char) -> Kind {
    match c {
        '(' => Kind::LParen,
        ')' => Kind::RParen,
        ',' => Kind::Comma,
        '-' => Kind::Minus,
        '/' => Kind::Div,
        '+' => Kind::Plus,
        '*' => Kind::Mult,
        '%' => Kind::Mod,
        '^' => Kind::Caret,
        '=' => Kind::Eq,
        '.' => Kind::Period,
        ';' => Kind::Semicolon,
        '\\' => Kind::Backslash,
        '[' => Kind::LBracket,
        ']' => Kind::RBracket,
        '&' => Kind::Ampersand,
        '{' => Kind::LBrace,
        '}' => Kind::RBrace,
        _ => Kind::Char,
    }
}

/// Tokenize `input` with the generic dialect
pub fn tokenize(input: &str) -> TokenizeResult<Vec<Token>> {
    tokenize_with(&GenericSqlDialect, input)
}

/// Tokenize `input` with a specific dialect
pub fn tokenize_with(dialect: &dyn Dialect, input: &str) -> TokenizeResult<Vec<Token>> {
    Tokenizer::new(dialect, input).tokenize()
}
