// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Cursor-marker fixtures
//!
//! A fixture is SQL text with a single [`CURSOR_MARKER`] where the editor
//! cursor sits. [`parse_cursor`] removes the marker and reports the cursor as
//! a [`Pos`], counting columns the way the tokenizer does.

use sqlsense_grammar::Pos;
use sqlsense_grammar::pos::TAB_WIDTH;

/// Marks the cursor in fixture text
pub const CURSOR_MARKER: char = '|';

/// Split a fixture into its text and cursor position
///
/// Without a marker the cursor is placed at the end of the text.
pub fn parse_cursor(fixture: &str) -> (String, Pos) {
    let offset = fixture.find(CURSOR_MARKER).unwrap_or(fixture.len());
    let text = fixture.replacen(CURSOR_MARKER, "", 1);
    (text, pos_at(fixture, offset))
}

/// Position of byte `offset` in `text`
pub fn pos_at(text: &str, offset: usize) -> Pos {
    let mut pos = Pos::default();
    let mut chars = text[..offset].chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                pos.line += 1;
                pos.col = 0;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' => {
                pos.line += 1;
                pos.col = 0;
            }
            '\t' => pos.col += TAB_WIDTH,
            _ => pos.col += 1,
        }
    }
    pos
}
