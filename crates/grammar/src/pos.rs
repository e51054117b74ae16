// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Source locations
//!
//! Positions are zero-based on both axes. Columns count rendered width, so a
//! tab advances the column by [`TAB_WIDTH`] while any other character advances
//! it by one.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Column width of a tab character
pub const TAB_WIDTH: u32 = 4;

/// Position in a document (line, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pos {
    /// Line position in a document (zero-based)
    pub line: u32,
    /// Column offset on a line (zero-based)
    pub col: u32,
}

impl Pos {
    /// Create a new position
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Compare two positions
///
/// Exact equality on both fields is the only way to get [`Ordering::Equal`].
/// Otherwise the line decides, and on the same line a greater column is
/// `Greater`; every remaining case falls through to `Less`.
pub fn compare_pos(x: Pos, y: Pos) -> Ordering {
    if x.line == y.line && x.col == y.col {
        return Ordering::Equal;
    }
    if x.line > y.line {
        return Ordering::Greater;
    }
    if x.line < y.line {
        return Ordering::Less;
    }
    if x.col > y.col {
        return Ordering::Greater;
    }
    Ordering::Less
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_pos(*self, *other)
    }
}
