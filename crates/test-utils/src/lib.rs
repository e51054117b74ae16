// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Testing utilities for sqlsense
//!
//! This crate provides common testing components including:
//! - Cursor-marker fixtures (`select * from |`)
//! - Sample SQL queries shared by the test suites
//! - Tracing initialisation for tests

pub mod cursor;
pub mod fixtures;
pub mod logging;

// Re-exports for convenience
pub use cursor::{CURSOR_MARKER, parse_cursor};
pub use fixtures::SqlFixtures;
pub use logging::init_tracing;
