// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Support for the conformance files Unicode publishes with each release
//! (`GraphemeBreakTest.txt`, `WordBreakTest.txt`, `SentenceBreakTest.txt`,
//! `LineBreakTest.txt`).

// Attach sources.
pub mod break_test_parser;
pub mod break_test_runner;

// Re-export.
pub use break_test_parser::*;
pub use break_test_runner::*;
