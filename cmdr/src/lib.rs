// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # seg
//!
//! Command line companion for [`r3bl_segment`].
//!
//! ```text
//! seg show grapheme "🇯🇵é"     # one cluster per line
//! seg show word -f letter,number "Hi, it's 3.14!"
//! seg show line -o "Lorem ipsum dolor"
//! seg codepoint 1F1E6 200D 0308
//! seg breaktest word WordBreakTest.txt
//! seg width -c 10 "日本語のテキスト"
//! ```
//!
//! Pass `-l` to log to stderr (and `--log-file PATH` to also log to a file).

// Attach sources.
pub mod log;
pub mod seg;

// Re-export.
pub use log::*;
pub use seg::*;

pub type CommonResult<T> = miette::Result<T>;
