// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod lookahead_cursor;

// Re-export.
pub use lookahead_cursor::*;
