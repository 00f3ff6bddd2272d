// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod line_opportunities;
pub mod segment_api;
pub mod segments;
pub mod word_filter;

// Re-export.
pub use line_opportunities::*;
pub use segment_api::*;
pub use segments::*;
pub use word_filter::*;
