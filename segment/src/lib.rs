// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_segment
//!
//! Unicode text segmentation: where grapheme clusters, words and sentences begin and
//! end ([UAX #29]), and where a line may or must be broken ([UAX #14]).
//!
//! [UAX #29]: https://www.unicode.org/reports/tr29/
//! [UAX #14]: https://www.unicode.org/reports/tr14/
//!
//! ## How it works
//!
//! Every codepoint maps to a small bitmask of break properties, one mask type per rule
//! family (see [`props`]). A [`LookaheadCursor`] walks the text one codepoint at a time,
//! keeping the property mask of the current codepoint and the one after it. The four
//! rule engines in [`rules`] are ordered, first match wins rule lists evaluated against
//! that cursor. Rules that need to look further than one codepoint ahead open a
//! checkpoint, scan, and then either commit or roll back.
//!
//! Each call finds one boundary. Nothing is precomputed and there is no shared state,
//! so any number of threads can segment the same text at once, and iteration can start
//! at any boundary.
//!
//! ## Offsets
//!
//! All offsets are byte offsets into the `&str` and always fall on `char` boundaries.
//! Offsets handed in are validated; see [`SegmentationError`].
//!
//! ## Example
//!
//! ```
//! use r3bl_segment::{WordFilter, grapheme_iter, line_iter_with_opportunities,
//!                    sentence_iter, word_iter};
//!
//! let text = "Hi 👋🏽! Is it 3.14? Yes.";
//!
//! assert_eq!(grapheme_iter(text, 0).unwrap().nth(3), Some("👋🏽"));
//! assert_eq!(
//!     word_iter(text, 0, WordFilter::default()).unwrap().collect::<Vec<_>>(),
//!     vec!["Hi", "Is", "it", "3.14", "Yes"]
//! );
//! assert_eq!(
//!     sentence_iter(text, 0).unwrap().collect::<Vec<_>>(),
//!     vec!["Hi 👋🏽! ", "Is it 3.14? ", "Yes."]
//! );
//! assert_eq!(line_iter_with_opportunities(text, 0).unwrap().count(), 6);
//! ```

// Production library code may not use .unwrap() in functions returning Result. Test
// code may.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod common;
pub mod conformance;
pub mod cursor;
pub mod iter;
pub mod props;
pub mod rules;
pub mod utils;

// Re-export.
pub use common::*;
pub use conformance::*;
pub use cursor::*;
pub use iter::*;
pub use props::*;
pub use rules::*;
pub use utils::*;
