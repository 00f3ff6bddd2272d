// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The four boundary rule engines. Each one is an ordered, first match wins list of
//! rules evaluated on a [`LookaheadCursor`]: a rule either continues the current segment
//! (advance and keep scanning) or ends it.

// Attach sources.
pub mod grapheme_rules;
pub mod line_rules;
pub mod sentence_rules;
pub mod word_rules;

// Re-export.
pub use grapheme_rules::*;
pub use line_rules::*;
pub use sentence_rules::*;
pub use word_rules::*;

use crate::{BreakProperty, LookaheadCursor, SegResult, SegmentKind, validate_offset};

/// One rule family.
pub trait BoundaryRules {
    type Mask: BreakProperty;
    const KIND: SegmentKind;

    /// Find the end of the segment that starts where `cursor` was created. The cursor is
    /// never at the end of the text when this is called, and the returned offset is
    /// always past the start.
    fn scan(cursor: &mut LookaheadCursor<'_, Self::Mask>) -> usize;
}

/// Byte offset of the next boundary of kind `R` after `offset`.
///
/// Returns `offset` unchanged when it is the end of the text.
///
/// # Errors
///
/// [`crate::SegmentationError::OffsetOutOfRange`] or
/// [`crate::SegmentationError::NotCharBoundary`] for a bad `offset`.
pub fn next_break<R: BoundaryRules>(text: &str, offset: usize) -> SegResult<usize> {
    validate_offset(text, offset)?;
    if offset == text.len() {
        return Ok(offset);
    }
    Ok(scan_from::<R>(text, offset))
}

/// Run one scan. `offset` must already be validated and be before the end of `text`.
pub(crate) fn scan_from<R: BoundaryRules>(text: &str, offset: usize) -> usize {
    let mut cursor = LookaheadCursor::<R::Mask>::new(text, offset);
    let end = R::scan(&mut cursor);
    debug_assert!(end > offset, "{} scan made no progress", R::KIND);
    debug_assert!(!cursor.has_checkpoint(), "{} scan left a checkpoint open", R::KIND);
    end
}

/// Same as [`next_break`] with the kind picked at runtime.
///
/// # Errors
///
/// See [`next_break`].
pub fn next_break_for(kind: SegmentKind, text: &str, offset: usize) -> SegResult<usize> {
    match kind {
        SegmentKind::Grapheme => next_break::<GraphemeRules>(text, offset),
        SegmentKind::Word => next_break::<WordRules>(text, offset),
        SegmentKind::Sentence => next_break::<SentenceRules>(text, offset),
        SegmentKind::Line => next_break::<LineRules>(text, offset),
    }
}

/// Collect every boundary of kind `R` from the start of `text`. Test helper.
#[cfg(test)]
pub(crate) fn all_breaks<R: BoundaryRules>(text: &str) -> Vec<usize> {
    let mut breaks = vec![];
    let mut offset = 0;
    while offset < text.len() {
        offset = next_break::<R>(text, offset).unwrap();
        breaks.push(offset);
    }
    breaks
}
