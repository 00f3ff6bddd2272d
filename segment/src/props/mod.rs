// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per codepoint property masks, one strongly typed [`bitflags`] type per rule family.
//!
//! The masks are derived from the Unicode Character Database tables compiled into
//! [`icu_properties`]. A codepoint can carry several bits at once (eg: a grapheme
//! `EXTEND` that is also `IN_CB_EXTEND`), and the same codepoint has unrelated masks
//! under the grapheme, word, sentence and line families. The types are deliberately
//! not convertible into each other.

// Attach sources.
pub mod general_category;
pub mod grapheme_props;
pub mod line_props;
pub mod sentence_props;
pub mod word_props;

// Re-export.
pub use general_category::*;
pub use grapheme_props::*;
pub use line_props::*;
pub use sentence_props::*;
pub use word_props::*;

use crate::{SegResult, SegmentKind, codepoint_to_char};
use icu_properties::{CodePointSetData, props::ExtendedPictographic};
use smallvec::SmallVec;
use std::fmt::Debug;

/// Version of the Unicode Character Database the property tables implement.
///
/// Consumers that persist segmentation results (eg: a full text search index) can
/// record this and re-segment when it changes.
pub const UNICODE_VERSION: &str = "17.0";

/// A property mask for one rule family. `of` is the table lookup; everything else the
/// [`crate::LookaheadCursor`] needs comes from [`bitflags::Flags`].
pub trait BreakProperty: bitflags::Flags + Copy + Debug + Eq {
    fn of(ch: char) -> Self;
}

/// Names of the bits set for one codepoint.
pub type CategoryNames = SmallVec<[&'static str; 4]>;

/// Names of the property bits set for `codepoint` under the rules of `kind`.
///
/// ```
/// use r3bl_segment::{SegmentKind, category_name};
///
/// let names = category_name(SegmentKind::Grapheme, 0x1F1E6).unwrap();
/// assert!(names.contains(&"REGIONAL_INDICATOR"));
/// ```
///
/// # Errors
///
/// [`crate::SegmentationError::InvalidCodepoint`] if `codepoint` is not a scalar value.
pub fn category_name(kind: SegmentKind, codepoint: u32) -> SegResult<CategoryNames> {
    let ch = codepoint_to_char(codepoint)?;
    Ok(match kind {
        SegmentKind::Grapheme => names_of(GraphemeMask::of(ch)),
        SegmentKind::Word => names_of(WordMask::of(ch)),
        SegmentKind::Sentence => names_of(SentenceMask::of(ch)),
        SegmentKind::Line => names_of(LineMask::of(ch)),
    })
}

fn names_of<M: BreakProperty>(mask: M) -> CategoryNames {
    mask.iter_names().map(|(name, _)| name).collect()
}

#[must_use]
pub fn is_extended_pictographic(ch: char) -> bool {
    CodePointSetData::new::<ExtendedPictographic>().contains(ch)
}

#[must_use]
pub fn is_regional_indicator(ch: char) -> bool {
    matches!(ch, '\u{1F1E6}'..='\u{1F1FF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SegmentationError, assert_eq2};

    #[test]
    fn test_category_name_per_family() {
        let names = category_name(SegmentKind::Word, u32::from('a')).unwrap();
        assert_eq2!(names.as_slice(), &["A_LETTER"]);

        let names = category_name(SegmentKind::Sentence, u32::from('.')).unwrap();
        assert_eq2!(names.as_slice(), &["A_TERM"]);

        let names = category_name(SegmentKind::Line, u32::from(' ')).unwrap();
        assert_eq2!(names.as_slice(), &["SP"]);

        let names = category_name(SegmentKind::Grapheme, 0x0D).unwrap();
        assert_eq2!(names.as_slice(), &["CR"]);
    }

    #[test]
    fn test_category_name_rejects_surrogate() {
        assert_eq2!(
            category_name(SegmentKind::Word, 0xDC00),
            Err(SegmentationError::InvalidCodepoint { codepoint: 0xDC00 })
        );
    }

    #[test]
    fn test_emoji_predicates() {
        assert!(is_extended_pictographic('😀'));
        assert!(is_extended_pictographic('©'));
        assert!(!is_extended_pictographic('a'));
        assert!(is_regional_indicator('🇬'));
        assert!(!is_regional_indicator('G'));
    }
}
