// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Per kind entry points. All offsets are byte offsets into `text`.
//!
//! | Kind     | Next break                | Next segment       | Iterators                                     |
//! | :------- | :------------------------ | :----------------- | :-------------------------------------------- |
//! | grapheme | [`grapheme_next_break`]   | [`grapheme_next`]  | [`grapheme_iter`], [`grapheme_iter_with_offsets`] |
//! | word     | [`word_next_break`]       | [`word_next`]      | [`word_iter`], [`word_iter_with_offsets`]     |
//! | sentence | [`sentence_next_break`]   | [`sentence_next`]  | [`sentence_iter`], [`sentence_iter_with_offsets`] |
//! | line     | [`line_next_break`]       | [`line_next`]      | [`line_iter`], [`line_iter_with_offsets`]     |
//!
//! The word variants that return segments take a [`WordFilter`] and skip the filler
//! between words. [`word_next_break`] is the raw boundary and is not filtered.

use crate::{GraphemeRules, LineRules, SegResult, Segments, SegmentsWithOffsets,
            SentenceRules, WordFilter, WordRules, Words, WordsWithOffsets, next_break};

macro_rules! segment_api {
    ($rules:ty, $next_break:ident, $next:ident, $iter:ident, $iter_with_offsets:ident) => {
        /// Byte offset of the next boundary after `offset` (or `offset` itself at the
        /// end of the text).
        ///
        /// # Errors
        ///
        /// [`crate::SegmentationError::OffsetOutOfRange`] or
        /// [`crate::SegmentationError::NotCharBoundary`] for a bad `offset`.
        pub fn $next_break(text: &str, offset: usize) -> SegResult<usize> {
            next_break::<$rules>(text, offset)
        }

        /// `(start, end)` of the segment starting at `offset`. `(len, len)` at the end
        /// of the text.
        ///
        /// # Errors
        ///
        /// Same as the next break function.
        pub fn $next(text: &str, offset: usize) -> SegResult<(usize, usize)> {
            let end = next_break::<$rules>(text, offset)?;
            Ok((offset, end))
        }

        /// Lazy, restartable iterator over segment texts from `offset`.
        ///
        /// # Errors
        ///
        /// Same as the next break function.
        pub fn $iter(text: &str, offset: usize) -> SegResult<Segments<'_, $rules>> {
            Segments::new(text, offset)
        }

        /// Like the plain iterator, yielding `(start, end, segment)`.
        ///
        /// # Errors
        ///
        /// Same as the next break function.
        pub fn $iter_with_offsets(
            text: &str,
            offset: usize,
        ) -> SegResult<SegmentsWithOffsets<'_, $rules>> {
            Ok(Segments::new(text, offset)?.with_offsets())
        }
    };
}

segment_api!(
    GraphemeRules,
    grapheme_next_break,
    grapheme_next,
    grapheme_iter,
    grapheme_iter_with_offsets
);
segment_api!(
    SentenceRules,
    sentence_next_break,
    sentence_next,
    sentence_iter,
    sentence_iter_with_offsets
);
segment_api!(LineRules, line_next_break, line_next, line_iter, line_iter_with_offsets);

/// Byte offset of the next word boundary after `offset`. Unfiltered: spaces and
/// punctuation between words are segments too.
///
/// # Errors
///
/// [`crate::SegmentationError::OffsetOutOfRange`] or
/// [`crate::SegmentationError::NotCharBoundary`] for a bad `offset`.
pub fn word_next_break(text: &str, offset: usize) -> SegResult<usize> {
    next_break::<WordRules>(text, offset)
}

/// `(start, end)` of the first word at or after `offset` that passes `filter`.
/// `(len, len)` if there is none.
///
/// ```
/// use r3bl_segment::{WordFilter, word_next};
///
/// assert_eq!(word_next("  hello", 0, WordFilter::default()).unwrap(), (2, 7));
/// assert_eq!(word_next("  ", 0, WordFilter::default()).unwrap(), (2, 2));
/// ```
///
/// # Errors
///
/// See [`word_next_break`].
pub fn word_next(text: &str, offset: usize, filter: WordFilter) -> SegResult<(usize, usize)> {
    let mut words = Words::new(text, offset, filter)?;
    Ok(words.next_span().unwrap_or((text.len(), text.len())))
}

/// Lazy, restartable iterator over the words from `offset` that pass `filter`.
///
/// # Errors
///
/// See [`word_next_break`].
pub fn word_iter(text: &str, offset: usize, filter: WordFilter) -> SegResult<Words<'_>> {
    Words::new(text, offset, filter)
}

/// Like [`word_iter`], yielding `(start, end, word)`.
///
/// # Errors
///
/// See [`word_next_break`].
pub fn word_iter_with_offsets(
    text: &str,
    offset: usize,
    filter: WordFilter,
) -> SegResult<WordsWithOffsets<'_>> {
    Ok(Words::new(text, offset, filter)?.with_offsets())
}
