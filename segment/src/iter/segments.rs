// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BoundaryRules, GraphemeRules, LineRules, SegResult, SegmentKind,
            SentenceRules, WordRules, rules::scan_from, validate_offset};
use std::{iter::FusedIterator, marker::PhantomData};

/// Lazy iterator over the segments of kind `R`, from a start offset to the end of the
/// text. Each step runs one scan; nothing is precomputed.
///
/// Cloning gives an independent iterator that restarts from the same place, so the
/// sequence can be walked any number of times.
///
/// ```
/// use r3bl_segment::{Segments, SentenceRules};
///
/// let it = Segments::<SentenceRules>::new("One. Two.", 0).unwrap();
/// assert_eq!(it.clone().count(), 2);
/// assert_eq!(it.collect::<Vec<_>>(), vec!["One. ", "Two."]);
/// ```
#[derive(Debug, Clone)]
pub struct Segments<'a, R> {
    text: &'a str,
    offset: usize,
    rules: PhantomData<R>,
}

impl<'a, R: BoundaryRules> Segments<'a, R> {
    /// # Errors
    ///
    /// [`crate::SegmentationError::OffsetOutOfRange`] or
    /// [`crate::SegmentationError::NotCharBoundary`] for a bad `offset`.
    pub fn new(text: &'a str, offset: usize) -> SegResult<Self> {
        validate_offset(text, offset)?;
        Ok(Self {
            text,
            offset,
            rules: PhantomData,
        })
    }

    /// Offset 0 is always valid, so this cannot fail.
    #[must_use]
    pub fn from_start(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            rules: PhantomData,
        }
    }

    /// Byte offset the next segment starts at.
    #[must_use]
    pub fn offset(&self) -> usize { self.offset }

    #[must_use]
    pub fn text(&self) -> &'a str { self.text }

    #[must_use]
    pub fn with_offsets(self) -> SegmentsWithOffsets<'a, R> { SegmentsWithOffsets(self) }

    /// Next `(start, end)` span.
    pub fn next_span(&mut self) -> Option<(usize, usize)> {
        if self.offset >= self.text.len() {
            return None;
        }
        let start = self.offset;
        let end = scan_from::<R>(self.text, start);
        self.offset = end;
        tracing::trace!(kind = %R::KIND, start, end, "segment");
        Some((start, end))
    }
}

impl<'a, R: BoundaryRules> Iterator for Segments<'a, R> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.text;
        self.next_span().map(|(start, end)| &text[start..end])
    }
}

impl<R: BoundaryRules> FusedIterator for Segments<'_, R> {}

/// [`Segments`] that also yields the byte span of each segment.
#[derive(Debug, Clone)]
pub struct SegmentsWithOffsets<'a, R>(Segments<'a, R>);

impl<'a, R: BoundaryRules> Iterator for SegmentsWithOffsets<'a, R> {
    type Item = (usize, usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.0.text;
        self.0
            .next_span()
            .map(|(start, end)| (start, end, &text[start..end]))
    }
}

impl<R: BoundaryRules> FusedIterator for SegmentsWithOffsets<'_, R> {}

/// [`SegmentsWithOffsets`] for a kind picked at runtime.
#[derive(Debug, Clone)]
pub enum SegmentsFor<'a> {
    Grapheme(SegmentsWithOffsets<'a, GraphemeRules>),
    Word(SegmentsWithOffsets<'a, WordRules>),
    Sentence(SegmentsWithOffsets<'a, SentenceRules>),
    Line(SegmentsWithOffsets<'a, LineRules>),
}

impl<'a> Iterator for SegmentsFor<'a> {
    type Item = (usize, usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            SegmentsFor::Grapheme(it) => it.next(),
            SegmentsFor::Word(it) => it.next(),
            SegmentsFor::Sentence(it) => it.next(),
            SegmentsFor::Line(it) => it.next(),
        }
    }
}

impl FusedIterator for SegmentsFor<'_> {}

/// Every segment of `kind` from `offset`, unfiltered, with byte spans.
///
/// # Errors
///
/// See [`Segments::new`].
pub fn iter_for(kind: SegmentKind, text: &str, offset: usize) -> SegResult<SegmentsFor<'_>> {
    Ok(match kind {
        SegmentKind::Grapheme => {
            SegmentsFor::Grapheme(Segments::new(text, offset)?.with_offsets())
        }
        SegmentKind::Word => SegmentsFor::Word(Segments::new(text, offset)?.with_offsets()),
        SegmentKind::Sentence => {
            SegmentsFor::Sentence(Segments::new(text, offset)?.with_offsets())
        }
        SegmentKind::Line => SegmentsFor::Line(Segments::new(text, offset)?.with_offsets()),
    })
}
