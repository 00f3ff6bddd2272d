// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BreakOpportunity, LineMask, LookaheadCursor, SegResult, scan_line,
            validate_offset};
use std::iter::FusedIterator;

/// One line break segment: the text up to a break opportunity, and whether the break
/// there is mandatory.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LineSegment<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    pub opportunity: BreakOpportunity,
}

/// Byte offset of the next line break opportunity after `offset`, and its kind.
///
/// The end of the text is a [`BreakOpportunity::Mandatory`] break, including when
/// `offset` already is the end.
///
/// # Errors
///
/// [`crate::SegmentationError::OffsetOutOfRange`] or
/// [`crate::SegmentationError::NotCharBoundary`] for a bad `offset`.
pub fn line_next_break_opportunity(
    text: &str,
    offset: usize,
) -> SegResult<(usize, BreakOpportunity)> {
    validate_offset(text, offset)?;
    if offset == text.len() {
        return Ok((offset, BreakOpportunity::Mandatory));
    }
    let mut cursor = LookaheadCursor::<LineMask>::new(text, offset);
    Ok(scan_line(&mut cursor))
}

/// Lazy iterator of [`LineSegment`]s. See [`line_iter_with_opportunities`].
#[derive(Debug, Clone)]
pub struct LineOpportunities<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Iterator for LineOpportunities<'a> {
    type Item = LineSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let start = self.offset;
        let mut cursor = LookaheadCursor::<LineMask>::new(self.text, start);
        let (end, opportunity) = scan_line(&mut cursor);
        self.offset = end;
        tracing::trace!(start, end, %opportunity, "line segment");
        Some(LineSegment {
            start,
            end,
            text: &self.text[start..end],
            opportunity,
        })
    }
}

impl FusedIterator for LineOpportunities<'_> {}

/// Line segments from `offset`, each tagged with the kind of break that ends it.
///
/// ```
/// use r3bl_segment::{BreakOpportunity, line_iter_with_opportunities};
///
/// let kinds = line_iter_with_opportunities("to be\nor", 0)
///     .unwrap()
///     .map(|it| (it.text, it.opportunity))
///     .collect::<Vec<_>>();
/// assert_eq!(kinds, vec![
///     ("to ", BreakOpportunity::Allowed),
///     ("be\n", BreakOpportunity::Mandatory),
///     ("or", BreakOpportunity::Mandatory),
/// ]);
/// ```
///
/// # Errors
///
/// See [`line_next_break_opportunity`].
pub fn line_iter_with_opportunities(
    text: &str,
    offset: usize,
) -> SegResult<LineOpportunities<'_>> {
    validate_offset(text, offset)?;
    Ok(LineOpportunities { text, offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SegmentationError, assert_eq2};

    #[test]
    fn test_next_break_opportunity() {
        assert_eq2!(
            line_next_break_opportunity("a b", 0),
            Ok((2, BreakOpportunity::Allowed))
        );
        assert_eq2!(
            line_next_break_opportunity("a b", 2),
            Ok((3, BreakOpportunity::Mandatory))
        );
        assert_eq2!(
            line_next_break_opportunity("a b", 3),
            Ok((3, BreakOpportunity::Mandatory))
        );
        assert_eq2!(
            line_next_break_opportunity("a b", 9),
            Err(SegmentationError::OffsetOutOfRange { offset: 9, len: 3 })
        );
    }

    #[test]
    fn test_segments_tile() {
        let text = "Lorem ipsum\r\ndolor sit amet.";
        let segments = line_iter_with_opportunities(text, 0).unwrap().collect::<Vec<_>>();
        let joined = segments.iter().map(|it| it.text).collect::<String>();
        assert_eq2!(joined, text);
        let mandatory = segments
            .iter()
            .filter(|it| it.opportunity == BreakOpportunity::Mandatory)
            .map(|it| it.end)
            .collect::<Vec<_>>();
        assert_eq2!(mandatory, vec![13, text.len()]);
    }
}
