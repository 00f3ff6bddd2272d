// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Category, GraphemeRules, SegResult, Segments, validate_range};
use std::ops::{Bound, RangeBounds};

fn clusters(text: &str) -> Segments<'_, GraphemeRules> { Segments::from_start(text) }

/// True if `offset` is a grapheme cluster boundary of `text` (counting from the start).
fn is_cluster_boundary(text: &str, offset: usize) -> bool {
    if offset == 0 || offset == text.len() {
        return true;
    }
    let mut it = clusters(text);
    while let Some((_, end)) = it.next_span() {
        if end >= offset {
            return end == offset;
        }
    }
    false
}

/// Number of grapheme clusters from `offset` to the end of `text`.
///
/// # Errors
///
/// [`crate::SegmentationError::OffsetOutOfRange`] or
/// [`crate::SegmentationError::NotCharBoundary`] for a bad `offset`.
pub fn grapheme_length(text: &str, offset: usize) -> SegResult<usize> {
    Ok(Segments::<GraphemeRules>::new(text, offset)?.count())
}

/// Slice of `text` covering the clusters whose index falls in `range`. Indices past the
/// end are clamped, and an empty or inverted range gives `""`.
///
/// ```
/// use r3bl_segment::grapheme_substr;
///
/// let text = "a🇯🇵e\u{0301}z";
/// assert_eq!(grapheme_substr(text, 1..3), "🇯🇵e\u{0301}");
/// assert_eq!(grapheme_substr(text, 3..), "z");
/// assert_eq!(grapheme_substr(text, 10..), "");
/// ```
#[must_use]
pub fn grapheme_substr(text: &str, range: impl RangeBounds<usize>) -> &str {
    let first = match range.start_bound() {
        Bound::Included(&it) => it,
        Bound::Excluded(&it) => it.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let last = match range.end_bound() {
        Bound::Included(&it) => Some(it.saturating_add(1)),
        Bound::Excluded(&it) => Some(it),
        Bound::Unbounded => None,
    };
    if last.is_some_and(|last| last <= first) {
        return "";
    }

    let mut start = text.len();
    let mut end = text.len();
    for (index, (span_start, span_end, _)) in clusters(text).with_offsets().enumerate() {
        if index == first {
            start = span_start;
        }
        if last.is_some_and(|last| index + 1 == last) {
            end = span_end;
            break;
        }
    }
    if start > end { "" } else { &text[start..end] }
}

/// Byte offset of the first occurrence of `needle` inside `text[start..end]` that
/// starts and ends on grapheme cluster boundaries. An empty `needle` matches at `start`.
///
/// ```
/// use r3bl_segment::grapheme_find;
///
/// // The bare "e" is the head of "e\u{0301}", so it only matches the second time.
/// let text = "e\u{0301} e";
/// assert_eq!(grapheme_find(text, "e", 0, text.len()).unwrap(), Some(4));
/// ```
///
/// # Errors
///
/// [`crate::SegmentationError::InvalidRange`] or
/// [`crate::SegmentationError::NotCharBoundary`] for a bad `start..end`.
pub fn grapheme_find(
    text: &str,
    needle: &str,
    start: usize,
    end: usize,
) -> SegResult<Option<usize>> {
    validate_range(text, start, end)?;
    if needle.is_empty() {
        return Ok(Some(start));
    }
    let haystack = &text[start..end];
    let mut boundaries = clusters(haystack);
    let mut last_boundary = 0;
    let mut from = 0;
    // Candidates only move forward, so the boundary walk never restarts. Candidates may
    // overlap a rejected one.
    while let Some(found) = haystack[from..].find(needle).map(|it| from + it) {
        last_boundary = walk_to(&mut boundaries, last_boundary, found);
        if last_boundary == found {
            let found_end = found + needle.len();
            if walk_to(&mut boundaries.clone(), last_boundary, found_end) == found_end {
                return Ok(Some(start + found));
            }
        }
        from = found + haystack[found..].chars().next().map_or(1, char::len_utf8);
    }
    Ok(None)
}

/// Step `it` until its last boundary, starting from `at`, reaches `target`. Returns that
/// boundary, which is past `target` when `target` is inside a cluster.
fn walk_to(it: &mut Segments<'_, GraphemeRules>, mut at: usize, target: usize) -> usize {
    while at < target {
        match it.next_span() {
            Some((_, end)) => at = end,
            None => break,
        }
    }
    at
}

/// `text.starts_with(prefix)` where `prefix` also has to end on a cluster boundary.
#[must_use]
pub fn grapheme_startswith(text: &str, prefix: &str) -> bool {
    text.starts_with(prefix) && is_cluster_boundary(text, prefix.len())
}

/// `text.ends_with(suffix)` where `suffix` also has to start on a cluster boundary.
#[must_use]
pub fn grapheme_endswith(text: &str, suffix: &str) -> bool {
    text.ends_with(suffix) && is_cluster_boundary(text, text.len() - suffix.len())
}

/// True if any codepoint of `text[start..end]` has a [`Category`] bit in `mask`.
///
/// # Errors
///
/// [`crate::SegmentationError::InvalidRange`] or
/// [`crate::SegmentationError::NotCharBoundary`] for a bad `start..end`.
pub fn has_category(text: &str, start: usize, end: usize, mask: Category) -> SegResult<bool> {
    validate_range(text, start, end)?;
    Ok(text[start..end]
        .chars()
        .any(|ch| Category::of(ch).intersects(mask)))
}

/// Start offsets of the clusters of `text`, from `offset`.
///
/// # Errors
///
/// See [`grapheme_length`].
pub fn grapheme_offsets(text: &str, offset: usize) -> SegResult<Vec<usize>> {
    Ok(Segments::<GraphemeRules>::new(text, offset)?
        .with_offsets()
        .map(|(start, _, _)| start)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SegmentationError, assert_eq2};
    use test_case::test_case;

    const FAMILY: &str = "👨‍👩‍👧";

    #[test]
    fn test_grapheme_length() {
        assert_eq2!(grapheme_length("", 0), Ok(0));
        assert_eq2!(grapheme_length("abc", 1), Ok(2));
        assert_eq2!(grapheme_length(FAMILY, 0), Ok(1));
        assert_eq2!(grapheme_length("\r\n\r\n", 0), Ok(2));
        assert_eq2!(
            grapheme_length("ab", 3),
            Err(SegmentationError::OffsetOutOfRange { offset: 3, len: 2 })
        );
    }

    #[test]
    fn test_grapheme_substr_bounds() {
        let text = "x👨‍👩‍👧y";
        assert_eq2!(grapheme_substr(text, ..), text);
        assert_eq2!(grapheme_substr(text, 1..2), FAMILY);
        assert_eq2!(grapheme_substr(text, 1..=2), "👨‍👩‍👧y");
        assert_eq2!(grapheme_substr(text, ..1), "x");
        assert_eq2!(grapheme_substr(text, 2..1), "");
        assert_eq2!(grapheme_substr(text, 0..100), text);
        assert_eq2!(grapheme_substr("", 0..1), "");
    }

    #[test_case("abc", "b", Some(1) ; "plain ascii")]
    #[test_case("ae\u{0301}", "e", None ; "needle splits a cluster")]
    #[test_case("e\u{0301}", "e\u{0301}", Some(0) ; "whole cluster")]
    #[test_case("🇩🇪🇫🇷", "🇪🇫", None ; "straddles two flags")]
    #[test_case("🇩🇪🇫🇷", "🇫🇷", Some(8) ; "second flag")]
    #[test_case("abc", "", Some(0) ; "empty needle")]
    #[test_case("a\u{0301}a\u{0301}a", "a\u{0301}a", Some(3) ; "overlaps a rejected match")]
    fn test_grapheme_find(text: &str, needle: &str, expected: Option<usize>) {
        assert_eq2!(grapheme_find(text, needle, 0, text.len()), Ok(expected));
    }

    #[test]
    fn test_grapheme_find_in_range() {
        let text = "ab ab ab";
        assert_eq2!(grapheme_find(text, "ab", 1, text.len()), Ok(Some(3)));
        assert_eq2!(grapheme_find(text, "ab", 1, 4), Ok(None));
        assert_eq2!(
            grapheme_find(text, "ab", 4, 1),
            Err(SegmentationError::InvalidRange {
                start: 4,
                end: 1,
                len: 8
            })
        );
    }

    #[test]
    fn test_grapheme_find_many_rejected_matches() {
        // Every bare "e" but the last one is the head of a cluster.
        let text = format!("{}e", "e\u{0301}".repeat(20_000));
        assert_eq2!(grapheme_find(&text, "e", 0, text.len()), Ok(Some(60_000)));
        assert_eq2!(grapheme_find(&text, "e", 0, text.len() - 1), Ok(None));
    }

    #[test]
    fn test_affixes() {
        assert!(grapheme_startswith("e\u{0301}x", "e\u{0301}"));
        assert!(!grapheme_startswith("e\u{0301}x", "e"));
        assert!(grapheme_startswith("abc", ""));
        assert!(grapheme_endswith("xe\u{0301}", "e\u{0301}"));
        assert!(grapheme_endswith("x\u{200D}👧", "👧"));
        assert!(!grapheme_endswith("👩\u{200D}👧", "👧"));
        assert!(grapheme_endswith("ab", "ab"));
        assert!(!grapheme_endswith("ab", "cab"));
    }

    #[test]
    fn test_has_category() {
        assert_eq2!(has_category("ab 12", 0, 2, Category::NUMBER), Ok(false));
        assert_eq2!(has_category("ab 12", 0, 5, Category::NUMBER), Ok(true));
        assert_eq2!(has_category("a🙂", 0, 5, Category::EXTENDED_PICTOGRAPHIC), Ok(true));
        assert_eq2!(has_category("", 0, 0, Category::all()), Ok(false));
    }

    #[test]
    fn test_grapheme_offsets() {
        assert_eq2!(grapheme_offsets("a\r\nb", 0), Ok(vec![0, 1, 3]));
        assert_eq2!(grapheme_offsets("a\r\nb", 4), Ok(vec![]));
    }
}
