// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Category, GraphemeRules, SegResult, Segments};
use unicode_width::UnicodeWidthStr;

/// Widest a single cluster can be on a terminal.
pub const MAX_CLUSTER_WIDTH: usize = 2;

/// Columns one grapheme cluster occupies, or `None` if it contains a codepoint with no
/// meaningful width (control, surrogate, private use, unassigned).
#[must_use]
pub fn cluster_width(cluster: &str) -> Option<usize> {
    if cluster
        .chars()
        .any(|ch| Category::of(ch).intersects(Category::WIDTH_INVALID))
    {
        return None;
    }
    Some(UnicodeWidthStr::width(cluster).min(MAX_CLUSTER_WIDTH))
}

/// Terminal column width of `text[offset..]`, summed per grapheme cluster. Wide and
/// emoji clusters count 2 however many codepoints they hold, combining marks add
/// nothing.
///
/// `Ok(None)` when the text holds a codepoint with no meaningful width (see
/// [`Category::WIDTH_INVALID`]). Tabs and newlines are in that set.
///
/// ```
/// use r3bl_segment::text_width;
///
/// assert_eq!(text_width("hi 👋🏽", 0).unwrap(), Some(5));
/// assert_eq!(text_width("日本", 0).unwrap(), Some(4));
/// assert_eq!(text_width("a\tb", 0).unwrap(), None);
/// ```
///
/// # Errors
///
/// [`crate::SegmentationError::OffsetOutOfRange`] or
/// [`crate::SegmentationError::NotCharBoundary`] for a bad `offset`.
pub fn text_width(text: &str, offset: usize) -> SegResult<Option<usize>> {
    Ok(Segments::<GraphemeRules>::new(text, offset)?
        .map(cluster_width)
        .sum())
}

/// Longest prefix of `text` made of whole clusters whose width fits in `width`
/// columns, and that prefix's actual width. Stops early at a cluster with no
/// meaningful width.
///
/// ```
/// use r3bl_segment::text_width_substr;
///
/// assert_eq!(text_width_substr("日本語", 5), (4, "日本"));
/// assert_eq!(text_width_substr("abc", 0), (0, ""));
/// ```
#[must_use]
pub fn text_width_substr(text: &str, width: usize) -> (usize, &str) {
    let mut used = 0;
    let mut end = 0;
    for (_, span_end, cluster) in Segments::<GraphemeRules>::from_start(text).with_offsets() {
        let Some(cluster_width) = cluster_width(cluster) else {
            break;
        };
        if used + cluster_width > width {
            break;
        }
        used += cluster_width;
        end = span_end;
    }
    (used, &text[..end])
}
