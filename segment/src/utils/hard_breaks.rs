// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SegResult, validate_offset};
use std::iter::FusedIterator;

/// Codepoints that always end a line: LF, VT, FF, CR, NEL, LINE SEPARATOR and
/// PARAGRAPH SEPARATOR. CR LF counts as one terminator.
pub const HARD_BREAKS: [char; 7] = [
    '\u{000A}', '\u{000B}', '\u{000C}', '\u{000D}', '\u{0085}', '\u{2028}', '\u{2029}',
];

#[must_use]
pub fn is_hard_break(ch: char) -> bool { HARD_BREAKS.contains(&ch) }

/// Find the end of the line that starts at `offset`.
///
/// Returns `(line_end, next_line_start)`: `line_end` is where the terminator begins and
/// `next_line_start` is just past it. Both are `text.len()` when the line runs to the
/// end of the text unterminated.
///
/// ```
/// use r3bl_segment::line_next_hard_break;
///
/// assert_eq!(line_next_hard_break("ab\r\ncd", 0).unwrap(), (2, 4));
/// assert_eq!(line_next_hard_break("ab\r\ncd", 4).unwrap(), (6, 6));
/// ```
///
/// # Errors
///
/// [`crate::SegmentationError::OffsetOutOfRange`] or
/// [`crate::SegmentationError::NotCharBoundary`] for a bad `offset`.
pub fn line_next_hard_break(text: &str, offset: usize) -> SegResult<(usize, usize)> {
    validate_offset(text, offset)?;
    Ok(hard_break_after(text, offset))
}

fn hard_break_after(text: &str, offset: usize) -> (usize, usize) {
    let rest = &text[offset..];
    match rest.char_indices().find(|(_, ch)| is_hard_break(*ch)) {
        Some((at, ch)) => {
            let line_end = offset + at;
            let mut next_start = line_end + ch.len_utf8();
            if ch == '\r' && text[next_start..].starts_with('\n') {
                next_start += 1;
            }
            (line_end, next_start)
        }
        None => (text.len(), text.len()),
    }
}

/// Lines of `text` without their terminators. See [`split_lines`].
#[derive(Debug, Clone)]
pub struct HardLines<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Iterator for HardLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let (line_end, next_start) = hard_break_after(self.text, self.offset);
        let line = &self.text[self.offset..line_end];
        self.offset = next_start;
        Some(line)
    }
}

impl FusedIterator for HardLines<'_> {}

/// Split `text` at every [`HARD_BREAKS`] terminator. A terminator at the very end does
/// not produce a trailing empty line.
///
/// ```
/// use r3bl_segment::split_lines;
///
/// let lines = split_lines("one\r\ntwo\u{2028}\nfour\n").collect::<Vec<_>>();
/// assert_eq!(lines, vec!["one", "two", "", "four"]);
/// ```
#[must_use]
pub fn split_lines(text: &str) -> HardLines<'_> { HardLines { text, offset: 0 } }
