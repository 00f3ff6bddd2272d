// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SegResult, SegmentationError};

/// Marks a boundary between two codepoints.
pub const BREAK_MARKER: &str = "\u{00F7}";
/// Marks a position that is not a boundary.
pub const NO_BREAK_MARKER: &str = "\u{00D7}";

/// One line of a `*BreakTest.txt` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakTestCase {
    pub text: String,
    /// Byte offsets of the expected boundaries in `text`, without the one at 0.
    pub breaks: Vec<usize>,
    /// 1 based line number in the source file.
    pub line_number: usize,
}

/// Parse one line. Blank and comment only lines give `Ok(None)`.
///
/// ```
/// use r3bl_segment::parse_break_test_line;
///
/// let case = parse_break_test_line("÷ 0061 × 0308 ÷ 0020 ÷\t#  comment", 7)
///     .unwrap()
///     .unwrap();
/// assert_eq!(case.text, "a\u{0308} ");
/// assert_eq!(case.breaks, vec![3, 4]);
/// assert_eq!(case.line_number, 7);
/// ```
///
/// # Errors
///
/// [`SegmentationError::MalformedTestLine`] when markers and codepoints do not
/// alternate, a codepoint is not hex, or the line does not start and end with a marker.
pub fn parse_break_test_line(line: &str, line_number: usize) -> SegResult<Option<BreakTestCase>> {
    let malformed = |reason: String| SegmentationError::MalformedTestLine { line_number, reason };

    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }

    let mut text = String::new();
    let mut breaks = vec![];
    let mut expect_marker = true;
    for token in content.split_ascii_whitespace() {
        if expect_marker {
            match token {
                BREAK_MARKER => {
                    if !text.is_empty() {
                        breaks.push(text.len());
                    }
                }
                NO_BREAK_MARKER => {}
                _ => return Err(malformed(format!("expected ÷ or ×, found '{token}'"))),
            }
        } else {
            let codepoint = u32::from_str_radix(token, 16)
                .map_err(|_| malformed(format!("'{token}' is not a hex codepoint")))?;
            let ch = char::from_u32(codepoint)
                .ok_or_else(|| malformed(format!("U+{codepoint:04X} is not a scalar value")))?;
            text.push(ch);
        }
        expect_marker = !expect_marker;
    }
    if expect_marker || text.is_empty() {
        return Err(malformed("line must end with a ÷ or × marker".into()));
    }

    Ok(Some(BreakTestCase {
        text,
        breaks,
        line_number,
    }))
}

/// Parse a whole file.
///
/// # Errors
///
/// The first [`SegmentationError::MalformedTestLine`] encountered.
pub fn parse_break_test(source: &str) -> SegResult<Vec<BreakTestCase>> {
    let mut cases = vec![];
    for (index, line) in source.lines().enumerate() {
        if let Some(case) = parse_break_test_line(line, index + 1)? {
            cases.push(case);
        }
    }
    tracing::debug!(cases = cases.len(), "parsed break test file");
    Ok(cases)
}
