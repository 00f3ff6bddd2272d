// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Errors a caller can provoke with bad arguments.
///
/// Text itself never fails: a `&str` is valid UTF-8 and every sequence of codepoints has
/// well defined boundaries. Only offsets, ranges and raw codepoint values handed in from
/// the outside are checked.
///
/// | Variant                | Cause                                                   |
/// | :--------------------- | :------------------------------------------------------ |
/// | [`OffsetOutOfRange`]   | Offset is past the end of the text                      |
/// | [`NotCharBoundary`]    | Offset splits a multi byte UTF-8 sequence               |
/// | [`InvalidRange`]       | `start > end` or `end` past the end of the text         |
/// | [`InvalidCodepoint`]   | A `u32` that is not a Unicode scalar value              |
/// | [`UnknownKind`]        | A segment kind name that is not one of the four kinds   |
/// | [`MalformedTestLine`]  | A `*BreakTest.txt` line that does not parse             |
///
/// [`OffsetOutOfRange`]: Self::OffsetOutOfRange
/// [`NotCharBoundary`]: Self::NotCharBoundary
/// [`InvalidRange`]: Self::InvalidRange
/// [`InvalidCodepoint`]: Self::InvalidCodepoint
/// [`UnknownKind`]: Self::UnknownKind
/// [`MalformedTestLine`]: Self::MalformedTestLine
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SegmentationError {
    #[error("Offset {offset} is out of range for text of {len} bytes")]
    #[diagnostic(
        code(r3bl_segment::offset_out_of_range),
        help("Offsets are byte offsets and must satisfy 0 <= offset <= text.len()")
    )]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Offset {offset} is not on a char boundary")]
    #[diagnostic(
        code(r3bl_segment::not_char_boundary),
        help("Use an offset previously returned by this crate, or `str::is_char_boundary`")
    )]
    NotCharBoundary { offset: usize },

    #[error("Range {start}..{end} is invalid for text of {len} bytes")]
    #[diagnostic(
        code(r3bl_segment::invalid_range),
        help("The range must satisfy start <= end <= text.len()")
    )]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("U+{codepoint:04X} is not a Unicode scalar value")]
    #[diagnostic(
        code(r3bl_segment::invalid_codepoint),
        help("Surrogates (U+D800..=U+DFFF) and values above U+10FFFF have no properties")
    )]
    InvalidCodepoint { codepoint: u32 },

    #[error("Unknown segment kind '{name}'")]
    #[diagnostic(
        code(r3bl_segment::unknown_kind),
        help("Expected one of: grapheme, word, sentence, line")
    )]
    UnknownKind { name: String },

    #[error("Line {line_number} of the break test file is malformed: {reason}")]
    #[diagnostic(
        code(r3bl_segment::malformed_test_line),
        help("Each line alternates ÷ or × markers with hex codepoints, eg: ÷ 0041 × 0308 ÷")
    )]
    MalformedTestLine { line_number: usize, reason: String },
}

pub type SegResult<T> = Result<T, SegmentationError>;

/// Check that `offset` can start a scan over `text`.
///
/// # Errors
///
/// [`SegmentationError::OffsetOutOfRange`] or [`SegmentationError::NotCharBoundary`].
pub fn validate_offset(text: &str, offset: usize) -> SegResult<()> {
    if offset > text.len() {
        tracing::debug!(offset, len = text.len(), "rejected offset past end of text");
        return Err(SegmentationError::OffsetOutOfRange {
            offset,
            len: text.len(),
        });
    }
    if !text.is_char_boundary(offset) {
        tracing::debug!(offset, "rejected offset inside a UTF-8 sequence");
        return Err(SegmentationError::NotCharBoundary { offset });
    }
    crate::ok!()
}

/// Check that `start..end` is a valid byte span of `text`.
///
/// # Errors
///
/// [`SegmentationError::InvalidRange`] or [`SegmentationError::NotCharBoundary`].
pub fn validate_range(text: &str, start: usize, end: usize) -> SegResult<()> {
    if start > end || end > text.len() {
        tracing::debug!(start, end, len = text.len(), "rejected range");
        return Err(SegmentationError::InvalidRange {
            start,
            end,
            len: text.len(),
        });
    }
    for offset in [start, end] {
        if !text.is_char_boundary(offset) {
            tracing::debug!(offset, "rejected range end inside a UTF-8 sequence");
            return Err(SegmentationError::NotCharBoundary { offset });
        }
    }
    crate::ok!()
}

/// Convert a raw codepoint value into a `char`.
///
/// # Errors
///
/// [`SegmentationError::InvalidCodepoint`] for surrogates and values past U+10FFFF.
pub fn codepoint_to_char(codepoint: u32) -> SegResult<char> {
    char::from_u32(codepoint).ok_or_else(|| {
        tracing::debug!(codepoint, "rejected codepoint");
        SegmentationError::InvalidCodepoint { codepoint }
    })
}
