// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The four boundary families this crate knows how to find.
///
/// Parses from (and displays as) the lowercase name, so it can be fed straight from a
/// CLI argument or a config value:
///
/// ```
/// use r3bl_segment::SegmentKind;
/// use std::str::FromStr;
///
/// assert_eq!(SegmentKind::from_str("word").unwrap(), SegmentKind::Word);
/// assert_eq!(SegmentKind::Line.to_string(), "line");
/// ```
#[derive(
    Debug, Display, EnumString, EnumIter, AsRefStr, Copy, Clone, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum SegmentKind {
    Grapheme,
    Word,
    Sentence,
    Line,
}

impl SegmentKind {
    /// Like [`str::parse`] but reports failures as [`crate::SegmentationError`].
    ///
    /// # Errors
    ///
    /// [`crate::SegmentationError::UnknownKind`] if `name` is not one of the four
    /// lowercase kind names.
    pub fn parse_kind(name: &str) -> crate::SegResult<Self> {
        name.parse::<Self>()
            .map_err(|_| crate::SegmentationError::UnknownKind { name: name.into() })
    }
}
