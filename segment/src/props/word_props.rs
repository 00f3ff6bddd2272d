// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BreakProperty, is_extended_pictographic};
use icu_properties::{CodePointMapData, props::WordBreak};

bitflags::bitflags! {
    /// Word break properties (UAX #29 table 3) plus `Extended_Pictographic` for WB3c.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct WordMask: u32 {
        const CR = 1 << 0;
        const LF = 1 << 1;
        const NEWLINE = 1 << 2;
        const EXTEND = 1 << 3;
        const ZWJ = 1 << 4;
        const FORMAT = 1 << 5;
        const REGIONAL_INDICATOR = 1 << 6;
        const KATAKANA = 1 << 7;
        const HEBREW_LETTER = 1 << 8;
        const A_LETTER = 1 << 9;
        const SINGLE_QUOTE = 1 << 10;
        const DOUBLE_QUOTE = 1 << 11;
        const MID_NUM_LET = 1 << 12;
        const MID_LETTER = 1 << 13;
        const MID_NUM = 1 << 14;
        const NUMERIC = 1 << 15;
        const EXTEND_NUM_LET = 1 << 16;
        const W_SEG_SPACE = 1 << 17;
        const EXTENDED_PICTOGRAPHIC = 1 << 18;
        /// `Word_Break=Other`.
        const OTHER = 1 << 19;
    }
}

impl WordMask {
    pub const NEWLINE_LIKE: Self = Self::CR.union(Self::LF).union(Self::NEWLINE);
    /// Characters WB4 folds into whatever precedes them.
    pub const IGNORABLE: Self = Self::EXTEND.union(Self::FORMAT).union(Self::ZWJ);
    /// `AHLetter`.
    pub const AH_LETTER: Self = Self::A_LETTER.union(Self::HEBREW_LETTER);
    /// `MidNumLetQ`.
    pub const MID_NUM_LET_Q: Self = Self::MID_NUM_LET.union(Self::SINGLE_QUOTE);
}

impl BreakProperty for WordMask {
    fn of(ch: char) -> Self {
        let mut mask = match CodePointMapData::<WordBreak>::new().get(ch) {
            WordBreak::CR => Self::CR,
            WordBreak::LF => Self::LF,
            WordBreak::Newline => Self::NEWLINE,
            WordBreak::Extend => Self::EXTEND,
            WordBreak::ZWJ => Self::ZWJ,
            WordBreak::Format => Self::FORMAT,
            WordBreak::RegionalIndicator => Self::REGIONAL_INDICATOR,
            WordBreak::Katakana => Self::KATAKANA,
            WordBreak::HebrewLetter => Self::HEBREW_LETTER,
            WordBreak::ALetter => Self::A_LETTER,
            WordBreak::SingleQuote => Self::SINGLE_QUOTE,
            WordBreak::DoubleQuote => Self::DOUBLE_QUOTE,
            WordBreak::MidNumLet => Self::MID_NUM_LET,
            WordBreak::MidLetter => Self::MID_LETTER,
            WordBreak::MidNum => Self::MID_NUM,
            WordBreak::Numeric => Self::NUMERIC,
            WordBreak::ExtendNumLet => Self::EXTEND_NUM_LET,
            WordBreak::WSegSpace => Self::W_SEG_SPACE,
            _ => Self::OTHER,
        };
        if is_extended_pictographic(ch) {
            mask.insert(Self::EXTENDED_PICTOGRAPHIC);
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case('a', WordMask::A_LETTER ; "latin")]
    #[test_case('\u{05D0}', WordMask::HEBREW_LETTER ; "alef")]
    #[test_case('7', WordMask::NUMERIC ; "digit")]
    #[test_case('\'', WordMask::SINGLE_QUOTE ; "apostrophe")]
    #[test_case('"', WordMask::DOUBLE_QUOTE ; "quotation mark")]
    #[test_case('.', WordMask::MID_NUM_LET ; "full stop")]
    #[test_case(':', WordMask::MID_LETTER ; "colon")]
    #[test_case(',', WordMask::MID_NUM ; "comma")]
    #[test_case('_', WordMask::EXTEND_NUM_LET ; "low line")]
    #[test_case(' ', WordMask::W_SEG_SPACE ; "space")]
    #[test_case('\u{30A2}', WordMask::KATAKANA ; "katakana a")]
    #[test_case('\u{000B}', WordMask::NEWLINE ; "vertical tab")]
    #[test_case('(', WordMask::OTHER ; "paren")]
    fn test_word_property(ch: char, expected: WordMask) {
        assert_eq2!(WordMask::of(ch), expected);
    }

    #[test]
    fn test_pictographic_is_extra_bit() {
        let mask = WordMask::of('😀');
        assert!(mask.contains(WordMask::EXTENDED_PICTOGRAPHIC));
        assert!(!mask.intersects(WordMask::IGNORABLE));
    }
}
