// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::BreakProperty;
use icu_properties::{CodePointMapData, props::SentenceBreak};

bitflags::bitflags! {
    /// Sentence break properties (UAX #29 table 4). Exactly one bit per codepoint.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct SentenceMask: u32 {
        const CR = 1 << 0;
        const LF = 1 << 1;
        const EXTEND = 1 << 2;
        const SEP = 1 << 3;
        const FORMAT = 1 << 4;
        const SP = 1 << 5;
        const LOWER = 1 << 6;
        const UPPER = 1 << 7;
        const O_LETTER = 1 << 8;
        const NUMERIC = 1 << 9;
        const A_TERM = 1 << 10;
        const S_CONTINUE = 1 << 11;
        const S_TERM = 1 << 12;
        const CLOSE = 1 << 13;
        /// `Sentence_Break=Other`.
        const OTHER = 1 << 14;
    }
}

impl SentenceMask {
    /// `ParaSep`.
    pub const PARA_SEP: Self = Self::SEP.union(Self::CR).union(Self::LF);
    /// `SATerm`.
    pub const SA_TERM: Self = Self::S_TERM.union(Self::A_TERM);
    /// Characters SB5 folds into whatever precedes them.
    pub const IGNORABLE: Self = Self::EXTEND.union(Self::FORMAT);
    /// Everything SB8 may skip over while looking for a lowercase letter.
    pub const SB8_SKIPPABLE: Self = Self::all().difference(
        Self::O_LETTER
            .union(Self::UPPER)
            .union(Self::LOWER)
            .union(Self::PARA_SEP)
            .union(Self::SA_TERM),
    );
}

impl BreakProperty for SentenceMask {
    fn of(ch: char) -> Self {
        match CodePointMapData::<SentenceBreak>::new().get(ch) {
            SentenceBreak::CR => Self::CR,
            SentenceBreak::LF => Self::LF,
            SentenceBreak::Extend => Self::EXTEND,
            SentenceBreak::Sep => Self::SEP,
            SentenceBreak::Format => Self::FORMAT,
            SentenceBreak::Sp => Self::SP,
            SentenceBreak::Lower => Self::LOWER,
            SentenceBreak::Upper => Self::UPPER,
            SentenceBreak::OLetter => Self::O_LETTER,
            SentenceBreak::Numeric => Self::NUMERIC,
            SentenceBreak::ATerm => Self::A_TERM,
            SentenceBreak::SContinue => Self::S_CONTINUE,
            SentenceBreak::STerm => Self::S_TERM,
            SentenceBreak::Close => Self::CLOSE,
            _ => Self::OTHER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case('.', SentenceMask::A_TERM ; "full stop")]
    #[test_case('?', SentenceMask::S_TERM ; "question mark")]
    #[test_case('!', SentenceMask::S_TERM ; "exclamation mark")]
    #[test_case(')', SentenceMask::CLOSE ; "right paren")]
    #[test_case(',', SentenceMask::S_CONTINUE ; "comma")]
    #[test_case('A', SentenceMask::UPPER ; "upper")]
    #[test_case('a', SentenceMask::LOWER ; "lower")]
    #[test_case('\u{05D0}', SentenceMask::O_LETTER ; "alef")]
    #[test_case('\u{2029}', SentenceMask::SEP ; "paragraph separator")]
    #[test_case(' ', SentenceMask::SP ; "space")]
    #[test_case('#', SentenceMask::OTHER ; "number sign")]
    fn test_sentence_property(ch: char, expected: SentenceMask) {
        assert_eq2!(SentenceMask::of(ch), expected);
    }

    #[test]
    fn test_sb8_skippable() {
        assert!(SentenceMask::SB8_SKIPPABLE.contains(SentenceMask::OTHER));
        assert!(SentenceMask::SB8_SKIPPABLE.contains(SentenceMask::CLOSE | SentenceMask::SP));
        assert!(!SentenceMask::SB8_SKIPPABLE.intersects(SentenceMask::LOWER));
        assert!(!SentenceMask::SB8_SKIPPABLE.intersects(SentenceMask::PARA_SEP));
    }
}
