// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BreakProperty, is_extended_pictographic};
use icu_properties::{CodePointMapData,
                     props::{EastAsianWidth, GeneralCategory, LineBreak}};

bitflags::bitflags! {
    /// Line breaking classes (UAX #14 table 1) after LB1 resolution, plus the auxiliary
    /// properties individual rules test.
    ///
    /// LB1 is applied at lookup time: `AI`, `SG` and `XX` become `AL`, `SA` becomes
    /// `CM` for nonspacing and spacing marks and `AL` otherwise, and `CJ` becomes `NS`.
    /// None of those unresolved classes has a bit.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct LineMask: u64 {
        const BK = 1 << 0;
        const CR = 1 << 1;
        const LF = 1 << 2;
        const NL = 1 << 3;
        const SP = 1 << 4;
        const ZW = 1 << 5;
        const WJ = 1 << 6;
        const GL = 1 << 7;
        const CM = 1 << 8;
        const ZWJ = 1 << 9;
        const CL = 1 << 10;
        const CP = 1 << 11;
        const EX = 1 << 12;
        const SY = 1 << 13;
        const IS = 1 << 14;
        const OP = 1 << 15;
        const QU = 1 << 16;
        const NS = 1 << 17;
        const IN = 1 << 18;
        const HY = 1 << 19;
        const BA = 1 << 20;
        const BB = 1 << 21;
        const B2 = 1 << 22;
        const CB = 1 << 23;
        const AL = 1 << 24;
        const HL = 1 << 25;
        const NU = 1 << 26;
        const PR = 1 << 27;
        const PO = 1 << 28;
        const ID = 1 << 29;
        const EB = 1 << 30;
        const EM = 1 << 31;
        const JL = 1 << 32;
        const JV = 1 << 33;
        const JT = 1 << 34;
        const H2 = 1 << 35;
        const H3 = 1 << 36;
        const RI = 1 << 37;
        const AK = 1 << 38;
        const AP = 1 << 39;
        const AS = 1 << 40;
        const VF = 1 << 41;
        const VI = 1 << 42;
        /// Unambiguous hyphen (U+2010, U+05BE), new in Unicode 17.
        const HH = 1 << 43;
        /// General category `Pi`.
        const PI = 1 << 44;
        /// General category `Pf`.
        const PF = 1 << 45;
        /// East_Asian_Width `F`, `W` or `H`.
        const EAST_ASIAN = 1 << 46;
        /// Extended_Pictographic and unassigned.
        const EXT_PICT_UNASSIGNED = 1 << 47;
        /// U+25CC DOTTED CIRCLE.
        const DOTTED_CIRCLE = 1 << 48;
    }
}

impl LineMask {
    /// Mandatory break after these (LB4, LB5).
    pub const HARD: Self = Self::BK.union(Self::CR).union(Self::LF).union(Self::NL);
    pub const CM_OR_ZWJ: Self = Self::CM.union(Self::ZWJ);
    pub const AL_OR_HL: Self = Self::AL.union(Self::HL);
    pub const CLOSING: Self = Self::CL.union(Self::CP);
    pub const PREFIX_OR_POSTFIX: Self = Self::PR.union(Self::PO);
    /// `HY` or `HH` (LB20a, LB21a).
    pub const HYPHENS: Self = Self::HY.union(Self::HH);
    pub const KOREAN: Self = Self::JL
        .union(Self::JV)
        .union(Self::JT)
        .union(Self::H2)
        .union(Self::H3);
    /// `AK`, `AS` or the dotted circle (LB28a).
    pub const AKSARA_BASE: Self = Self::AK.union(Self::AS).union(Self::DOTTED_CIRCLE);

    /// Every bit that names a class, ie: everything except the auxiliary properties.
    #[must_use]
    pub fn class(self) -> Self {
        self.difference(
            Self::PI
                | Self::PF
                | Self::EAST_ASIAN
                | Self::EXT_PICT_UNASSIGNED
                | Self::DOTTED_CIRCLE,
        )
    }
}

impl BreakProperty for LineMask {
    fn of(ch: char) -> Self {
        let gc = CodePointMapData::<GeneralCategory>::new().get(ch);
        let mut mask = resolved_class(CodePointMapData::<LineBreak>::new().get(ch), gc);
        match gc {
            GeneralCategory::InitialPunctuation => mask.insert(Self::PI),
            GeneralCategory::FinalPunctuation => mask.insert(Self::PF),
            GeneralCategory::Unassigned if is_extended_pictographic(ch) => {
                mask.insert(Self::EXT_PICT_UNASSIGNED);
            }
            _ => {}
        }
        if matches!(
            CodePointMapData::<EastAsianWidth>::new().get(ch),
            EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Halfwidth
        ) {
            mask.insert(Self::EAST_ASIAN);
        }
        if ch == '\u{25CC}' {
            mask.insert(Self::DOTTED_CIRCLE);
        }
        mask
    }
}

/// LB1.
fn resolved_class(lb: LineBreak, gc: GeneralCategory) -> LineMask {
    match lb {
        LineBreak::MandatoryBreak => LineMask::BK,
        LineBreak::CarriageReturn => LineMask::CR,
        LineBreak::LineFeed => LineMask::LF,
        LineBreak::NextLine => LineMask::NL,
        LineBreak::Space => LineMask::SP,
        LineBreak::ZWSpace => LineMask::ZW,
        LineBreak::WordJoiner => LineMask::WJ,
        LineBreak::Glue => LineMask::GL,
        LineBreak::CombiningMark => LineMask::CM,
        LineBreak::ZWJ => LineMask::ZWJ,
        LineBreak::ClosePunctuation => LineMask::CL,
        LineBreak::CloseParenthesis => LineMask::CP,
        LineBreak::Exclamation => LineMask::EX,
        LineBreak::BreakSymbols => LineMask::SY,
        LineBreak::InfixNumeric => LineMask::IS,
        LineBreak::OpenPunctuation => LineMask::OP,
        LineBreak::Quotation => LineMask::QU,
        LineBreak::Nonstarter | LineBreak::ConditionalJapaneseStarter => LineMask::NS,
        LineBreak::Inseparable => LineMask::IN,
        LineBreak::Hyphen => LineMask::HY,
        LineBreak::BreakAfter => LineMask::BA,
        LineBreak::UnambiguousHyphen => LineMask::HH,
        LineBreak::BreakBefore => LineMask::BB,
        LineBreak::BreakBoth => LineMask::B2,
        LineBreak::ContingentBreak => LineMask::CB,
        LineBreak::HebrewLetter => LineMask::HL,
        LineBreak::Numeric => LineMask::NU,
        LineBreak::PrefixNumeric => LineMask::PR,
        LineBreak::PostfixNumeric => LineMask::PO,
        LineBreak::Ideographic => LineMask::ID,
        LineBreak::EBase => LineMask::EB,
        LineBreak::EModifier => LineMask::EM,
        LineBreak::JL => LineMask::JL,
        LineBreak::JV => LineMask::JV,
        LineBreak::JT => LineMask::JT,
        LineBreak::H2 => LineMask::H2,
        LineBreak::H3 => LineMask::H3,
        LineBreak::RegionalIndicator => LineMask::RI,
        LineBreak::Aksara => LineMask::AK,
        LineBreak::AksaraPrebase => LineMask::AP,
        LineBreak::AksaraStart => LineMask::AS,
        LineBreak::ViramaFinal => LineMask::VF,
        LineBreak::Virama => LineMask::VI,
        LineBreak::ComplexContext
            if matches!(
                gc,
                GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark
            ) =>
        {
            LineMask::CM
        }
        // AL, AI, SG, XX and the rest of SA.
        _ => LineMask::AL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case('a', LineMask::AL ; "latin")]
    #[test_case(' ', LineMask::SP ; "space")]
    #[test_case('\n', LineMask::LF ; "line feed")]
    #[test_case('\u{000C}', LineMask::BK ; "form feed")]
    #[test_case('\u{0085}', LineMask::NL ; "next line")]
    #[test_case('\u{200B}', LineMask::ZW ; "zero width space")]
    #[test_case('\u{2060}', LineMask::WJ ; "word joiner")]
    #[test_case('\u{00A0}', LineMask::GL ; "no break space")]
    #[test_case('(', LineMask::OP ; "left paren")]
    #[test_case(')', LineMask::CP ; "right paren")]
    #[test_case('}', LineMask::CL ; "right brace")]
    #[test_case('!', LineMask::EX ; "exclamation")]
    #[test_case('/', LineMask::SY ; "solidus")]
    #[test_case(',', LineMask::IS ; "comma")]
    #[test_case('-', LineMask::HY ; "hyphen minus")]
    #[test_case('5', LineMask::NU ; "digit")]
    #[test_case('$', LineMask::PR ; "dollar")]
    #[test_case('%', LineMask::PO ; "percent")]
    #[test_case('\u{05D0}', LineMask::HL ; "alef")]
    #[test_case('\u{0301}', LineMask::CM ; "combining acute")]
    #[test_case('\u{1F1E6}', LineMask::RI ; "regional indicator")]
    #[test_case('\u{2010}', LineMask::HH ; "hyphen")]
    #[test_case('\u{05BE}', LineMask::HH ; "hebrew maqaf")]
    fn test_line_class(ch: char, expected: LineMask) {
        assert_eq2!(LineMask::of(ch).class(), expected);
    }

    #[test]
    fn test_lb1_resolution() {
        // CJ (small hiragana a) resolves to NS.
        assert_eq2!(LineMask::of('\u{3041}').class(), LineMask::NS);
        // SA: Thai consonant is AL, Thai vowel sign (Mn) is CM.
        assert_eq2!(LineMask::of('\u{0E01}').class(), LineMask::AL);
        assert_eq2!(LineMask::of('\u{0E31}').class(), LineMask::CM);
        // AI (section sign) resolves to AL.
        assert_eq2!(LineMask::of('\u{00A7}').class(), LineMask::AL);
    }

    #[test]
    fn test_auxiliary_bits() {
        let left_quote = LineMask::of('\u{201C}');
        assert!(left_quote.contains(LineMask::QU | LineMask::PI));
        let right_quote = LineMask::of('\u{201D}');
        assert!(right_quote.contains(LineMask::QU | LineMask::PF));
        assert!(LineMask::of('\u{4E00}').contains(LineMask::ID | LineMask::EAST_ASIAN));
        assert!(LineMask::of('\u{25CC}').contains(LineMask::AL | LineMask::DOTTED_CIRCLE));
        assert!(!LineMask::of('\u{2010}').intersects(LineMask::BA));
        assert!(!LineMask::of('a').intersects(LineMask::EAST_ASIAN));
    }
}
