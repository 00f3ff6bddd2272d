// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BreakProperty, is_extended_pictographic};
use icu_properties::{CodePointMapData,
                     props::{GraphemeClusterBreak, IndicConjunctBreak}};

bitflags::bitflags! {
    /// Grapheme cluster break properties (UAX #29 table 2) plus the two extra
    /// properties the GB9c and GB11 rules look at.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct GraphemeMask: u32 {
        const CR = 1 << 0;
        const LF = 1 << 1;
        const CONTROL = 1 << 2;
        const EXTEND = 1 << 3;
        const ZWJ = 1 << 4;
        const SPACING_MARK = 1 << 5;
        const PREPEND = 1 << 6;
        const L = 1 << 7;
        const V = 1 << 8;
        const T = 1 << 9;
        const LV = 1 << 10;
        const LVT = 1 << 11;
        const REGIONAL_INDICATOR = 1 << 12;
        const EXTENDED_PICTOGRAPHIC = 1 << 13;
        const IN_CB_CONSONANT = 1 << 14;
        const IN_CB_EXTEND = 1 << 15;
        const IN_CB_LINKER = 1 << 16;
        /// `Grapheme_Cluster_Break=Other`.
        const OTHER = 1 << 17;
    }
}

impl GraphemeMask {
    pub const CONTROL_LIKE: Self = Self::CR.union(Self::LF).union(Self::CONTROL);
    pub const EXTEND_OR_ZWJ: Self = Self::EXTEND.union(Self::ZWJ);
    pub const IN_CB_EXTEND_OR_LINKER: Self = Self::IN_CB_EXTEND.union(Self::IN_CB_LINKER);
}

impl BreakProperty for GraphemeMask {
    fn of(ch: char) -> Self {
        let mut mask = match CodePointMapData::<GraphemeClusterBreak>::new().get(ch) {
            GraphemeClusterBreak::CR => Self::CR,
            GraphemeClusterBreak::LF => Self::LF,
            GraphemeClusterBreak::Control => Self::CONTROL,
            GraphemeClusterBreak::Extend => Self::EXTEND,
            GraphemeClusterBreak::ZWJ => Self::ZWJ,
            GraphemeClusterBreak::SpacingMark => Self::SPACING_MARK,
            GraphemeClusterBreak::Prepend => Self::PREPEND,
            GraphemeClusterBreak::L => Self::L,
            GraphemeClusterBreak::V => Self::V,
            GraphemeClusterBreak::T => Self::T,
            GraphemeClusterBreak::LV => Self::LV,
            GraphemeClusterBreak::LVT => Self::LVT,
            GraphemeClusterBreak::RegionalIndicator => Self::REGIONAL_INDICATOR,
            _ => Self::OTHER,
        };
        if is_extended_pictographic(ch) {
            mask.insert(Self::EXTENDED_PICTOGRAPHIC);
        }
        match CodePointMapData::<IndicConjunctBreak>::new().get(ch) {
            IndicConjunctBreak::Consonant => mask.insert(Self::IN_CB_CONSONANT),
            IndicConjunctBreak::Extend => mask.insert(Self::IN_CB_EXTEND),
            IndicConjunctBreak::Linker => mask.insert(Self::IN_CB_LINKER),
            _ => {}
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case('\r', GraphemeMask::CR ; "carriage return")]
    #[test_case('\n', GraphemeMask::LF ; "line feed")]
    #[test_case('\u{0007}', GraphemeMask::CONTROL ; "bell")]
    #[test_case('a', GraphemeMask::OTHER ; "latin letter")]
    #[test_case('\u{1100}', GraphemeMask::L ; "hangul choseong")]
    #[test_case('\u{AC00}', GraphemeMask::LV ; "hangul syllable ga")]
    #[test_case('\u{AC01}', GraphemeMask::LVT ; "hangul syllable gag")]
    #[test_case('\u{1F1E6}', GraphemeMask::REGIONAL_INDICATOR ; "regional indicator a")]
    fn test_single_property(ch: char, expected: GraphemeMask) {
        assert_eq2!(GraphemeMask::of(ch), expected);
    }

    #[test]
    fn test_combined_properties() {
        // Devanagari virama is both a grapheme Extend and the InCB linker.
        let virama = GraphemeMask::of('\u{094D}');
        assert!(virama.contains(GraphemeMask::EXTEND | GraphemeMask::IN_CB_LINKER));

        let ka = GraphemeMask::of('\u{0915}');
        assert!(ka.contains(GraphemeMask::IN_CB_CONSONANT));

        let zwj = GraphemeMask::of('\u{200D}');
        assert!(zwj.contains(GraphemeMask::ZWJ | GraphemeMask::IN_CB_EXTEND));

        let face = GraphemeMask::of('😀');
        assert!(face.contains(GraphemeMask::EXTENDED_PICTOGRAPHIC | GraphemeMask::OTHER));
    }
}
