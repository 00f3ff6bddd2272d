// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{is_extended_pictographic, is_regional_indicator};
use crate::{SegResult, codepoint_to_char};
use icu_properties::{CodePointMapData, props::GeneralCategory};

bitflags::bitflags! {
    /// General category of a codepoint (one of the 30 two letter values) plus the two
    /// emoji related properties word filtering cares about.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct Category: u32 {
        const LU = 1 << 0;
        const LL = 1 << 1;
        const LT = 1 << 2;
        const LM = 1 << 3;
        const LO = 1 << 4;
        const MN = 1 << 5;
        const MC = 1 << 6;
        const ME = 1 << 7;
        const ND = 1 << 8;
        const NL = 1 << 9;
        const NO = 1 << 10;
        const PC = 1 << 11;
        const PD = 1 << 12;
        const PS = 1 << 13;
        const PE = 1 << 14;
        const PI = 1 << 15;
        const PF = 1 << 16;
        const PO = 1 << 17;
        const SM = 1 << 18;
        const SC = 1 << 19;
        const SK = 1 << 20;
        const SO = 1 << 21;
        const ZS = 1 << 22;
        const ZL = 1 << 23;
        const ZP = 1 << 24;
        const CC = 1 << 25;
        const CF = 1 << 26;
        const CS = 1 << 27;
        const CO = 1 << 28;
        const CN = 1 << 29;
        const EXTENDED_PICTOGRAPHIC = 1 << 30;
        const REGIONAL_INDICATOR = 1 << 31;
    }
}

impl Category {
    pub const LETTER: Self = Self::LU
        .union(Self::LL)
        .union(Self::LT)
        .union(Self::LM)
        .union(Self::LO);
    pub const MARK: Self = Self::MN.union(Self::MC).union(Self::ME);
    pub const NUMBER: Self = Self::ND.union(Self::NL).union(Self::NO);
    pub const PUNCTUATION: Self = Self::PC
        .union(Self::PD)
        .union(Self::PS)
        .union(Self::PE)
        .union(Self::PI)
        .union(Self::PF)
        .union(Self::PO);
    pub const SYMBOL: Self = Self::SM.union(Self::SC).union(Self::SK).union(Self::SO);
    pub const SEPARATOR: Self = Self::ZS.union(Self::ZL).union(Self::ZP);
    /// The `C*` categories.
    pub const OTHER: Self = Self::CC
        .union(Self::CF)
        .union(Self::CS)
        .union(Self::CO)
        .union(Self::CN);
    /// Codepoints that have no sensible display width.
    pub const WIDTH_INVALID: Self = Self::CC.union(Self::CS).union(Self::CO).union(Self::CN);

    #[must_use]
    pub fn of(ch: char) -> Self {
        let (bit, _) = general_category_entry(CodePointMapData::<GeneralCategory>::new().get(ch));
        let mut mask = bit;
        if is_extended_pictographic(ch) {
            mask.insert(Self::EXTENDED_PICTOGRAPHIC);
        }
        if is_regional_indicator(ch) {
            mask.insert(Self::REGIONAL_INDICATOR);
        }
        mask
    }
}

/// Two letter general category code for `codepoint`, eg: `"Lu"`, `"Nd"`, `"Cn"`.
///
/// ```
/// use r3bl_segment::category;
///
/// assert_eq!(category(0x41).unwrap(), "Lu");
/// assert_eq!(category(0x20).unwrap(), "Zs");
/// ```
///
/// # Errors
///
/// [`crate::SegmentationError::InvalidCodepoint`] if `codepoint` is not a scalar value.
pub fn category(codepoint: u32) -> SegResult<&'static str> {
    let ch = codepoint_to_char(codepoint)?;
    let (_, code) = general_category_entry(CodePointMapData::<GeneralCategory>::new().get(ch));
    Ok(code)
}

fn general_category_entry(gc: GeneralCategory) -> (Category, &'static str) {
    match gc {
        GeneralCategory::UppercaseLetter => (Category::LU, "Lu"),
        GeneralCategory::LowercaseLetter => (Category::LL, "Ll"),
        GeneralCategory::TitlecaseLetter => (Category::LT, "Lt"),
        GeneralCategory::ModifierLetter => (Category::LM, "Lm"),
        GeneralCategory::OtherLetter => (Category::LO, "Lo"),
        GeneralCategory::NonspacingMark => (Category::MN, "Mn"),
        GeneralCategory::SpacingMark => (Category::MC, "Mc"),
        GeneralCategory::EnclosingMark => (Category::ME, "Me"),
        GeneralCategory::DecimalNumber => (Category::ND, "Nd"),
        GeneralCategory::LetterNumber => (Category::NL, "Nl"),
        GeneralCategory::OtherNumber => (Category::NO, "No"),
        GeneralCategory::ConnectorPunctuation => (Category::PC, "Pc"),
        GeneralCategory::DashPunctuation => (Category::PD, "Pd"),
        GeneralCategory::OpenPunctuation => (Category::PS, "Ps"),
        GeneralCategory::ClosePunctuation => (Category::PE, "Pe"),
        GeneralCategory::InitialPunctuation => (Category::PI, "Pi"),
        GeneralCategory::FinalPunctuation => (Category::PF, "Pf"),
        GeneralCategory::OtherPunctuation => (Category::PO, "Po"),
        GeneralCategory::MathSymbol => (Category::SM, "Sm"),
        GeneralCategory::CurrencySymbol => (Category::SC, "Sc"),
        GeneralCategory::ModifierSymbol => (Category::SK, "Sk"),
        GeneralCategory::OtherSymbol => (Category::SO, "So"),
        GeneralCategory::SpaceSeparator => (Category::ZS, "Zs"),
        GeneralCategory::LineSeparator => (Category::ZL, "Zl"),
        GeneralCategory::ParagraphSeparator => (Category::ZP, "Zp"),
        GeneralCategory::Control => (Category::CC, "Cc"),
        GeneralCategory::Format => (Category::CF, "Cf"),
        GeneralCategory::Surrogate => (Category::CS, "Cs"),
        GeneralCategory::PrivateUse => (Category::CO, "Co"),
        GeneralCategory::Unassigned => (Category::CN, "Cn"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SegmentationError, assert_eq2};
    use test_case::test_case;

    #[test_case(0x41, "Lu" ; "capital a")]
    #[test_case(0x61, "Ll" ; "small a")]
    #[test_case(0x01C5, "Lt" ; "titlecase dz")]
    #[test_case(0x0301, "Mn" ; "combining acute")]
    #[test_case(0x0033, "Nd" ; "digit three")]
    #[test_case(0x2028, "Zl" ; "line separator")]
    #[test_case(0x0007, "Cc" ; "bell")]
    #[test_case(0x200D, "Cf" ; "zero width joiner")]
    #[test_case(0xE000, "Co" ; "private use")]
    #[test_case(0x10FFFF, "Cn" ; "noncharacter")]
    fn test_category(codepoint: u32, expected: &str) {
        assert_eq2!(category(codepoint).unwrap(), expected);
    }

    #[test]
    fn test_category_invalid() {
        assert_eq2!(
            category(0x11_0000),
            Err(SegmentationError::InvalidCodepoint { codepoint: 0x11_0000 })
        );
    }

    #[test]
    fn test_category_mask() {
        assert!(Category::of('a').intersects(Category::LETTER));
        assert!(Category::of('٣').intersects(Category::NUMBER));
        let flag_half = Category::of('🇬');
        assert!(flag_half.contains(Category::SO | Category::REGIONAL_INDICATOR));
        let face = Category::of('🤦');
        assert!(face.contains(Category::SO | Category::EXTENDED_PICTOGRAPHIC));
        assert!(!Category::of('\u{FE0F}').intersects(Category::LETTER | Category::NUMBER));
    }
}
