// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Word boundaries, UAX #29 section 4.1.1.
//!
//! WB4 ("ignore Extend, Format and ZWJ after anything but sot and newlines") is applied
//! with [`LookaheadCursor::absorb`], which keeps `char` on the symbol before the run.
//! The only exception is WB3c: when the run ends in a ZWJ that is followed by an
//! Extended_Pictographic, the two are joined and that ZWJ becomes the left hand symbol.

use super::BoundaryRules;
use crate::{LookaheadCursor, SegmentKind, WordMask as W};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WordRules;

impl BoundaryRules for WordRules {
    type Mask = W;
    const KIND: SegmentKind = SegmentKind::Word;

    #[allow(clippy::too_many_lines)]
    fn scan(cursor: &mut LookaheadCursor<'_, W>) -> usize {
        loop {
            if cursor.at_end() {
                return cursor.position();
            }
            let (char, mut lookahead) = cursor.advance();

            // WB3, WB3a
            if char.intersects(W::NEWLINE_LIKE) {
                if char == W::CR && lookahead == W::LF {
                    cursor.advance();
                }
                return cursor.position();
            }

            // WB3b
            if lookahead.intersects(W::NEWLINE_LIKE) {
                return cursor.position();
            }

            // WB3c
            if char.contains(W::ZWJ) && lookahead.contains(W::EXTENDED_PICTOGRAPHIC) {
                continue;
            }

            // WB3d
            if char.contains(W::W_SEG_SPACE) && lookahead.contains(W::W_SEG_SPACE) {
                continue;
            }

            // WB4
            if lookahead.intersects(W::IGNORABLE) {
                let last = cursor.absorb(W::IGNORABLE, W::empty());
                lookahead = cursor.lookahead();
                if last.is_some_and(|it| it.contains(W::ZWJ))
                    && lookahead.contains(W::EXTENDED_PICTOGRAPHIC)
                {
                    continue;
                }
                if cursor.at_end() || lookahead.intersects(W::NEWLINE_LIKE) {
                    return cursor.position();
                }
            }

            // WB5
            if char.intersects(W::AH_LETTER) && lookahead.intersects(W::AH_LETTER) {
                continue;
            }

            // WB6, WB7
            if char.intersects(W::AH_LETTER)
                && lookahead.intersects(W::MID_LETTER | W::MID_NUM_LET_Q)
                && joins_across_one(cursor, W::AH_LETTER)
            {
                continue;
            }

            // WB7a
            if char.contains(W::HEBREW_LETTER) && lookahead.contains(W::SINGLE_QUOTE) {
                continue;
            }

            // WB7b, WB7c
            if char.contains(W::HEBREW_LETTER)
                && lookahead.contains(W::DOUBLE_QUOTE)
                && joins_across_one(cursor, W::HEBREW_LETTER)
            {
                continue;
            }

            // WB8, WB9, WB10
            if char.intersects(W::NUMERIC | W::AH_LETTER)
                && lookahead.intersects(W::NUMERIC | W::AH_LETTER)
                && (char.contains(W::NUMERIC) || lookahead.contains(W::NUMERIC))
            {
                continue;
            }

            // WB11, WB12
            if char.contains(W::NUMERIC)
                && lookahead.intersects(W::MID_NUM | W::MID_NUM_LET_Q)
                && joins_across_one(cursor, W::NUMERIC)
            {
                continue;
            }

            // WB13
            if char.contains(W::KATAKANA) && lookahead.contains(W::KATAKANA) {
                continue;
            }

            // WB13a
            if char.intersects(W::AH_LETTER | W::NUMERIC | W::KATAKANA | W::EXTEND_NUM_LET)
                && lookahead.contains(W::EXTEND_NUM_LET)
            {
                continue;
            }

            // WB13b
            if char.contains(W::EXTEND_NUM_LET)
                && lookahead.intersects(W::AH_LETTER | W::NUMERIC | W::KATAKANA)
            {
                continue;
            }

            // WB15, WB16
            if char.contains(W::REGIONAL_INDICATOR) && lookahead.contains(W::REGIONAL_INDICATOR)
            {
                cursor.advance();
                let last = cursor.absorb(W::IGNORABLE, W::empty());
                if last.is_some_and(|it| it.contains(W::ZWJ))
                    && cursor.lookahead().contains(W::EXTENDED_PICTOGRAPHIC)
                {
                    continue;
                }
                return cursor.position();
            }

            // WB999
            return cursor.position();
        }
    }
}

/// `X × Mid Y` and `X Mid × Y`: step over the one middle symbol (and anything WB4
/// ignores after it) and check that `right` follows. On a match the cursor is left on
/// the middle symbol, otherwise it is restored.
fn joins_across_one(cursor: &mut LookaheadCursor<'_, W>, right: W) -> bool {
    cursor.begin();
    cursor.advance();
    cursor.absorb(W::IGNORABLE, W::empty());
    if cursor.lookahead().intersects(right) {
        cursor.commit();
        true
    } else {
        cursor.rollback();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, rules::all_breaks};
    use test_case::test_case;

    fn words(text: &str) -> Vec<&str> {
        let mut start = 0;
        all_breaks::<WordRules>(text)
            .into_iter()
            .map(|end| {
                let it = &text[start..end];
                start = end;
                it
            })
            .collect()
    }

    #[test_case("hello world", &["hello", " ", "world"] ; "two words")]
    #[test_case("a  b", &["a", "  ", "b"] ; "space run")]
    #[test_case("can't stop", &["can't", " ", "stop"] ; "apostrophe")]
    #[test_case("a.b.", &["a.b", "."] ; "mid num let")]
    #[test_case("a:", &["a", ":"] ; "trailing mid letter")]
    #[test_case("3.14", &["3.14"] ; "decimal")]
    #[test_case("1,000,000", &["1,000,000"] ; "thousands")]
    #[test_case("1,", &["1", ","] ; "trailing comma")]
    #[test_case("a1b2", &["a1b2"] ; "alphanumeric")]
    #[test_case("snake_case_1", &["snake_case_1"] ; "extend num let")]
    #[test_case("\u{30A2}\u{30A4}", &["\u{30A2}\u{30A4}"] ; "katakana")]
    #[test_case("\u{05D0}\"\u{05D1}", &["\u{05D0}\"\u{05D1}"] ; "hebrew gershayim")]
    #[test_case("\u{05D0}'", &["\u{05D0}'"] ; "hebrew geresh")]
    #[test_case("a\r\nb", &["a", "\r\n", "b"] ; "crlf")]
    #[test_case("e\u{0301}t\u{0301}", &["e\u{0301}t\u{0301}"] ; "combining marks ignored")]
    #[test_case("a\u{00AD}b", &["a\u{00AD}b"] ; "soft hyphen ignored")]
    #[test_case("a\u{0301}.\u{0301}b", &["a\u{0301}.\u{0301}b"] ; "marks around mid")]
    #[test_case("🇦🇧🇨", &["🇦🇧", "🇨"] ; "regional indicators")]
    #[test_case("a\u{200D}👍", &["a\u{200D}👍"] ; "zwj joins pictograph")]
    #[test_case("\u{200D}👍", &["\u{200D}👍"] ; "leading zwj")]
    #[test_case("👍🏽!", &["👍🏽", "!"] ; "modifier absorbed")]
    #[test_case("(abc)", &["(", "abc", ")"] ; "parens")]
    fn test_word_segments(text: &str, expected: &[&str]) {
        assert_eq2!(words(text), expected.to_vec());
    }
}
