// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Extended grapheme cluster boundaries, UAX #29 section 3.1.1.

use super::BoundaryRules;
use crate::{GraphemeMask as G, LookaheadCursor, SegmentKind};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct GraphemeRules;

impl BoundaryRules for GraphemeRules {
    type Mask = G;
    const KIND: SegmentKind = SegmentKind::Grapheme;

    fn scan(cursor: &mut LookaheadCursor<'_, G>) -> usize {
        loop {
            // GB2
            if cursor.at_end() {
                return cursor.position();
            }
            let (char, lookahead) = cursor.advance();

            // GB3, GB4, GB5
            if char.intersects(G::CONTROL_LIKE) {
                if !cursor.accepted().is_empty() {
                    return cursor.char_start();
                }
                if char == G::CR && lookahead == G::LF {
                    cursor.advance();
                }
                return cursor.position();
            }

            // GB6, GB7, GB8
            if char.contains(G::L) && lookahead.intersects(G::L | G::V | G::LV | G::LVT) {
                continue;
            }
            if char.intersects(G::LV | G::V) && lookahead.intersects(G::V | G::T) {
                continue;
            }
            if char.intersects(G::LVT | G::T) && lookahead.contains(G::T) {
                continue;
            }

            // GB9a, GB9b
            if lookahead.contains(G::SPACING_MARK) || char.contains(G::PREPEND) {
                continue;
            }

            // GB9c
            if char.contains(G::IN_CB_CONSONANT)
                && lookahead.intersects(G::IN_CB_EXTEND_OR_LINKER)
            {
                cursor.begin();
                let mut seen_linker = false;
                while cursor.lookahead().intersects(G::IN_CB_EXTEND_OR_LINKER) {
                    let (it, _) = cursor.advance();
                    seen_linker |= it.contains(G::IN_CB_LINKER);
                }
                if seen_linker && cursor.lookahead().contains(G::IN_CB_CONSONANT) {
                    cursor.commit();
                    continue;
                }
                cursor.rollback();
            }

            // GB11
            if char.contains(G::EXTENDED_PICTOGRAPHIC) && lookahead.intersects(G::EXTEND_OR_ZWJ)
            {
                cursor.begin();
                cursor.absorb(G::EXTEND, G::empty());
                if cursor.lookahead().contains(G::ZWJ) {
                    cursor.advance();
                    if cursor.lookahead().contains(G::EXTENDED_PICTOGRAPHIC) {
                        cursor.commit();
                        continue;
                    }
                }
                cursor.rollback();
            }

            // GB9
            if lookahead.intersects(G::EXTEND_OR_ZWJ) {
                continue;
            }

            // GB12, GB13
            if char.contains(G::REGIONAL_INDICATOR) && lookahead.contains(G::REGIONAL_INDICATOR) {
                let (_, after_pair) = cursor.advance();
                if after_pair.intersects(G::EXTEND_OR_ZWJ | G::SPACING_MARK) {
                    continue;
                }
                return cursor.position();
            }

            // GB999
            return cursor.position();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, rules::all_breaks};
    use test_case::test_case;

    #[test_case("abc", &[1, 2, 3] ; "letters")]
    #[test_case("\r\n", &[2] ; "crlf")]
    #[test_case("\n\r", &[1, 2] ; "lf cr")]
    #[test_case("a\r\nb", &[1, 3, 4] ; "crlf between letters")]
    #[test_case("e\u{0301}x", &[3, 4] ; "combining acute")]
    #[test_case("\u{0301}a", &[2, 3] ; "leading combining mark")]
    #[test_case("\u{1100}\u{1161}\u{11A8}", &[9] ; "hangul l v t")]
    #[test_case("\u{AC00}\u{11A8}a", &[6, 7] ; "hangul lv t")]
    #[test_case("\u{0600}a", &[3] ; "prepend joins next")]
    #[test_case("\u{0600}\r\n", &[2, 4] ; "prepend does not join control")]
    #[test_case("\u{0915}\u{094D}\u{0937}", &[9] ; "conjunct ksha")]
    #[test_case("\u{0915}\u{093C}\u{094D}\u{0937}x", &[12, 13] ; "conjunct with nukta")]
    #[test_case("\u{0915}\u{093C}\u{0937}", &[6, 9] ; "no linker no conjunct")]
    #[test_case("👨\u{200D}👩\u{200D}👧", &[18] ; "zwj family")]
    #[test_case("👍🏽👍", &[8, 12] ; "skin tone modifier")]
    #[test_case("a\u{200D}👍", &[4, 8] ; "zwj after letter")]
    #[test_case("🇦🇧", &[8] ; "regional indicator pair")]
    #[test_case("🇦🇧🇨", &[8, 12] ; "odd regional indicators")]
    #[test_case("🇦🇧\u{0301}🇨🇩", &[10, 18] ; "pair then extend")]
    #[test_case("\u{0E01}\u{0E33}", &[6] ; "thai spacing mark")]
    fn test_grapheme_breaks(text: &str, expected: &[usize]) {
        assert_eq2!(all_breaks::<GraphemeRules>(text), expected.to_vec());
    }
}
