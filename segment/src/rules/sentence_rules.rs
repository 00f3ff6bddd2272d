// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sentence boundaries, UAX #29 section 5.1.1.

use super::BoundaryRules;
use crate::{LookaheadCursor, SegmentKind, SentenceMask as S};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SentenceRules;

impl BoundaryRules for SentenceRules {
    type Mask = S;
    const KIND: SegmentKind = SegmentKind::Sentence;

    fn scan(cursor: &mut LookaheadCursor<'_, S>) -> usize {
        loop {
            if cursor.at_end() {
                return cursor.position();
            }
            let (char, lookahead) = cursor.advance();

            // SB3, SB4
            if char.intersects(S::PARA_SEP) {
                if char == S::CR && lookahead == S::LF {
                    cursor.advance();
                }
                return cursor.position();
            }

            // SB5
            cursor.absorb(S::IGNORABLE, S::empty());
            let lookahead = cursor.lookahead();
            if cursor.at_end() {
                return cursor.position();
            }

            // SB6
            if char.contains(S::A_TERM) && lookahead.contains(S::NUMERIC) {
                continue;
            }

            // SB7, tested from the letter so the ATerm is only consumed on a match.
            if char.intersects(S::UPPER | S::LOWER) && lookahead.contains(S::A_TERM) {
                cursor.begin();
                cursor.advance();
                cursor.absorb(S::IGNORABLE, S::empty());
                if cursor.lookahead().contains(S::UPPER) {
                    cursor.commit();
                    continue;
                }
                cursor.rollback();
            }

            // SB8
            if char.contains(S::A_TERM) {
                cursor.begin();
                cursor.absorb(S::CLOSE, S::IGNORABLE);
                cursor.absorb(S::SP, S::IGNORABLE);
                cursor.absorb(S::SB8_SKIPPABLE, S::IGNORABLE);
                if cursor.lookahead().contains(S::LOWER) {
                    cursor.commit();
                    continue;
                }
                cursor.rollback();
            }

            // SB8a
            if char.intersects(S::SA_TERM) {
                cursor.begin();
                cursor.absorb(S::CLOSE, S::IGNORABLE);
                cursor.absorb(S::SP, S::IGNORABLE);
                if cursor.lookahead().intersects(S::S_CONTINUE | S::SA_TERM) {
                    cursor.commit();
                    continue;
                }
                cursor.rollback();
            }

            // SB9, SB10, SB11. A trailing ParaSep is left for SB4 on the next pass.
            if char.intersects(S::SA_TERM) {
                cursor.absorb(S::CLOSE, S::IGNORABLE);
                cursor.absorb(S::SP, S::IGNORABLE);
                if cursor.lookahead().intersects(S::PARA_SEP) {
                    continue;
                }
                return cursor.position();
            }

            // SB998
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, rules::all_breaks};
    use test_case::test_case;

    fn sentences(text: &str) -> Vec<&str> {
        let mut start = 0;
        all_breaks::<SentenceRules>(text)
            .into_iter()
            .map(|end| {
                let it = &text[start..end];
                start = end;
                it
            })
            .collect()
    }

    #[test_case("Hello. World.", &["Hello. ", "World."] ; "two sentences")]
    #[test_case("Is it? Yes!", &["Is it? ", "Yes!"] ; "question and exclamation")]
    #[test_case("The U.S.A. is big.", &["The U.S.A. is big."] ; "abbreviation before lowercase")]
    #[test_case("Version 3.14 out.", &["Version 3.14 out."] ; "decimal number")]
    #[test_case("He said (hi.) Then left.", &["He said (hi.) ", "Then left."] ; "close punctuation")]
    #[test_case("etc., and more.", &["etc., and more."] ; "scontinue after aterm")]
    #[test_case("Stop.\r\nGo.", &["Stop.\r\n", "Go."] ; "crlf after terminator")]
    #[test_case("One\nTwo", &["One\n", "Two"] ; "paragraph separator")]
    #[test_case("Wait...  What?", &["Wait...  ", "What?"] ; "ellipsis")]
    #[test_case("e.g. this", &["e.g. this"] ; "lowercase continuation")]
    #[test_case("no terminator", &["no terminator"] ; "single sentence")]
    fn test_sentence_segments(text: &str, expected: &[&str]) {
        assert_eq2!(sentences(text), expected.to_vec());
    }
}
