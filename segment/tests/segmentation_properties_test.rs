// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties every segmenter has to satisfy on arbitrary text.

use pretty_assertions::assert_eq;
use r3bl_segment::{BreakOpportunity, SegmentKind, WordFilter, grapheme_iter,
                   grapheme_length, grapheme_next_break, iter_for,
                   line_next_break_opportunity, next_break_for, word_iter,
                   word_iter_with_offsets};
use strum::IntoEnumIterator;

const SAMPLES: &[&str] = &[
    "",
    "a",
    "Hello, world! How are you? I'm fine.\r\nNext line.",
    "Mr. Smith paid $3.50 for 2,000 items (approx.) at 10:30.",
    "🇯🇵🇺🇸🇫 flags, 👨‍👩‍👧 family, 👋🏽 wave, e\u{0301} accent",
    "日本語のテキスト。次の文。",
    "שלום \"עולם\" 123",
    "\u{0915}\u{094D}\u{0924} \u{1100}\u{1161}\u{11A8}",
    "tab\there\u{000B}vt\u{0085}nel\u{2028}ls\u{2029}ps",
    "  leading and trailing   ",
    "\u{200D}\u{0308}\u{00AD}",
];

fn spans(kind: SegmentKind, text: &str) -> Vec<(usize, usize)> {
    iter_for(kind, text, 0)
        .unwrap()
        .map(|(start, end, _)| (start, end))
        .collect()
}

#[test]
fn test_segments_tile_the_text() {
    for kind in SegmentKind::iter() {
        for text in SAMPLES {
            let spans = spans(kind, text);
            let mut expected_start = 0;
            for &(start, end) in &spans {
                assert_eq!(start, expected_start, "{kind} {text:?}");
                assert!(end > start, "{kind} {text:?}");
                expected_start = end;
            }
            assert_eq!(expected_start, text.len(), "{kind} {text:?}");
        }
    }
}

#[test]
fn test_restart_at_any_boundary() {
    for kind in SegmentKind::iter() {
        for text in SAMPLES {
            let spans = spans(kind, text);
            for &(start, end) in &spans {
                assert_eq!(next_break_for(kind, text, start).unwrap(), end, "{kind} {text:?}");
                // Iterating from a boundary gives the tail of the full iteration.
                let tail = iter_for(kind, text, start)
                    .unwrap()
                    .map(|(start, end, _)| (start, end))
                    .collect::<Vec<_>>();
                let expected = spans
                    .iter()
                    .copied()
                    .filter(|(it, _)| *it >= start)
                    .collect::<Vec<_>>();
                assert_eq!(tail, expected, "{kind} {text:?}");
            }
        }
    }
}

#[test]
fn test_end_of_text() {
    for kind in SegmentKind::iter() {
        for text in SAMPLES {
            assert_eq!(next_break_for(kind, text, text.len()).unwrap(), text.len());
            assert_eq!(iter_for(kind, text, text.len()).unwrap().count(), 0);
        }
    }
    assert_eq!(
        line_next_break_opportunity("abc", 3).unwrap(),
        (3, BreakOpportunity::Mandatory)
    );
}

#[test]
fn test_crlf_is_never_split() {
    let text = "a\r\nb\r\n\r\nc";
    for kind in SegmentKind::iter() {
        for (_, end) in spans(kind, text) {
            let split = text[..end].ends_with('\r') && text[end..].starts_with('\n');
            assert!(!split, "{kind} split CR LF at {end}");
        }
    }
}

#[test]
fn test_regional_indicators_pair_from_the_left() {
    let text = "🇦🇧🇨🇩🇪";
    assert_eq!(
        grapheme_iter(text, 0).unwrap().collect::<Vec<_>>(),
        vec!["🇦🇧", "🇨🇩", "🇪"]
    );
    // Restarting in the middle of a pair re-pairs from the restart point.
    assert_eq!(grapheme_next_break(text, 4).unwrap(), 12);
}

#[test]
fn test_grapheme_length_matches_iteration() {
    for text in SAMPLES {
        assert_eq!(
            grapheme_length(text, 0).unwrap(),
            grapheme_iter(text, 0).unwrap().count()
        );
    }
}

#[test]
fn test_word_filter() {
    let text = "(abc)(1)(🤦🏼‍♂️)(🇬🇧)";
    let words = |filter| word_iter(text, 0, filter).unwrap().collect::<Vec<_>>();

    assert_eq!(words(WordFilter::default()), vec!["abc", "1"]);
    assert_eq!(words(WordFilter::none().emoji(true)), vec!["🤦🏼‍♂️"]);
    assert_eq!(words(WordFilter::none().regional_indicator(true)), vec!["🇬🇧"]);
    assert_eq!(
        words(WordFilter::default().emoji(true).regional_indicator(true)),
        vec!["abc", "1", "🤦🏼‍♂️", "🇬🇧"]
    );
    assert!(words(WordFilter::none()).is_empty());

    // Offsets of filtered words still index the original text.
    for (start, end, word) in word_iter_with_offsets(text, 0, WordFilter::default()).unwrap()
    {
        assert_eq!(&text[start..end], word);
    }
}

#[test]
fn test_concurrent_use() {
    let text = SAMPLES[2];
    let expected = spans(SegmentKind::Sentence, text);
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(spans(SegmentKind::Sentence, text), expected));
        }
    });
}
