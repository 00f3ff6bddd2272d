// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Category, SegResult, Segments, WordRules};
use std::iter::FusedIterator;

/// Decides which word segments count as words.
///
/// Word boundaries tile the whole text, including the spaces and punctuation between
/// words. A segment is reported as a word only if at least one of its codepoints falls in
/// an enabled category; everything else is filler that is stepped over but not yielded.
///
/// The default enables letters and numbers. A filter with nothing enabled accepts no
/// segment. Use [`crate::iter_for`] with [`crate::SegmentKind::Word`] for the raw,
/// unfiltered segments.
///
/// ```
/// use r3bl_segment::{WordFilter, word_iter};
///
/// let text = "(abc)(1)(🇬🇧)";
/// let words = word_iter(text, 0, WordFilter::default()).unwrap();
/// assert_eq!(words.collect::<Vec<_>>(), vec!["abc", "1"]);
///
/// let flags = WordFilter::none().regional_indicator(true);
/// let words = word_iter(text, 0, flags).unwrap();
/// assert_eq!(words.collect::<Vec<_>>(), vec!["🇬🇧"]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WordFilter {
    mask: Category,
}

impl Default for WordFilter {
    fn default() -> Self { Self::none().letter(true).number(true) }
}

impl WordFilter {
    #[must_use]
    pub fn none() -> Self {
        Self {
            mask: Category::empty(),
        }
    }

    #[must_use]
    pub fn letter(self, enabled: bool) -> Self { self.toggle(Category::LETTER, enabled) }

    #[must_use]
    pub fn number(self, enabled: bool) -> Self { self.toggle(Category::NUMBER, enabled) }

    /// Extended_Pictographic codepoints.
    #[must_use]
    pub fn emoji(self, enabled: bool) -> Self {
        self.toggle(Category::EXTENDED_PICTOGRAPHIC, enabled)
    }

    #[must_use]
    pub fn regional_indicator(self, enabled: bool) -> Self {
        self.toggle(Category::REGIONAL_INDICATOR, enabled)
    }

    #[must_use]
    pub fn mask(&self) -> Category { self.mask }

    #[must_use]
    pub fn accepts(&self, segment: &str) -> bool {
        segment.chars().any(|ch| Category::of(ch).intersects(self.mask))
    }

    fn toggle(mut self, category: Category, enabled: bool) -> Self {
        self.mask.set(category, enabled);
        self
    }
}

/// Word segments that pass a [`WordFilter`], with their byte spans.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    segments: Segments<'a, WordRules>,
    filter: WordFilter,
}

impl<'a> Words<'a> {
    /// # Errors
    ///
    /// See [`Segments::new`].
    pub fn new(text: &'a str, offset: usize, filter: WordFilter) -> SegResult<Self> {
        Ok(Self {
            segments: Segments::new(text, offset)?,
            filter,
        })
    }

    /// Next accepted `(start, end)` span, skipping filler.
    pub fn next_span(&mut self) -> Option<(usize, usize)> {
        let text = self.segments.text();
        loop {
            let (start, end) = self.segments.next_span()?;
            if self.filter.accepts(&text[start..end]) {
                return Some((start, end));
            }
        }
    }

    #[must_use]
    pub fn with_offsets(self) -> WordsWithOffsets<'a> { WordsWithOffsets(self) }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.segments.text();
        self.next_span().map(|(start, end)| &text[start..end])
    }
}

impl FusedIterator for Words<'_> {}

#[derive(Debug, Clone)]
pub struct WordsWithOffsets<'a>(Words<'a>);

impl<'a> Iterator for WordsWithOffsets<'a> {
    type Item = (usize, usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.0.segments.text();
        self.0
            .next_span()
            .map(|(start, end)| (start, end, &text[start..end]))
    }
}

impl FusedIterator for WordsWithOffsets<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    const SAMPLE: &str = "(abc)(1)(🤦🏼\u{200D}♂\u{FE0F})(🇬🇧)";

    fn words(filter: WordFilter) -> Vec<&'static str> {
        Words::new(SAMPLE, 0, filter).unwrap().collect()
    }

    #[test_case(WordFilter::none().letter(true), &["abc"] ; "letter only")]
    #[test_case(WordFilter::none().number(true), &["1"] ; "number only")]
    #[test_case(WordFilter::default(), &["abc", "1"] ; "letter and number")]
    #[test_case(
        WordFilter::default().emoji(true),
        &["abc", "1", "🤦🏼\u{200D}♂\u{FE0F}"] ;
        "with emoji"
    )]
    #[test_case(WordFilter::none().regional_indicator(true), &["🇬🇧"] ; "flags only")]
    #[test_case(WordFilter::none(), &[] ; "nothing enabled")]
    fn test_filtered_words(filter: WordFilter, expected: &[&str]) {
        assert_eq2!(words(filter), expected.to_vec());
    }

    #[test]
    fn test_toggle_off() {
        let filter = WordFilter::default().letter(false);
        assert_eq2!(filter, WordFilter::none().number(true));
        assert!(!filter.accepts("abc"));
        assert!(filter.accepts("a1"));
    }

    #[test]
    fn test_with_offsets() {
        let spans = Words::new("a, b", 0, WordFilter::default())
            .unwrap()
            .with_offsets()
            .collect::<Vec<_>>();
        assert_eq2!(spans, vec![(0, 1, "a"), (3, 4, "b")]);
    }
}
