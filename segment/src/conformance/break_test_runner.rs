// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BreakTestCase, SegResult, SegmentKind, iter_for};
use std::fmt::{self, Display, Write as _};

/// A case whose computed boundaries differ from the expected ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakTestMismatch {
    pub line_number: usize,
    pub text: String,
    pub expected: Vec<usize>,
    pub actual: Vec<usize>,
}

impl BreakTestMismatch {
    /// The codepoints of the case in the file's notation, with the computed boundaries:
    /// `÷ 0061 × 0308 ÷`.
    #[must_use]
    pub fn render_actual(&self) -> String {
        let mut acc = String::from("÷");
        for (start, ch) in self.text.char_indices() {
            if start > 0 {
                acc.push_str(if self.actual.contains(&start) { " ÷" } else { " ×" });
            }
            let _ = write!(acc, " {:04X}", u32::from(ch));
        }
        acc.push_str(" ÷");
        acc
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakTestReport {
    pub kind: SegmentKind,
    pub total: usize,
    pub mismatches: Vec<BreakTestMismatch>,
}

impl BreakTestReport {
    #[must_use]
    pub fn passed(&self) -> usize { self.total - self.mismatches.len() }

    #[must_use]
    pub fn is_success(&self) -> bool { self.mismatches.is_empty() }

    /// The summary line followed by the first `max_failures` mismatches.
    #[must_use]
    pub fn describe_failures(&self, max_failures: usize) -> String {
        let mut acc = format!("{self}\n");
        for mismatch in self.mismatches.iter().take(max_failures) {
            let _ = writeln!(
                acc,
                "line {}: got {}\n  expected {:?} actual {:?}",
                mismatch.line_number,
                mismatch.render_actual(),
                mismatch.expected,
                mismatch.actual
            );
        }
        acc
    }
}

impl Display for BreakTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} cases pass",
            self.kind,
            self.passed(),
            self.total
        )
    }
}

/// Every boundary of `kind` in `text` after offset 0.
///
/// # Errors
///
/// Never for offset 0; the `Result` comes from [`iter_for`].
pub fn compute_breaks(kind: SegmentKind, text: &str) -> SegResult<Vec<usize>> {
    Ok(iter_for(kind, text, 0)?.map(|(_, end, _)| end).collect())
}

/// Run each case through the `kind` segmenter and collect the ones that disagree.
///
/// # Errors
///
/// See [`compute_breaks`].
pub fn run_break_test(kind: SegmentKind, cases: &[BreakTestCase]) -> SegResult<BreakTestReport> {
    let mut mismatches = vec![];
    for case in cases {
        let actual = compute_breaks(kind, &case.text)?;
        if actual != case.breaks {
            tracing::debug!(%kind, line_number = case.line_number, ?actual, expected = ?case.breaks, "break test mismatch");
            mismatches.push(BreakTestMismatch {
                line_number: case.line_number,
                text: case.text.clone(),
                expected: case.breaks.clone(),
                actual,
            });
        }
    }
    let report = BreakTestReport {
        kind,
        total: cases.len(),
        mismatches,
    };
    tracing::debug!(%report, "break test finished");
    Ok(report)
}
