// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLICommand, SegCommandError, word_filter_from};
use r3bl_segment::{SegmentKind, WordFilter, category, category_name, codepoint_to_char,
                   iter_for, line_iter_with_opportunities, parse_break_test,
                   run_break_test, text_width, text_width_substr, word_iter_with_offsets};
use std::io::{Read as _, stdin};

/// Run one subcommand and return what it wants printed on stdout.
///
/// # Errors
///
/// Library errors (bad offsets, bad codepoints, malformed test files), I/O errors, and
/// [`SegCommandError::BreakTestFailed`] when a conformance run has mismatches.
pub fn handle_seg_command(command: CLICommand) -> miette::Result<String> {
    tracing::debug!(?command, "handle command");
    match command {
        CLICommand::Show {
            kind,
            text,
            offsets,
            filter,
        } => {
            let text = text_or_stdin(text)?;
            let filter = word_filter_from(&filter);
            show(kind, &text, offsets, filter)
        }
        CLICommand::Codepoint { codepoints } => codepoint_report(&codepoints),
        CLICommand::Breaktest {
            kind,
            file,
            max_failures,
        } => {
            let source = std::fs::read_to_string(&file).map_err(|source| {
                SegCommandError::ReadFailed {
                    path: file.clone(),
                    source,
                }
            })?;
            breaktest(kind, &source, max_failures)
        }
        CLICommand::Width { text, columns } => {
            let text = text_or_stdin(text)?;
            width(&text, columns)
        }
    }
}

fn text_or_stdin(text: Option<String>) -> miette::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut acc = String::new();
            stdin()
                .read_to_string(&mut acc)
                .map_err(|source| SegCommandError::StdinFailed { source })?;
            Ok(acc)
        }
    }
}

/// One segment per line, as a debug quoted string so whitespace stays visible.
///
/// # Errors
///
/// Never in practice: offset 0 is always valid.
pub fn show(
    kind: SegmentKind,
    text: &str,
    offsets: bool,
    filter: Option<WordFilter>,
) -> miette::Result<String> {
    let mut acc = String::new();
    let mut emit = |start: usize, end: usize, segment: &str, suffix: &str| {
        if offsets {
            acc.push_str(&format!("{start}..{end}\t"));
        }
        acc.push_str(&format!("{segment:?}{suffix}\n"));
    };

    match (kind, filter) {
        (SegmentKind::Word, Some(filter)) => {
            for (start, end, segment) in word_iter_with_offsets(text, 0, filter)? {
                emit(start, end, segment, "");
            }
        }
        (SegmentKind::Line, _) => {
            for it in line_iter_with_opportunities(text, 0)? {
                emit(it.start, it.end, it.text, &format!("\t{}", it.opportunity));
            }
        }
        _ => {
            for (start, end, segment) in iter_for(kind, text, 0)? {
                emit(start, end, segment, "");
            }
        }
    }
    Ok(acc)
}

/// A table row per codepoint: general category and the property names under each rule
/// family.
///
/// # Errors
///
/// [`r3bl_segment::SegmentationError::InvalidCodepoint`] for a value that is not a
/// Unicode scalar value.
pub fn codepoint_report(codepoints: &[u32]) -> miette::Result<String> {
    let mut acc = String::from("codepoint\tgc\tgrapheme\tword\tsentence\tline\n");
    for &codepoint in codepoints {
        let ch = codepoint_to_char(codepoint)?;
        acc.push_str(&format!("U+{codepoint:04X} {ch:?}\t{}", category(codepoint)?));
        for kind in [
            SegmentKind::Grapheme,
            SegmentKind::Word,
            SegmentKind::Sentence,
            SegmentKind::Line,
        ] {
            acc.push_str(&format!("\t{}", category_name(kind, codepoint)?.join("|")));
        }
        acc.push('\n');
    }
    Ok(acc)
}

/// Summary line plus up to `max_failures` failing lines in the file's notation.
///
/// # Errors
///
/// [`r3bl_segment::SegmentationError::MalformedTestLine`] for a bad file, and
/// [`SegCommandError::BreakTestFailed`] (after logging the details) when any case
/// fails.
pub fn breaktest(kind: SegmentKind, source: &str, max_failures: usize) -> miette::Result<String> {
    let cases = parse_break_test(source)?;
    let report = run_break_test(kind, &cases)?;
    if report.is_success() {
        return Ok(format!("{report}\n"));
    }
    eprint!("{}", report.describe_failures(max_failures));
    Err(SegCommandError::BreakTestFailed {
        kind,
        failed: report.mismatches.len(),
        total: report.total,
    }
    .into())
}

/// Width of `text`, and optionally the prefix that fits in `columns`.
///
/// # Errors
///
/// Never in practice: offset 0 is always valid.
pub fn width(text: &str, columns: Option<usize>) -> miette::Result<String> {
    let mut acc = match text_width(text, 0)? {
        Some(width) => format!("{width}\n"),
        None => "n/a (text has control, private use or unassigned codepoints)\n".to_string(),
    };
    if let Some(columns) = columns {
        let (used, prefix) = text_width_substr(text, columns);
        acc.push_str(&format!("{prefix:?} ({used} columns)\n"));
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_words() {
        let out = show(SegmentKind::Word, "hi, yo", false, Some(WordFilter::default())).unwrap();
        assert_eq!(out, "\"hi\"\n\"yo\"\n");

        let out = show(SegmentKind::Word, "hi, yo", true, None).unwrap();
        assert_eq!(
            out,
            "0..2\t\"hi\"\n2..3\t\",\"\n3..4\t\" \"\n4..6\t\"yo\"\n"
        );
    }

    #[test]
    fn test_show_lines() {
        let out = show(SegmentKind::Line, "a b\nc", false, None).unwrap();
        assert_eq!(out, "\"a \"\tAllowed\n\"b\\n\"\tMandatory\n\"c\"\tMandatory\n");
    }

    #[test]
    fn test_codepoint_report() {
        let out = codepoint_report(&[0x41]).unwrap();
        let row = out.lines().nth(1).unwrap();
        assert!(row.starts_with("U+0041 'A'\tLu\tOTHER\tA_LETTER\tUPPER\tAL"), "{row}");
        assert!(codepoint_report(&[0xD800]).is_err());
    }

    #[test]
    fn test_codepoint_report_rows() {
        let out = codepoint_report(&[0x41, 0x05BE]).unwrap();
        let rows = out.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "codepoint\tgc\tgrapheme\tword\tsentence\tline");
        assert!(rows[2].starts_with("U+05BE '־'\tPd\t"), "{}", rows[2]);
        assert!(rows[2].ends_with("\tHH"), "{}", rows[2]);
    }

    #[test]
    fn test_breaktest() {
        let source = "÷ 0061 × 0308 ÷ 0062 ÷\n÷ 000D × 000A ÷\n";
        assert_eq!(
            breaktest(SegmentKind::Grapheme, source, 5).unwrap(),
            "grapheme: 2/2 cases pass\n"
        );
        let err = breaktest(SegmentKind::Grapheme, "÷ 0061 ÷ 0308 ÷\n", 5).unwrap_err();
        assert_eq!(err.to_string(), "1 of 1 grapheme break test cases failed");
    }

    #[test]
    fn test_width() {
        assert_eq!(width("日本語", Some(3)).unwrap(), "6\n\"日\" (2 columns)\n");
        assert!(width("\u{7}", None).unwrap().starts_with("n/a"));
    }
}
