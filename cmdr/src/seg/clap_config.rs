// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, Subcommand, ValueEnum};
use r3bl_segment::{SegmentKind, WordFilter};
use std::path::PathBuf;
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "seg")]
#[command(about = "Find Unicode grapheme, word, sentence and line boundaries")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log to stderr, and to a file if --log-file is given"
    )]
    pub enable_logging: bool,

    #[arg(global = true, long, value_name = "PATH", help = "Also write logs to this file")]
    pub log_file: Option<String>,

    #[arg(
        global = true,
        long,
        value_name = "LEVEL",
        default_value = "debug",
        help = "One of: off, error, warn, info, debug, trace"
    )]
    pub log_level: LevelFilter,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "Print the segments of TEXT (or stdin), one per line")]
    Show {
        #[arg(value_parser = parse_kind, help = "grapheme, word, sentence or line")]
        kind: SegmentKind,

        #[arg(help = "Text to segment; read from stdin when omitted")]
        text: Option<String>,

        #[arg(long, short = 'o', help = "Prefix each segment with its byte span")]
        offsets: bool,

        #[arg(
            long,
            short = 'f',
            value_delimiter = ',',
            help = "Word kinds to keep; all segments are shown when omitted"
        )]
        filter: Vec<WordKind>,
    },

    #[clap(about = "Dump the break properties of each codepoint (hex, eg: 1F1E6 200D)")]
    Codepoint {
        #[arg(required = true, value_parser = parse_codepoint)]
        codepoints: Vec<u32>,
    },

    #[clap(about = "Run a Unicode *BreakTest.txt conformance file")]
    Breaktest {
        #[arg(value_parser = parse_kind, help = "grapheme, word, sentence or line")]
        kind: SegmentKind,

        file: PathBuf,

        #[arg(long, default_value_t = 10, help = "Mismatches to print")]
        max_failures: usize,
    },

    #[clap(about = "Terminal column width of TEXT (or stdin)")]
    Width {
        text: Option<String>,

        #[arg(long, short = 'c', help = "Also show the prefix that fits in this many columns")]
        columns: Option<usize>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum WordKind {
    #[clap(help = "Words with a letter")]
    Letter,
    #[clap(help = "Words with a digit or other number")]
    Number,
    #[clap(help = "Extended pictographic clusters")]
    Emoji,
    #[clap(help = "Flag pairs")]
    Ri,
}

/// Filter that keeps the given kinds. `None` means unfiltered.
#[must_use]
pub fn word_filter_from(kinds: &[WordKind]) -> Option<WordFilter> {
    if kinds.is_empty() {
        return None;
    }
    Some(kinds.iter().fold(WordFilter::none(), |acc, kind| match kind {
        WordKind::Letter => acc.letter(true),
        WordKind::Number => acc.number(true),
        WordKind::Emoji => acc.emoji(true),
        WordKind::Ri => acc.regional_indicator(true),
    }))
}

fn parse_kind(arg: &str) -> Result<SegmentKind, String> {
    SegmentKind::parse_kind(arg).map_err(|err| err.to_string())
}

/// Accepts `1F1E6`, `U+1F1E6` and `0x1F1E6`.
fn parse_codepoint(arg: &str) -> Result<u32, String> {
    let digits = arg
        .strip_prefix("U+")
        .or_else(|| arg.strip_prefix("u+"))
        .or_else(|| arg.strip_prefix("0x"))
        .unwrap_or(arg);
    u32::from_str_radix(digits, 16).map_err(|_| format!("'{arg}' is not a hex codepoint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use r3bl_segment::Category;
    use test_case::test_case;

    #[test]
    fn test_cli_definition() { CLIArg::command().debug_assert(); }

    #[test_case("1F1E6", Ok(0x1F1E6) ; "bare hex")]
    #[test_case("U+00e9", Ok(0xE9) ; "u plus")]
    #[test_case("0x41", Ok(0x41) ; "zero x")]
    fn test_parse_codepoint(arg: &str, expected: Result<u32, String>) {
        assert_eq!(parse_codepoint(arg), expected);
    }

    #[test]
    fn test_parse_codepoint_error() { assert!(parse_codepoint("zz").is_err()); }

    #[test]
    fn test_parse_show() {
        let arg = CLIArg::try_parse_from([
            "seg", "show", "word", "a b", "--filter", "letter,emoji", "-l",
        ])
        .unwrap();
        assert!(arg.global_options.enable_logging);
        assert_eq!(arg.global_options.log_level, LevelFilter::DEBUG);
        match arg.command {
            CLICommand::Show {
                kind, text, filter, ..
            } => {
                assert_eq!(kind, SegmentKind::Word);
                assert_eq!(text.as_deref(), Some("a b"));
                assert_eq!(filter, vec![WordKind::Letter, WordKind::Emoji]);
                let filter = word_filter_from(&filter).unwrap();
                assert_eq!(
                    filter.mask(),
                    Category::LETTER | Category::EXTENDED_PICTOGRAPHIC
                );
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(CLIArg::try_parse_from(["seg", "show", "paragraph", "x"]).is_err());
    }

    #[test]
    fn test_word_filter_from_empty() { assert!(word_filter_from(&[]).is_none()); }
}
