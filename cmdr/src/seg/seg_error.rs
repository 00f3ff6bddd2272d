// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_segment::SegmentKind;
use std::path::PathBuf;

/// Failures that belong to the `seg` command itself. Library errors pass through as
/// [`r3bl_segment::SegmentationError`] diagnostics.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SegCommandError {
    #[error("{failed} of {total} {kind} break test cases failed")]
    #[diagnostic(
        code(seg::breaktest_failed),
        help("Run with --max-failures to see more of the failing lines")
    )]
    BreakTestFailed {
        kind: SegmentKind,
        failed: usize,
        total: usize,
    },

    #[error("Could not read {}", .path.display())]
    #[diagnostic(code(seg::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read text from stdin")]
    #[diagnostic(code(seg::stdin_failed), help("Pass the text as an argument instead"))]
    StdinFailed {
        #[source]
        source: std::io::Error,
    },
}
