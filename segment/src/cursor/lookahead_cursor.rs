// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The scanning primitive shared by all four rule engines.
//!
//! A [`LookaheadCursor`] walks one codepoint at a time over a `&str` and always exposes
//! two property masks: `char`, the codepoint it last stepped over, and `lookahead`, the
//! codepoint right after it. Almost every boundary rule is a test on that pair. The
//! rules that need to see further ahead use two more primitives:
//!
//! - [`LookaheadCursor::absorb`] swallows a run of codepoints (eg: combining marks)
//!   while leaving `char` as it was, so the run behaves like part of the symbol before
//!   it.
//! - [`LookaheadCursor::begin`], [`LookaheadCursor::commit`] and
//!   [`LookaheadCursor::rollback`] bracket a speculative scan. The checkpoint is a plain
//!   [`Copy`] of [`CursorState`], and rolling back restores it by value.
//!
//! ```text
//!          char_start   position
//!              │           │
//!   ... ─ ─ ─ ─┼───────────┼───────────┼ ─ ─ ...
//!              │  "char"   │"lookahead"│
//! ```
//!
//! All offsets are byte offsets into the text and always fall on `char` boundaries.

use crate::BreakProperty;

/// Everything a checkpoint saves and a rollback restores.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CursorState<M> {
    /// Byte offset of the next unexamined codepoint (the start of `lookahead`).
    pub position: usize,
    /// Byte offset where the codepoint behind `char` starts.
    pub char_start: usize,
    pub char: M,
    /// Empty when `position` is at the end of the text.
    pub lookahead: M,
    /// Union of every `char` advanced past since the scan started.
    pub accepted: M,
}

#[derive(Debug, Clone)]
pub struct LookaheadCursor<'a, M: BreakProperty> {
    text: &'a str,
    start: usize,
    state: CursorState<M>,
    checkpoint: Option<CursorState<M>>,
}

impl<'a, M: BreakProperty> LookaheadCursor<'a, M> {
    /// Start a scan at byte `offset`, which the caller has already validated.
    pub fn new(text: &'a str, offset: usize) -> Self {
        debug_assert!(text.is_char_boundary(offset));
        Self {
            text,
            start: offset,
            state: CursorState {
                position: offset,
                char_start: offset,
                char: M::empty(),
                lookahead: mask_at(text, offset),
                accepted: M::empty(),
            },
            checkpoint: None,
        }
    }

    /// Step over one codepoint. Returns the new `(char, lookahead)` pair.
    ///
    /// Must not be called at the end of the text. Doing so is a bug in the calling rule
    /// engine: it panics in debug builds and leaves the cursor unchanged in release
    /// builds.
    pub fn advance(&mut self) -> (M, M) {
        debug_assert!(!self.at_end(), "advance() past the end of the text");
        let Some(ch) = self.text[self.state.position..].chars().next() else {
            return (self.state.char, self.state.lookahead);
        };
        let state = &mut self.state;
        state.accepted.insert(state.char);
        state.char = state.lookahead;
        state.char_start = state.position;
        state.position += ch.len_utf8();
        state.lookahead = mask_at(self.text, state.position);
        (state.char, state.lookahead)
    }

    /// Open a checkpoint. Only one may be outstanding.
    pub fn begin(&mut self) {
        debug_assert!(self.checkpoint.is_none(), "begin() with a checkpoint open");
        if self.checkpoint.is_none() {
            self.checkpoint = Some(self.state);
        }
    }

    /// Keep everything scanned since [`Self::begin`].
    pub fn commit(&mut self) {
        debug_assert!(self.checkpoint.is_some(), "commit() without begin()");
        self.checkpoint = None;
    }

    /// Undo everything scanned since [`Self::begin`]. Returns the restored
    /// `(char, lookahead)` pair.
    pub fn rollback(&mut self) -> (M, M) {
        debug_assert!(self.checkpoint.is_some(), "rollback() without begin()");
        if let Some(saved) = self.checkpoint.take() {
            self.state = saved;
        }
        (self.state.char, self.state.lookahead)
    }

    /// While `lookahead` intersects `match_mask`, advance, then advance over any run of
    /// `extend_mask` after it. `char` is left as it was before the call, so the caller
    /// sees the absorbed run as part of its current symbol.
    ///
    /// Returns the raw mask of the last codepoint absorbed, or `None` if nothing was.
    pub fn absorb(&mut self, match_mask: M, extend_mask: M) -> Option<M> {
        if !self.state.lookahead.intersects(match_mask) {
            return None;
        }
        let saved_char = self.state.char;
        let mut last = None;
        while self.state.lookahead.intersects(match_mask) {
            last = Some(self.advance().0);
            while self.state.lookahead.intersects(extend_mask) {
                last = Some(self.advance().0);
            }
        }
        self.state.char = saved_char;
        last
    }

    #[must_use]
    pub fn text(&self) -> &'a str { self.text }

    /// Byte offset where this scan started.
    #[must_use]
    pub fn start(&self) -> usize { self.start }

    #[must_use]
    pub fn position(&self) -> usize { self.state.position }

    #[must_use]
    pub fn char_start(&self) -> usize { self.state.char_start }

    #[must_use]
    pub fn char(&self) -> M { self.state.char }

    #[must_use]
    pub fn lookahead(&self) -> M { self.state.lookahead }

    #[must_use]
    pub fn accepted(&self) -> M { self.state.accepted }

    #[must_use]
    pub fn at_end(&self) -> bool { self.state.position >= self.text.len() }

    #[must_use]
    pub fn state(&self) -> CursorState<M> { self.state }

    #[must_use]
    pub fn has_checkpoint(&self) -> bool { self.checkpoint.is_some() }
}

fn mask_at<M: BreakProperty>(text: &str, offset: usize) -> M {
    text[offset..].chars().next().map_or_else(M::empty, M::of)
}
