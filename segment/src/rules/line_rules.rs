// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line break opportunities, UAX #14 section 6 (rules LB2 to LB31).
//!
//! Same cursor and priority list shape as the UAX #29 engines, but most line rules look
//! further to the left than one symbol (`OP SP* ×`, `NU (SY | IS)* × NU`, regional
//! indicator parity, ...). That history lives in [`LineContext`], which is updated each
//! time the scan steps over a codepoint. Rules that look further right than one symbol
//! peek with a `begin()` / `rollback()` pair.
//!
//! A scan that starts in the middle of the text seeds [`LineContext`] from the symbol
//! just before the start offset, so restarting at a boundary gives the same result as
//! scanning from the start of the text.

use super::BoundaryRules;
use crate::{BreakProperty, LineMask as L, LookaheadCursor, SegmentKind};
use strum_macros::{AsRefStr, Display};

/// How a line break boundary may be used.
#[derive(Debug, Display, AsRefStr, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BreakOpportunity {
    /// The line must end here: after a hard line break, or at the end of the text.
    Mandatory,
    /// The line may be wrapped here.
    Allowed,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LineRules;

impl BoundaryRules for LineRules {
    type Mask = L;
    const KIND: SegmentKind = SegmentKind::Line;

    fn scan(cursor: &mut LookaheadCursor<'_, L>) -> usize { scan_line(cursor).0 }
}

/// Find the next line break after the start of `cursor` and classify it.
pub fn scan_line(cursor: &mut LookaheadCursor<'_, L>) -> (usize, BreakOpportunity) {
    let preceding = preceding_symbol(cursor.text(), cursor.start());
    let (first, _) = cursor.advance();
    let mut context = LineContext::new(first, preceding);
    loop {
        // LB4, LB5
        let left = context.left;
        if left.intersects(L::BK | L::LF | L::NL)
            || (left.contains(L::CR) && !cursor.lookahead().contains(L::LF))
        {
            return (cursor.position(), BreakOpportunity::Mandatory);
        }
        // LB3
        if cursor.at_end() {
            return (cursor.position(), BreakOpportunity::Mandatory);
        }
        if is_break(cursor, &context) {
            return (cursor.position(), BreakOpportunity::Allowed);
        }
        let (raw, _) = cursor.advance();
        context.step(raw);
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum NumberRun {
    None,
    /// `NU (SY | IS)*`
    Digits,
    /// `NU (SY | IS)* (CL | CP)`
    Closed,
}

/// What the rules need to know about the text left of the cursor position.
#[derive(Debug, Copy, Clone)]
struct LineContext {
    /// Class of the symbol before the position, after LB9 and LB10.
    left: L,
    /// Class of the symbol before `left`. `None` is the start of the text.
    before_left: Option<L>,
    /// When `left` is SP: the symbol before the run of spaces.
    before_spaces: Option<L>,
    /// The last `Pi` quotation mark was at the start of a line, after a space, an
    /// opening punctuation or a quotation mark (LB15a).
    quote_opens: bool,
    /// The last codepoint stepped over was a ZWJ, absorbed or not (LB8a).
    zwj_last: bool,
    /// `left` is a regional indicator that is not yet paired (LB30a).
    ri_unpaired: bool,
    number: NumberRun,
}

impl LineContext {
    fn new(first: L, preceding: Option<L>) -> Self {
        let mut it = Self {
            left: preceding.unwrap_or(L::empty()),
            before_left: None,
            before_spaces: None,
            quote_opens: true,
            zwj_last: false,
            ri_unpaired: false,
            number: NumberRun::None,
        };
        it.push_symbol(first, preceding);
        it
    }

    /// Step over the codepoint with mask `raw`.
    fn step(&mut self, raw: L) {
        // LB9
        if raw.intersects(L::CM_OR_ZWJ) && !self.left.intersects(L::HARD | L::SP | L::ZW) {
            self.zwj_last = raw.contains(L::ZWJ);
            return;
        }
        self.push_symbol(raw, Some(self.left));
    }

    fn push_symbol(&mut self, raw: L, previous: Option<L>) {
        let class = treat_as_alphabetic(raw);
        self.zwj_last = raw.contains(L::ZWJ);

        if class.contains(L::SP) && !self.left.contains(L::SP) {
            self.before_spaces = previous;
        }
        if class.contains(L::QU | L::PI) {
            self.quote_opens = previous.is_none_or(|it| {
                it.intersects(
                    L::HARD | L::OP | L::QU | L::GL | L::SP | L::ZW,
                )
            });
        }
        self.ri_unpaired = class.contains(L::RI)
            && !(previous.is_some_and(|it| it.contains(L::RI)) && self.ri_unpaired);
        self.number = if class.contains(L::NU) {
            NumberRun::Digits
        } else if class.intersects(L::SY | L::IS) && self.number == NumberRun::Digits {
            NumberRun::Digits
        } else if class.intersects(L::CLOSING) && self.number == NumberRun::Digits {
            NumberRun::Closed
        } else {
            NumberRun::None
        };

        self.before_left = previous;
        self.left = class;
    }

    /// `left`, or the symbol before it if `left` is a run of spaces. `None` if there is
    /// only space back to the start of the text.
    fn before_any_spaces(&self) -> Option<L> {
        if self.left.contains(L::SP) { self.before_spaces } else { Some(self.left) }
    }
}

/// LB10.
fn treat_as_alphabetic(raw: L) -> L {
    if raw.intersects(L::CM_OR_ZWJ) {
        raw.difference(L::CM_OR_ZWJ).union(L::AL)
    } else {
        raw
    }
}

/// Resolved class of the symbol that ends right before `offset`, applying LB9 and LB10
/// backwards.
fn preceding_symbol(text: &str, offset: usize) -> Option<L> {
    let mut chars = text[..offset].chars().rev().map(L::of);
    let last = chars.next()?;
    if !last.intersects(L::CM_OR_ZWJ) {
        return Some(last);
    }
    let base = chars.find(|it| !it.intersects(L::CM_OR_ZWJ));
    Some(match base {
        Some(it) if !it.intersects(L::HARD | L::SP | L::ZW) => it,
        _ => treat_as_alphabetic(last),
    })
}

/// Peek past the symbol at `lookahead` (and its combining marks) and test what follows.
/// `eot` is the answer when the text ends there.
fn followed_by(
    cursor: &mut LookaheadCursor<'_, L>,
    test: impl Fn(L) -> bool,
    eot: bool,
) -> bool {
    cursor.begin();
    cursor.advance();
    cursor.absorb(L::CM_OR_ZWJ, L::empty());
    let hit = if cursor.at_end() {
        eot
    } else {
        test(cursor.lookahead())
    };
    cursor.rollback();
    hit
}

/// `(PR | PO) × OP IS? NU`.
fn opens_number(cursor: &mut LookaheadCursor<'_, L>) -> bool {
    cursor.begin();
    cursor.advance();
    cursor.absorb(L::CM_OR_ZWJ, L::empty());
    if cursor.lookahead().contains(L::IS) {
        cursor.advance();
        cursor.absorb(L::CM_OR_ZWJ, L::empty());
    }
    let hit = cursor.lookahead().contains(L::NU);
    cursor.rollback();
    hit
}

/// The rule list between `context.left` and `cursor.lookahead()`. Returns `true` for a
/// break opportunity. LB4 and LB5 are handled by the caller.
#[allow(clippy::too_many_lines)]
fn is_break(cursor: &mut LookaheadCursor<'_, L>, context: &LineContext) -> bool {
    let left = context.left;
    let mut right = cursor.lookahead();
    let left_run = context.before_any_spaces();
    let left_run_is = |mask: L| left_run.is_some_and(|it| it.intersects(mask));

    // LB6
    if right.intersects(L::HARD) {
        return false;
    }
    // LB7
    if right.intersects(L::SP | L::ZW) {
        return false;
    }
    // LB8
    if left_run_is(L::ZW) {
        return true;
    }
    // LB8a
    if context.zwj_last {
        return false;
    }
    // LB9
    if right.intersects(L::CM_OR_ZWJ) && !left.contains(L::SP) {
        return false;
    }
    // LB10
    right = treat_as_alphabetic(right);

    // LB11
    if left.contains(L::WJ) || right.contains(L::WJ) {
        return false;
    }
    // LB12
    if left.contains(L::GL) {
        return false;
    }
    // LB12a
    if right.contains(L::GL) && !left.intersects(L::SP | L::BA | L::HYPHENS) {
        return false;
    }
    // LB13
    if right.intersects(L::CL | L::CP | L::EX | L::SY) {
        return false;
    }
    // LB14
    if left_run_is(L::OP) {
        return false;
    }
    // LB15a
    if left_run.is_some_and(|it| it.contains(L::QU | L::PI)) && context.quote_opens {
        return false;
    }
    // LB15b
    if right.contains(L::QU | L::PF) {
        let closers = L::SP
            | L::GL
            | L::WJ
            | L::CL
            | L::QU
            | L::CP
            | L::EX
            | L::IS
            | L::SY
            | L::HARD
            | L::ZW;
        if followed_by(cursor, |it| it.intersects(closers), true) {
            return false;
        }
    }
    // LB15c
    if left.contains(L::SP)
        && right.contains(L::IS)
        && followed_by(cursor, |it| it.contains(L::NU), false)
    {
        return true;
    }
    // LB15d
    if right.contains(L::IS) {
        return false;
    }
    // LB16
    if left_run_is(L::CLOSING) && right.contains(L::NS) {
        return false;
    }
    // LB17
    if left_run_is(L::B2) && right.contains(L::B2) {
        return false;
    }
    // LB18
    if left.contains(L::SP) {
        return true;
    }
    // LB19
    if right.contains(L::QU) && !right.contains(L::PI) {
        return false;
    }
    if left.contains(L::QU) && !left.contains(L::PF) {
        return false;
    }
    // LB19a
    if right.contains(L::QU)
        && (!left.contains(L::EAST_ASIAN)
            || followed_by(cursor, |it| !it.contains(L::EAST_ASIAN), true))
    {
        return false;
    }
    if left.contains(L::QU)
        && (!right.contains(L::EAST_ASIAN)
            || context.before_left.is_none_or(|it| !it.contains(L::EAST_ASIAN)))
    {
        return false;
    }
    // LB20
    if left.contains(L::CB) || right.contains(L::CB) {
        return true;
    }
    // LB20a
    if left.intersects(L::HYPHENS)
        && right.intersects(L::AL_OR_HL)
        && context.before_left.is_none_or(|it| {
            it.intersects(L::HARD | L::SP | L::ZW | L::CB | L::GL)
        })
    {
        return false;
    }
    // LB21
    if right.intersects(L::BA | L::HYPHENS | L::NS) || left.contains(L::BB) {
        return false;
    }
    // LB21a
    if left.intersects(L::HYPHENS)
        && context.before_left.is_some_and(|it| it.contains(L::HL))
        && !right.contains(L::HL)
    {
        return false;
    }
    // LB21b
    if left.contains(L::SY) && right.contains(L::HL) {
        return false;
    }
    // LB22
    if right.contains(L::IN) {
        return false;
    }
    // LB23
    if (left.intersects(L::AL_OR_HL) && right.contains(L::NU))
        || (left.contains(L::NU) && right.intersects(L::AL_OR_HL))
    {
        return false;
    }
    // LB23a
    if (left.contains(L::PR) && right.intersects(L::ID | L::EB | L::EM))
        || (left.intersects(L::ID | L::EB | L::EM) && right.contains(L::PO))
    {
        return false;
    }
    // LB24
    if (left.intersects(L::PREFIX_OR_POSTFIX) && right.intersects(L::AL_OR_HL))
        || (left.intersects(L::AL_OR_HL) && right.intersects(L::PREFIX_OR_POSTFIX))
    {
        return false;
    }
    // LB25
    if context.number != NumberRun::None && right.intersects(L::PREFIX_OR_POSTFIX) {
        return false;
    }
    if context.number == NumberRun::Digits && right.contains(L::NU) {
        return false;
    }
    if left.intersects(L::PREFIX_OR_POSTFIX) && right.contains(L::OP) && opens_number(cursor) {
        return false;
    }
    if left.intersects(L::PREFIX_OR_POSTFIX | L::HY | L::IS) && right.contains(L::NU) {
        return false;
    }
    // LB26
    if (left.contains(L::JL) && right.intersects(L::JL | L::JV | L::H2 | L::H3))
        || (left.intersects(L::JV | L::H2) && right.intersects(L::JV | L::JT))
        || (left.intersects(L::JT | L::H3) && right.contains(L::JT))
    {
        return false;
    }
    // LB27
    if (left.intersects(L::KOREAN) && right.contains(L::PO))
        || (left.contains(L::PR) && right.intersects(L::KOREAN))
    {
        return false;
    }
    // LB28
    if left.intersects(L::AL_OR_HL) && right.intersects(L::AL_OR_HL) {
        return false;
    }
    // LB28a
    if (left.contains(L::AP) && right.intersects(L::AKSARA_BASE))
        || (left.intersects(L::AKSARA_BASE) && right.intersects(L::VF | L::VI))
        || (left.contains(L::VI)
            && context.before_left.is_some_and(|it| it.intersects(L::AKSARA_BASE))
            && right.intersects(L::AK | L::DOTTED_CIRCLE))
        || (left.intersects(L::AKSARA_BASE)
            && right.intersects(L::AKSARA_BASE)
            && followed_by(cursor, |it| it.contains(L::VF), false))
    {
        return false;
    }
    // LB29
    if left.contains(L::IS) && right.intersects(L::AL_OR_HL) {
        return false;
    }
    // LB30
    if (left.intersects(L::AL_OR_HL | L::NU)
        && right.contains(L::OP)
        && !right.contains(L::EAST_ASIAN))
        || (left.contains(L::CP)
            && !left.contains(L::EAST_ASIAN)
            && right.intersects(L::AL_OR_HL | L::NU))
    {
        return false;
    }
    // LB30a
    if left.contains(L::RI) && right.contains(L::RI) && context.ri_unpaired {
        return false;
    }
    // LB30b
    if left.intersects(L::EB | L::EXT_PICT_UNASSIGNED) && right.contains(L::EM) {
        return false;
    }
    // LB31
    true
}
