//! Pairwise grapheme cluster boundary rules.
//!
//! Rules are tried in order and the first one whose condition matches
//! decides. The order matters: GB4 and GB5 come before GB9 and GB9a so a
//! control character never absorbs a following mark.

use std::fmt;

use crate::class::BreakClass;

/// Rule that decided a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// GB3: CR × LF
    Gb3,
    /// GB4: (Control | CR | LF) ÷
    Gb4,
    /// GB5: ÷ (Control | CR | LF)
    Gb5,
    /// GB6: L × (L | V | LV | LVT)
    Gb6,
    /// GB7: (LV | V) × (V | T)
    Gb7,
    /// GB8: (LVT | T) × T
    Gb8,
    /// GB8a: Regional_Indicator × Regional_Indicator
    Gb8a,
    /// GB9: × Extend
    Gb9,
    /// GB9a: × SpacingMark
    Gb9a,
    /// GB10: Any ÷ Any
    Gb10,
}

impl Rule {
    /// Whether this rule permits a boundary.
    #[must_use]
    pub const fn permits_break(self) -> bool {
        matches!(self, Self::Gb4 | Self::Gb5 | Self::Gb10)
    }

    /// Rule identifier as written in UAX #29.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Gb3 => "GB3",
            Self::Gb4 => "GB4",
            Self::Gb5 => "GB5",
            Self::Gb6 => "GB6",
            Self::Gb7 => "GB7",
            Self::Gb8 => "GB8",
            Self::Gb8a => "GB8a",
            Self::Gb9 => "GB9",
            Self::Gb9a => "GB9a",
            Self::Gb10 => "GB10",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Find the rule deciding the boundary between `previous` and `current`.
#[must_use]
pub const fn decide(previous: BreakClass, current: BreakClass) -> Rule {
    use BreakClass::{CR, Extend, L, LF, LV, LVT, RegionalIndicator, SpacingMark, T, V};

    if matches!((previous, current), (CR, LF)) {
        return Rule::Gb3;
    }
    if previous.is_control_like() {
        return Rule::Gb4;
    }
    if current.is_control_like() {
        return Rule::Gb5;
    }
    if matches!(previous, L) && matches!(current, L | V | LV | LVT) {
        return Rule::Gb6;
    }
    if matches!(previous, LV | V) && matches!(current, V | T) {
        return Rule::Gb7;
    }
    if matches!(previous, LVT | T) && matches!(current, T) {
        return Rule::Gb8;
    }
    if matches!((previous, current), (RegionalIndicator, RegionalIndicator)) {
        return Rule::Gb8a;
    }
    if matches!(current, Extend) {
        return Rule::Gb9;
    }
    if matches!(current, SpacingMark) {
        return Rule::Gb9a;
    }
    // GB9b: Prepend ×
    // The table has no Prepend class. If one is added, this is where the
    // check goes, ahead of GB10.
    Rule::Gb10
}

/// Whether a boundary is permitted between two adjacent classes.
#[inline]
#[must_use]
pub const fn permits_break(previous: BreakClass, current: BreakClass) -> bool {
    decide(previous, current).permits_break()
}
