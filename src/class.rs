//! Grapheme cluster break classes.

use std::fmt;
use std::str::FromStr;

/// Grapheme_Cluster_Break property value of a scalar value.
///
/// The discriminants are the ids stored in the serialized class table, so
/// they must never be reordered.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BreakClass {
    /// Anything not explicitly classified.
    #[default]
    Other = 0,
    /// U+000D CARRIAGE RETURN.
    CR = 1,
    /// U+000A LINE FEED.
    LF = 2,
    /// Separators, controls and format characters.
    Control = 3,
    /// Grapheme_Extend characters (nonspacing and enclosing marks, ZWJ, ZWNJ).
    Extend = 4,
    /// Regional indicator symbols used to form flags.
    RegionalIndicator = 5,
    /// Spacing combining marks.
    SpacingMark = 6,
    /// Hangul leading jamo.
    L = 7,
    /// Hangul vowel jamo.
    V = 8,
    /// Hangul trailing jamo.
    T = 9,
    /// Hangul LV syllable.
    LV = 10,
    /// Hangul LVT syllable.
    LVT = 11,
}

impl BreakClass {
    /// Number of classes; stored in the table header.
    pub const COUNT: u8 = 12;

    /// All classes in id order.
    pub const ALL: [Self; Self::COUNT as usize] = [
        Self::Other,
        Self::CR,
        Self::LF,
        Self::Control,
        Self::Extend,
        Self::RegionalIndicator,
        Self::SpacingMark,
        Self::L,
        Self::V,
        Self::T,
        Self::LV,
        Self::LVT,
    ];

    /// Class for a serialized id, or `None` if the id is unknown.
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if id < Self::COUNT {
            Some(Self::ALL[id as usize])
        } else {
            None
        }
    }

    /// Serialized id of this class.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Property value name as spelled in the Unicode data files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Other => "Other",
            Self::CR => "CR",
            Self::LF => "LF",
            Self::Control => "Control",
            Self::Extend => "Extend",
            Self::RegionalIndicator => "Regional_Indicator",
            Self::SpacingMark => "SpacingMark",
            Self::L => "L",
            Self::V => "V",
            Self::T => "T",
            Self::LV => "LV",
            Self::LVT => "LVT",
        }
    }

    /// True for the classes that always break on both sides (GB4/GB5).
    #[inline]
    #[must_use]
    pub const fn is_control_like(self) -> bool {
        matches!(self, Self::Control | Self::CR | Self::LF)
    }
}

impl fmt::Display for BreakClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown class name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseBreakClassError(String);

impl fmt::Display for ParseBreakClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown grapheme break class: {}", self.0)
    }
}

impl std::error::Error for ParseBreakClassError {}

impl FromStr for BreakClass {
    type Err = ParseBreakClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| ParseBreakClassError(s.to_string()))
    }
}
