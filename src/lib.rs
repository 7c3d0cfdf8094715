//! Extended grapheme cluster boundaries for UTF-16 text.
//!
//! Text is indexed by 16-bit code units. Surrogate pairs are treated as a
//! single scalar value, and scans may start at any index: inside a pair,
//! inside a cluster, or out of range (clamped).
//!
//! ```
//! let text: Vec<u16> = "Z\u{351}\u{36B}A\u{334}!".encode_utf16().collect();
//!
//! assert_eq!(grapheme_breaker::count_breaks(&text), 3);
//! assert_eq!(grapheme_breaker::next_break(&text, 0), 3);
//! assert_eq!(grapheme_breaker::previous_break(&text, 5), 3);
//! assert_eq!(grapheme_breaker::break_str("e\u{301}!"), ["e\u{301}", "!"]);
//! ```
//!
//! The free functions use the class table bundled with the crate. Use a
//! [`Segmenter`] built from [`SegmenterOptions`] to load another table.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Table offsets and block ids fit their widths
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::module_name_repetitions)] // Allow BreakClass in class.rs etc
#![allow(clippy::missing_errors_doc)] // Error variants are documented on the enum
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks

pub mod class;
pub mod cursor;
pub mod error;
pub mod rules;
pub mod scanner;
pub mod segmenter;
pub mod table;

// Re-export core types at crate root
pub use class::BreakClass;
pub use cursor::CodepointCursor;
pub use error::{Error, Result};
pub use rules::{Rule, permits_break};
pub use scanner::BoundaryScanner;
pub use segmenter::{Graphemes, Segmenter, SegmenterOptions, TableSource};
pub use table::{ClassRange, ClassTable, UnicodeVersion};

/// First boundary strictly after `index`, or `text.len()`.
///
/// Negative `index` returns 0.
#[must_use]
pub fn next_break(text: &[u16], index: isize) -> usize {
    Segmenter::bundled().next_break(text, index)
}

/// Last boundary strictly before `index`, or 0.
///
/// `index` past the end returns `text.len()`.
#[must_use]
pub fn previous_break(text: &[u16], index: isize) -> usize {
    Segmenter::bundled().previous_break(text, index)
}

/// All clusters of `text`, in order.
#[must_use]
pub fn break_clusters(text: &[u16]) -> Vec<&[u16]> {
    Segmenter::bundled().break_clusters(text)
}

/// Number of clusters in `text`.
#[must_use]
pub fn count_breaks(text: &[u16]) -> usize {
    Segmenter::bundled().count_breaks(text)
}

/// Lazy, double-ended iterator over the clusters of `text`.
#[must_use]
pub fn graphemes(text: &[u16]) -> Graphemes<'_> {
    Segmenter::bundled().graphemes(text)
}

/// Clusters of a Rust string.
#[must_use]
pub fn break_str(s: &str) -> Vec<&str> {
    Segmenter::bundled().break_str(s)
}
