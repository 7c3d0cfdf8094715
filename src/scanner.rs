//! Boundary search in either direction from an arbitrary code unit index.

use tracing::trace;

use crate::class::BreakClass;
use crate::cursor::CodepointCursor;
use crate::rules::permits_break;
use crate::table::ClassTable;

/// Finds grapheme cluster boundaries in UTF-16 text.
///
/// Indices are code unit offsets. Out-of-range starting indices are
/// clamped rather than rejected, so callers can do cursor arithmetic
/// without bounds checks.
///
/// # Example
///
/// ```
/// use grapheme_breaker::{BoundaryScanner, ClassTable};
///
/// let text: Vec<u16> = "e\u{301}x".encode_utf16().collect();
/// let scanner = BoundaryScanner::new(ClassTable::bundled());
/// assert_eq!(scanner.next_break(&text, 0), 2);
/// assert_eq!(scanner.previous_break(&text, 2), 0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BoundaryScanner<'t> {
    table: &'t ClassTable,
}

impl<'t> BoundaryScanner<'t> {
    #[must_use]
    pub const fn new(table: &'t ClassTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &'t ClassTable {
        self.table
    }

    #[inline]
    fn class_at(&self, cursor: &CodepointCursor<'_>, index: usize) -> BreakClass {
        self.table.class_of(cursor.scalar_at(index))
    }

    /// First boundary strictly after `index`, or `text.len()`.
    ///
    /// Negative indices return 0.
    #[must_use]
    pub fn next_break(&self, text: &[u16], index: isize) -> usize {
        usize::try_from(index).map_or(0, |index| self.next_break_from(text, index))
    }

    /// [`next_break`](Self::next_break) for a non-negative index.
    #[must_use]
    pub fn next_break_from(&self, text: &[u16], index: usize) -> usize {
        let len = text.len();
        trace!(index, len, "next_break");
        if index.saturating_add(1) >= len {
            return len;
        }

        let cursor = CodepointCursor::new(text);
        let mut prev = self.class_at(&cursor, index);
        for i in index + 1..len {
            if cursor.is_trailing_continuation(i) {
                continue;
            }
            let next = self.class_at(&cursor, i);
            if permits_break(prev, next) {
                return i;
            }
            prev = next;
        }

        len
    }

    /// Last boundary strictly before `index`, or 0.
    ///
    /// Indices past the end return `text.len()`; negative indices return 0.
    #[must_use]
    pub fn previous_break(&self, text: &[u16], index: isize) -> usize {
        usize::try_from(index).map_or(0, |index| self.previous_break_from(text, index))
    }

    /// [`previous_break`](Self::previous_break) for a non-negative index.
    #[must_use]
    pub fn previous_break_from(&self, text: &[u16], index: usize) -> usize {
        let len = text.len();
        trace!(index, len, "previous_break");
        if index > len {
            return len;
        }
        if index <= 1 {
            return 0;
        }

        let cursor = CodepointCursor::new(text);
        let last = index - 1;
        let mut next = self.class_at(&cursor, last);
        for i in (0..last).rev() {
            if cursor.is_leading_half(i) {
                continue;
            }
            let prev = self.class_at(&cursor, i);
            if permits_break(prev, next) {
                return i + 1;
            }
            next = prev;
        }

        0
    }

    /// First boundary after the start of `text`.
    #[must_use]
    pub fn first_break(&self, text: &[u16]) -> usize {
        self.next_break_from(text, 0)
    }

    /// Last boundary before the end of `text`.
    #[must_use]
    pub fn last_break(&self, text: &[u16]) -> usize {
        self.previous_break_from(text, text.len())
    }
}
