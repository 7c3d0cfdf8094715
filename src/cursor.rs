//! UTF-16 code unit indexing.
//!
//! The scanner walks code units one at a time but classifies scalar values.
//! [`CodepointCursor`] does the translation: it decodes the scalar value
//! covering a code unit index, and tells the scanner when a unit is one half
//! of a surrogate pair whose other half has already been (or will be)
//! visited. Unpaired surrogates are never an error; they decode to their
//! own 16-bit value.

/// True for U+D800..=U+DBFF.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// True for U+DC00..=U+DFFF.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Combine a high and low surrogate into the supplementary scalar value.
#[inline]
#[must_use]
pub const fn combine_surrogates(high: u16, low: u16) -> u32 {
    ((high as u32 - 0xD800) << 10) + (low as u32 - 0xDC00) + 0x1_0000
}

/// Read-only view over UTF-16 text that decodes scalar values on demand.
#[derive(Clone, Copy, Debug)]
pub struct CodepointCursor<'a> {
    text: &'a [u16],
}

impl<'a> CodepointCursor<'a> {
    #[must_use]
    pub const fn new(text: &'a [u16]) -> Self {
        Self { text }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    fn unit(&self, index: usize) -> Option<u16> {
        self.text.get(index).copied()
    }

    #[inline]
    fn unit_before(&self, index: usize) -> Option<u16> {
        index.checked_sub(1).and_then(|i| self.unit(i))
    }

    /// Scalar value covering the code unit at `index`.
    ///
    /// A high surrogate followed by a low surrogate, or a low surrogate
    /// preceded by a high surrogate, decodes to the pair's supplementary
    /// value, so either half of a pair yields the same result. Any other
    /// unit, including an unpaired surrogate, decodes to itself.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[inline]
    #[must_use]
    pub fn scalar_at(&self, index: usize) -> u32 {
        let unit = self.text[index];

        if is_high_surrogate(unit) {
            if let Some(low) = self.unit(index + 1).filter(|&u| is_low_surrogate(u)) {
                return combine_surrogates(unit, low);
            }
        } else if is_low_surrogate(unit) {
            if let Some(high) = self.unit_before(index).filter(|&u| is_high_surrogate(u)) {
                return combine_surrogates(high, unit);
            }
        }

        u32::from(unit)
    }

    /// True when `index` holds the low half of a pair that starts at
    /// `index - 1`. Forward scans skip such units.
    #[inline]
    #[must_use]
    pub fn is_trailing_continuation(&self, index: usize) -> bool {
        matches!(
            (self.unit_before(index), self.unit(index)),
            (Some(high), Some(low)) if is_high_surrogate(high) && is_low_surrogate(low)
        )
    }

    /// True when `index` holds the high half of a pair that ends at
    /// `index + 1`. Backward scans skip such units.
    #[inline]
    #[must_use]
    pub fn is_leading_half(&self, index: usize) -> bool {
        index
            .checked_add(1)
            .is_some_and(|next| self.is_trailing_continuation(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn bmp_units_decode_to_themselves() {
        let text = utf16("aé€");
        let cursor = CodepointCursor::new(&text);
        assert_eq!(cursor.scalar_at(0), 0x61);
        assert_eq!(cursor.scalar_at(1), 0xE9);
        assert_eq!(cursor.scalar_at(2), 0x20AC);
    }

    #[test]
    fn both_halves_of_pair_decode_the_same() {
        let text = utf16("x😜y");
        let cursor = CodepointCursor::new(&text);
        assert_eq!(cursor.len(), 4);
        assert_eq!(cursor.scalar_at(1), 0x1F61C);
        assert_eq!(cursor.scalar_at(2), 0x1F61C);
        assert_eq!(cursor.scalar_at(3), u32::from('y'));
    }

    #[test]
    fn combine_extremes() {
        assert_eq!(combine_surrogates(0xD800, 0xDC00), 0x1_0000);
        assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), 0x10_FFFF);
    }

    #[test]
    fn unpaired_surrogates_decode_to_themselves() {
        // Lone high at the end, lone low at the start.
        let text = [0xDC00, 0x0061, 0xD800];
        let cursor = CodepointCursor::new(&text);
        assert_eq!(cursor.scalar_at(0), 0xDC00);
        assert_eq!(cursor.scalar_at(2), 0xD800);

        // Reversed pair is two unpaired surrogates.
        let text = [0xDC00, 0xD800];
        let cursor = CodepointCursor::new(&text);
        assert_eq!(cursor.scalar_at(0), 0xDC00);
        assert_eq!(cursor.scalar_at(1), 0xD800);
        assert!(!cursor.is_trailing_continuation(1));
        assert!(!cursor.is_leading_half(0));
    }

    #[test]
    fn continuation_and_leading_half_mirror_each_other() {
        let text = utf16("a🇺🇸");
        let cursor = CodepointCursor::new(&text);
        let trailing: Vec<bool> = (0..text.len())
            .map(|i| cursor.is_trailing_continuation(i))
            .collect();
        let leading: Vec<bool> = (0..text.len()).map(|i| cursor.is_leading_half(i)).collect();

        assert_eq!(trailing, vec![false, false, true, false, true]);
        assert_eq!(leading, vec![false, true, false, true, false]);
        for i in 1..text.len() {
            assert_eq!(cursor.is_trailing_continuation(i), cursor.is_leading_half(i - 1));
        }
    }

    #[test]
    fn edges_are_never_continuations() {
        let text = utf16("😜");
        let cursor = CodepointCursor::new(&text);
        assert!(!cursor.is_trailing_continuation(0));
        assert!(!cursor.is_leading_half(1));
        assert!(!cursor.is_leading_half(5));

        let empty = CodepointCursor::new(&[]);
        assert!(empty.is_empty());
        assert!(!empty.is_trailing_continuation(0));
    }

    #[test]
    fn high_high_low_pairs_the_second_high() {
        let text = [0xD800, 0xD800, 0xDC00];
        let cursor = CodepointCursor::new(&text);
        assert_eq!(cursor.scalar_at(0), 0xD800);
        assert_eq!(cursor.scalar_at(1), 0x1_0000);
        assert_eq!(cursor.scalar_at(2), 0x1_0000);
        assert!(!cursor.is_trailing_continuation(1));
        assert!(cursor.is_trailing_continuation(2));
    }

    #[test]
    fn extreme_indices_are_not_pair_halves() {
        let text = [0xD83D, 0xDE1C];
        let cursor = CodepointCursor::new(&text);
        assert!(cursor.is_leading_half(0));
        assert!(!cursor.is_leading_half(usize::MAX));
        assert!(!cursor.is_trailing_continuation(usize::MAX));
    }
}
