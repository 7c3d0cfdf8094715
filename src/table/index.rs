//! Two-level block index for constant-time class lookups.
//!
//! The scalar range is cut into 256-value blocks. Identical blocks are
//! stored once, and a per-block index points at the shared copy. Most of
//! the code space is unassigned or uniformly `Other`, so only a few dozen
//! distinct blocks exist in practice.

use std::collections::HashMap;

use crate::class::BreakClass;
use crate::table::{ClassRange, MAX_SCALAR};

const BLOCK_SHIFT: u32 = 8;
const BLOCK_LEN: usize = 1 << BLOCK_SHIFT;
const BLOCK_MASK: usize = BLOCK_LEN - 1;
const BLOCK_COUNT: usize = (MAX_SCALAR as usize + 1) >> BLOCK_SHIFT;

pub(crate) struct BlockIndex {
    index: Box<[u16]>,
    blocks: Box<[BreakClass]>,
}

impl BlockIndex {
    /// Build the index from sorted, disjoint ranges.
    pub(crate) fn build(ranges: &[ClassRange]) -> Self {
        let mut index = Vec::with_capacity(BLOCK_COUNT);
        let mut blocks: Vec<BreakClass> = Vec::new();
        let mut seen: HashMap<[BreakClass; BLOCK_LEN], u16> = HashMap::new();
        let mut next = 0;

        for block_no in 0..BLOCK_COUNT {
            let base = (block_no << BLOCK_SHIFT) as u32;
            let last = base + BLOCK_MASK as u32;

            while next < ranges.len() && ranges[next].end < base {
                next += 1;
            }

            let mut block = [BreakClass::Other; BLOCK_LEN];
            for range in ranges[next..].iter().take_while(|r| r.start <= last) {
                let lo = (range.start.max(base) - base) as usize;
                let hi = (range.end.min(last) - base) as usize;
                block[lo..=hi].fill(range.class);
            }

            let id = *seen.entry(block).or_insert_with(|| {
                let id = (blocks.len() / BLOCK_LEN) as u16;
                blocks.extend_from_slice(&block);
                id
            });
            index.push(id);
        }

        Self {
            index: index.into_boxed_slice(),
            blocks: blocks.into_boxed_slice(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, scalar: u32) -> BreakClass {
        if scalar > MAX_SCALAR {
            return BreakClass::Other;
        }
        let block = usize::from(self.index[(scalar >> BLOCK_SHIFT) as usize]);
        self.blocks[(block << BLOCK_SHIFT) | (scalar as usize & BLOCK_MASK)]
    }

    /// Number of distinct blocks stored.
    pub(crate) fn block_count(&self) -> usize {
        self.blocks.len() / BLOCK_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ranges_share_one_block() {
        let index = BlockIndex::build(&[]);
        assert_eq!(index.block_count(), 1);
        assert_eq!(index.get(0), BreakClass::Other);
        assert_eq!(index.get(MAX_SCALAR), BreakClass::Other);
        assert_eq!(index.get(u32::MAX), BreakClass::Other);
    }

    #[test]
    fn ranges_spanning_block_edges() {
        let ranges = [
            ClassRange::new(0x00FE, 0x0101, BreakClass::Extend),
            ClassRange::new(0x0200, 0x05FF, BreakClass::Control),
            ClassRange::new(0x10_FFFF, 0x10_FFFF, BreakClass::L),
        ];
        let index = BlockIndex::build(&ranges);

        assert_eq!(index.get(0x00FD), BreakClass::Other);
        assert_eq!(index.get(0x00FE), BreakClass::Extend);
        assert_eq!(index.get(0x0100), BreakClass::Extend);
        assert_eq!(index.get(0x0101), BreakClass::Extend);
        assert_eq!(index.get(0x0102), BreakClass::Other);
        assert_eq!(index.get(0x01FF), BreakClass::Other);
        assert_eq!(index.get(0x0200), BreakClass::Control);
        assert_eq!(index.get(0x0400), BreakClass::Control);
        assert_eq!(index.get(0x05FF), BreakClass::Control);
        assert_eq!(index.get(0x0600), BreakClass::Other);
        assert_eq!(index.get(0x10_FFFE), BreakClass::Other);
        assert_eq!(index.get(0x10_FFFF), BreakClass::L);

        // Blocks 0x02..=0x05 are all Control and must be stored once.
        // Distinct: Other, tail of 0x00, head of 0x01, Control, last block.
        assert_eq!(index.block_count(), 5);
    }

    #[test]
    fn many_ranges_in_one_block() {
        let ranges: Vec<_> = (0..16u32)
            .map(|i| ClassRange::new(0xAC00 + i * 4, 0xAC00 + i * 4 + 1, BreakClass::LV))
            .collect();
        let index = BlockIndex::build(&ranges);
        for i in 0..16u32 {
            let at = 0xAC00 + i * 4;
            assert_eq!(index.get(at), BreakClass::LV);
            assert_eq!(index.get(at + 1), BreakClass::LV);
            assert_eq!(index.get(at + 2), BreakClass::Other);
            assert_eq!(index.get(at + 3), BreakClass::Other);
        }
    }
}
