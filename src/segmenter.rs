//! Cluster-level API built on [`BoundaryScanner`].

use std::iter::FusedIterator;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};
use crate::scanner::BoundaryScanner;
use crate::table::{ClassTable, UnicodeVersion};

/// Where a [`Segmenter`] gets its class table from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TableSource {
    /// The table compiled into the crate.
    #[default]
    Bundled,
    /// A serialized table on disk.
    Path(PathBuf),
    /// A serialized table already in memory.
    Bytes(Vec<u8>),
}

/// Segmenter configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmenterOptions {
    /// Class table to load.
    pub table: TableSource,
    /// Reject tables stamped with any other Unicode version.
    pub require_unicode_version: Option<UnicodeVersion>,
}

/// Splits UTF-16 text into extended grapheme clusters.
///
/// A segmenter owns a shared handle to its class table; cloning it is
/// cheap and clones share the table.
///
/// # Example
///
/// ```
/// use grapheme_breaker::Segmenter;
///
/// let segmenter = Segmenter::new();
/// let text: Vec<u16> = "😜🇺🇸👍".encode_utf16().collect();
/// let clusters = segmenter.break_clusters(&text);
/// assert_eq!(clusters.len(), 3);
/// assert_eq!(String::from_utf16_lossy(clusters[1]), "🇺🇸");
/// assert_eq!(segmenter.count_breaks(&text), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Segmenter {
    table: Arc<ClassTable>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Segmenter over the bundled table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_table(ClassTable::bundled_shared())
    }

    /// Segmenter over an already loaded table.
    #[must_use]
    pub const fn with_table(table: Arc<ClassTable>) -> Self {
        Self { table }
    }

    /// Build a segmenter from options, loading the table they name.
    pub fn with_options(options: SegmenterOptions) -> Result<Self> {
        let table = match options.table {
            TableSource::Bundled => ClassTable::bundled_shared(),
            TableSource::Path(path) => Arc::new(ClassTable::from_path(path)?),
            TableSource::Bytes(bytes) => Arc::new(ClassTable::from_bytes(&bytes)?),
        };

        if let Some(expected) = options.require_unicode_version {
            let actual = table.unicode_version();
            if actual != expected {
                return Err(Error::UnicodeVersionMismatch { expected, actual });
            }
        }

        Ok(Self::with_table(table))
    }

    /// Process-wide segmenter over the bundled table.
    pub(crate) fn bundled() -> &'static Self {
        static SEGMENTER: OnceLock<Segmenter> = OnceLock::new();
        SEGMENTER.get_or_init(Self::new)
    }

    #[must_use]
    pub fn table(&self) -> &ClassTable {
        &self.table
    }

    /// Scanner borrowing this segmenter's table.
    #[must_use]
    pub fn scanner(&self) -> BoundaryScanner<'_> {
        BoundaryScanner::new(&self.table)
    }

    /// See [`BoundaryScanner::next_break`].
    #[must_use]
    pub fn next_break(&self, text: &[u16], index: isize) -> usize {
        self.scanner().next_break(text, index)
    }

    /// See [`BoundaryScanner::previous_break`].
    #[must_use]
    pub fn previous_break(&self, text: &[u16], index: isize) -> usize {
        self.scanner().previous_break(text, index)
    }

    /// All clusters of `text`, in order. Empty text has no clusters.
    #[must_use]
    pub fn break_clusters<'a>(&self, text: &'a [u16]) -> Vec<&'a [u16]> {
        let scanner = self.scanner();
        let len = text.len();
        let mut clusters = Vec::new();
        let mut index = 0;

        loop {
            let brk = scanner.next_break_from(text, index);
            if brk >= len {
                break;
            }
            clusters.push(&text[index..brk]);
            index = brk;
        }
        if index < len {
            clusters.push(&text[index..]);
        }

        clusters
    }

    /// Number of clusters in `text`, without slicing.
    #[must_use]
    pub fn count_breaks(&self, text: &[u16]) -> usize {
        let scanner = self.scanner();
        let len = text.len();
        let mut count = 0;
        let mut index = 0;

        while index < len {
            index = scanner.next_break_from(text, index);
            count += 1;
        }

        count
    }

    /// Every boundary of `text`, including 0 and `text.len()`.
    #[must_use]
    pub fn boundaries(&self, text: &[u16]) -> Vec<usize> {
        let scanner = self.scanner();
        let mut out = vec![0];
        let mut index = 0;

        while index < text.len() {
            index = scanner.next_break_from(text, index);
            out.push(index);
        }

        out
    }

    /// Lazy iterator over the clusters of `text`, usable from both ends.
    #[must_use]
    pub fn graphemes<'a>(&'a self, text: &'a [u16]) -> Graphemes<'a> {
        Graphemes::new(self.scanner(), text)
    }

    /// Clusters of a Rust string.
    ///
    /// Boundaries are computed on the UTF-16 encoding of `s`, then mapped
    /// back to byte offsets.
    #[must_use]
    pub fn break_str<'s>(&self, s: &'s str) -> Vec<&'s str> {
        let (units, offsets) = encode_with_offsets(s);
        self.boundaries(&units)
            .windows(2)
            .map(|w| &s[offsets[w[0]]..offsets[w[1]]])
            .collect()
    }

    /// Number of clusters in a Rust string.
    #[must_use]
    pub fn count_str(&self, s: &str) -> usize {
        let units: Vec<u16> = s.encode_utf16().collect();
        self.count_breaks(&units)
    }
}

/// UTF-16 units of `s`, with the byte offset of each unit's char.
///
/// `offsets` has one extra trailing entry equal to `s.len()`.
fn encode_with_offsets(s: &str) -> (Vec<u16>, Vec<usize>) {
    let mut units = Vec::with_capacity(s.len());
    let mut offsets = Vec::with_capacity(s.len() + 1);
    let mut buf = [0u16; 2];

    for (offset, ch) in s.char_indices() {
        for &unit in ch.encode_utf16(&mut buf).iter() {
            units.push(unit);
            offsets.push(offset);
        }
    }
    offsets.push(s.len());

    (units, offsets)
}

/// Iterator over grapheme clusters as code unit slices.
///
/// Created by [`Segmenter::graphemes`] or [`crate::graphemes`].
#[derive(Clone, Debug)]
pub struct Graphemes<'a> {
    scanner: BoundaryScanner<'a>,
    text: &'a [u16],
    front: usize,
    back: usize,
}

impl<'a> Graphemes<'a> {
    pub(crate) const fn new(scanner: BoundaryScanner<'a>, text: &'a [u16]) -> Self {
        Self {
            scanner,
            text,
            front: 0,
            back: text.len(),
        }
    }

    /// Not-yet-yielded part of the text.
    #[must_use]
    pub fn as_remaining(&self) -> &'a [u16] {
        &self.text[self.front..self.back]
    }

    /// Code unit offset of the next cluster from the front.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.front
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a [u16];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let end = self
            .scanner
            .next_break_from(self.text, self.front)
            .min(self.back);
        let cluster = &self.text[self.front..end];
        self.front = end;
        Some(cluster)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl DoubleEndedIterator for Graphemes<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let start = self
            .scanner
            .previous_break_from(self.text, self.back)
            .max(self.front);
        let cluster = &self.text[start..self.back];
        self.back = start;
        Some(cluster)
    }
}

impl FusedIterator for Graphemes<'_> {}
