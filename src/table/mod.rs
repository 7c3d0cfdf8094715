//! Scalar value to break class lookup table.
//!
//! A [`ClassTable`] is decoded once from a serialized asset and is
//! immutable afterwards, so a single instance can be shared across threads
//! without locking. The asset bundled with the crate is available through
//! [`ClassTable::bundled`].
//!
//! # Usage
//!
//! ```
//! use grapheme_breaker::{BreakClass, ClassTable};
//!
//! let table = ClassTable::bundled();
//! assert_eq!(table.class_of(0x0301), BreakClass::Extend);
//! assert_eq!(table.class_of(0x1F1FA), BreakClass::RegionalIndicator);
//! assert_eq!(table.class_of(0x0041), BreakClass::Other);
//! ```

mod format;
mod index;

use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::class::BreakClass;
use crate::error::Result;
use index::BlockIndex;

/// Largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

static BUNDLED_ASSET: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/grapheme_break.bin"
));

/// Unicode version a table was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnicodeVersion {
    pub major: u8,
    pub minor: u8,
    pub update: u8,
}

impl UnicodeVersion {
    #[must_use]
    pub const fn new(major: u8, minor: u8, update: u8) -> Self {
        Self {
            major,
            minor,
            update,
        }
    }
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.update)
    }
}

/// Inclusive run of scalar values sharing one break class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassRange {
    pub start: u32,
    pub end: u32,
    pub class: BreakClass,
}

impl ClassRange {
    #[must_use]
    pub const fn new(start: u32, end: u32, class: BreakClass) -> Self {
        Self { start, end, class }
    }

    #[must_use]
    pub const fn contains(&self, scalar: u32) -> bool {
        self.start <= scalar && scalar <= self.end
    }
}

/// Read-only mapping from every scalar value to its [`BreakClass`].
///
/// Values not covered by any range, including anything above
/// [`MAX_SCALAR`], classify as [`BreakClass::Other`].
pub struct ClassTable {
    version: UnicodeVersion,
    ranges: Box<[ClassRange]>,
    index: BlockIndex,
}

impl ClassTable {
    /// Decode a serialized table.
    ///
    /// The asset must carry a matching checksum and format version; a table
    /// is never returned for a damaged asset.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (version, ranges) = format::decode(bytes)?;
        Ok(Self::assemble(version, ranges))
    }

    /// Read and decode a serialized table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read grapheme break table");
        Self::from_bytes(&bytes)
    }

    /// Build a table from explicit ranges.
    ///
    /// Ranges must be sorted by start and must not overlap.
    pub fn from_ranges<I>(version: UnicodeVersion, ranges: I) -> Result<Self>
    where
        I: IntoIterator<Item = ClassRange>,
    {
        let ranges: Vec<ClassRange> = ranges.into_iter().collect();
        format::validate(&ranges)?;
        Ok(Self::assemble(version, ranges))
    }

    fn assemble(version: UnicodeVersion, ranges: Vec<ClassRange>) -> Self {
        let index = BlockIndex::build(&ranges);
        debug!(
            %version,
            ranges = ranges.len(),
            blocks = index.block_count(),
            "built grapheme break table"
        );
        Self {
            version,
            ranges: ranges.into_boxed_slice(),
            index,
        }
    }

    /// The table compiled into this crate.
    ///
    /// Decoded on first use and shared for the lifetime of the process.
    ///
    /// # Panics
    ///
    /// Panics if the bundled asset fails validation. Segmenting with a
    /// damaged table would return wrong boundaries without any other sign
    /// of trouble, so there is no fallback.
    #[must_use]
    pub fn bundled() -> &'static Self {
        bundled_arc()
    }

    /// Shared handle to the bundled table.
    #[must_use]
    pub fn bundled_shared() -> Arc<Self> {
        Arc::clone(bundled_arc())
    }

    /// Break class of a scalar value.
    #[inline]
    #[must_use]
    pub fn class_of(&self, scalar: u32) -> BreakClass {
        self.index.get(scalar)
    }

    /// Unicode version stamped into the table.
    #[must_use]
    pub const fn unicode_version(&self) -> UnicodeVersion {
        self.version
    }

    /// Classified ranges, sorted by start.
    #[must_use]
    pub fn ranges(&self) -> &[ClassRange] {
        &self.ranges
    }

    /// Number of classified ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Serialize into the asset format accepted by [`ClassTable::from_bytes`].
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        format::encode(self.version, &self.ranges)
    }
}

impl fmt::Debug for ClassTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassTable")
            .field("version", &self.version)
            .field("ranges", &self.ranges.len())
            .field("blocks", &self.index.block_count())
            .finish()
    }
}

fn bundled_arc() -> &'static Arc<ClassTable> {
    static BUNDLED: OnceLock<Arc<ClassTable>> = OnceLock::new();
    BUNDLED.get_or_init(|| match ClassTable::from_bytes(BUNDLED_ASSET) {
        Ok(table) => Arc::new(table),
        Err(err) => panic!("bundled grapheme break table is invalid: {err}"),
    })
}
