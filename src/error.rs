//! Error types for class table loading.

use std::fmt;
use std::io;

use crate::table::UnicodeVersion;

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for class table construction.
///
/// Every variant is fatal for the table being built: a table that fails
/// validation is never handed out, so lookups cannot silently fall back
/// to default classes.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading an asset from disk.
    Io(io::Error),
    /// Asset is shorter or longer than its header says.
    Truncated { expected: usize, actual: usize },
    /// Asset does not start with the `GCBT` magic.
    BadMagic([u8; 4]),
    /// Asset format version this build cannot decode.
    UnsupportedFormat(u16),
    /// Asset was built for a different set of break classes.
    ClassCountMismatch { expected: u8, actual: u8 },
    /// Stored checksum does not match the asset contents.
    ChecksumMismatch { stored: u32, computed: u32 },
    /// Range refers to a class id outside the known enumeration.
    UnknownClass { id: u8, range: usize },
    /// Range with `start > end` or beyond the last scalar value.
    InvalidRange { start: u32, end: u32 },
    /// Ranges are not sorted or overlap.
    UnorderedRanges { previous_end: u32, start: u32 },
    /// Table carries a different Unicode version than requested.
    UnicodeVersionMismatch {
        expected: UnicodeVersion,
        actual: UnicodeVersion,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated { expected, actual } => {
                write!(f, "class table truncated: expected {expected} bytes, got {actual}")
            }
            Self::BadMagic(magic) => write!(f, "bad class table magic: {magic:02X?}"),
            Self::UnsupportedFormat(version) => {
                write!(f, "unsupported class table format version {version}")
            }
            Self::ClassCountMismatch { expected, actual } => write!(
                f,
                "class table has {actual} break classes, expected {expected}"
            ),
            Self::ChecksumMismatch { stored, computed } => write!(
                f,
                "class table checksum mismatch: stored {stored:#010x}, computed {computed:#010x}"
            ),
            Self::UnknownClass { id, range } => {
                write!(f, "unknown break class id {id} in range #{range}")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid code point range U+{start:04X}..U+{end:04X}")
            }
            Self::UnorderedRanges {
                previous_end,
                start,
            } => write!(
                f,
                "range starting at U+{start:04X} overlaps or precedes range ending at U+{previous_end:04X}"
            ),
            Self::UnicodeVersionMismatch { expected, actual } => write!(
                f,
                "class table is for Unicode {actual}, expected Unicode {expected}"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
