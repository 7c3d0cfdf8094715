//! Binary encoding of the class table asset.
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! 0      4   magic "GCBT"
//! 4      2   format version
//! 6      3   Unicode version (major, minor, update)
//! 9      1   number of break classes
//! 10     4   range count n
//! 14     9n  ranges: start u32, end u32 (inclusive), class id u8
//! 14+9n  4   FNV-1a checksum of every preceding byte
//! ```

use crate::class::BreakClass;
use crate::error::{Error, Result};
use crate::table::{ClassRange, MAX_SCALAR, UnicodeVersion};

pub(crate) const MAGIC: [u8; 4] = *b"GCBT";
pub(crate) const FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = 14;
const RANGE_LEN: usize = 9;
const CHECKSUM_LEN: usize = 4;

/// FNV-1a, 32 bit.
pub(crate) fn checksum(bytes: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811C_9DC5;
    const PRIME: u32 = 0x0100_0193;

    bytes.iter().fold(OFFSET_BASIS, |hash, &b| {
        (hash ^ u32::from(b)).wrapping_mul(PRIME)
    })
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Decode and validate an asset.
///
/// Header, length and checksum are checked before any range is looked at,
/// so a corrupted body is reported as a checksum failure rather than as
/// whatever garbage range it happens to contain.
pub(crate) fn decode(bytes: &[u8]) -> Result<(UnicodeVersion, Vec<ClassRange>)> {
    let minimum = HEADER_LEN + CHECKSUM_LEN;
    if bytes.len() < minimum {
        return Err(Error::Truncated {
            expected: minimum,
            actual: bytes.len(),
        });
    }

    let magic = [bytes[0], bytes[1], bytes[2], bytes[3]];
    if magic != MAGIC {
        return Err(Error::BadMagic(magic));
    }

    let format = read_u16(bytes, 4);
    if format != FORMAT_VERSION {
        return Err(Error::UnsupportedFormat(format));
    }

    let version = UnicodeVersion::new(bytes[6], bytes[7], bytes[8]);

    let class_count = bytes[9];
    if class_count != BreakClass::COUNT {
        return Err(Error::ClassCountMismatch {
            expected: BreakClass::COUNT,
            actual: class_count,
        });
    }

    let count = read_u32(bytes, 10) as usize;
    let expected = count
        .checked_mul(RANGE_LEN)
        .and_then(|body| body.checked_add(minimum))
        .unwrap_or(usize::MAX);
    if bytes.len() != expected {
        return Err(Error::Truncated {
            expected,
            actual: bytes.len(),
        });
    }

    let body_end = expected - CHECKSUM_LEN;
    let stored = read_u32(bytes, body_end);
    let computed = checksum(&bytes[..body_end]);
    if stored != computed {
        return Err(Error::ChecksumMismatch { stored, computed });
    }

    let mut ranges = Vec::with_capacity(count);
    for (n, raw) in bytes[HEADER_LEN..body_end]
        .chunks_exact(RANGE_LEN)
        .enumerate()
    {
        let start = read_u32(raw, 0);
        let end = read_u32(raw, 4);
        let id = raw[8];
        let class = BreakClass::from_id(id).ok_or(Error::UnknownClass { id, range: n })?;
        ranges.push(ClassRange { start, end, class });
    }
    validate(&ranges)?;

    Ok((version, ranges))
}

/// Check that ranges are well-formed, sorted and disjoint.
pub(crate) fn validate(ranges: &[ClassRange]) -> Result<()> {
    let mut previous_end: Option<u32> = None;
    for range in ranges {
        if range.start > range.end || range.end > MAX_SCALAR {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        if let Some(previous_end) = previous_end {
            if range.start <= previous_end {
                return Err(Error::UnorderedRanges {
                    previous_end,
                    start: range.start,
                });
            }
        }
        previous_end = Some(range.end);
    }
    Ok(())
}

/// Encode ranges into the asset format.
pub(crate) fn encode(version: UnicodeVersion, ranges: &[ClassRange]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + ranges.len() * RANGE_LEN + CHECKSUM_LEN);
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    out.extend_from_slice(&[version.major, version.minor, version.update]);
    out.push(BreakClass::COUNT);
    out.extend_from_slice(&(ranges.len() as u32).to_le_bytes());
    for range in ranges {
        out.extend_from_slice(&range.start.to_le_bytes());
        out.extend_from_slice(&range.end.to_le_bytes());
        out.push(range.class.id());
    }
    let sum = checksum(&out);
    out.extend_from_slice(&sum.to_le_bytes());
    out
}
