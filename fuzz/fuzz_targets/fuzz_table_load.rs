//! Fuzz target for class table decoding.
//!
//! Tests that ClassTable::from_bytes rejects arbitrary bytes with an error
//! instead of panicking, and that accepted tables re-encode identically.

#![no_main]

use grapheme_breaker::ClassTable;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(table) = ClassTable::from_bytes(data) {
        assert_eq!(table.to_bytes(), data);
        // Lookups stay total, including past the scalar range.
        for scalar in [0, 0x0D, 0xD800, 0x10_FFFF, 0x11_0000, u32::MAX] {
            let _ = table.class_of(scalar);
        }
    }

    // A valid header in front of arbitrary bytes reaches the range checks.
    let mut framed = b"GCBT\x01\x00\x0e\x00\x00\x0c".to_vec();
    framed.extend_from_slice(&((data.len() / 9) as u32).to_le_bytes());
    framed.extend_from_slice(&data[..data.len() / 9 * 9]);
    let sum = framed
        .iter()
        .fold(0x811C_9DC5u32, |h, &b| (h ^ u32::from(b)).wrapping_mul(0x0100_0193));
    framed.extend_from_slice(&sum.to_le_bytes());
    let _ = ClassTable::from_bytes(&framed);
});
