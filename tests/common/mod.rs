//! Shared helpers for integration tests.

#![allow(clippy::nursery)] // Test infra prioritizes clarity over pedantry
#![allow(clippy::pedantic)] // Test infra prioritizes clarity over pedantry
#![allow(dead_code)]

pub mod break_test;

use std::sync::Once;

pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// UTF-16 code units of `s`.
pub fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Encode scalar values to UTF-16, passing surrogate code points through
/// as single (unpaired) units.
pub fn encode_scalars(scalars: &[u32]) -> Vec<u16> {
    let mut out = Vec::with_capacity(scalars.len() * 2);
    let mut buf = [0u16; 2];
    for &scalar in scalars {
        match char::from_u32(scalar) {
            Some(ch) => out.extend_from_slice(ch.encode_utf16(&mut buf)),
            None => out.push(scalar as u16),
        }
    }
    out
}

/// Boundaries obtained by stepping backward from the end with
/// `previous_break`, returned in ascending order and including 0 and
/// `text.len()`.
pub fn boundaries_backward(text: &[u16]) -> Vec<usize> {
    let mut out = vec![text.len()];
    let mut index = text.len();
    while index > 0 {
        index = grapheme_breaker::previous_break(text, index as isize);
        out.push(index);
    }
    if text.is_empty() {
        return vec![0];
    }
    out.reverse();
    out
}

/// Boundaries obtained by stepping forward from 0 with `next_break`.
pub fn boundaries_forward(text: &[u16]) -> Vec<usize> {
    let mut out = vec![0];
    let mut index = 0;
    while index < text.len() {
        index = grapheme_breaker::next_break(text, index as isize);
        out.push(index);
    }
    out
}
