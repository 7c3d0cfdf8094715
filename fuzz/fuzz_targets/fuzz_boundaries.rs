//! Fuzz target for boundary scanning.
//!
//! Feeds arbitrary code units, including unpaired surrogates, and checks
//! that both scan directions agree and never split a surrogate pair.

#![no_main]

use arbitrary::Arbitrary;
use grapheme_breaker::{Segmenter, previous_break};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ScanInput {
    units: Vec<u16>,
    /// Probe index, deliberately allowed to fall outside the text.
    index: i32,
}

fuzz_target!(|input: ScanInput| {
    let text = &input.units[..input.units.len().min(4096)];
    let segmenter = Segmenter::new();
    let len = text.len();

    let next = segmenter.next_break(text, input.index as isize);
    let prev = segmenter.previous_break(text, input.index as isize);
    assert!(next <= len);
    assert!(prev <= len);

    let forward = segmenter.boundaries(text);
    assert_eq!(forward.first(), Some(&0));
    assert_eq!(forward.last(), Some(&len));

    let mut backward = vec![len];
    let mut at = len;
    while at > 0 {
        at = previous_break(text, at as isize);
        backward.push(at);
    }
    backward.reverse();
    if len > 0 {
        assert_eq!(forward, backward);
    }

    for &b in forward.iter().filter(|&&b| b > 0 && b < len) {
        let high = (0xD800..=0xDBFF).contains(&text[b - 1]);
        let low = (0xDC00..=0xDFFF).contains(&text[b]);
        assert!(!(high && low), "boundary {b} splits a surrogate pair");
    }

    let joined: Vec<u16> = segmenter.break_clusters(text).concat();
    assert_eq!(joined, text);
});
