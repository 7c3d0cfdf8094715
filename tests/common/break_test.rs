//! Reader for `GraphemeBreakTest.txt`-style fixtures.
//!
//! Each data line lists hex code points separated by `÷` (break) or `×`
//! (no break); anything after `#` is a comment.

use super::encode_scalars;

/// One data line of a break test file.
#[derive(Clone, Debug)]
pub struct BreakCase {
    pub line: usize,
    pub comment: String,
    /// Expected clusters, each as scalar values.
    pub clusters: Vec<Vec<u32>>,
}

impl BreakCase {
    /// Whole test string as UTF-16.
    pub fn text(&self) -> Vec<u16> {
        let scalars: Vec<u32> = self.clusters.iter().flatten().copied().collect();
        encode_scalars(&scalars)
    }

    /// Expected clusters as UTF-16.
    pub fn expected(&self) -> Vec<Vec<u16>> {
        self.clusters.iter().map(|c| encode_scalars(c)).collect()
    }
}

/// Parse a single line. Returns `None` for blank and comment-only lines.
pub fn parse_line(line_no: usize, line: &str) -> Option<BreakCase> {
    let (cols, comment) = match line.split_once('#') {
        Some((cols, comment)) => (cols, comment.trim()),
        None => (line, ""),
    };
    if cols.trim().is_empty() {
        return None;
    }

    let mut clusters = Vec::new();
    let mut current = Vec::new();
    for token in cols.split_whitespace() {
        match token {
            "÷" => {
                if !current.is_empty() {
                    clusters.push(std::mem::take(&mut current));
                }
            }
            "×" => {}
            hex => {
                let scalar = u32::from_str_radix(hex, 16)
                    .unwrap_or_else(|_| panic!("line {line_no}: bad code point {hex:?}"));
                current.push(scalar);
            }
        }
    }
    if !current.is_empty() {
        clusters.push(current);
    }

    Some(BreakCase {
        line: line_no,
        comment: comment.to_string(),
        clusters,
    })
}

/// Parse every data line of a fixture file.
pub fn parse(data: &str) -> Vec<BreakCase> {
    data.lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(i + 1, line))
        .collect()
}
