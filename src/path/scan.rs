//! Lexical scanning of traced path data.
//!
//! Path strings are never parsed into a command tree here. They are treated as a flat
//! character stream that is cut into move-delimited runs (sub-paths), plus a numeric
//! token scanner used for bounding-box estimation and coordinate rounding. Downstream
//! consumers that need real geometry (the morpher) re-parse the strings themselves.

use std::ops::Range;

/// Iterator over the byte ranges of numeric tokens in a path string.
///
/// A numeric token is an optional `-`, one or more ASCII digits, an optional `.`,
/// then zero or more digits. Exponents and leading-dot numbers are not recognized:
/// `.5` scans as `5`.
pub struct NumberScanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> NumberScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            bytes: input.as_bytes(),
            pos: 0,
        }
    }
}

impl Iterator for NumberScanner<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let b = self.bytes;
        while self.pos < b.len() {
            let start = self.pos;
            let mut i = start;
            if b[i] == b'-' {
                i += 1;
            }
            if i < b.len() && b[i].is_ascii_digit() {
                while i < b.len() && b[i].is_ascii_digit() {
                    i += 1;
                }
                if i < b.len() && b[i] == b'.' {
                    i += 1;
                    while i < b.len() && b[i].is_ascii_digit() {
                        i += 1;
                    }
                }
                self.pos = i;
                return Some(start..i);
            }
            self.pos = start + 1;
        }
        None
    }
}

/// Parsed values of every numeric token, in order.
pub fn numeric_values(input: &str) -> Vec<f64> {
    NumberScanner::new(input)
        .filter_map(|r| input[r].parse::<f64>().ok())
        .collect()
}

fn is_move(b: u8) -> bool {
    b == b'M' || b == b'm'
}

/// Split a compound path into its move-delimited runs, in source order.
///
/// A run starts at a move command and extends up to, not including, the next move
/// command or the end of input. A move command immediately followed by another move
/// starts no run. Text before the first move is not part of any run. Runs are
/// trimmed. When no run is found the whole input is returned as the only sub-path.
pub fn split_subpaths(path: &str) -> Vec<String> {
    let b = path.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < b.len() {
        if !is_move(b[i]) {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < b.len() && !is_move(b[j]) {
            j += 1;
        }
        if j > i + 1 {
            out.push(path[i..j].trim().to_string());
            i = j;
        } else {
            i += 1;
        }
    }

    if out.is_empty() {
        out.push(path.to_string());
    }
    out
}

/// Split a compound path and order the runs by bounding-box area, largest first.
///
/// The sort is stable, so runs with equal area keep their source order. This rank is
/// the only correspondence signal used when pairing sub-shapes across keyframes.
pub fn split_subpaths_by_area(path: &str) -> Vec<String> {
    let mut keyed: Vec<(f64, String)> = split_subpaths(path)
        .into_iter()
        .map(|s| (BoundingBox::sample(&s).area(), s))
        .collect();
    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, s)| s).collect()
}

/// Approximate axis-aligned bounds of a sub-path.
///
/// Every consecutive pair of numeric tokens (starting at token 0) is read as an
/// `(x, y)` sample. This is not a geometric bound: relative commands and odd-length
/// operand runs skew it. A sub-path with fewer than four numeric tokens gets the
/// degenerate box at the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn sample(subpath: &str) -> Self {
        let nums = numeric_values(subpath);
        if nums.len() < 4 {
            return Self::default();
        }

        let mut bb = Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for pair in nums.chunks_exact(2) {
            let (x, y) = (pair[0], pair[1]);
            bb.min_x = bb.min_x.min(x);
            bb.max_x = bb.max_x.max(x);
            bb.min_y = bb.min_y.min(y);
            bb.max_y = bb.max_y.max(y);
        }
        bb
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/scan.rs"]
mod tests;
