//! Lexical operations on SVG path strings.
//!
//! Paths are never parsed into an AST here. Everything works on the numeric tokens and
//! move-command boundaries of the raw string.

pub mod precision;
pub mod sanitize;
pub mod scan;

pub use precision::{format_coordinate, format_fixed, optimize_precision, round_half_up};
pub use sanitize::{Rejection, classify, sanitize_path};
pub use scan::{BoundingBox, NumberScanner, numeric_values, split_subpaths, split_subpaths_by_area};
