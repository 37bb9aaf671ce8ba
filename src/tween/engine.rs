use crate::{
    foundation::error::AnimResult,
    morph::{Interpolator, RingMorpher, ShapeMorpher},
    path::{precision::optimize_precision, scan::split_subpaths_by_area},
};

/// Evenly spaced progress values strictly inside `(0, 1)`: `i / (count + 1)` for `i in 1..=count`.
pub fn progress_schedule(count: usize) -> impl Iterator<Item = f64> {
    let denom = (count + 1) as f64;
    (1..=count).map(move |i| i as f64 / denom)
}

/// Synthesizes in-between outlines for one keyframe interval.
///
/// Compound keyframes with the same number of sub-paths are morphed pair by pair,
/// pairing sub-paths by bounding-box area rank. Anything else (single outline, or a
/// sub-path count that changed between keyframes) is morphed as one whole shape.
#[derive(Clone, Debug, Default)]
pub struct TweenEngine<M = RingMorpher> {
    morpher: M,
    precision: Option<u32>,
}

/// Result of one interval, with whether the duplicate-keyframe fallback kicked in.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalTweens {
    pub paths: Vec<String>,
    pub fell_back: bool,
}

impl<M: ShapeMorpher> TweenEngine<M> {
    pub fn new(morpher: M) -> Self {
        Self {
            morpher,
            precision: None,
        }
    }

    /// Round every synthesized tween to `precision` decimals.
    pub fn with_precision(mut self, precision: Option<u32>) -> Self {
        self.precision = precision;
        self
    }

    pub fn morpher(&self) -> &M {
        &self.morpher
    }

    /// Build `count` tweens, or the morpher's error.
    pub fn try_generate_tweens(&self, from: &str, to: &str, count: usize) -> AnimResult<Vec<String>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let from_parts = split_subpaths_by_area(from);
        let to_parts = split_subpaths_by_area(to);

        let tweens: Vec<String> = if from_parts.len() == to_parts.len() && from_parts.len() > 1 {
            let interps = from_parts
                .iter()
                .zip(&to_parts)
                .map(|(a, b)| self.morpher.interpolator(a, b))
                .collect::<AnimResult<Vec<Interpolator>>>()?;
            progress_schedule(count)
                .map(|t| interps.iter().map(|f| f(t)).collect::<Vec<_>>().join(" "))
                .collect()
        } else {
            let interp = self.morpher.interpolator(from, to)?;
            progress_schedule(count).map(|t| interp(t)).collect()
        };

        Ok(match self.precision {
            Some(p) => tweens.iter().map(|s| optimize_precision(s, p)).collect(),
            None => tweens,
        })
    }

    /// Like [`Self::try_generate_tweens`], but never fails: a morpher error is logged and
    /// replaced by `count` copies of `from`.
    pub fn interval(&self, from: &str, to: &str, count: usize) -> IntervalTweens {
        match self.try_generate_tweens(from, to, count) {
            Ok(paths) => IntervalTweens {
                paths,
                fell_back: false,
            },
            Err(err) => {
                tracing::warn!(error = %err, "interpolation failed; repeating keyframe for this interval");
                IntervalTweens {
                    paths: vec![from.to_string(); count],
                    fell_back: true,
                }
            }
        }
    }

    /// Exactly `count` tween outlines for the open interval between `from` and `to`.
    pub fn generate_tweens(&self, from: &str, to: &str, count: usize) -> Vec<String> {
        self.interval(from, to, count).paths
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tween/engine.rs"]
mod tests;
