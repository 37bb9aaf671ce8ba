//! Shape morphing seam.
//!
//! The tween engine only decides *which* outlines correspond and *when* to sample
//! them. Producing geometry for an intermediate outline is the morpher's job.

pub mod ring;

use crate::foundation::error::AnimResult;

pub use ring::{DEFAULT_MAX_SEGMENT_LENGTH, RingMorpher};

/// Sampler returned by a morpher: progress `t` in `[0, 1]` to path data.
pub type Interpolator = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Builds interpolators between two outlines.
///
/// Implementations may reject degenerate or unparseable outlines with an error; the
/// tween engine recovers from that, so morphers should fail rather than guess.
pub trait ShapeMorpher: Send + Sync {
    fn interpolator(&self, from: &str, to: &str) -> AnimResult<Interpolator>;
}
