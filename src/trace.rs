//! Bitmap-to-vector tracing seam and the keyframe conversion step.

pub mod convert;
pub mod potrace;

use std::path::Path;

use crate::foundation::error::{AnimError, AnimResult};

pub use convert::{ConvertedKeyframes, RETRY_THRESHOLD, convert_images, trace_with_retry};
pub use potrace::{PotraceTracer, is_potrace_on_path};

/// Parameters forwarded to the tracer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TraceParams {
    /// Luminance cutoff (0-255) between foreground and background.
    pub threshold: u8,
    /// Trace light shapes on a dark background.
    pub invert: bool,
    /// Speckles with at most this many pixels are suppressed.
    pub turd_size: u32,
    /// Curve optimization tolerance; higher gives simpler curves.
    pub curve_tolerance: f64,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            threshold: 128,
            invert: false,
            turd_size: 2,
            curve_tolerance: 1.0,
        }
    }
}

impl TraceParams {
    pub fn validate(&self) -> AnimResult<()> {
        if !self.curve_tolerance.is_finite() || self.curve_tolerance <= 0.0 {
            return Err(AnimError::validation(
                "curve tolerance must be a positive number",
            ));
        }
        Ok(())
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }
}

/// One traced image: path data in image pixel space plus the image size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracedImage {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// Converts one raster image into path data.
///
/// Implementations return [`AnimError::NoPathData`] when the image yields nothing to
/// trace; callers rely on that variant to decide whether to retry.
pub trait Tracer: Send + Sync {
    fn trace(&self, image: &Path, params: &TraceParams) -> AnimResult<TracedImage>;
}
