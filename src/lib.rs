//! Tracetween turns raster keyframes (or a video) into a vector animation.
//!
//! Keyframe images are traced to SVG path data, cleaned of background and edge noise,
//! rounded, and optionally interleaved with interpolated tweens. The resulting frame
//! sequence is written as a self-contained HTML player and/or a SMIL-animated SVG.
//!
//! - [`animate`] runs the whole pipeline from [`AnimateOptions`]
//! - [`Tracer`], [`FrameExtractor`] and [`ShapeMorpher`] are the collaborator seams
//! - [`path`] holds the lexical path-string operations used by every stage
#![forbid(unsafe_code)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod media;
pub mod morph;
pub mod path;
pub mod pipeline;
pub mod render;
pub mod trace;
pub mod tween;

pub use crate::config::{AnimateOptions, AnimationConfig, OutputSelection};
pub use crate::foundation::core::{Canvas, Fps};
pub use crate::foundation::error::{AnimError, AnimResult};
pub use crate::media::{ExtractedFrames, FfmpegExtractor, FrameExtractor};
pub use crate::morph::{Interpolator, RingMorpher, ShapeMorpher};
pub use crate::pipeline::{RunSummary, Stage, animate};
pub use crate::render::{WrittenOutputs, render_player, render_smil, write_outputs};
pub use crate::trace::{PotraceTracer, TraceParams, TracedImage, Tracer};
pub use crate::tween::{AssembleOpts, Frame, TweenEngine, assemble_frames};
