pub mod engine;
pub mod sequence;

pub use engine::{IntervalTweens, TweenEngine, progress_schedule};
pub use sequence::{AssembleOpts, Frame, assemble_frames, expected_frame_count};
