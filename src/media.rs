//! Video decoding into still frames, via the system `ffmpeg`.

pub mod extract;

pub use extract::{ExtractedFrames, FfmpegExtractor, FrameExtractor, is_ffmpeg_on_path};
