//! Turning the user's input arguments into an ordered list of keyframe images.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::error::{AnimError, AnimResult},
    media::{ExtractedFrames, FrameExtractor},
};

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "webm", "mkv"];
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tiff", "webp"];

fn has_extension(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| exts.iter().any(|x| x.eq_ignore_ascii_case(e)))
}

pub fn is_video(path: &Path) -> bool {
    has_extension(path, VIDEO_EXTENSIONS)
}

pub fn is_image(path: &Path) -> bool {
    has_extension(path, IMAGE_EXTENSIONS)
}

/// Keyframe images in order. Holds the extraction directory alive for video input.
#[derive(Debug)]
pub struct ResolvedInput {
    frames: Vec<PathBuf>,
    extracted: Option<ExtractedFrames>,
}

impl ResolvedInput {
    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    pub fn is_video(&self) -> bool {
        self.extracted.is_some()
    }
}

/// Keep indices `0, skip, 2*skip, ...`.
pub fn apply_skip(frames: Vec<PathBuf>, skip: usize) -> Vec<PathBuf> {
    frames.into_iter().step_by(skip.max(1)).collect()
}

/// Resolve `inputs` as one video, one directory of images, or a list of image files,
/// then apply the `skip` stride.
#[tracing::instrument(skip(inputs, extractor), fields(inputs = inputs.len()))]
pub fn resolve_inputs(
    inputs: &[PathBuf],
    skip: usize,
    video_fps: Option<f64>,
    extractor: &dyn FrameExtractor,
) -> AnimResult<ResolvedInput> {
    let (frames, extracted) = match inputs {
        [] => return Err(AnimError::input("no input files given")),
        [single] if is_video(single) => {
            if !single.is_file() {
                return Err(AnimError::input(format!(
                    "video '{}' does not exist",
                    single.display()
                )));
            }
            let extracted = extractor.extract(single, video_fps)?;
            (extracted.frames().to_vec(), Some(extracted))
        }
        [single] if single.is_dir() => (list_image_dir(single)?, None),
        many => {
            if let Some(missing) = many.iter().find(|p| !p.is_file()) {
                return Err(AnimError::input(format!(
                    "input '{}' does not exist",
                    missing.display()
                )));
            }
            let mut frames = many.to_vec();
            frames.sort();
            (frames, None)
        }
    };

    let total = frames.len();
    let frames = apply_skip(frames, skip);
    tracing::info!(resolved = total, kept = frames.len(), skip, "resolved inputs");
    Ok(ResolvedInput { frames, extracted })
}

fn list_image_dir(dir: &Path) -> AnimResult<Vec<PathBuf>> {
    let mut frames = Vec::new();
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("list directory '{}'", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("read entry in '{}'", dir.display()))?
            .path();
        if path.is_file() && is_image(&path) {
            frames.push(path);
        }
    }
    if frames.is_empty() {
        return Err(AnimError::input(format!(
            "no images found in '{}'",
            dir.display()
        )));
    }
    frames.sort();
    Ok(frames)
}

#[cfg(test)]
#[path = "../tests/unit/input.rs"]
mod tests;
