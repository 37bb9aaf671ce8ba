use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tempfile::TempDir;

use crate::foundation::error::{AnimError, AnimResult};

/// Decodes a video into an ordered list of still frames.
pub trait FrameExtractor: Send + Sync {
    /// `fps` resamples the video; `None` keeps every source frame.
    fn extract(&self, video: &Path, fps: Option<f64>) -> AnimResult<ExtractedFrames>;
}

/// PNG frames in a scratch directory. The directory is removed on drop, so keep this
/// alive until every frame has been traced.
#[derive(Debug)]
pub struct ExtractedFrames {
    dir: TempDir,
    frames: Vec<PathBuf>,
}

impl ExtractedFrames {
    /// Collect the `.png` files in `dir`, sorted by file name.
    pub fn from_dir(dir: TempDir) -> AnimResult<Self> {
        let mut frames = Vec::new();
        let entries = std::fs::read_dir(dir.path())
            .with_context(|| format!("list extracted frames in '{}'", dir.path().display()))?;
        for entry in entries {
            let path = entry.context("read extracted frame entry")?.path();
            let is_png = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if is_png {
                frames.push(path);
            }
        }
        frames.sort();
        Ok(Self { dir, frames })
    }

    pub fn frames(&self) -> &[PathBuf] {
        &self.frames
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

pub fn is_ffmpeg_on_path() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FfmpegExtractor;

#[cfg(feature = "media-ffmpeg")]
impl FrameExtractor for FfmpegExtractor {
    #[tracing::instrument(skip(self))]
    fn extract(&self, video: &Path, fps: Option<f64>) -> AnimResult<ExtractedFrames> {
        if !video.is_file() {
            return Err(AnimError::input(format!(
                "video '{}' does not exist",
                video.display()
            )));
        }
        let dir = tempfile::Builder::new()
            .prefix("tracetween-frames-")
            .tempdir()
            .map_err(|e| AnimError::media(format!("failed to create frame directory: {e}")))?;

        let mut cmd = std::process::Command::new("ffmpeg");
        cmd.args(["-v", "error", "-i"]).arg(video);
        if let Some(fps) = fps {
            cmd.args(["-vf", &format!("fps={fps}")]);
        }
        cmd.arg(dir.path().join("frame_%05d.png"));

        let out = cmd.output().map_err(|e| {
            AnimError::media(format!(
                "failed to run ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        if !out.status.success() {
            return Err(AnimError::media(format!(
                "ffmpeg frame extraction failed for '{}': {}",
                video.display(),
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }

        let extracted = ExtractedFrames::from_dir(dir)?;
        if extracted.frames().is_empty() {
            return Err(AnimError::media(format!(
                "ffmpeg produced no frames for '{}'",
                video.display()
            )));
        }
        tracing::info!(frames = extracted.frames().len(), "extracted video frames");
        Ok(extracted)
    }
}

#[cfg(not(feature = "media-ffmpeg"))]
impl FrameExtractor for FfmpegExtractor {
    fn extract(&self, _video: &Path, _fps: Option<f64>) -> AnimResult<ExtractedFrames> {
        Err(AnimError::media(
            "video inputs require the 'media-ffmpeg' feature",
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/extract.rs"]
mod tests;
