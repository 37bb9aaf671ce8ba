use std::path::{Path, PathBuf};

use crate::{
    foundation::core::{Canvas, Fps},
    foundation::error::{AnimError, AnimResult},
    trace::TraceParams,
};

/// Rendering parameters shared by both output encodings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationConfig {
    /// Output path without extension; renderers append `.html` / `.svg`.
    pub output_base: PathBuf,
    pub fps: Fps,
    /// Fill color token, emitted verbatim into markup.
    pub color: String,
    pub canvas: Canvas,
}

impl AnimationConfig {
    pub fn validate(&self) -> AnimResult<()> {
        validate_color(&self.color)?;
        Canvas::new(self.canvas.width, self.canvas.height)?;
        Ok(())
    }

    pub fn player_path(&self) -> PathBuf {
        with_suffix(&self.output_base, "html")
    }

    pub fn smil_path(&self) -> PathBuf {
        with_suffix(&self.output_base, "svg")
    }
}

/// `base` + `.ext`, without replacing any dot already in the file name.
fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut s = base.as_os_str().to_owned();
    s.push(".");
    s.push(ext);
    PathBuf::from(s)
}

/// Which documents a run writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputSelection {
    #[default]
    Both,
    Player,
    Smil,
}

impl OutputSelection {
    pub fn player(self) -> bool {
        matches!(self, Self::Both | Self::Player)
    }

    pub fn smil(self) -> bool {
        matches!(self, Self::Both | Self::Smil)
    }
}

/// Everything a conversion run needs. Loadable from JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimateOptions {
    /// Image files, a single directory of images, or a single video file.
    pub inputs: Vec<PathBuf>,
    /// Output base path (no extension). Required.
    pub output: PathBuf,
    pub fps: Fps,
    /// Tweens per keyframe interval; 0 disables tweening.
    pub tween: usize,
    /// Keep every Nth resolved input frame.
    pub skip: usize,
    pub color: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Decimal places kept in path coordinates.
    pub precision: u32,
    pub trace: TraceParams,
    /// Sample rate for video frame extraction; source rate when unset.
    pub video_fps: Option<f64>,
    pub outputs: OutputSelection,
    pub parallel: bool,
}

/// Upper bound for `precision`; more digits than this carry no information for pixels.
pub const MAX_PRECISION: u32 = 8;

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: PathBuf::new(),
            fps: Fps::default(),
            tween: 0,
            skip: 1,
            color: "#000000".to_string(),
            width: None,
            height: None,
            precision: 0,
            trace: TraceParams::default(),
            video_fps: None,
            outputs: OutputSelection::Both,
            parallel: false,
        }
    }
}

impl AnimateOptions {
    pub fn from_json_file(path: &Path) -> AnimResult<Self> {
        use anyhow::Context as _;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read options '{}'", path.display()))?;
        let opts: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse options JSON '{}'", path.display()))?;
        Ok(opts)
    }

    pub fn validate(&self) -> AnimResult<()> {
        if self.output.as_os_str().is_empty() {
            return Err(AnimError::validation("an output path is required"));
        }
        if self.skip == 0 {
            return Err(AnimError::validation("skip must be >= 1"));
        }
        validate_color(&self.color)?;
        if self.width == Some(0) || self.height == Some(0) {
            return Err(AnimError::validation("width/height overrides must be > 0"));
        }
        if self.precision > MAX_PRECISION {
            return Err(AnimError::validation(format!(
                "precision must be <= {MAX_PRECISION}"
            )));
        }
        if let Some(v) = self.video_fps
            && (!v.is_finite() || v <= 0.0)
        {
            return Err(AnimError::validation("video fps must be a positive number"));
        }
        self.trace.validate()
    }

    /// Final canvas: explicit overrides win per axis, the traced size fills the rest.
    pub fn resolve_canvas(&self, traced: Canvas) -> AnimResult<Canvas> {
        Canvas::new(
            self.width.unwrap_or(traced.width),
            self.height.unwrap_or(traced.height),
        )
    }

    pub fn animation_config(&self, canvas: Canvas) -> AnimationConfig {
        AnimationConfig {
            output_base: self.output.clone(),
            fps: self.fps,
            color: self.color.clone(),
            canvas,
        }
    }
}

fn validate_color(color: &str) -> AnimResult<()> {
    if color.trim().is_empty() {
        return Err(AnimError::validation("color must not be empty"));
    }
    if color.contains(['"', '<', '>', '&']) {
        return Err(AnimError::validation(format!(
            "color '{color}' contains markup characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
