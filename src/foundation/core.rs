use crate::foundation::error::{AnimError, AnimResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Output canvas size in pixels. Shared by every frame of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> AnimResult<Self> {
        if width == 0 || height == 0 {
            return Err(AnimError::validation("canvas width/height must be non-zero"));
        }
        Ok(Self { width, height })
    }

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

/// Playback rate in frames per second. Always positive and finite.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Fps(f64);

impl Fps {
    pub fn new(fps: f64) -> AnimResult<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(AnimError::validation(format!(
                "fps must be a positive number, got {fps}"
            )));
        }
        Ok(Self(fps))
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Milliseconds one logical frame stays on screen.
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 / self.0
    }

    /// Seconds needed to show `frames` frames once.
    pub fn duration_secs(self, frames: usize) -> f64 {
        frames as f64 / self.0
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self(12.0)
    }
}

impl TryFrom<f64> for Fps {
    type Error = AnimError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Fps> for f64 {
    fn from(value: Fps) -> Self {
        value.0
    }
}

impl std::fmt::Display for Fps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
