use std::path::PathBuf;

/// Convenience result type used across tracetween.
pub type AnimResult<T> = Result<T, AnimError>;

/// Top-level error taxonomy for a conversion run.
#[derive(thiserror::Error, Debug)]
pub enum AnimError {
    /// Unusable input set (missing files, fewer than two keyframes).
    #[error("input error: {0}")]
    Input(String),

    /// The tracer produced no path data for an image.
    #[error("no path data found in '{}'", .0.display())]
    NoPathData(PathBuf),

    /// Tracing failed for a reason other than empty output.
    #[error("trace error: {0}")]
    Trace(String),

    /// The shape morpher rejected a pair of outlines.
    #[error("morph error: {0}")]
    Morph(String),

    /// Frame extraction from a video failed.
    #[error("media error: {0}")]
    Media(String),

    /// Invalid configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimError {
    /// Build an [`AnimError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build an [`AnimError::Trace`] value.
    pub fn trace(msg: impl Into<String>) -> Self {
        Self::Trace(msg.into())
    }

    /// Build an [`AnimError::Morph`] value.
    pub fn morph(msg: impl Into<String>) -> Self {
        Self::Morph(msg.into())
    }

    /// Build an [`AnimError::Media`] value.
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }

    /// Build an [`AnimError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True when this is the tracer's "no path data" signal.
    pub fn is_no_path_data(&self) -> bool {
        matches!(self, Self::NoPathData(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
