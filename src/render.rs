//! Output encodings for an assembled frame sequence.
//!
//! Renderers only read frames. Both need the final frame count, so they run after
//! every keyframe interval has been tweened.

pub mod player;
pub mod smil;

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    config::{AnimationConfig, OutputSelection},
    foundation::error::AnimResult,
    tween::Frame,
};

pub use player::{render_player, write_player};
pub use smil::{key_times, render_smil, write_smil};

/// Paths written by [`write_outputs`].
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct WrittenOutputs {
    pub player: Option<PathBuf>,
    pub smil: Option<PathBuf>,
}

/// Create the output directory if needed.
pub fn ensure_parent_dir(path: &Path) -> AnimResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

pub(crate) fn write_document(path: &Path, contents: &str) -> AnimResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, contents).with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

/// Escape text for a double-quoted XML/HTML attribute.
pub(crate) fn escape_attr(s: &str) -> String {
    if !s.contains(['&', '<', '>', '"']) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Write the selected documents for `frames`.
pub fn write_outputs(
    frames: &[Frame],
    config: &AnimationConfig,
    selection: OutputSelection,
) -> AnimResult<WrittenOutputs> {
    let mut out = WrittenOutputs::default();
    if selection.player() {
        out.player = Some(write_player(frames, config)?);
    }
    if selection.smil() {
        out.smil = Some(write_smil(frames, config)?);
    }
    Ok(out)
}
