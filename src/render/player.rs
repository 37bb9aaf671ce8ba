use std::path::PathBuf;

use anyhow::Context as _;

use crate::{
    config::AnimationConfig,
    foundation::error::{AnimError, AnimResult},
    render::{escape_attr, write_document},
    tween::Frame,
};

const TEMPLATE: &str = include_str!("player.html");

/// Build the self-contained HTML player for `frames`.
///
/// All path data is embedded as one JSON array. The page advances one frame every
/// `1000 / fps` ms of accumulated wall time (scaled by the speed slider), wraps at the
/// end, and pauses when the user scrubs.
pub fn render_player(frames: &[Frame], config: &AnimationConfig) -> AnimResult<String> {
    if frames.is_empty() {
        return Err(AnimError::validation("player needs at least one frame"));
    }
    config.validate()?;

    let paths: Vec<&str> = frames.iter().map(Frame::path).collect();
    // Keep "</script>" sequences out of the inline script.
    let paths_json = serde_json::to_string(&paths)
        .context("serialize frame paths")?
        .replace("</", "<\\/");

    Ok(TEMPLATE
        .replace("__WIDTH__", &config.canvas.width.to_string())
        .replace("__HEIGHT__", &config.canvas.height.to_string())
        .replace("__COLOR__", &escape_attr(&config.color))
        .replace("__FPS__", &config.fps.to_string())
        .replace("__FRAME_COUNT__", &frames.len().to_string())
        .replace("__LAST_INDEX__", &(frames.len() - 1).to_string())
        .replace("__PATHS_JSON__", &paths_json))
}

/// Render and write `<output>.html`. Returns the written path.
#[tracing::instrument(skip_all, fields(frames = frames.len()))]
pub fn write_player(frames: &[Frame], config: &AnimationConfig) -> AnimResult<PathBuf> {
    let html = render_player(frames, config)?;
    let path = config.player_path();
    write_document(&path, &html)?;
    tracing::info!(path = %path.display(), "wrote web player");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/player.rs"]
mod tests;
