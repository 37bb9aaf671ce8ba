use std::path::PathBuf;

use crate::{
    config::AnimationConfig,
    foundation::error::{AnimError, AnimResult},
    path::precision::format_fixed,
    render::{escape_attr, write_document},
    tween::Frame,
};

/// `keyTimes` for `n` evenly spaced discrete values, 6 decimals, `"; "`-joined.
pub fn key_times(n: usize) -> String {
    if n <= 1 {
        return format_fixed(0.0, 6);
    }
    let last = (n - 1) as f64;
    (0..n)
        .map(|i| format_fixed(i as f64 / last, 6))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Total loop duration attribute, e.g. `"0.50s"`.
pub fn duration_attr(frames: usize, config: &AnimationConfig) -> String {
    format!("{}s", format_fixed(config.fps.duration_secs(frames), 2))
}

/// Build a standalone SVG whose single path steps through every frame.
///
/// Timing is always `calcMode="discrete"`: values are switched, never blended.
pub fn render_smil(frames: &[Frame], config: &AnimationConfig) -> AnimResult<String> {
    if frames.is_empty() {
        return Err(AnimError::validation("SMIL output needs at least one frame"));
    }
    config.validate()?;

    let values = frames
        .iter()
        .map(|f| escape_attr(f.path()))
        .collect::<Vec<_>>()
        .join("; ");
    let (w, h) = (config.canvas.width, config.canvas.height);

    Ok(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}"
     height="{h}"
     viewBox="0 0 {w} {h}">
  <path fill="{color}" fill-rule="evenodd">
    <animate
      attributeName="d"
      dur="{dur}"
      repeatCount="indefinite"
      calcMode="discrete"
      values="{values}"
      keyTimes="{key_times}"
    />
  </path>
</svg>"#,
        color = escape_attr(&config.color),
        dur = duration_attr(frames.len(), config),
        key_times = key_times(frames.len()),
    ))
}

/// Render and write `<output>.svg`. Returns the written path.
#[tracing::instrument(skip_all, fields(frames = frames.len()))]
pub fn write_smil(frames: &[Frame], config: &AnimationConfig) -> AnimResult<PathBuf> {
    let svg = render_smil(frames, config)?;
    let path = config.smil_path();
    write_document(&path, &svg)?;
    tracing::info!(path = %path.display(), "wrote SMIL svg");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/smil.rs"]
mod tests;
