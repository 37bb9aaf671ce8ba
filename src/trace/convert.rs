use std::path::{Path, PathBuf};

use crate::{
    foundation::{
        core::Canvas,
        error::{AnimError, AnimResult},
    },
    path::{optimize_precision, sanitize_path},
    trace::{TraceParams, TracedImage, Tracer},
};

/// Threshold used for the single retry after an image traces to nothing.
pub const RETRY_THRESHOLD: u8 = 250;

/// Retries only happen when the configured threshold is below this value.
const RETRY_BELOW: u8 = 200;

/// Trace `image`, retrying once at [`RETRY_THRESHOLD`] when the first attempt finds no
/// path data. Light shapes on transparent backgrounds usually need the higher cutoff.
///
/// If the retry also fails, the error from the first attempt is returned.
pub fn trace_with_retry(
    tracer: &dyn Tracer,
    image: &Path,
    params: &TraceParams,
) -> AnimResult<TracedImage> {
    match tracer.trace(image, params) {
        Err(err) if err.is_no_path_data() && params.threshold < RETRY_BELOW => {
            tracing::warn!(
                image = %image.display(),
                threshold = params.threshold,
                retry = RETRY_THRESHOLD,
                "no path data, retrying with higher threshold"
            );
            tracer
                .trace(image, &params.with_threshold(RETRY_THRESHOLD))
                .map_err(|_| err)
        }
        other => other,
    }
}

/// Keyframe paths ready for interpolation.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertedKeyframes {
    pub paths: Vec<String>,
    /// Pixel size of the first traced image.
    pub traced_canvas: Canvas,
}

/// Trace, sanitize and round every image, in order.
///
/// Each image is sanitized against its own dimensions. `progress` is called with
/// `(done, total)` after each image.
#[tracing::instrument(skip_all, fields(images = images.len()))]
pub fn convert_images(
    tracer: &dyn Tracer,
    images: &[PathBuf],
    params: &TraceParams,
    precision: u32,
    progress: &dyn Fn(usize, usize),
) -> AnimResult<ConvertedKeyframes> {
    let Some(first) = images.first() else {
        return Err(AnimError::input("no images to convert"));
    };

    let mut paths = Vec::with_capacity(images.len());
    let mut traced_canvas = None;
    for (i, image) in images.iter().enumerate() {
        let traced = trace_with_retry(tracer, image, params)?;
        let canvas = Canvas::new(traced.width, traced.height).map_err(|_| {
            AnimError::trace(format!("'{}' has zero-sized dimensions", image.display()))
        })?;
        traced_canvas.get_or_insert(canvas);

        let sanitized = sanitize_path(&traced.path, canvas);
        paths.push(optimize_precision(&sanitized, precision));
        tracing::debug!(image = %image.display(), "converted keyframe");
        progress(i + 1, images.len());
    }

    let traced_canvas = traced_canvas
        .ok_or_else(|| AnimError::trace(format!("'{}' was not traced", first.display())))?;
    Ok(ConvertedKeyframes {
        paths,
        traced_canvas,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/trace/convert.rs"]
mod tests;
