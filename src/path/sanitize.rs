use crate::{
    foundation::core::Canvas,
    path::scan::{BoundingBox, split_subpaths},
};

/// Fraction of the canvas a sub-path must exceed on both axes to count as background.
const BACKGROUND_COVERAGE: f64 = 0.98;
/// Distance from a canvas edge, in pixels, that counts as touching it.
const EDGE_MARGIN: f64 = 1.0;
/// Sub-paths thinner than this on either axis are artifact candidates.
const ARTIFACT_THICKNESS: f64 = 3.0;

/// Why a sub-path was removed from a traced frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Spans (almost) the entire canvas.
    Background,
    /// Hairline touching a canvas edge.
    EdgeArtifact,
}

/// Classify one sub-path's bounds against the canvas. `None` means keep it.
pub fn classify(bb: &BoundingBox, canvas: Canvas) -> Option<Rejection> {
    let (w, h) = (canvas.width_f64(), canvas.height_f64());
    let (pw, ph) = (bb.width(), bb.height());

    if pw > w * BACKGROUND_COVERAGE && ph > h * BACKGROUND_COVERAGE {
        return Some(Rejection::Background);
    }

    let touches_edge = bb.min_x < EDGE_MARGIN
        || bb.min_y < EDGE_MARGIN
        || bb.max_x > w - EDGE_MARGIN
        || bb.max_y > h - EDGE_MARGIN;
    if touches_edge && (pw < ARTIFACT_THICKNESS || ph < ARTIFACT_THICKNESS) {
        return Some(Rejection::EdgeArtifact);
    }

    None
}

/// Remove full-canvas backgrounds and thin edge artifacts from a traced path.
///
/// Sub-paths keep their source order and are re-joined with single spaces. If every
/// sub-path would be removed, the input is returned unchanged so a frame never ends
/// up empty.
pub fn sanitize_path(path: &str, canvas: Canvas) -> String {
    let subpaths = split_subpaths(path);
    let total = subpaths.len();

    let kept: Vec<String> = subpaths
        .into_iter()
        .filter(|sp| match classify(&BoundingBox::sample(sp), canvas) {
            Some(reason) => {
                tracing::trace!(?reason, subpath_len = sp.len(), "dropping sub-path");
                false
            }
            None => true,
        })
        .collect();

    if kept.is_empty() {
        tracing::debug!(total, "sanitizer would drop every sub-path; keeping original");
        return path.to_string();
    }
    if kept.len() < total {
        tracing::debug!(total, kept = kept.len(), "sanitized traced path");
    }
    kept.join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/path/sanitize.rs"]
mod tests;
