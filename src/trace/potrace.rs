use std::{
    io::Write as _,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use usvg::tiny_skia_path::PathSegment;

use crate::{
    foundation::error::{AnimError, AnimResult},
    trace::{TraceParams, TracedImage, Tracer},
};

pub fn is_potrace_on_path() -> bool {
    Command::new("potrace")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Tracer backed by the system `potrace` binary.
///
/// The image is decoded and thresholded here, then piped to potrace as a PBM. The SVG
/// potrace writes back is resolved through usvg so the returned path data is absolute
/// and in image pixel coordinates.
#[derive(Clone, Debug)]
pub struct PotraceTracer {
    binary: PathBuf,
}

impl Default for PotraceTracer {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("potrace"),
        }
    }
}

impl PotraceTracer {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Tracer for PotraceTracer {
    #[tracing::instrument(skip(self, params), fields(threshold = params.threshold))]
    fn trace(&self, image: &Path, params: &TraceParams) -> AnimResult<TracedImage> {
        let rgba = image::open(image)
            .map_err(|e| AnimError::trace(format!("failed to load '{}': {e}", image.display())))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();

        let bitmap = Bitmap::threshold(&rgba, params);
        if bitmap.is_blank() {
            return Err(AnimError::NoPathData(image.to_path_buf()));
        }

        let svg = self.run(&bitmap.to_pbm(), params)?;
        let path = svg_to_path_data(&svg, width, height)?;
        if path.trim().is_empty() {
            return Err(AnimError::NoPathData(image.to_path_buf()));
        }

        Ok(TracedImage {
            path,
            width,
            height,
        })
    }
}

impl PotraceTracer {
    fn run(&self, pbm: &[u8], params: &TraceParams) -> AnimResult<Vec<u8>> {
        let mut child = Command::new(&self.binary)
            .args([
                "--svg",
                "--flat",
                "--turdsize",
                &params.turd_size.to_string(),
                "--opttolerance",
                &params.curve_tolerance.to_string(),
                "--output",
                "-",
                "-",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                AnimError::trace(format!(
                    "failed to spawn '{}' (is potrace installed and on PATH?): {e}",
                    self.binary.display()
                ))
            })?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| AnimError::trace("failed to open potrace stdin (unexpected)"))?;
            stdin
                .write_all(pbm)
                .map_err(|e| AnimError::trace(format!("failed to write bitmap to potrace: {e}")))?;
        }

        let out = child
            .wait_with_output()
            .map_err(|e| AnimError::trace(format!("failed to wait for potrace: {e}")))?;
        if !out.status.success() {
            return Err(AnimError::trace(format!(
                "potrace exited with {}: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        Ok(out.stdout)
    }
}

/// 1-bit foreground mask, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Bitmap {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bits: Vec<bool>,
}

impl Bitmap {
    /// Pixels are composited over white, then compared by Rec. 709 luminance.
    pub(crate) fn threshold(rgba: &image::RgbaImage, params: &TraceParams) -> Self {
        let threshold = f64::from(params.threshold);
        let bits = rgba
            .pixels()
            .map(|px| {
                let [r, g, b, a] = px.0;
                let lum = 0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b);
                let alpha = f64::from(a) / 255.0;
                let over_white = 255.0 - (255.0 - lum) * alpha;
                if params.invert {
                    over_white > threshold
                } else {
                    over_white < threshold
                }
            })
            .collect();
        Self {
            width: rgba.width(),
            height: rgba.height(),
            bits,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        !self.bits.iter().any(|b| *b)
    }

    /// Binary PBM (`P4`): set bits are black, rows padded to whole bytes.
    pub(crate) fn to_pbm(&self) -> Vec<u8> {
        let row_bytes = self.width.div_ceil(8) as usize;
        let mut out = format!("P4\n{} {}\n", self.width, self.height).into_bytes();
        out.reserve(row_bytes * self.height as usize);
        for row in self.bits.chunks(self.width as usize) {
            let mut packed = vec![0u8; row_bytes];
            for (x, set) in row.iter().enumerate() {
                if *set {
                    packed[x / 8] |= 0x80 >> (x % 8);
                }
            }
            out.extend_from_slice(&packed);
        }
        out
    }
}

/// Flatten every filled path in an SVG document into one absolute path string in a
/// `width` x `height` pixel space.
pub(crate) fn svg_to_path_data(svg: &[u8], width: u32, height: u32) -> AnimResult<String> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default())
        .map_err(|e| AnimError::trace(format!("unreadable potrace output: {e}")))?;

    let size = tree.size();
    let to_pixels =
        usvg::Transform::from_scale(width as f32 / size.width(), height as f32 / size.height());

    let mut out = Vec::new();
    collect_paths(tree.root(), to_pixels, &mut out);
    Ok(out.join(" "))
}

fn collect_paths(group: &usvg::Group, to_pixels: usvg::Transform, out: &mut Vec<String>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => collect_paths(g, to_pixels, out),
            usvg::Node::Path(p) => {
                let ts = p.abs_transform().post_concat(to_pixels);
                if let Some(data) = p.data().clone().transform(ts) {
                    out.push(segments_to_string(data.segments()));
                }
            }
            _ => {}
        }
    }
}

fn segments_to_string(segments: impl Iterator<Item = PathSegment>) -> String {
    let mut parts: Vec<String> = Vec::new();
    for seg in segments {
        parts.push(match seg {
            PathSegment::MoveTo(p) => format!("M{} {}", p.x, p.y),
            PathSegment::LineTo(p) => format!("L{} {}", p.x, p.y),
            PathSegment::QuadTo(c, p) => format!("Q{} {} {} {}", c.x, c.y, p.x, p.y),
            PathSegment::CubicTo(c1, c2, p) => {
                format!("C{} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, p.x, p.y)
            }
            PathSegment::Close => "Z".to_string(),
        });
    }
    parts.join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/trace/potrace.rs"]
mod tests;
