use kurbo::PathEl;

use crate::{
    foundation::core::{BezPath, Point},
    foundation::error::{AnimError, AnimResult},
    morph::{Interpolator, ShapeMorpher},
};

/// Longest edge allowed after resampling, in path units.
pub const DEFAULT_MAX_SEGMENT_LENGTH: f64 = 10.0;

const FLATTEN_TOLERANCE: f64 = 0.25;
const MIN_RING_AREA: f64 = 1e-9;

/// Polygon-ring morpher.
///
/// Each outline is flattened to a closed polyline, densified so no edge exceeds
/// `max_segment_length`, padded to a common point count, wound the same way and
/// rotated so the starting points line up. Intermediate outlines are a per-point
/// linear blend, emitted as `M x,y L x,y ... Z`.
///
/// An outline with several sub-paths is reduced to its largest ring.
#[derive(Clone, Copy, Debug)]
pub struct RingMorpher {
    max_segment_length: f64,
}

impl Default for RingMorpher {
    fn default() -> Self {
        Self {
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
        }
    }
}

impl RingMorpher {
    pub fn new(max_segment_length: f64) -> AnimResult<Self> {
        if !max_segment_length.is_finite() || max_segment_length <= 0.0 {
            return Err(AnimError::validation(
                "morph max segment length must be positive",
            ));
        }
        Ok(Self { max_segment_length })
    }

    pub fn max_segment_length(&self) -> f64 {
        self.max_segment_length
    }
}

impl ShapeMorpher for RingMorpher {
    fn interpolator(&self, from: &str, to: &str) -> AnimResult<Interpolator> {
        let mut a = densify(outline_ring(from)?, self.max_segment_length);
        let mut b = densify(outline_ring(to)?, self.max_segment_length);

        if a.len() < b.len() {
            pad_to(&mut a, b.len());
        } else {
            pad_to(&mut b, a.len());
        }

        let offset = best_rotation(&a, &b);
        b.rotate_left(offset);

        Ok(Box::new(move |t| {
            let t = t.clamp(0.0, 1.0);
            ring_to_path(a.iter().zip(&b).map(|(p, q)| p.lerp(*q, t)))
        }))
    }
}

/// Flatten path data and return its largest closed ring, wound with negative signed area.
pub(crate) fn outline_ring(d: &str) -> AnimResult<Vec<Point>> {
    let path = BezPath::from_svg(d.trim())
        .map_err(|e| AnimError::morph(format!("unparseable outline: {e}")))?;

    let mut rings: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    kurbo::flatten(path.iter(), FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            if !current.is_empty() {
                rings.push(std::mem::take(&mut current));
            }
            current.push(p);
        }
        PathEl::LineTo(p) => current.push(p),
        PathEl::ClosePath => {
            if !current.is_empty() {
                rings.push(std::mem::take(&mut current));
            }
        }
        PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => current.push(p),
    });
    if !current.is_empty() {
        rings.push(current);
    }

    let mut best: Option<(f64, Vec<Point>)> = None;
    for ring in rings {
        let ring = dedup_ring(ring);
        if ring.len() < 3 || ring.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            continue;
        }
        let area = signed_area(&ring);
        if best.as_ref().is_none_or(|(a, _)| area.abs() > a.abs()) {
            best = Some((area, ring));
        }
    }

    let Some((area, mut ring)) = best else {
        return Err(AnimError::morph("outline has no closed ring with 3+ points"));
    };
    if area.abs() < MIN_RING_AREA {
        return Err(AnimError::morph("outline encloses no area"));
    }
    if area > 0.0 {
        ring.reverse();
    }
    Ok(ring)
}

fn dedup_ring(mut ring: Vec<Point>) -> Vec<Point> {
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

fn signed_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum * 0.5
}

/// Insert evenly spaced points on every edge longer than `max_len`.
fn densify(ring: Vec<Point>, max_len: f64) -> Vec<Point> {
    let n = ring.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        out.push(p);
        let len = p.distance(q);
        if len > max_len {
            let pieces = (len / max_len).ceil() as usize;
            for k in 1..pieces {
                out.push(p.lerp(q, k as f64 / pieces as f64));
            }
        }
    }
    out
}

/// Bisect the longest edge until the ring has `target` points.
fn pad_to(ring: &mut Vec<Point>, target: usize) {
    while ring.len() < target {
        let n = ring.len();
        let mut longest = 0usize;
        let mut longest_len = f64::NEG_INFINITY;
        for i in 0..n {
            let len = ring[i].distance(ring[(i + 1) % n]);
            if len > longest_len {
                longest_len = len;
                longest = i;
            }
        }
        let mid = ring[longest].midpoint(ring[(longest + 1) % n]);
        ring.insert(longest + 1, mid);
    }
}

/// Rotation of `b` that minimizes the summed squared distance to `a`.
fn best_rotation(a: &[Point], b: &[Point]) -> usize {
    let n = a.len();
    let mut best = 0usize;
    let mut best_cost = f64::INFINITY;
    for offset in 0..n {
        let cost: f64 = (0..n)
            .map(|i| (a[i] - b[(i + offset) % n]).hypot2())
            .sum();
        if cost < best_cost {
            best_cost = cost;
            best = offset;
        }
    }
    best
}

fn ring_to_path(points: impl Iterator<Item = Point>) -> String {
    let mut out = String::new();
    for (i, p) in points.enumerate() {
        out.push(if i == 0 { 'M' } else { 'L' });
        out.push_str(&format!("{},{}", p.x, p.y));
    }
    out.push('Z');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/morph/ring.rs"]
mod tests;
