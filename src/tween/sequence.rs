use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::{
    morph::ShapeMorpher,
    tween::engine::{IntervalTweens, TweenEngine},
};

/// One frame of the final animation. Immutable once assembled.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    path: String,
    index: usize,
    is_keyframe: bool,
}

impl Frame {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Zero-based position in the assembled sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_keyframe(&self) -> bool {
        self.is_keyframe
    }
}

/// Knobs for [`assemble_frames`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AssembleOpts {
    /// Tweens per keyframe interval; 0 disables tweening.
    pub tween_count: usize,
    /// Compute intervals on the rayon pool. Output is identical either way.
    pub parallel: bool,
}

/// Expected sequence length for `keyframes` keyframes.
pub fn expected_frame_count(keyframes: usize, tween_count: usize) -> usize {
    if keyframes == 0 {
        return 0;
    }
    keyframes + (keyframes - 1) * tween_count
}

/// Interleave keyframes with synthesized tweens and index the result.
///
/// `progress` is called with `(completed, total)` keyframe intervals as tweens are
/// produced; it may be called from worker threads when `opts.parallel` is set.
#[tracing::instrument(skip_all, fields(keyframes = keyframes.len(), tweens = opts.tween_count))]
pub fn assemble_frames<M: ShapeMorpher>(
    keyframes: &[String],
    engine: &TweenEngine<M>,
    opts: AssembleOpts,
    progress: &(dyn Fn(usize, usize) + Sync),
) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(expected_frame_count(keyframes.len(), opts.tween_count));
    let mut push = |path: String, is_keyframe: bool| {
        let index = frames.len();
        frames.push(Frame {
            path,
            index,
            is_keyframe,
        });
    };

    if opts.tween_count == 0 || keyframes.len() < 2 {
        for path in keyframes {
            push(path.clone(), true);
        }
        return frames;
    }

    let total = keyframes.len() - 1;
    let done = AtomicUsize::new(0);
    let run = |pair: &[String]| -> IntervalTweens {
        let out = engine.interval(&pair[0], &pair[1], opts.tween_count);
        let completed = done.fetch_add(1, Ordering::Relaxed) + 1;
        progress(completed, total);
        out
    };

    let intervals: Vec<IntervalTweens> = if opts.parallel {
        keyframes.par_windows(2).map(run).collect()
    } else {
        keyframes.windows(2).map(run).collect()
    };

    let fallbacks = intervals.iter().filter(|i| i.fell_back).count();
    if fallbacks > 0 {
        tracing::warn!(fallbacks, total, "some intervals repeat their keyframe");
    }

    for (keyframe, interval) in keyframes.iter().zip(intervals) {
        push(keyframe.clone(), true);
        for tween in interval.paths {
            push(tween, false);
        }
    }
    if let Some(last) = keyframes.last() {
        push(last.clone(), true);
    }

    frames
}

#[cfg(test)]
#[path = "../../tests/unit/tween/sequence.rs"]
mod tests;
