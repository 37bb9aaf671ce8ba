use crate::{
    config::AnimateOptions,
    foundation::{
        core::Canvas,
        error::{AnimError, AnimResult},
    },
    input::resolve_inputs,
    media::FrameExtractor,
    morph::RingMorpher,
    render::{WrittenOutputs, write_outputs},
    trace::{Tracer, convert_images},
    tween::{AssembleOpts, TweenEngine, assemble_frames},
};

/// Pipeline stage reported to progress callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Tracing and cleaning keyframe images. Counted in images.
    Convert,
    /// Generating tweens. Counted in keyframe intervals.
    Interpolate,
    /// Writing output documents. Counted in documents.
    Render,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Convert => "convert",
            Self::Interpolate => "interpolate",
            Self::Render => "render",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    pub keyframes: usize,
    pub frames: usize,
    pub canvas: Canvas,
    pub outputs: WrittenOutputs,
}

/// Run a full conversion: resolve inputs, trace keyframes, tween, write documents.
///
/// Fewer than two keyframes after resolution is rejected before anything is traced.
#[tracing::instrument(skip_all, fields(output = %opts.output.display()))]
pub fn animate(
    opts: &AnimateOptions,
    tracer: &dyn Tracer,
    extractor: &dyn FrameExtractor,
    progress: &(dyn Fn(Stage, usize, usize) + Sync),
) -> AnimResult<RunSummary> {
    opts.validate()?;

    let input = resolve_inputs(&opts.inputs, opts.skip, opts.video_fps, extractor)?;
    let keyframes = input.frames().len();
    if keyframes < 2 {
        return Err(AnimError::input(format!(
            "at least 2 keyframes are required, got {keyframes}"
        )));
    }

    tracing::info!(keyframes, "tracing keyframes");
    let converted = convert_images(
        tracer,
        input.frames(),
        &opts.trace,
        opts.precision,
        &|done, total| progress(Stage::Convert, done, total),
    )?;
    drop(input);

    let canvas = opts.resolve_canvas(converted.traced_canvas)?;
    let config = opts.animation_config(canvas);

    tracing::info!(tween = opts.tween, parallel = opts.parallel, "interpolating");
    let engine = TweenEngine::new(RingMorpher::default()).with_precision(Some(opts.precision));
    let frames = assemble_frames(
        &converted.paths,
        &engine,
        AssembleOpts {
            tween_count: opts.tween,
            parallel: opts.parallel,
        },
        &|done, total| progress(Stage::Interpolate, done, total),
    );

    tracing::info!(frames = frames.len(), "writing outputs");
    let docs = usize::from(opts.outputs.player()) + usize::from(opts.outputs.smil());
    progress(Stage::Render, 0, docs);
    let outputs = write_outputs(&frames, &config, opts.outputs)?;
    progress(Stage::Render, docs, docs);

    Ok(RunSummary {
        keyframes,
        frames: frames.len(),
        canvas,
        outputs,
    })
}
