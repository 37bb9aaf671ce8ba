use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracetween::{AnimateOptions, FfmpegExtractor, Fps, OutputSelection, PotraceTracer, Stage};

#[derive(Parser, Debug)]
#[command(name = "tracetween", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// More log output (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors and hide progress.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace keyframe images (or a video) into an HTML player and/or SMIL SVG.
    Animate(AnimateArgs),
}

#[derive(Args, Debug)]
struct AnimateArgs {
    /// Image files, one directory of images, or one video file.
    inputs: Vec<PathBuf>,

    /// JSON options file. Command-line flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output base path; `.html` / `.svg` are appended. Required unless set in `--config`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Playback frame rate.
    #[arg(long)]
    fps: Option<f64>,

    /// Tweens generated between each pair of keyframes.
    #[arg(long)]
    tween: Option<usize>,

    /// Keep every Nth input frame.
    #[arg(long)]
    skip: Option<usize>,

    /// Fill color for the traced shapes.
    #[arg(long)]
    color: Option<String>,

    /// Canvas width override.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height override.
    #[arg(long)]
    height: Option<u32>,

    /// Decimal places kept in path coordinates.
    #[arg(long)]
    precision: Option<u32>,

    /// Luminance threshold (0-255) for tracing.
    #[arg(long)]
    threshold: Option<u8>,

    /// Trace light shapes on a dark background.
    #[arg(long)]
    invert: bool,

    /// Suppress speckles up to this many pixels.
    #[arg(long)]
    turd_size: Option<u32>,

    /// Curve optimization tolerance.
    #[arg(long)]
    tolerance: Option<f64>,

    /// Frame sample rate used when extracting a video.
    #[arg(long)]
    video_fps: Option<f64>,

    /// Which documents to write.
    #[arg(long, value_enum)]
    outputs: Option<OutputsChoice>,

    /// Compute tweens on all cores.
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputsChoice {
    Both,
    Player,
    Smil,
}

impl From<OutputsChoice> for OutputSelection {
    fn from(choice: OutputsChoice) -> Self {
        match choice {
            OutputsChoice::Both => Self::Both,
            OutputsChoice::Player => Self::Player,
            OutputsChoice::Smil => Self::Smil,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match cli.cmd {
        Command::Animate(args) => cmd_animate(args, cli.quiet),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => tracing::Level::ERROR,
        (false, 0) => tracing::Level::WARN,
        (false, 1) => tracing::Level::INFO,
        (false, _) => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_options(args: AnimateArgs) -> anyhow::Result<AnimateOptions> {
    let mut opts = match &args.config {
        Some(path) => AnimateOptions::from_json_file(path)?,
        None => AnimateOptions::default(),
    };

    if !args.inputs.is_empty() {
        opts.inputs = args.inputs;
    }
    if let Some(v) = args.output {
        opts.output = v;
    }
    if let Some(v) = args.fps {
        opts.fps = Fps::new(v)?;
    }
    if let Some(v) = args.tween {
        opts.tween = v;
    }
    if let Some(v) = args.skip {
        opts.skip = v;
    }
    if let Some(v) = args.color {
        opts.color = v;
    }
    if args.width.is_some() {
        opts.width = args.width;
    }
    if args.height.is_some() {
        opts.height = args.height;
    }
    if let Some(v) = args.precision {
        opts.precision = v;
    }
    if let Some(v) = args.threshold {
        opts.trace.threshold = v;
    }
    if args.invert {
        opts.trace.invert = true;
    }
    if let Some(v) = args.turd_size {
        opts.trace.turd_size = v;
    }
    if let Some(v) = args.tolerance {
        opts.trace.curve_tolerance = v;
    }
    if args.video_fps.is_some() {
        opts.video_fps = args.video_fps;
    }
    if let Some(v) = args.outputs {
        opts.outputs = v.into();
    }
    if args.parallel {
        opts.parallel = true;
    }
    Ok(opts)
}

fn cmd_animate(args: AnimateArgs, quiet: bool) -> anyhow::Result<()> {
    let opts = build_options(args)?;

    let report = |stage: Stage, done: usize, total: usize| {
        if !quiet && total > 0 {
            eprintln!("{stage}: {done}/{total}");
        }
    };
    let summary = tracetween::animate(
        &opts,
        &PotraceTracer::default(),
        &FfmpegExtractor,
        &report,
    )?;

    eprintln!(
        "{} keyframes -> {} frames ({}x{})",
        summary.keyframes, summary.frames, summary.canvas.width, summary.canvas.height
    );
    for path in [&summary.outputs.player, &summary.outputs.smil]
        .into_iter()
        .flatten()
    {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
