use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;

use pagedrift::{
    EngineOptions, IntroTimeline, KeyInput, ManualClock, PageLayout, RecordingSink, ScrollEngine,
    Support, TransformWrite, Viewport, WheelInput, PLAY_DELAY_MS,
};

#[derive(Parser, Debug)]
#[command(name = "pagedrift", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Parse and validate a page layout document.
    Validate(ValidateArgs),
    /// Step the scroll engine headlessly and dump the transform writes.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input page layout JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input page layout JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Input script JSON: wheel/key/resize events keyed by frame.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Number of frames to step after load.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Play the intro timeline (layout's own, or the stock one) before the
    /// engine takes over.
    #[arg(long)]
    intro: bool,

    /// Report wheel deltas as line-based and apply the legacy multiplier.
    #[arg(long)]
    line_delta_quirk: bool,

    /// Treat the device as touch/mobile (the engine degrades to a no-op).
    #[arg(long)]
    mobile: bool,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport_height: f64,

    /// Output JSON path, or `-` for stdout.
    #[arg(long, default_value = "-")]
    out: String,
}

/// One scripted input event, applied right before the named frame's tick.
#[derive(Debug, serde::Deserialize)]
struct ScriptEvent {
    frame: u64,
    #[serde(flatten)]
    input: ScriptInput,
}

#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ScriptInput {
    Wheel(WheelInput),
    Key(KeyInput),
    Resize {
        width: f64,
        height: f64,
        scroll_height: f64,
    },
}

#[derive(Debug, serde::Serialize)]
struct SimulationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    intro: Option<Vec<TransformWrite>>,
    frames: Vec<FrameRecord>,
}

#[derive(Debug, serde::Serialize)]
struct FrameRecord {
    frame: u64,
    current: f64,
    target: f64,
    writes: Vec<TransformWrite>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_layout(path: &Path) -> anyhow::Result<PageLayout> {
    let f = File::open(path).with_context(|| format!("open layout '{}'", path.display()))?;
    let r = BufReader::new(f);
    let layout: PageLayout =
        serde_json::from_reader(r).with_context(|| "parse page layout JSON")?;
    Ok(layout)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let layout = read_layout(&args.in_path)?;
    layout.validate()?;
    eprintln!(
        "{}: {} container(s), {} animated section(s)",
        args.in_path.display(),
        layout.section_containers.len(),
        layout.sections.len()
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let layout = read_layout(&args.in_path)?;
    layout.validate()?;

    let script: Vec<ScriptEvent> = match &args.script {
        None => Vec::new(),
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("open script '{}'", path.display()))?;
            serde_json::from_reader(BufReader::new(f)).with_context(|| "parse script JSON")?
        }
    };

    let viewport = Viewport::new(args.viewport_width, args.viewport_height);
    let mut sink = RecordingSink::new();

    // The page waits a fixed beat, plays the intro once, and only then hands
    // the content root to the scroll engine.
    let intro = if args.intro {
        let mut timeline = match layout.intro.clone() {
            Some(tracks) => IntroTimeline::new(tracks)?,
            None => IntroTimeline::stock_page(),
        };
        let step_ms = 1000.0 / 60.0;

        let mut waited = 0.0;
        while waited < PLAY_DELAY_MS {
            timeline.advance(step_ms, &mut sink); // paused: no writes
            waited += step_ms;
        }
        timeline.play();
        while !timeline.is_complete() {
            timeline.advance(step_ms, &mut sink);
        }
        Some(sink.take_writes())
    } else {
        None
    };

    let support = Support {
        mobile: args.mobile,
        line_delta_quirk: args.line_delta_quirk,
    };
    let mut engine = ScrollEngine::new(
        Some(&layout),
        support,
        EngineOptions::default(),
        viewport,
        sink,
        Box::new(ManualClock::new()),
    )?;

    let mut frames = Vec::with_capacity(args.frames as usize + 1);

    // Frame 0 is the synchronous load frame the constructor already ran.
    frames.push(FrameRecord {
        frame: 0,
        current: engine.scroll_state().current,
        target: engine.scroll_state().target,
        writes: engine.sink_mut().take_writes(),
    });

    for frame in 1..=args.frames {
        for event in script.iter().filter(|e| e.frame == frame) {
            match event.input {
                ScriptInput::Wheel(wheel) => engine.wheel(wheel),
                ScriptInput::Key(key) => engine.key_down(key),
                ScriptInput::Resize {
                    width,
                    height,
                    scroll_height,
                } => engine.resize(Viewport::new(width, height), scroll_height),
            }
        }
        engine.tick();

        frames.push(FrameRecord {
            frame,
            current: engine.scroll_state().current,
            target: engine.scroll_state().target,
            writes: engine.sink_mut().take_writes(),
        });
    }

    let report = SimulationReport { intro, frames };
    let json = serde_json::to_string_pretty(&report)?;

    if args.out == "-" {
        println!("{json}");
    } else {
        let out = PathBuf::from(&args.out);
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
        }
        std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }

    Ok(())
}
