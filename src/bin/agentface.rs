use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use agentface::{
    AgentOverrides, CpuSurface, FaceConfig, FaceParams, FaceRenderer, FrameIndex, FrameRGBA, Voice,
    builtin_agents, create_new_agent,
};

#[derive(Parser, Debug)]
#[command(name = "agentface", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence that shares one particle field.
    Frames(FramesArgs),
    /// Print the built-in agent presets as JSON.
    Agents,
    /// Print a freshly created agent as JSON.
    NewAgent(NewAgentArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Flat,
    Starfield,
    Energy,
}

impl From<VariantArg> for agentface::Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Flat => Self::Flat,
            VariantArg::Starfield => Self::Starfield,
            VariantArg::Energy => Self::Energy,
        }
    }
}

/// Scene options shared by the render commands. Flags win over `--config`.
#[derive(Parser, Debug)]
struct SceneArgs {
    /// Face config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Particle field seed (`AGENTFACE_SEED` overrides the config file).
    #[arg(long)]
    seed: Option<u64>,

    /// Mouth openness.
    #[arg(long)]
    mouth: Option<f64>,

    /// Eye openness.
    #[arg(long)]
    eyes: Option<f64>,

    /// Face color as #rrggbb.
    #[arg(long)]
    color: Option<String>,

    /// Built-in agent preset id supplying the face color.
    #[arg(long)]
    agent: Option<String>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Animation time in seconds.
    #[arg(long, conflicts_with = "frame")]
    time: Option<f64>,

    /// Frame index (0-based), converted to time with the configured fps.
    #[arg(long)]
    frame: Option<u64>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    count: u64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Animate the mouth as if speaking.
    #[arg(long, default_value_t = false)]
    talk: bool,
}

#[derive(Parser, Debug)]
struct NewAgentArgs {
    /// Seed for a reproducible id, color and voice.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    personality: Option<String>,

    /// Body color as #rrggbb.
    #[arg(long)]
    color: Option<String>,

    #[arg(long)]
    voice: Option<Voice>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Agents => cmd_agents(),
        Command::NewAgent(args) => cmd_new_agent(args),
    }
}

fn load_config(args: &SceneArgs) -> anyhow::Result<FaceConfig> {
    let mut cfg = match &args.config {
        Some(path) => FaceConfig::from_json_path(path)?,
        None => FaceConfig::default(),
    };
    cfg.apply_env_overrides();

    if let Some(v) = args.width {
        cfg.width = v;
    }
    if let Some(v) = args.height {
        cfg.height = v;
    }
    if let Some(v) = args.variant {
        cfg.variant = v.into();
    }
    if let Some(v) = args.seed {
        cfg.seed = v;
    }
    if let Some(v) = args.mouth {
        cfg.mouth_scale = v;
    }
    if let Some(v) = args.eyes {
        cfg.eye_scale = v;
    }
    if let Some(v) = &args.color {
        cfg.color = Some(v.clone());
    }
    if let Some(v) = &args.agent {
        cfg.agent = Some(v.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}

fn renderer_for(cfg: &FaceConfig) -> FaceRenderer {
    FaceRenderer::with_field_config(cfg.variant, cfg.seed, cfg.field)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let mut surface = CpuSurface::new(cfg.width, cfg.height, &cfg.render_settings())?;
    let mut renderer = renderer_for(&cfg);
    let params = cfg.face_params();

    match (args.time, args.frame) {
        (_, Some(frame)) => renderer.render_frame(&mut surface, &params, FrameIndex(frame), cfg.fps),
        (time, None) => renderer.render_basic_face(&mut surface, &params, time.unwrap_or(0.0)),
    }
    let frame = surface.finish()?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let mut surface = CpuSurface::new(cfg.width, cfg.height, &cfg.render_settings())?;
    let mut renderer = renderer_for(&cfg);
    let base = cfg.face_params();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..args.count {
        let params = if args.talk {
            FaceParams {
                mouth_scale: talking_mouth(cfg.fps.frames_to_secs(i)),
                ..base.clone()
            }
        } else {
            base.clone()
        };
        renderer.render_frame(&mut surface, &params, FrameIndex(i), cfg.fps);
        let frame = surface.finish()?;
        write_png(&args.out_dir.join(format!("frame_{i:05}.png")), &frame)?;
    }

    tracing::info!(count = args.count, dir = %args.out_dir.display(), "rendered sequence");
    eprintln!("wrote {} frames to {}", args.count, args.out_dir.display());
    Ok(())
}

fn cmd_agents() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&builtin_agents()).context("serialize presets")?;
    println!("{json}");
    Ok(())
}

fn cmd_new_agent(args: NewAgentArgs) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let agent = create_new_agent(
        AgentOverrides {
            id: None,
            name: args.name,
            personality: args.personality,
            body_color: args.color,
            voice: args.voice,
        },
        &mut rng,
    );
    let json = serde_json::to_string_pretty(&agent).context("serialize agent")?;
    println!("{json}");
    Ok(())
}

/// Syllable-like mouth motion: two incommensurate sines, rectified.
fn talking_mouth(t: f64) -> f64 {
    let s = (t * 11.0).sin() * 0.6 + (t * 4.3).sin() * 0.4;
    0.6 * s.abs()
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
