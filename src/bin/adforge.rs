use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng as _;
use rand::rngs::StdRng;

use adforge::{
    Brief, Canvas, RenderOpts, Script, SlideStyle, VideoOpts, export, generate_concepts,
    load_logo_file, render_slides, render_video, timestamped_out_name,
};

#[derive(Parser, Debug)]
#[command(name = "adforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a batch of ad concepts from a brief.
    Concepts(ConceptsArgs),
    /// Derive the six-scene script from a brief.
    Script(ScriptArgs),
    /// Render per-scene PNG slides, optionally bundled into a ZIP.
    Slides(SlidesArgs),
    /// Render the timed MP4 preview (requires `ffmpeg` on PATH).
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ConceptsArgs {
    /// Input brief JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// RNG seed for a reproducible batch.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct ScriptArgs {
    /// Input brief JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct SlidesArgs {
    /// Input brief JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for the PNG slides.
    #[arg(long = "out-dir", default_value = "slides")]
    out_dir: PathBuf,

    /// Optional logo image (PNG/JPG) composited into the top-right corner.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Also write a slides_bundle.zip next to the PNGs.
    #[arg(long)]
    zip: bool,

    /// Extra directory of .ttf/.otf/.ttc files searched before falling back
    /// to system fonts.
    #[arg(long = "fonts-dir")]
    fonts_dir: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = Canvas::DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = Canvas::DEFAULT_HEIGHT)]
    height: u32,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input brief JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output MP4 path. Defaults to a timestamped name in the current
    /// directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Optional logo image (PNG/JPG) composited into the top-right corner.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output frame rate.
    #[arg(long, default_value_t = adforge::DEFAULT_FPS)]
    fps: u32,

    /// Extra directory of .ttf/.otf/.ttc files searched before falling back
    /// to system fonts.
    #[arg(long = "fonts-dir")]
    fonts_dir: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = Canvas::DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = Canvas::DEFAULT_HEIGHT)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Concepts(args) => cmd_concepts(args),
        Command::Script(args) => cmd_script(args),
        Command::Slides(args) => cmd_slides(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn read_brief(path: &std::path::Path) -> anyhow::Result<Brief> {
    let brief = Brief::from_json_file(path)?;
    brief.validate()?;
    Ok(brief)
}

fn cmd_concepts(args: ConceptsArgs) -> anyhow::Result<()> {
    let brief = read_brief(&args.in_path)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let concepts = generate_concepts(&brief, &mut rng);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&concepts)?);
        return Ok(());
    }

    for (i, c) in concepts.iter().enumerate() {
        println!("Concept {}", i + 1);
        println!("  Hook:  {}", c.hook);
        println!("  Angle: {}", c.angle);
        println!("  Value: {}", c.value);
        println!("  CTA:   {}", c.cta);
        println!();
    }
    Ok(())
}

fn cmd_script(args: ScriptArgs) -> anyhow::Result<()> {
    let brief = read_brief(&args.in_path)?;
    let script = Script::from_brief(&brief);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&script)?);
        return Ok(());
    }

    println!(
        "Script — {}s total, {}s per scene",
        script.duration_seconds,
        script.per_scene_secs()
    );
    for (i, scene) in script.scenes.iter().enumerate() {
        println!("Scene {} — {}", i + 1, scene.title);
        println!("  {}", scene.subtitle);
    }
    Ok(())
}

fn cmd_slides(args: SlidesArgs) -> anyhow::Result<()> {
    let brief = read_brief(&args.in_path)?;
    let script = Script::from_brief(&brief);
    let canvas = Canvas::new(args.width, args.height)?;

    let style = SlideStyle::default();
    let logo = args
        .logo
        .as_ref()
        .and_then(|p| load_logo_file(p, style.logo_max_side(canvas)));

    let opts = RenderOpts {
        canvas,
        style,
        logo,
        fonts_dir: args.fonts_dir,
    };
    let slides = render_slides(&script, &opts)?;

    let paths = export::write_slide_pngs(&slides, &args.out_dir)?;
    for p in &paths {
        eprintln!("wrote {}", p.display());
    }

    if args.zip {
        let zip_path = args.out_dir.join(export::ZIP_BUNDLE_NAME);
        export::write_slides_zip(&slides, &zip_path)?;
        eprintln!("wrote {}", zip_path.display());
    }
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let brief = read_brief(&args.in_path)?;
    let script = Script::from_brief(&brief);
    let canvas = Canvas::new(args.width, args.height)?;

    let style = SlideStyle::default();
    let logo = args
        .logo
        .as_ref()
        .and_then(|p| load_logo_file(p, style.logo_max_side(canvas)));

    let out_path = args
        .out
        .unwrap_or_else(|| PathBuf::from(timestamped_out_name()));

    let opts = VideoOpts {
        canvas,
        fps: args.fps,
        out_path: out_path.clone(),
        overwrite: true,
        silent_audio: true,
        style,
        logo,
        fonts_dir: args.fonts_dir,
    };
    render_video(&script, &opts)?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
