use std::path::PathBuf;

use crate::core::Canvas;
use crate::encode_ffmpeg::{EncodeConfig, FfmpegEncoder};
use crate::error::{AdforgeError, AdforgeResult};
use crate::logo::PreparedLogo;
use crate::pipeline::{RenderOpts, render_slides};
use crate::script::Script;
use crate::slide::{SlideFrame, SlideStyle};

pub const DEFAULT_FPS: u32 = 30;

/// Options for the one-call video render.
#[derive(Clone, Debug)]
pub struct VideoOpts {
    pub canvas: Canvas,
    pub fps: u32,
    pub out_path: PathBuf,
    pub overwrite: bool,
    pub silent_audio: bool,
    pub style: SlideStyle,
    pub logo: Option<PreparedLogo>,
    /// Extra directory of font files searched in addition to system fonts.
    pub fonts_dir: Option<PathBuf>,
}

impl VideoOpts {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            canvas: Canvas::default(),
            fps: DEFAULT_FPS,
            out_path: out_path.into(),
            overwrite: true,
            silent_audio: true,
            style: SlideStyle::default(),
            logo: None,
            fonts_dir: None,
        }
    }
}

/// Still frames shown per scene at `fps`.
pub fn frames_per_scene(script: &Script, fps: u32) -> u64 {
    script.per_scene_secs() as u64 * fps as u64
}

/// Concatenate pre-rendered slides into one MP4: each slide gets an equal
/// share of the total duration, back-to-back in scene order, no transitions.
///
/// Encoding failure propagates as an error; no partial output is guaranteed.
#[tracing::instrument(skip(script, slides, cfg), fields(out = %cfg.out_path.display()))]
pub fn assemble_video(
    script: &Script,
    slides: &[SlideFrame],
    cfg: EncodeConfig,
) -> AdforgeResult<()> {
    if slides.len() != script.scenes.len() {
        return Err(AdforgeError::validation(format!(
            "slide count {} does not match scene count {}",
            slides.len(),
            script.scenes.len()
        )));
    }
    if slides.is_empty() {
        return Err(AdforgeError::validation("cannot assemble an empty timeline"));
    }

    let per_slide = frames_per_scene(script, cfg.fps);
    tracing::debug!(
        scenes = slides.len(),
        per_scene_secs = script.per_scene_secs(),
        frames_per_scene = per_slide,
        "assembling timeline"
    );

    let mut enc = FfmpegEncoder::new(cfg)?;
    for slide in slides {
        for _ in 0..per_slide {
            enc.encode_frame(slide)?;
        }
    }
    enc.finish()
}

/// Render the script's slides and stitch them into an MP4 in one pass.
pub fn render_video(script: &Script, opts: &VideoOpts) -> AdforgeResult<()> {
    let render_opts = RenderOpts {
        canvas: opts.canvas,
        style: opts.style.clone(),
        logo: opts.logo.clone(),
        fonts_dir: opts.fonts_dir.clone(),
    };
    let slides = render_slides(script, &render_opts)?;

    let cfg = EncodeConfig {
        width: opts.canvas.width,
        height: opts.canvas.height,
        fps: opts.fps,
        out_path: opts.out_path.clone(),
        overwrite: opts.overwrite,
        silent_audio: opts.silent_audio,
    };
    assemble_video(script, &slides, cfg)
}

/// Timestamped default output name for a generated preview.
pub fn timestamped_out_name() -> String {
    format!(
        "ad_preview_{}.mp4",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}
