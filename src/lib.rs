//! Adforge turns a short marketing brief into ad preview assets.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: `Brief -> Vec<Concept>` (bounded random sampling over a
//!    fixed phrase bank) and `Brief -> Script` (a deterministic six-scene
//!    template).
//! 2. **Render**: `Script -> Vec<SlideFrame>` (one vertical gradient slide
//!    per scene, centered title/subtitle text, optional logo overlay).
//! 3. **Export**: either stream the slides to the system `ffmpeg` binary for
//!    a timed MP4 (`timeline`), or write per-scene PNGs plus a ZIP bundle
//!    (`export`).
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: everything except concept sampling is a
//!   pure function of its inputs, and sampling takes a caller-supplied RNG so
//!   seeded runs reproduce exactly.
//! - **Degrade, don't fail**: a missing font falls back to any usable system
//!   face (or text-free slides), and a corrupt logo upload is discarded;
//!   neither is an error.
//! - **One request at a time**: no shared mutable state; each call owns its
//!   brief, script and rendered frames.
#![forbid(unsafe_code)]

pub mod brief;
pub mod concept;
pub mod core;
pub mod encode_ffmpeg;
pub mod error;
pub mod export;
pub mod logo;
pub mod phrases;
pub mod pipeline;
pub mod script;
pub mod slide;
pub mod text;
pub mod timeline;

pub use crate::brief::{Brief, MAX_DURATION_SECS, MIN_DURATION_SECS, Tone};
pub use crate::concept::{CONCEPT_BATCH, Concept, generate_concepts};
pub use crate::core::{Canvas, Rgba8};
pub use crate::encode_ffmpeg::{
    EncodeConfig, FfmpegEncoder, default_mp4_config, ensure_parent_dir, is_ffmpeg_on_path,
};
pub use crate::error::{AdforgeError, AdforgeResult};
pub use crate::export::{
    ZIP_BUNDLE_NAME, encode_slide_png, slide_file_name, write_slide_pngs, write_slides_zip,
};
pub use crate::logo::{PreparedLogo, load_logo_file, prepare_logo};
pub use crate::pipeline::{RenderOpts, render_slides, render_slides_with_bank};
pub use crate::script::{SCENE_COUNT, Scene, Script, per_scene_secs};
pub use crate::slide::{LOGO_SIDE_CAP, SlideFrame, SlideStyle, render_slide};
pub use crate::text::{FontBank, FontChoice, LoadedFont, TextBlock, TextBrushRgba8, TextEngine};
pub use crate::timeline::{
    DEFAULT_FPS, VideoOpts, assemble_video, frames_per_scene, render_video, timestamped_out_name,
};
