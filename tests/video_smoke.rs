use std::path::PathBuf;
use std::process::Command;

use adforge::{
    Brief, Canvas, EncodeConfig, FontBank, RenderOpts, Script, SlideStyle, Tone, assemble_video,
    render_slides_with_bank,
};

fn ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn script() -> Script {
    Script::from_brief(&Brief {
        brand: "Acme".to_string(),
        offer: "Tool X".to_string(),
        audience: "Devs".to_string(),
        goal: "ship faster".to_string(),
        tone: Tone::Trustworthy,
        duration_seconds: 30,
    })
}

#[test]
fn assemble_writes_an_mp4_when_ffmpeg_is_present() {
    if !ffmpeg_available() {
        eprintln!("skipping: ffmpeg not on PATH");
        return;
    }

    let dir = PathBuf::from("target").join("video_smoke");
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("preview.mp4");
    let _ = std::fs::remove_file(&out_path);

    let canvas = Canvas::new(32, 64).unwrap();
    let script = script();
    let opts = RenderOpts {
        canvas,
        style: SlideStyle::default(),
        logo: None,
        fonts_dir: None,
    };
    let slides = render_slides_with_bank(&script, &opts, &FontBank::empty()).unwrap();

    let cfg = EncodeConfig {
        width: canvas.width,
        height: canvas.height,
        fps: 2,
        out_path: out_path.clone(),
        overwrite: true,
        silent_audio: true,
    };
    assemble_video(&script, &slides, cfg).unwrap();

    let meta = std::fs::metadata(&out_path).unwrap();
    assert!(meta.len() > 0);
}

#[test]
fn odd_canvas_is_rejected_before_any_encoding() {
    let script = script();
    let canvas = Canvas::new(33, 64).unwrap();
    let opts = RenderOpts {
        canvas,
        style: SlideStyle::default(),
        logo: None,
        fonts_dir: None,
    };
    let slides = render_slides_with_bank(&script, &opts, &FontBank::empty()).unwrap();

    let cfg = EncodeConfig {
        width: canvas.width,
        height: canvas.height,
        fps: 30,
        out_path: PathBuf::from("target").join("video_smoke_odd.mp4"),
        overwrite: true,
        silent_audio: false,
    };
    let err = assemble_video(&script, &slides, cfg).unwrap_err();
    assert!(err.to_string().contains("must be even"));
}
