use std::io::{Cursor, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::error::AdforgeResult;
use crate::slide::SlideFrame;

/// Default file name of the combined slide archive.
pub const ZIP_BUNDLE_NAME: &str = "slides_bundle.zip";

/// Fixed per-slide name pattern: `slide_01.png`, `slide_02.png`, ...
pub fn slide_file_name(index: usize) -> String {
    format!("slide_{:02}.png", index + 1)
}

/// PNG-encode one slide into memory.
pub fn encode_slide_png(frame: &SlideFrame) -> AdforgeResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut buf),
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode slide png")?;
    Ok(buf)
}

/// Write one PNG per slide into `out_dir`, returning the written paths in
/// scene order.
#[tracing::instrument(skip(slides), fields(count = slides.len(), dir = %out_dir.display()))]
pub fn write_slide_pngs(slides: &[SlideFrame], out_dir: &Path) -> AdforgeResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory '{}'", out_dir.display()))?;

    let mut paths = Vec::with_capacity(slides.len());
    for (i, frame) in slides.iter().enumerate() {
        let path = out_dir.join(slide_file_name(i));
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        paths.push(path);
    }

    tracing::info!(count = paths.len(), "wrote slide pngs");
    Ok(paths)
}

/// Bundle all slides into a single deflated ZIP archive at `zip_path`.
#[tracing::instrument(skip(slides), fields(count = slides.len(), zip = %zip_path.display()))]
pub fn write_slides_zip(slides: &[SlideFrame], zip_path: &Path) -> AdforgeResult<()> {
    if let Some(parent) = zip_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }

    let file = std::fs::File::create(zip_path)
        .with_context(|| format!("create zip '{}'", zip_path.display()))?;
    let mut archive = zip::ZipWriter::new(file);
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (i, frame) in slides.iter().enumerate() {
        let png = encode_slide_png(frame)?;
        archive
            .start_file(slide_file_name(i), options)
            .with_context(|| format!("start zip entry '{}'", slide_file_name(i)))?;
        archive
            .write_all(&png)
            .context("write zip entry bytes")?;
    }

    archive.finish().context("finalize zip archive")?;
    tracing::info!("wrote slide bundle");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_names_are_one_based_and_zero_padded() {
        assert_eq!(slide_file_name(0), "slide_01.png");
        assert_eq!(slide_file_name(5), "slide_06.png");
        assert_eq!(slide_file_name(10), "slide_11.png");
    }

    #[test]
    fn png_encoding_roundtrips_dimensions() {
        let frame = SlideFrame {
            width: 3,
            height: 2,
            data: vec![255u8; 3 * 2 * 4],
        };
        let png = encode_slide_png(&frame).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (3, 2));
    }
}
