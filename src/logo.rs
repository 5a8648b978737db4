use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::error::AdforgeResult;

/// Decoded, thumbnailed logo in premultiplied RGBA8 form, ready to composite
/// into a slide corner.
#[derive(Clone, Debug)]
pub struct PreparedLogo {
    pub width: u32,
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode logo bytes and shrink them to fit within `max_side` on the longest
/// edge, preserving aspect ratio. Images already within the cap are kept
/// as-is.
pub fn prepare_logo(bytes: &[u8], max_side: u32) -> AdforgeResult<PreparedLogo> {
    let img = image::load_from_memory(bytes).context("decode logo image")?;
    let img = if img.width().max(img.height()) > max_side {
        img.thumbnail(max_side, max_side)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedLogo {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Read and prepare a logo file.
///
/// A missing, unreadable or corrupt file yields `None`: the upload is
/// discarded and the render proceeds without a logo, never with an error.
pub fn load_logo_file(path: impl AsRef<Path>, max_side: u32) -> Option<PreparedLogo> {
    let path = path.as_ref();
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "logo unreadable, rendering without it");
            return None;
        }
    };
    match prepare_logo(&bytes, max_side) {
        Ok(logo) => Some(logo),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "logo undecodable, rendering without it");
            None
        }
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
