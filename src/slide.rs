use crate::core::{Canvas, Rgba8, mul_div255, premul_over_in_place};
use crate::error::{AdforgeError, AdforgeResult};
use crate::logo::PreparedLogo;
use crate::text::{LoadedFont, TextBrushRgba8, TextEngine, draw_block};

/// One rendered slide: opaque RGBA8, row-major, exactly canvas-sized.
#[derive(Clone, Debug)]
pub struct SlideFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Longest-side cap for the composited logo thumbnail.
pub const LOGO_SIDE_CAP: u32 = 320;

/// Visual styling knobs for the slide renderer.
#[derive(Clone, Debug)]
pub struct SlideStyle {
    /// Preferred font family; resolution falls back per [`crate::FontBank`].
    pub font_family: String,
    pub title_size_px: f32,
    pub subtitle_size_px: f32,
    pub title_fill: Rgba8,
    pub subtitle_fill: Rgba8,
    /// Alpha of the uniform black contrast overlay above the gradient.
    pub overlay_alpha: u8,
    /// Vertical gap between the title block and the subtitle, in pixels.
    pub subtitle_gap_px: u32,
    /// Margin of the logo thumbnail from the top and right edges.
    pub logo_margin_px: u32,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            title_size_px: 72.0,
            subtitle_size_px: 40.0,
            title_fill: Rgba8::opaque(180, 240, 255),
            subtitle_fill: Rgba8::opaque(220, 210, 255),
            overlay_alpha: 120,
            subtitle_gap_px: 30,
            logo_margin_px: 40,
        }
    }
}

impl SlideStyle {
    /// Longest-side bound for logo thumbnails on this canvas.
    pub fn logo_max_side(&self, canvas: Canvas) -> u32 {
        (canvas.width / 5).min(LOGO_SIDE_CAP)
    }
}

/// Render one slide: gradient, contrast overlay, centered title/subtitle,
/// optional top-right logo.
///
/// Passing `font: None` (a host with no usable font at all) renders the slide
/// without text; it is a visual degradation, not an error. Each call is
/// independent and deterministic for identical inputs.
pub fn render_slide(
    canvas: Canvas,
    title: &str,
    subtitle: &str,
    font: Option<&LoadedFont>,
    logo: Option<&PreparedLogo>,
    engine: &mut TextEngine,
    style: &SlideStyle,
) -> AdforgeResult<SlideFrame> {
    canvas.validate()?;
    let (w, h) = (canvas.width, canvas.height);

    let mut data = vec![0u8; canvas.pixel_bytes()];
    fill_gradient(&mut data, w, h);
    apply_black_overlay(&mut data, style.overlay_alpha);

    if let Some(font) = font {
        let text_layer = rasterize_text_layer(canvas, title, subtitle, font, engine, style)?;
        premul_over_in_place(&mut data, &text_layer)?;
    } else {
        tracing::warn!("no usable font available, rendering slide without text");
    }

    if let Some(logo) = logo {
        let x0 = w as i64 - logo.width as i64 - style.logo_margin_px as i64;
        let y0 = style.logo_margin_px as i64;
        paste_premul(&mut data, w, h, logo, x0, y0);
    }

    Ok(SlideFrame {
        width: w,
        height: h,
        data,
    })
}

/// Gradient color of scanline `y`: periodic red/green, sawtooth blue, clamped
/// to the channel range.
pub(crate) fn gradient_row_rgb(y: u32) -> (u8, u8, u8) {
    let r = (10.0 + 50.0 * (y as f64 / 140.0).sin()) as u8;
    let g = (30.0 + 120.0 * (y as f64 / 180.0).sin()) as u8;
    let b = (120 + (y % 40)) as u8;
    (r, g, b)
}

fn fill_gradient(data: &mut [u8], width: u32, height: u32) {
    let row_bytes = width as usize * 4;
    for (y, row) in data.chunks_exact_mut(row_bytes).enumerate() {
        let (r, g, b) = gradient_row_rgb(y as u32);
        for px in row.chunks_exact_mut(4) {
            px[0] = r;
            px[1] = g;
            px[2] = b;
            px[3] = 255;
        }
    }
    debug_assert_eq!(data.len(), row_bytes * height as usize);
}

/// Composite a uniform semi-transparent black layer over the whole buffer.
fn apply_black_overlay(data: &mut [u8], alpha: u8) {
    let keep = 255 - alpha as u16;
    for px in data.chunks_exact_mut(4) {
        px[0] = mul_div255(px[0] as u16, keep) as u8;
        px[1] = mul_div255(px[1] as u16, keep) as u8;
        px[2] = mul_div255(px[2] as u16, keep) as u8;
    }
}

fn rasterize_text_layer(
    canvas: Canvas,
    title: &str,
    subtitle: &str,
    font: &LoadedFont,
    engine: &mut TextEngine,
    style: &SlideStyle,
) -> AdforgeResult<Vec<u8>> {
    let (w, h) = (canvas.width, canvas.height);

    let title_block = engine.layout_block(
        title,
        font,
        style.title_size_px,
        brush_from(style.title_fill),
    )?;
    let subtitle_block = engine.layout_block(
        subtitle,
        font,
        style.subtitle_size_px,
        brush_from(style.subtitle_fill),
    )?;

    // Title is centered around the vertical third of the canvas; the subtitle
    // hangs below it by a fixed gap.
    let anchor_y = h as f64 / 3.0;
    let title_x = (w as f64 - title_block.width as f64) / 2.0;
    let title_y = anchor_y - title_block.height as f64 / 2.0;
    let subtitle_x = (w as f64 - subtitle_block.width as f64) / 2.0;
    let subtitle_y = anchor_y + title_block.height as f64 / 2.0 + style.subtitle_gap_px as f64;

    let mut pixmap = vello_cpu::Pixmap::new(w as u16, h as u16);
    pixmap.data_as_u8_slice_mut().fill(0);

    let mut ctx = vello_cpu::RenderContext::new(w as u16, h as u16);
    ctx.reset();
    draw_block(&mut ctx, &title_block, title_x, title_y);
    draw_block(&mut ctx, &subtitle_block, subtitle_x, subtitle_y);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let bytes = pixmap.data_as_u8_slice().to_vec();
    if bytes.len() != canvas.pixel_bytes() {
        return Err(AdforgeError::render(
            "text layer size mismatch with canvas (bug)",
        ));
    }
    Ok(bytes)
}

fn brush_from(c: Rgba8) -> TextBrushRgba8 {
    TextBrushRgba8 {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}

/// Alpha-composite a premultiplied logo into `dst` with its top-left corner
/// at `(x0, y0)`, clipping anything outside the canvas.
fn paste_premul(dst: &mut [u8], dst_w: u32, dst_h: u32, logo: &PreparedLogo, x0: i64, y0: i64) {
    let src = logo.rgba8_premul.as_slice();
    for sy in 0..logo.height as i64 {
        let dy = y0 + sy;
        if dy < 0 || dy >= dst_h as i64 {
            continue;
        }
        for sx in 0..logo.width as i64 {
            let dx = x0 + sx;
            if dx < 0 || dx >= dst_w as i64 {
                continue;
            }
            let si = ((sy * logo.width as i64 + sx) * 4) as usize;
            let di = ((dy * dst_w as i64 + dx) * 4) as usize;

            let a = src[si + 3] as u16;
            if a == 0 {
                continue;
            }
            if a == 255 {
                dst[di..di + 4].copy_from_slice(&src[si..si + 4]);
                continue;
            }
            let inv = 255 - a;
            dst[di] = (src[si] as u16 + mul_div255(dst[di] as u16, inv)).min(255) as u8;
            dst[di + 1] =
                (src[si + 1] as u16 + mul_div255(dst[di + 1] as u16, inv)).min(255) as u8;
            dst[di + 2] =
                (src[si + 2] as u16 + mul_div255(dst[di + 2] as u16, inv)).min(255) as u8;
            dst[di + 3] = (a + mul_div255(dst[di + 3] as u16, inv)).min(255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn gradient_row_zero_matches_formula_seed() {
        assert_eq!(gradient_row_rgb(0), (10, 30, 120));
    }

    #[test]
    fn gradient_blue_sawtooth_wraps_every_40_rows() {
        let (_, _, b0) = gradient_row_rgb(0);
        let (_, _, b39) = gradient_row_rgb(39);
        let (_, _, b40) = gradient_row_rgb(40);
        assert_eq!(b0, 120);
        assert_eq!(b39, 159);
        assert_eq!(b40, 120);
    }

    #[test]
    fn gradient_channels_never_escape_range() {
        // The red/green formulas dip below zero mathematically; the cast must
        // clamp rather than wrap.
        for y in 0..4000 {
            let (r, g, _) = gradient_row_rgb(y);
            let rf = 10.0 + 50.0 * (y as f64 / 140.0).sin();
            let gf = 30.0 + 120.0 * (y as f64 / 180.0).sin();
            if rf <= 0.0 {
                assert_eq!(r, 0);
            }
            if gf <= 0.0 {
                assert_eq!(g, 0);
            }
        }
    }

    #[test]
    fn overlay_darkens_every_channel() {
        let mut data = vec![200u8, 100, 50, 255];
        apply_black_overlay(&mut data, 120);
        assert_eq!(data[0], mul_div255(200, 135) as u8);
        assert_eq!(data[1], mul_div255(100, 135) as u8);
        assert_eq!(data[2], mul_div255(50, 135) as u8);
        assert_eq!(data[3], 255);
    }

    #[test]
    fn render_without_font_still_yields_exact_canvas_size() {
        let canvas = Canvas::new(64, 128).unwrap();
        let mut engine = TextEngine::new();
        let frame = render_slide(
            canvas,
            "Title",
            "Subtitle",
            None,
            None,
            &mut engine,
            &SlideStyle::default(),
        )
        .unwrap();
        assert_eq!((frame.width, frame.height), (64, 128));
        assert_eq!(frame.data.len(), 64 * 128 * 4);
    }

    #[test]
    fn logo_paste_clips_at_canvas_edges() {
        let logo = PreparedLogo {
            width: 8,
            height: 8,
            rgba8_premul: Arc::new(vec![255u8; 8 * 8 * 4]),
        };
        let mut data = vec![0u8; 16 * 16 * 4];
        // Deliberately hang off the right and top edges.
        paste_premul(&mut data, 16, 16, &logo, 12, -4);
        // In-bounds corner (row 0, col 12) is painted.
        let di = 12 * 4;
        assert_eq!(&data[di..di + 4], &[255, 255, 255, 255]);
        // Left edge stays untouched.
        assert_eq!(&data[0..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn repeated_render_is_byte_identical() {
        let canvas = Canvas::new(32, 64).unwrap();
        let style = SlideStyle::default();
        let mut engine = TextEngine::new();
        let bank = crate::text::FontBank::system();
        let choice = bank.resolve(&style.font_family);
        let font = choice.as_ref().map(|c| c.font());

        let a = render_slide(canvas, "A", "b", font, None, &mut engine, &style).unwrap();
        let b = render_slide(canvas, "A", "b", font, None, &mut engine, &style).unwrap();
        assert_eq!(a.data, b.data);
    }
}
