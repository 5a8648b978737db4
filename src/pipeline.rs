use crate::core::Canvas;
use crate::error::AdforgeResult;
use crate::logo::PreparedLogo;
use crate::script::Script;
use crate::slide::{SlideFrame, SlideStyle, render_slide};
use crate::text::{FontBank, TextEngine};

/// Options for the scene-to-slides render pass.
#[derive(Clone, Debug, Default)]
pub struct RenderOpts {
    pub canvas: Canvas,
    pub style: SlideStyle,
    pub logo: Option<PreparedLogo>,
    /// Extra directory of `.ttf`/`.otf`/`.ttc` files searched in addition to
    /// the system fonts.
    pub fonts_dir: Option<std::path::PathBuf>,
}

/// Render one slide per scene, in scene order.
///
/// The slide count always equals the scene count. Font resolution happens
/// once per call; a host without fonts degrades to text-free slides.
#[tracing::instrument(skip(script, opts))]
pub fn render_slides(script: &Script, opts: &RenderOpts) -> AdforgeResult<Vec<SlideFrame>> {
    let mut bank = FontBank::system();
    if let Some(dir) = opts.fonts_dir.as_deref() {
        bank.load_fonts_dir(dir);
    }
    render_slides_with_bank(script, opts, &bank)
}

/// [`render_slides`] with an explicit font bank (tests inject an empty one).
pub fn render_slides_with_bank(
    script: &Script,
    opts: &RenderOpts,
    bank: &FontBank,
) -> AdforgeResult<Vec<SlideFrame>> {
    let choice = bank.resolve(&opts.style.font_family);
    if let Some(c) = choice.as_ref().filter(|c| c.is_fallback()) {
        tracing::info!(
            requested = %opts.style.font_family,
            using = %c.font().family,
            "slide text using fallback font"
        );
    }
    let font = choice.as_ref().map(|c| c.font());

    let mut engine = TextEngine::new();
    let mut slides = Vec::with_capacity(script.scenes.len());
    for scene in &script.scenes {
        slides.push(render_slide(
            opts.canvas,
            &scene.title,
            &scene.subtitle,
            font,
            opts.logo.as_ref(),
            &mut engine,
            &opts.style,
        )?);
    }

    debug_assert_eq!(slides.len(), script.scenes.len());
    Ok(slides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::{Brief, Tone};

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
    fn one_slide_per_scene() {
        let opts = RenderOpts {
            canvas: Canvas::new(36, 64).unwrap(),
            ..RenderOpts::default()
        };
        let slides = render_slides_with_bank(&script(), &opts, &FontBank::empty()).unwrap();
        assert_eq!(slides.len(), script().scenes.len());
        for s in &slides {
            assert_eq!((s.width, s.height), (36, 64));
        }
    }
}
