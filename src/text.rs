use std::path::Path;
use std::sync::Arc;

use crate::error::{AdforgeError, AdforgeResult};

/// RGBA8 brush color carried through Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A usable font face: raw bytes plus the face index within the file.
#[derive(Clone)]
pub struct LoadedFont {
    pub bytes: Arc<Vec<u8>>,
    pub index: u32,
    pub family: String,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("family", &self.family)
            .finish()
    }
}

/// Outcome of font resolution.
///
/// A missing preferred family degrades to whatever usable face the host has;
/// only a host with no fonts at all yields nothing, and the caller is expected
/// to keep rendering without text rather than fail.
#[derive(Clone, Debug)]
pub enum FontChoice {
    /// The preferred family was found.
    Named(LoadedFont),
    /// A substitute face (generic family or first available) was selected.
    Fallback(LoadedFont),
}

impl FontChoice {
    pub fn font(&self) -> &LoadedFont {
        match self {
            FontChoice::Named(f) | FontChoice::Fallback(f) => f,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FontChoice::Fallback(_))
    }
}

/// System font lookup backed by a `fontdb` database.
pub struct FontBank {
    db: usvg::fontdb::Database,
}

impl FontBank {
    /// Bank over the host's installed fonts.
    pub fn system() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self { db }
    }

    /// Empty bank; resolution always yields `None`.
    pub fn empty() -> Self {
        Self {
            db: usvg::fontdb::Database::new(),
        }
    }

    /// Additionally load `.ttf`/`.otf`/`.ttc` files from `dir`, ignoring
    /// anything unreadable.
    pub fn load_fonts_dir(&mut self, dir: &Path) {
        let Ok(rd) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in rd.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let ext = ext.to_ascii_lowercase();
            if ext != "ttf" && ext != "otf" && ext != "ttc" {
                continue;
            }
            let _ = self.db.load_font_file(&path);
        }
    }

    pub fn face_count(&self) -> usize {
        self.db.faces().count()
    }

    /// Resolve `preferred` to a usable face.
    ///
    /// Query order: the named family, then the generic sans-serif / serif /
    /// monospace families, then the first face in the database. `None` means
    /// the host has no usable font at all.
    pub fn resolve(&self, preferred: &str) -> Option<FontChoice> {
        use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

        let base = Query {
            families: &[Family::Name(preferred)],
            weight: Weight(400),
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        if let Some(id) = self.db.query(&base) {
            return self.load(id).map(FontChoice::Named);
        }

        let generic = Query {
            families: &[Family::SansSerif, Family::Serif, Family::Monospace],
            weight: Weight(400),
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = self
            .db
            .query(&generic)
            .or_else(|| self.db.faces().next().map(|f| f.id))?;

        let loaded = self.load(id)?;
        tracing::debug!(
            preferred,
            substitute = %loaded.family,
            "preferred font family not found, using fallback face"
        );
        Some(FontChoice::Fallback(loaded))
    }

    fn load(&self, id: usvg::fontdb::ID) -> Option<LoadedFont> {
        let family = self
            .db
            .face(id)
            .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_default();
        self.db.with_face_data(id, |data, index| LoadedFont {
            bytes: Arc::new(data.to_vec()),
            index,
            family: family.clone(),
        })
    }
}

/// A shaped, measured block of text ready for the CPU rasterizer.
pub struct TextBlock {
    pub layout: parley::Layout<TextBrushRgba8>,
    pub width: f32,
    pub height: f32,
    font: vello_cpu::peniko::FontData,
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and measure a single block of plain text.
    pub fn layout_block(
        &mut self,
        text: &str,
        font: &LoadedFont,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> AdforgeResult<TextBlock> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(AdforgeError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.as_ref().clone()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            AdforgeError::render("no font families registered from font bytes")
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| AdforgeError::render("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        let width = layout.width();
        let height = layout.height();
        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            font.index,
        );

        Ok(TextBlock {
            layout,
            width,
            height,
            font: font_data,
        })
    }
}

/// Fill a laid-out block into the raster context with its top-left corner at
/// `(x, y)`.
pub(crate) fn draw_block(ctx: &mut vello_cpu::RenderContext, block: &TextBlock, x: f64, y: f64) {
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
    for line in block.layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let brush = run.style().brush;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                brush.r, brush.g, brush.b, brush.a,
            ));
            let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&block.font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}
