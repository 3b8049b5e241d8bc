//! Font book - fontdue faces resolved by family, shared by measuring and painting

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use fontdue::{Font, FontSettings, Metrics};

use crate::config::FontConfig;
use crate::layout::measure::{TextMeasurer, TextMetrics};
use crate::model::style::FontDescriptor;

/// Searched in order when the config names no default face
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// (face, character, font size bits)
type GlyphKey = (usize, char, u32);

/// A rasterized glyph coverage bitmap
#[derive(Debug)]
pub struct Glyph {
    pub metrics: Metrics,
    pub bitmap: Vec<u8>,
}

/// Loaded font faces plus a shared glyph cache
pub struct FontBook {
    faces: Vec<Font>,
    /// Lowercased family name (optionally with " bold"/" italic") to face
    families: HashMap<String, usize>,
    glyphs: RefCell<HashMap<GlyphKey, Rc<Glyph>>>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.faces.len())
            .field("families", &self.families)
            .field("cached_glyphs", &self.glyphs.borrow().len())
            .finish()
    }
}

fn load_face(path: &Path) -> Result<Font> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read font {}", path.display()))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow!("Failed to load font {}: {}", path.display(), e))
}

impl FontBook {
    /// Load the configured faces, probing system fonts for the default
    pub fn load(config: &FontConfig) -> Result<Self> {
        let default_path = match &config.default {
            Some(path) => path.clone(),
            None => SYSTEM_FONT_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .find(|path| path.exists())
                .context("No system font found; set fonts.default in config.yaml")?,
        };

        let mut book = Self::from_font(load_face(&default_path)?);
        tracing::info!("Default font: {}", default_path.display());

        for (family, path) in &config.families {
            match load_face(path) {
                Ok(face) => book.add_family(family, face),
                Err(e) => tracing::warn!("{:#}, family {} falls back to default", e, family),
            }
        }

        Ok(book)
    }

    /// A book with a single face used for every family
    pub fn from_font(default: Font) -> Self {
        Self {
            faces: vec![default],
            families: HashMap::new(),
            glyphs: RefCell::new(HashMap::new()),
        }
    }

    /// Register `face` under a family key such as `serif` or `serif bold`
    pub fn add_family(&mut self, family: &str, face: Font) {
        self.faces.push(face);
        self.families
            .insert(family.trim().to_lowercase(), self.faces.len() - 1);
    }

    /// Face index for a descriptor: styled variant, then family, then default
    fn face_index(&self, font: &FontDescriptor) -> usize {
        let family = font.family.trim().to_lowercase();
        let styled = match (font.bold, font.italic) {
            (true, true) => Some(format!("{} bold italic", family)),
            (true, false) => Some(format!("{} bold", family)),
            (false, true) => Some(format!("{} italic", family)),
            (false, false) => None,
        };

        styled
            .and_then(|key| self.families.get(&key).copied())
            .or_else(|| self.families.get(&family).copied())
            .unwrap_or(0)
    }

    /// Whether bold must be synthesized because no bold face is registered
    fn synthetic_bold(&self, font: &FontDescriptor) -> bool {
        font.bold && self.face_index(font) == self.face_index(&FontDescriptor {
            bold: false,
            ..font.clone()
        })
    }

    fn glyph(&self, face: usize, ch: char, size: f32) -> Rc<Glyph> {
        let key = (face, ch, size.to_bits());
        if let Some(glyph) = self.glyphs.borrow().get(&key) {
            return Rc::clone(glyph);
        }

        let (metrics, bitmap) = self.faces[face].rasterize(ch, size);
        let glyph = Rc::new(Glyph { metrics, bitmap });
        self.glyphs.borrow_mut().insert(key, Rc::clone(&glyph));
        glyph
    }

    /// Number of cached glyph bitmaps
    pub fn cached_glyphs(&self) -> usize {
        self.glyphs.borrow().len()
    }

    /// Glyphs of `text` with their pen offsets from the text origin.
    /// A synthesized bold repeats each glyph one pixel to the right.
    pub fn layout_glyphs(&self, text: &str, font: &FontDescriptor) -> Vec<(f32, Rc<Glyph>)> {
        let face = self.face_index(font);
        let bold = self.synthetic_bold(font);
        let mut pen = 0.0;
        let mut placed = Vec::new();

        for ch in text.chars().filter(|ch| !ch.is_control()) {
            let glyph = self.glyph(face, ch, font.size);
            let advance = glyph.metrics.advance_width;
            if bold {
                placed.push((pen + 1.0, Rc::clone(&glyph)));
            }
            placed.push((pen, glyph));
            pen += advance;
        }
        placed
    }
}

impl TextMeasurer for FontBook {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics {
        let face = self.face_index(font);
        let (ascent, descent) = match self.faces[face].horizontal_line_metrics(font.size) {
            Some(line) => (line.ascent, -line.descent),
            None => (font.size * 0.8, font.size * 0.2),
        };

        let width = text
            .chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| self.glyph(face, ch, font.size).metrics.advance_width)
            .sum::<f32>();

        TextMetrics {
            width,
            ascent,
            descent,
        }
    }
}
