//! Text measurement - the seam between layout and the font backend

use unicode_segmentation::UnicodeSegmentation;

use crate::model::style::FontDescriptor;

/// Metrics of one measured run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Horizontal advance in pixels
    pub width: f32,
    /// Extent above the baseline
    pub ascent: f32,
    /// Extent below the baseline
    pub descent: f32,
}

impl TextMetrics {
    /// Glyph box height (`ascent + descent`)
    #[inline]
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Measures text for layout.
///
/// Implementations must be deterministic: identical `(text, font)` inputs
/// always produce identical metrics.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics {
        (**self).measure(text, font)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics {
        (**self).measure(text, font)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for std::rc::Rc<T> {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics {
        (**self).measure(text, font)
    }
}

/// Font-free measurer with fixed per-character proportions.
///
/// Every grapheme advances `advance × size`; ascent and descent are
/// `ascent × size` and `descent × size`. Used for headless layout and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMeasurer {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl FixedMeasurer {
    pub const fn new(advance: f32, ascent: f32, descent: f32) -> Self {
        Self {
            advance,
            ascent,
            descent,
        }
    }
}

impl Default for FixedMeasurer {
    fn default() -> Self {
        Self::new(0.5, 0.75, 0.25)
    }
}

impl TextMeasurer for FixedMeasurer {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextMetrics {
        let chars = text
            .graphemes(true)
            .filter(|g| !g.chars().all(char::is_control))
            .count() as f32;
        TextMetrics {
            width: chars * self.advance * font.size,
            ascent: self.ascent * font.size,
            descent: self.descent * font.size,
        }
    }
}
