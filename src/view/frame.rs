//! Pixel surface - an owned ARGB buffer implementing the drawing seam
//!
//! Provides a simple, safe API for pixel buffer operations. Out-of-bounds
//! drawing is clipped against the buffer.

use std::rc::Rc;

use crate::geometry::{Point, Rect};
use crate::model::style::{Color, FontDescriptor};

use super::fonts::FontBook;
use super::surface::{DrawSurface, SurfaceFactory};

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Both colors are in ARGB format (0xAARRGGBB). The alpha value from the
/// foreground color determines the blend ratio.
///
/// Returns the blended color with full opacity (alpha = 0xFF).
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// A page-sized pixel buffer.
///
/// Text is drawn through an optional [`FontBook`]; without one, text calls
/// are ignored and only the geometry gets painted.
pub struct PixelSurface {
    buffer: Vec<u32>,
    width: usize,
    height: usize,
    background: u32,
    fonts: Option<Rc<FontBook>>,
}

impl std::fmt::Debug for PixelSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl PixelSurface {
    /// Create a blank surface filled with `background`
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        let background = background.to_argb_u32() | 0xFF000000;
        Self {
            buffer: vec![background; width * height],
            width,
            height,
            background,
            fonts: None,
        }
    }

    /// Attach the font book used by `draw_text`
    pub fn with_fonts(mut self, fonts: Rc<FontBook>) -> Self {
        self.fonts = Some(fonts);
        self
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw ARGB pixels, row-major
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.buffer
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Pixel span of `rect` inside the buffer, as `(x0, y0, x1, y1)`
    fn clipped(&self, rect: Rect) -> (usize, usize, usize, usize) {
        let x0 = rect.x.max(0.0) as usize;
        let y0 = rect.y.max(0.0) as usize;
        let x1 = (rect.right().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0.0) as usize).min(self.height);
        (x0, y0, x1, y1)
    }

    /// Blend a pixel with alpha (ARGB format, alpha in high byte)
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = y * self.width + x;
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }

        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Blend a glyph coverage bitmap with its top-left corner at `(left, top)`
    fn blend_coverage(&mut self, left: isize, top: isize, width: usize, coverage: &[u8], color: u32) {
        if width == 0 {
            return;
        }
        let color_alpha = ((color >> 24) & 0xFF) as f32 / 255.0;

        for (row, line) in coverage.chunks(width).enumerate() {
            let py = top + row as isize;
            if py < 0 {
                continue;
            }
            for (col, &alpha) in line.iter().enumerate() {
                let px = left + col as isize;
                if alpha == 0 || px < 0 {
                    continue;
                }
                let (px, py) = (px as usize, py as usize);
                if px >= self.width || py >= self.height {
                    continue;
                }
                let idx = py * self.width + px;
                self.buffer[idx] =
                    blend_colors(self.buffer[idx], color, alpha as f32 / 255.0 * color_alpha);
            }
        }
    }
}

impl DrawSurface for PixelSurface {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn clear(&mut self) {
        self.buffer.fill(self.background);
    }

    // Pixel pages carry no painting state between runs
    fn save(&mut self) {}

    fn restore(&mut self) {}

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0, x1, y1) = self.clipped(rect);
        let argb = color.to_argb_u32();
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, argb);
            }
        }
    }

    /// Axis-aligned lines are filled as rects; anything else is stepped
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let width = width.max(1.0);
        let half = width / 2.0;

        if from.y == to.y {
            let x = from.x.min(to.x);
            let rect = Rect::new(x, from.y - half, (to.x - from.x).abs(), width);
            return self.fill_rect(rect, color);
        }
        if from.x == to.x {
            let y = from.y.min(to.y);
            let rect = Rect::new(from.x - half, y, width, (to.y - from.y).abs());
            return self.fill_rect(rect, color);
        }

        let steps = (to.x - from.x).abs().max((to.y - from.y).abs()).ceil() as usize;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.fill_rect(Rect::new(x - half, y - half, width, width), color);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, font: &FontDescriptor, color: Color) {
        let Some(fonts) = self.fonts.clone() else {
            return;
        };
        let argb = color.to_argb_u32();

        for (offset, glyph) in fonts.layout_glyphs(text, font) {
            let metrics = &glyph.metrics;
            let left = (x + offset) as isize + metrics.xmin as isize;
            let top = (baseline - metrics.height as f32 - metrics.ymin as f32) as isize;
            self.blend_coverage(left, top, metrics.width, &glyph.bitmap, argb);
        }
    }
}

/// Creates white pixel pages sharing one font book
#[derive(Debug, Clone)]
pub struct PixelFactory {
    pub fonts: Rc<FontBook>,
    pub background: Color,
}

impl PixelFactory {
    pub fn new(fonts: Rc<FontBook>) -> Self {
        Self {
            fonts,
            background: Color::WHITE,
        }
    }
}

impl SurfaceFactory for PixelFactory {
    type Surface = PixelSurface;

    fn create_surface(&mut self, page_index: usize, width: f32, height: f32) -> PixelSurface {
        tracing::debug!(page_index, width, height, "creating page surface");
        PixelSurface::new(width.ceil() as usize, height.ceil() as usize, self.background)
            .with_fonts(Rc::clone(&self.fonts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn test_surface_fill_rect() {
        let mut surface = PixelSurface::new(100, 100, Color::BLACK);

        surface.fill_rect(Rect::new(10.0, 10.0, 20.0, 20.0), RED);

        // Check a pixel inside the rect
        assert_eq!(surface.get_pixel(15, 15), 0xFFFF0000);
        // Check a pixel outside the rect
        assert_eq!(surface.get_pixel(5, 5), 0xFF000000);
    }

    #[test]
    fn test_surface_blend_pixel() {
        let mut surface = PixelSurface::new(10, 10, Color::WHITE);

        // Blend 50% black
        surface.blend_pixel(5, 5, 0x80000000);

        let result = surface.get_pixel(5, 5);
        let r = (result >> 16) & 0xFF;
        let g = (result >> 8) & 0xFF;
        let b = result & 0xFF;
        assert!(r > 100 && r < 160, "R channel: {}", r);
        assert!(g > 100 && g < 160, "G channel: {}", g);
        assert!(b > 100 && b < 160, "B channel: {}", b);
    }

    #[test]
    fn test_surface_out_of_bounds() {
        let mut surface = PixelSurface::new(10, 10, Color::BLACK);

        // These should not panic
        surface.blend_pixel(100, 100, 0x80FFFFFF);
        surface.fill_rect(Rect::new(-50.0, -50.0, 500.0, 500.0), RED);
        assert_eq!(surface.get_pixel(100, 100), 0);
        assert_eq!(surface.get_pixel(9, 9), 0xFFFF0000);
    }

    #[test]
    fn test_fill_rect_end_edges_are_exclusive() {
        let mut surface = PixelSurface::new(100, 100, Color::BLACK);
        surface.fill_rect(Rect::new(10.0, 10.0, 30.0, 30.0), RED);

        assert_eq!(surface.get_pixel(10, 10), 0xFFFF0000);
        assert_eq!(surface.get_pixel(39, 39), 0xFFFF0000);
        assert_eq!(surface.get_pixel(40, 40), 0xFF000000);
        assert_eq!(surface.get_pixel(9, 9), 0xFF000000);
    }

    #[test]
    fn test_stroke_horizontal_and_vertical_lines() {
        let mut surface = PixelSurface::new(20, 20, Color::WHITE);
        surface.stroke_line(Point::new(2.0, 5.0), Point::new(12.0, 5.0), 1.0, RED);
        assert_eq!(surface.get_pixel(2, 4), 0xFFFF0000);
        assert_eq!(surface.get_pixel(11, 4), 0xFFFF0000);
        assert_eq!(surface.get_pixel(12, 4), 0xFFFFFFFF);

        surface.stroke_line(Point::new(15.0, 10.0), Point::new(15.0, 0.0), 2.0, RED);
        assert_eq!(surface.get_pixel(14, 0), 0xFFFF0000);
        assert_eq!(surface.get_pixel(15, 9), 0xFFFF0000);
        assert_eq!(surface.get_pixel(15, 10), 0xFFFFFFFF);
    }

    #[test]
    fn test_clear_resets_pixels() {
        let mut surface = PixelSurface::new(10, 10, Color::WHITE);
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), RED);
        surface.clear();

        assert!(surface.pixels().iter().all(|&p| p == 0xFFFFFFFF));
        surface.fill_rect(Rect::new(5.0, 5.0, 1.0, 1.0), RED);
        assert_eq!(surface.get_pixel(5, 5), 0xFFFF0000);
    }

    #[test]
    fn test_text_without_fonts_is_ignored() {
        let mut surface = PixelSurface::new(10, 10, Color::WHITE);
        let font = FontDescriptor {
            italic: false,
            bold: false,
            size: 16.0,
            family: "sans-serif".into(),
        };
        surface.draw_text("A", 0.0, 8.0, &font, RED);
        assert!(surface.pixels().iter().all(|&p| p == 0xFFFFFFFF));
    }
}
