//! Drawing seams between the renderer and whatever backs a page

use crate::geometry::{Point, Rect};
use crate::model::style::{Color, FontDescriptor};

/// Drawing capability the renderer paints a page through.
///
/// Coordinates are page-local pixels. Implementations clip anything that
/// falls outside the surface.
pub trait DrawSurface {
    /// Surface size in pixels `(width, height)`
    fn size(&self) -> (f32, f32);

    /// Reset the whole surface to its blank page state
    fn clear(&mut self);

    /// Push the current painting state
    fn save(&mut self);

    /// Pop the painting state pushed by the matching [`DrawSurface::save`]
    fn restore(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Straight line of `width` pixels between two points
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color);

    /// Draw `text` with its left edge at `x` and its baseline at `baseline`
    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, font: &FontDescriptor, color: Color);
}

/// Creates one surface per page, in increasing page order
pub trait SurfaceFactory {
    type Surface: DrawSurface;

    /// Surface for page `page_index`, sized `width` x `height`
    fn create_surface(&mut self, page_index: usize, width: f32, height: f32) -> Self::Surface;
}

/// A page and the surface it is painted on
#[derive(Debug)]
pub struct Page<S> {
    pub index: usize,
    pub surface: S,
}

impl<S: DrawSurface> Page<S> {
    pub fn new(index: usize, surface: S) -> Self {
        Self { index, surface }
    }
}
