//! Recording surface - keeps draw calls as data for headless sessions and tests

use crate::geometry::{Point, Rect};
use crate::model::style::{Color, FontDescriptor};

use super::surface::{DrawSurface, SurfaceFactory};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        font: FontDescriptor,
        color: Color,
    },
}

/// A surface that records every call since the last `clear`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    pub page_index: usize,
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
    /// How many times the surface was cleared
    pub clears: usize,
}

impl RecordingSurface {
    pub fn new(page_index: usize, width: f32, height: f32) -> Self {
        Self {
            page_index,
            width,
            height,
            ops: Vec::new(),
            clears: 0,
        }
    }

    #[inline]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text calls in paint order
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text {
                text, x, baseline, ..
            } => Some((text.as_str(), *x, *baseline)),
            _ => None,
        })
    }

    /// Painted text concatenated in paint order
    pub fn painted_text(&self) -> String {
        self.texts().map(|(text, _, _)| text).collect()
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Rect, &Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point, &Color)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokeLine {
                from, to, color, ..
            } => Some((from, to, color)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.clears += 1;
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        self.ops.push(DrawOp::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, baseline: f32, font: &FontDescriptor, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            baseline,
            font: font.clone(),
            color,
        });
    }
}

/// Creates recording surfaces and remembers the order it was asked for them
#[derive(Debug, Clone, Default)]
pub struct RecordingFactory {
    pub created: Vec<usize>,
}

impl SurfaceFactory for RecordingFactory {
    type Surface = RecordingSurface;

    fn create_surface(&mut self, page_index: usize, width: f32, height: f32) -> RecordingSurface {
        self.created.push(page_index);
        RecordingSurface::new(page_index, width, height)
    }
}
