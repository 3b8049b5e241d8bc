//! Position index - one geometry record per rendered run
//!
//! The index is rebuilt from scratch on every render pass. After a completed
//! pass `records[i]` always describes `document[i]`.

use crate::geometry::{Point, Rect};

use super::rows::MeasuredRun;

/// Four corners of a run's box in page-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRect {
    pub left_top: Point,
    pub right_top: Point,
    pub left_bottom: Point,
    pub right_bottom: Point,
}

impl RunRect {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            left_top: Point::new(rect.x, rect.y),
            right_top: Point::new(rect.right(), rect.y),
            left_bottom: Point::new(rect.x, rect.bottom()),
            right_bottom: Point::new(rect.right(), rect.bottom()),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right_top.x - self.left_top.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.left_bottom.y - self.left_top.y
    }

    /// Horizontal center line, used for the left/right-half tie-break
    #[inline]
    pub fn mid_x(&self) -> f32 {
        (self.left_top.x + self.right_top.x) / 2.0
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.contains_x(x) && self.contains_y(y)
    }

    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left_top.x && x <= self.right_top.x
    }

    /// Whether `y` falls inside the row band this run belongs to
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.left_top.y && y <= self.left_bottom.y
    }
}

/// Geometry of one rendered run
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRecord {
    /// Index of the run in the document
    pub index: usize,
    pub run: MeasuredRun,
    pub page_index: usize,
    /// Row index in document order (not page-relative)
    pub row_index: usize,
    pub rect: RunRect,
}

/// Ordered position records, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionIndex {
    records: Vec<PositionRecord>,
}

impl PositionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every record ahead of a new render pass
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Append the record for the next run in document order
    pub fn push(&mut self, run: MeasuredRun, page_index: usize, row_index: usize, rect: Rect) {
        let index = self.records.len();
        self.records.push(PositionRecord {
            index,
            run,
            page_index,
            row_index,
            rect: RunRect::from_rect(rect),
        });
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[PositionRecord] {
        &self.records
    }

    /// Record for an insertion index; `None` for `-1` and out-of-range values
    pub fn get(&self, index: isize) -> Option<&PositionRecord> {
        usize::try_from(index).ok().and_then(|i| self.records.get(i))
    }

    /// Records on one page, in document order
    pub fn on_page(&self, page_index: usize) -> impl Iterator<Item = &PositionRecord> + '_ {
        self.records
            .iter()
            .filter(move |record| record.page_index == page_index)
    }

    /// Last record of the whole index, as an insertion index (`-1` if empty)
    pub fn last_index(&self) -> isize {
        self.records.len() as isize - 1
    }
}
