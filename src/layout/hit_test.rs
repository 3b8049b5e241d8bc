//! Hit tester - maps a pointer position on a page back to an insertion index
//!
//! Resolution falls through three tiers:
//! 1. inside a run's box: left half resolves before the run, right half after
//! 2. inside a row band but beside every run: the last run of that band
//! 3. no band matches: the last run on the page, or `-1` for an empty page
//!
//! A hit in the first two tiers that lands on a line break resolves before the
//! break, so the cursor stays on the row that was clicked.
//!
//! Coordinates outside the page must be clamped by the caller.

use super::position::{PositionIndex, PositionRecord};

/// Which fallback tier produced a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTier {
    Run,
    RowBand,
    PageEnd,
}

/// Result of a hit test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub insertion_index: isize,
    pub tier: HitTier,
}

impl PositionIndex {
    /// Insertion index for a pointer-down at `(x, y)` on `page_index`
    pub fn locate(&self, x: f32, y: f32, page_index: usize) -> isize {
        self.hit_test(x, y, page_index).insertion_index
    }

    /// Like [`PositionIndex::locate`], also reporting the tier that matched
    pub fn hit_test(&self, x: f32, y: f32, page_index: usize) -> Hit {
        // First match wins; scan order is document order.
        if let Some(record) = self
            .on_page(page_index)
            .find(|record| record.rect.contains(x, y))
        {
            let insertion_index = if x < record.rect.mid_x() {
                record.index as isize - 1
            } else {
                record.row_end()
            };
            tracing::trace!(page_index, x, y, insertion_index, "hit run box");
            return Hit {
                insertion_index,
                tier: HitTier::Run,
            };
        }

        if let Some(record) = self
            .on_page(page_index)
            .filter(|record| record.rect.contains_y(y))
            .last()
        {
            let insertion_index = record.row_end();
            tracing::trace!(page_index, x, y, insertion_index, "hit row band");
            return Hit {
                insertion_index,
                tier: HitTier::RowBand,
            };
        }

        let insertion_index = self
            .on_page(page_index)
            .last()
            .map_or(-1, |record| record.index as isize);
        tracing::trace!(page_index, x, y, insertion_index, "fell through to page end");
        Hit {
            insertion_index,
            tier: HitTier::PageEnd,
        }
    }
}

impl PositionRecord {
    /// Insertion index after this record without leaving its row
    fn row_end(&self) -> isize {
        let index = self.index as isize;
        if self.run.is_line_break() {
            index - 1
        } else {
            index
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextDefaults;
    use crate::geometry::Rect;
    use crate::layout::measure::FixedMeasurer;
    use crate::layout::rows::MeasuredRun;
    use crate::model::document::Run;

    fn measured(text: &str) -> MeasuredRun {
        MeasuredRun::measure(
            &Run::plain(text),
            &FixedMeasurer::default(),
            &TextDefaults::default(),
        )
    }

    /// Two rows on page 0 ("ab" then "c") and one run on page 1
    fn sample_index() -> PositionIndex {
        let mut index = PositionIndex::new();
        index.push(measured("a"), 0, 0, Rect::new(120.0, 100.0, 8.0, 24.0));
        index.push(measured("b"), 0, 0, Rect::new(128.0, 100.0, 8.0, 24.0));
        index.push(measured("c"), 0, 1, Rect::new(120.0, 124.0, 8.0, 24.0));
        index.push(measured("d"), 1, 2, Rect::new(120.0, 100.0, 8.0, 24.0));
        index
    }

    #[test]
    fn test_left_half_resolves_before_run() {
        let index = sample_index();
        let hit = index.hit_test(129.0, 110.0, 0);
        assert_eq!(hit.tier, HitTier::Run);
        assert_eq!(hit.insertion_index, 0);
    }

    #[test]
    fn test_right_half_resolves_after_run() {
        let index = sample_index();
        assert_eq!(index.locate(135.0, 110.0, 0), 1);
    }

    #[test]
    fn test_first_run_left_half_is_before_start() {
        let index = sample_index();
        assert_eq!(index.locate(121.0, 110.0, 0), -1);
    }

    #[test]
    fn test_shared_edge_prefers_earlier_run() {
        let index = sample_index();
        // x = 128 is the right edge of "a" and the left edge of "b"
        assert_eq!(index.locate(128.0, 110.0, 0), 0);
    }

    #[test]
    fn test_beside_row_resolves_to_last_run_of_band() {
        let index = sample_index();
        let hit = index.hit_test(400.0, 110.0, 0);
        assert_eq!(hit.tier, HitTier::RowBand);
        assert_eq!(hit.insertion_index, 1);

        // Left padding of the second row
        assert_eq!(index.locate(10.0, 130.0, 0), 2);
    }

    #[test]
    fn test_below_content_resolves_to_page_end() {
        let index = sample_index();
        let hit = index.hit_test(130.0, 900.0, 0);
        assert_eq!(hit.tier, HitTier::PageEnd);
        assert_eq!(hit.insertion_index, 2);
        assert_eq!(index.locate(130.0, 900.0, 1), 3);
    }

    /// "a" then a break on row 0, a lone break on row 1
    fn break_index() -> PositionIndex {
        let mut index = PositionIndex::new();
        index.push(measured("a"), 0, 0, Rect::new(120.0, 100.0, 8.0, 24.0));
        index.push(measured("\n"), 0, 0, Rect::new(128.0, 100.0, 8.0, 24.0));
        index.push(measured("\n"), 0, 1, Rect::new(120.0, 124.0, 0.0, 24.0));
        index
    }

    #[test]
    fn test_line_break_resolves_before_itself() {
        let index = break_index();

        let hit = index.hit_test(400.0, 110.0, 0);
        assert_eq!(hit.tier, HitTier::RowBand);
        assert_eq!(hit.insertion_index, 0);

        // Empty row: the break itself is the only record in the band
        assert_eq!(index.locate(400.0, 130.0, 0), 1);

        // Right half of the break's own box
        let hit = index.hit_test(135.0, 110.0, 0);
        assert_eq!(hit.tier, HitTier::Run);
        assert_eq!(hit.insertion_index, 0);
    }

    #[test]
    fn test_page_end_keeps_trailing_break() {
        let index = break_index();
        assert_eq!(index.locate(130.0, 900.0, 0), 2);
    }

    #[test]
    fn test_empty_page_resolves_to_before_start() {
        let index = sample_index();
        assert_eq!(index.locate(130.0, 110.0, 5), -1);
        assert_eq!(PositionIndex::new().locate(0.0, 0.0, 0), -1);
    }
}
