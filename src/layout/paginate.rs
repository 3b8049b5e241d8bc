//! Paginator - assigns rows to pages by accumulated height

use super::rows::Row;

/// Where one row lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPlacement {
    pub page_index: usize,
    /// Index of the row in document order
    pub row_index: usize,
    /// Offset of the row top from the page's top content padding
    pub top: f32,
}

/// Assign every row to a page.
///
/// Rows fill a page until the next one would overflow `usable_height`, then
/// continue at the top of the next page. A row taller than a whole page is
/// placed alone on its page instead of leaving an empty page before it.
/// This is a pure function of the row heights and `usable_height`.
pub fn paginate(rows: &[Row], usable_height: f32) -> Vec<RowPlacement> {
    let mut placements = Vec::with_capacity(rows.len());
    let mut page_index = 0;
    let mut render_height = 0.0_f32;
    let mut page_has_rows = false;

    for (row_index, row) in rows.iter().enumerate() {
        if page_has_rows && render_height + row.height > usable_height {
            page_index += 1;
            render_height = 0.0;
        }

        placements.push(RowPlacement {
            page_index,
            row_index,
            top: render_height,
        });
        render_height += row.height;
        page_has_rows = true;
    }

    placements
}

/// Number of pages the placements occupy (at least one)
pub fn page_count(placements: &[RowPlacement]) -> usize {
    placements.last().map_or(1, |p| p.page_index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(height: f32) -> Row {
        Row {
            height,
            ..Row::default()
        }
    }

    #[test]
    fn test_rows_fill_page_then_advance() {
        let rows = vec![row(40.0), row(40.0), row(40.0)];
        let placements = paginate(&rows, 100.0);
        let pages: Vec<_> = placements.iter().map(|p| p.page_index).collect();
        assert_eq!(pages, vec![0, 0, 1]);
        assert_eq!(placements[1].top, 40.0);
        assert_eq!(placements[2].top, 0.0);
        assert_eq!(page_count(&placements), 2);
    }

    #[test]
    fn test_exact_fit_stays_on_page() {
        let rows = vec![row(50.0), row(50.0)];
        let placements = paginate(&rows, 100.0);
        assert!(placements.iter().all(|p| p.page_index == 0));
    }

    #[test]
    fn test_tall_row_does_not_leave_empty_page() {
        let rows = vec![row(150.0), row(10.0)];
        let placements = paginate(&rows, 100.0);
        assert_eq!(placements[0].page_index, 0);
        assert_eq!(placements[1].page_index, 1);
    }

    #[test]
    fn test_no_rows_still_one_page() {
        assert_eq!(page_count(&paginate(&[], 100.0)), 1);
    }
}
