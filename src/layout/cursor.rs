//! Cursor geometry - where the cursor bar goes for an insertion index

use crate::config::EditorConfig;
use crate::model::cursor::CursorGeometry;

use super::position::{PositionIndex, PositionRecord};
use super::rows::{MeasuredRun, Row};

/// Top of a cursor bar of `cursor_height` centered on `run`'s glyph box
/// inside `row`, whose top edge is at `row_top`.
fn centered_top(row_top: f32, row: &Row, run: &MeasuredRun, cursor_height: f32) -> f32 {
    let glyph_top = row.baseline(row_top) - run.info.ascent;
    glyph_top + (run.glyph_height() - cursor_height) / 2.0
}

fn geometry_at(
    record: &PositionRecord,
    row: &Row,
    page_index: usize,
    x: f32,
    row_top: f32,
    config: &EditorConfig,
) -> CursorGeometry {
    let height = record.run.font.size * config.cursor.height_ratio;
    CursorGeometry {
        page_index,
        x,
        y: centered_top(row_top, row, &record.run, height),
        height,
    }
}

/// Geometry for a cursor sitting after record `insertion_index`.
///
/// Returns `None` for `-1` and for indices without a record; callers guard.
/// After a line break the cursor moves to the start of the following row.
pub fn cursor_geometry(
    positions: &PositionIndex,
    rows: &[Row],
    insertion_index: isize,
    config: &EditorConfig,
) -> Option<CursorGeometry> {
    let record = positions.get(insertion_index)?;
    let row = rows.get(record.row_index)?;
    let left = config.page.padding.left;

    if !record.run.is_line_break() {
        return Some(geometry_at(
            record,
            row,
            record.page_index,
            record.rect.right_top.x,
            record.rect.left_top.y,
            config,
        ));
    }

    match positions.get(insertion_index + 1) {
        Some(next) => {
            let next_row = rows.get(next.row_index)?;
            Some(geometry_at(
                record,
                next_row,
                next.page_index,
                left,
                next.rect.left_top.y,
                config,
            ))
        }
        None => Some(geometry_at(
            record,
            row,
            record.page_index,
            left,
            record.rect.left_bottom.y,
            config,
        )),
    }
}

/// Geometry for the "before the first run" position (`-1`)
pub fn home_geometry(positions: &PositionIndex, rows: &[Row], config: &EditorConfig) -> CursorGeometry {
    if let Some(first) = positions.get(0) {
        if let Some(row) = rows.get(first.row_index) {
            return geometry_at(
                first,
                row,
                first.page_index,
                first.rect.left_top.x,
                first.rect.left_top.y,
                config,
            );
        }
    }

    CursorGeometry {
        page_index: 0,
        x: config.page.padding.left,
        y: config.page.padding.top,
        height: config.text.font_size * config.cursor.height_ratio,
    }
}
