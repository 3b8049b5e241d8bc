//! Renderer - paints rows onto page surfaces and rebuilds the position index
//!
//! Painting and indexing happen in the same walk, so the geometry recorded
//! for a run is exactly the geometry it was painted with.

use crate::config::EditorConfig;
use crate::geometry::{Point, Rect};
use crate::layout::paginate::{paginate, RowPlacement};
use crate::layout::position::PositionIndex;
use crate::layout::rows::Row;

use super::surface::{DrawSurface, Page, SurfaceFactory};

/// Paint one row at its placement and append a record per run.
///
/// Line breaks are not painted but still get a record, so the break keeps
/// an addressable slot in the index.
pub fn render_row<S: DrawSurface + ?Sized>(
    surface: &mut S,
    positions: &mut PositionIndex,
    row: &Row,
    placement: RowPlacement,
    config: &EditorConfig,
) {
    let top = config.page.padding.top + placement.top;
    let baseline = row.baseline(top);
    let mut x = config.page.padding.left;

    for run in &row.runs {
        let width = run.width();
        let rect = Rect::new(x, top, width, row.height);

        if !run.is_line_break() {
            let style = &run.run.style;
            let color = style.color.unwrap_or(config.text.color);
            surface.save();

            if let Some(background) = style.background {
                surface.fill_rect(rect, background);
            }
            if style.underline {
                let y = top + row.height;
                surface.stroke_line(Point::new(x, y), Point::new(x + width, y), 1.0, color);
            }
            if style.strikethrough {
                let y = top + row.height / 2.0;
                surface.stroke_line(Point::new(x, y), Point::new(x + width, y), 1.0, color);
            }
            surface.draw_text(run.run.value.as_str(), x, baseline, &run.font, color);

            surface.restore();
        }

        positions.push(run.clone(), placement.page_index, placement.row_index, rect);
        x += width;
    }
}

/// Four L-shaped marks at the corners of the page's content area
pub fn render_padding_indicators<S: DrawSurface + ?Sized>(surface: &mut S, config: &EditorConfig) {
    let page = &config.page;
    let size = config.indicator.size;
    let color = config.indicator.color;

    let left = page.padding.left;
    let right = page.width - page.padding.right;
    let top = page.padding.top;
    let bottom = page.height - page.padding.bottom;

    // (corner, vertical arm end, horizontal arm end)
    let corners = [
        ((left, top), (left, top - size), (left - size, top)),
        ((right, top), (right, top - size), (right + size, top)),
        ((left, bottom), (left, bottom + size), (left - size, bottom)),
        ((right, bottom), (right, bottom + size), (right + size, bottom)),
    ];

    surface.save();
    for ((cx, cy), (vx, vy), (hx, hy)) in corners {
        let corner = Point::new(cx, cy);
        surface.stroke_line(Point::new(vx, vy), corner, 1.0, color);
        surface.stroke_line(corner, Point::new(hx, hy), 1.0, color);
    }
    surface.restore();
}

/// Full render pass: clear every page, paginate, paint and re-index.
///
/// Pages are created through `factory` on demand and never removed; a page
/// left without rows by a shorter document is cleared and stays blank.
/// Returns the placements used, in row order.
pub fn render_pages<F: SurfaceFactory>(
    factory: &mut F,
    pages: &mut Vec<Page<F::Surface>>,
    positions: &mut PositionIndex,
    rows: &[Row],
    config: &EditorConfig,
) -> Vec<RowPlacement> {
    positions.clear();
    for page in pages.iter_mut() {
        page.surface.clear();
    }

    ensure_page(factory, pages, 0, config);
    render_padding_indicators(&mut pages[0].surface, config);

    let placements = paginate(rows, config.content_height());
    let mut current_page = 0;

    for (row, placement) in rows.iter().zip(&placements) {
        if placement.page_index != current_page {
            current_page = placement.page_index;
            ensure_page(factory, pages, current_page, config);
            render_padding_indicators(&mut pages[current_page].surface, config);
        }
        render_row(
            &mut pages[current_page].surface,
            positions,
            row,
            *placement,
            config,
        );
    }

    placements
}

/// Create pages up to and including `page_index`, in order
fn ensure_page<F: SurfaceFactory>(
    factory: &mut F,
    pages: &mut Vec<Page<F::Surface>>,
    page_index: usize,
    config: &EditorConfig,
) {
    while pages.len() <= page_index {
        let index = pages.len();
        let surface = factory.create_surface(index, config.page.width, config.page.height);
        pages.push(Page::new(index, surface));
    }
}
