//! Editor model - the complete state of one editing session
//!
//! This module contains the state types following the Elm Architecture
//! pattern. [`EditorSession`] replaces process-wide editor state: every
//! session owns its document, pages, position index and cursor, so several
//! independent editors can live side by side.

pub mod cursor;
pub mod document;
pub mod input;
pub mod style;

pub use cursor::{BlinkTimer, CursorGeometry, CursorState, BEFORE_START};
pub use document::{runs_from_text, Document, Run, RunValue};
pub use input::Composition;
pub use style::{Color, FontDescriptor, Style};

use crate::commands::Cmd;
use crate::config::EditorConfig;
use crate::layout::cursor::{cursor_geometry, home_geometry};
use crate::layout::measure::TextMeasurer;
use crate::layout::paginate::RowPlacement;
use crate::layout::position::PositionIndex;
use crate::layout::rows::{compute_rows, Row};
use crate::view::render::render_pages;
use crate::view::surface::{Page, SurfaceFactory};

/// One editor instance: content, layout products and cursor
pub struct EditorSession<F: SurfaceFactory> {
    pub config: EditorConfig,
    /// Mutated only through the edit operations in `update::document`
    pub document: Document,
    /// Rows of the last layout pass
    pub rows: Vec<Row>,
    /// Page placement of each row, parallel to `rows`
    pub placements: Vec<RowPlacement>,
    /// Grows on demand, never shrinks
    pub pages: Vec<Page<F::Surface>>,
    pub positions: PositionIndex,
    pub cursor: CursorState,
    pub composition: Composition,
    factory: F,
    measurer: Box<dyn TextMeasurer>,
}

impl<F: SurfaceFactory> std::fmt::Debug for EditorSession<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("runs", &self.document.len())
            .field("rows", &self.rows.len())
            .field("pages", &self.pages.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<F: SurfaceFactory> EditorSession<F> {
    /// Create a session and run the first layout pass (page 0 always exists)
    pub fn new(
        config: EditorConfig,
        document: Document,
        factory: F,
        measurer: Box<dyn TextMeasurer>,
    ) -> Self {
        let mut session = Self {
            config,
            document,
            rows: Vec::new(),
            placements: Vec::new(),
            pages: Vec::new(),
            positions: PositionIndex::new(),
            cursor: CursorState::new(),
            composition: Composition::default(),
            factory,
            measurer,
        };
        session.relayout();
        session
    }

    #[inline]
    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    #[inline]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Swap in `config` and relayout
    ///
    /// Surfaces are sized at creation, so a page size change drops every
    /// page and lets the next pass recreate them at the new size.
    pub fn apply_config(&mut self, config: EditorConfig) {
        let resized = config.page.width != self.config.page.width
            || config.page.height != self.config.page.height;
        self.config = config;
        if resized {
            tracing::debug!(
                width = self.config.page.width,
                height = self.config.page.height,
                "page size changed, recreating pages"
            );
            self.pages.clear();
        }
        self.relayout();
    }

    /// Whole-document layout, pagination and render pass.
    ///
    /// Leaves the position index consistent with the document. Cursor
    /// geometry is not touched; callers follow up with `place_cursor`.
    pub fn relayout(&mut self) {
        self.rows = compute_rows(
            &self.document,
            self.measurer.as_ref(),
            self.config.content_width(),
            &self.config.text,
        );
        self.placements = render_pages(
            &mut self.factory,
            &mut self.pages,
            &mut self.positions,
            &self.rows,
            &self.config,
        );

        tracing::debug!(
            runs = self.document.len(),
            rows = self.rows.len(),
            pages = self.pages.len(),
            revision = self.document.revision,
            "relayout"
        );

        self.assert_invariants();
    }

    /// Move the cursor to `insertion_index` and restart the blink cycle.
    ///
    /// The index is clamped to the position index. Indices without a record
    /// (`-1`, empty document) fall back to the home position on page 0.
    pub fn place_cursor(&mut self, insertion_index: isize) -> Cmd {
        let index = insertion_index.clamp(BEFORE_START, self.positions.last_index());
        let geometry = cursor_geometry(&self.positions, &self.rows, index, &self.config)
            .unwrap_or_else(|| home_geometry(&self.positions, &self.rows, &self.config));

        self.cursor.insertion_index = index;
        self.cursor.geometry = Some(geometry);
        let generation = self.cursor.blink.restart();

        Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::ScheduleBlink {
                generation,
                delay_ms: self.config.cursor.blink_interval_ms,
            },
        ])
    }

    /// Check layout and cursor invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        debug_assert_eq!(
            self.positions.len(),
            self.document.len(),
            "Position index must have one record per run"
        );
        for (record, run) in self.positions.records().iter().zip(self.document.runs()) {
            debug_assert_eq!(
                record.run.run.value, run.value,
                "Record {} out of step with the document",
                record.index
            );
        }
        for (i, row) in self.rows.iter().enumerate() {
            debug_assert!(
                row.runs.len() == 1 || row.width <= self.config.content_width(),
                "Row {} is {}px wide with {} runs",
                i,
                row.width,
                row.runs.len()
            );
        }
        debug_assert_eq!(self.placements.len(), self.rows.len());
        debug_assert!(!self.pages.is_empty(), "Page 0 must always exist");
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
