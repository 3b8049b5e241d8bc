//! Layout engine - greedy, character-granularity line breaking
//!
//! Turns the flat run sequence into rows that fit the page content width.
//! There is no word-level reflow: a row closes when the next run would not
//! fit, after a line break, or after a lone run wider than the page.

use crate::config::TextDefaults;
use crate::model::document::{Document, Run};
use crate::model::style::FontDescriptor;

use super::measure::{TextMeasurer, TextMetrics};

/// A run plus everything derived from measuring it in one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredRun {
    pub run: Run,
    /// Advance, ascent and descent. Line breaks always have zero advance.
    pub info: TextMetrics,
    /// Resolved font used for measuring and painting
    pub font: FontDescriptor,
    /// Effective line-height multiplier (run override or editor default)
    pub line_height: f32,
}

impl MeasuredRun {
    /// Measure `run` against the editor's text defaults
    pub fn measure(run: &Run, measurer: &dyn TextMeasurer, defaults: &TextDefaults) -> Self {
        let font = run.style.font(defaults.font_size, &defaults.font_family);
        let mut info = measurer.measure(run.value.as_str(), &font);
        if run.value.is_line_break() {
            info.width = 0.0;
        }
        Self {
            run: run.clone(),
            info,
            font,
            line_height: run.style.line_height.unwrap_or(defaults.line_height),
        }
    }

    #[inline]
    pub fn is_line_break(&self) -> bool {
        self.run.value.is_line_break()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.info.width
    }

    /// Unscaled glyph height (`ascent + descent`)
    #[inline]
    pub fn glyph_height(&self) -> f32 {
        self.info.height()
    }

    /// Glyph height scaled by the effective line height
    #[inline]
    pub fn line_box_height(&self) -> f32 {
        self.glyph_height() * self.line_height
    }
}

/// One line of runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub runs: Vec<MeasuredRun>,
    /// Sum of run advances
    pub width: f32,
    /// Max line box height (glyph height × line height)
    pub height: f32,
    /// Max raw glyph height, without line-height scaling
    pub origin_height: f32,
    /// Max descent among the runs
    pub descent: f32,
}

impl Row {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn push(&mut self, run: MeasuredRun) {
        self.width += run.width();
        self.height = self.height.max(run.line_box_height());
        self.origin_height = self.origin_height.max(run.glyph_height());
        self.descent = self.descent.max(run.info.descent);
        self.runs.push(run);
    }

    /// Whether this row ends with an explicit line break
    pub fn ends_with_line_break(&self) -> bool {
        self.runs.last().is_some_and(MeasuredRun::is_line_break)
    }

    /// Glyph baseline for a row whose top edge is at `top`.
    ///
    /// Centers the unscaled glyph box inside the scaled line box, then lifts
    /// it by the row's descent.
    #[inline]
    pub fn baseline(&self, top: f32) -> f32 {
        top + self.height - (self.height - self.origin_height) / 2.0 - self.descent
    }
}

/// Break the document into rows no wider than `content_width`.
///
/// Rows come back in document order; concatenating their runs yields the
/// document again. The only row allowed to exceed `content_width` is one
/// holding a single run that is itself wider.
pub fn compute_rows(
    document: &Document,
    measurer: &dyn TextMeasurer,
    content_width: f32,
    defaults: &TextDefaults,
) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut current = Row::default();

    for run in document.runs() {
        let measured = MeasuredRun::measure(run, measurer, defaults);
        let line_break = measured.is_line_break();
        let oversized = !line_break && measured.width() > content_width;

        if !line_break && !current.is_empty() && current.width + measured.width() > content_width {
            rows.push(std::mem::take(&mut current));
        }

        current.push(measured);

        if line_break || oversized {
            rows.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }

    rows
}
