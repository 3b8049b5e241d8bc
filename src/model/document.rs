//! Document model - the flat sequence of styled runs

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::style::Style;

/// Content of a single run: one grapheme cluster or an explicit line break
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RunValue {
    Text(String),
    LineBreak,
}

impl RunValue {
    #[inline]
    pub fn is_line_break(&self) -> bool {
        matches!(self, RunValue::LineBreak)
    }

    /// Text handed to the measurer and the painter
    pub fn as_str(&self) -> &str {
        match self {
            RunValue::Text(text) => text,
            RunValue::LineBreak => "\n",
        }
    }
}

impl TryFrom<String> for RunValue {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "\n" | "\r\n" => Ok(RunValue::LineBreak),
            "" => Err("run value must not be empty".to_string()),
            _ if value.graphemes(true).count() > 1 => {
                Err(format!("run value {:?} spans more than one character", value))
            }
            _ => Ok(RunValue::Text(value)),
        }
    }
}

impl From<RunValue> for String {
    fn from(value: RunValue) -> Self {
        value.as_str().to_string()
    }
}

/// An atomic styled unit of content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub value: RunValue,
    #[serde(flatten)]
    pub style: Rc<Style>,
}

impl Run {
    pub fn new(value: RunValue, style: Rc<Style>) -> Self {
        Self { value, style }
    }

    /// A run with default style
    pub fn plain(text: &str) -> Self {
        Self::new(value_of(text), Rc::new(Style::default()))
    }

    /// Modify this run's style without touching runs that share it
    pub fn style_mut(&mut self) -> &mut Style {
        Rc::make_mut(&mut self.style)
    }
}

fn value_of(grapheme: &str) -> RunValue {
    match grapheme {
        "\n" | "\r\n" => RunValue::LineBreak,
        other => RunValue::Text(other.to_string()),
    }
}

/// Split committed text into runs that all share `style`.
///
/// Each extended grapheme cluster becomes one run; `\n` and `\r\n` become
/// line breaks and lone `\r` is dropped.
pub fn runs_from_text(text: &str, style: &Rc<Style>) -> Vec<Run> {
    text.graphemes(true)
        .filter(|g| *g != "\r")
        .map(|g| Run::new(value_of(g), Rc::clone(style)))
        .collect()
}

/// The ordered run sequence - the single source of truth for content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    runs: Vec<Run>,
    /// Incremented on every mutation
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_runs(runs: Vec<Run>) -> Self {
        Self { runs, revision: 0 }
    }

    /// Create a document with default-styled runs for every character of `text`
    pub fn with_text(text: &str) -> Self {
        Self::from_runs(runs_from_text(text, &Rc::new(Style::default())))
    }

    /// Parse a JSON array of runs (`[{"value": "A", "bold": true}, ...]`)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<Run>>(json).map(Self::from_runs)
    }

    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Run> {
        self.runs.get(index)
    }

    /// Insert runs so the first one lands at `position`
    pub fn splice_at(&mut self, position: usize, runs: Vec<Run>) {
        let position = position.min(self.runs.len());
        self.runs.splice(position..position, runs);
        self.revision += 1;
    }

    /// Remove and return the run at `index`
    pub fn remove(&mut self, index: usize) -> Option<Run> {
        if index >= self.runs.len() {
            return None;
        }
        self.revision += 1;
        Some(self.runs.remove(index))
    }

    /// Bulk replacement of the whole run sequence
    pub fn replace(&mut self, runs: Vec<Run>) {
        self.runs = runs;
        self.revision += 1;
    }

    /// Concatenated run values, line breaks as `\n`
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.value.as_str()).collect()
    }
}
