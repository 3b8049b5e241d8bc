//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quire::config::EditorConfig;
use quire::layout::measure::FixedMeasurer;
use quire::model::{Document, EditorSession};
use quire::view::recording::RecordingFactory;

/// Headless session type used across the integration tests
pub type TestSession = EditorSession<RecordingFactory>;

/// Default geometry: 8px characters, 24px rows, content area starting at
/// (120, 100) and 38 rows per page
pub fn test_session(text: &str) -> TestSession {
    test_session_with_config(text, EditorConfig::default())
}

pub fn test_session_with_config(text: &str, config: EditorConfig) -> TestSession {
    EditorSession::new(
        config,
        Document::with_text(text),
        RecordingFactory::default(),
        Box::new(FixedMeasurer::default()),
    )
}

/// Session with the cursor already placed at `index`
pub fn test_session_at(text: &str, index: isize) -> TestSession {
    let mut session = test_session(text);
    session.place_cursor(index);
    session
}

/// Document content as a plain string
pub fn document_text(session: &TestSession) -> String {
    session.document.text()
}

/// `count` short lines separated by line breaks
pub fn lines(count: usize) -> String {
    (0..count).map(|i| format!("L{}", i % 10)).collect::<Vec<_>>().join("\n")
}
