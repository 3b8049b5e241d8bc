//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::config::EditorConfig;
use crate::model::document::Document;

/// Cursor placement messages
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    /// Pointer pressed at page-local `(x, y)`, already clamped to the page
    PointerDown { page_index: usize, x: f32, y: f32 },
    /// Place the cursor at an insertion index directly
    SetInsertionIndex(isize),
}

/// Document mutation and text input messages
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentMsg {
    /// Finalized text to splice in after the cursor
    CommitText(String),
    /// Delete the run before the cursor (backspace)
    DeleteBackward,
    /// Plain key text; dropped while a composition is active
    KeyText(String),
    /// IME pre-edit update; empty text ends the composition
    Preedit(String),
    /// IME commit ending the composition
    CompositionCommit(String),
}

/// UI messages (cursor blink)
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Deferred blink tick scheduled for timer `generation`
    BlinkCursor { generation: u64 },
}

// Blink ticks are sent back to the event loop from timer threads
const _: () = {
    const fn assert_send<T: Send>() {}
    assert_send::<UiMsg>();
};

/// App messages (configuration, document replacement)
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Swap in a new configuration and relayout
    ApplyConfig(Box<EditorConfig>),
    /// Replace the whole document and relayout
    ReplaceDocument(Document),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Editor messages (cursor placement)
    Editor(EditorMsg),
    /// Document messages (text editing, composition)
    Document(DocumentMsg),
    /// UI messages (blink)
    Ui(UiMsg),
    /// App messages (config, document swap)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a pointer-down message
    pub fn pointer_down(page_index: usize, x: f32, y: f32) -> Self {
        Msg::Editor(EditorMsg::PointerDown { page_index, x, y })
    }

    /// Create a commit message for finalized text
    pub fn commit_text(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::CommitText(text.into()))
    }

    /// Create a backspace message
    pub fn delete_backward() -> Self {
        Msg::Document(DocumentMsg::DeleteBackward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_blink_tick_crosses_threads() {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(UiMsg::BlinkCursor { generation: 7 });
        })
        .join()
        .unwrap();

        let msg = Msg::Ui(rx.recv().unwrap());
        assert_eq!(msg, Msg::Ui(UiMsg::BlinkCursor { generation: 7 }));
    }
}
