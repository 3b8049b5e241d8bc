//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod editor;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EditorSession;
use crate::view::surface::SurfaceFactory;

#[cfg(debug_assertions)]
use crate::tracing::CursorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::{delete, insert, update_document};
pub use editor::update_editor;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<F: SurfaceFactory>(session: &mut EditorSession<F>, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(session, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(session, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner<F: SurfaceFactory>(session: &mut EditorSession<F>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(m) => editor::update_editor(session, m),
        Msg::Document(m) => document::update_document(session, m),
        Msg::Ui(m) => ui::update_ui(session, m),
        Msg::App(m) => app::update_app(session, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after cursor state and logs diffs for debugging.
/// Blink ticks are too frequent to log.
#[cfg(debug_assertions)]
fn update_traced<F: SurfaceFactory>(session: &mut EditorSession<F>, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::BlinkCursor { .. }));
    if is_noisy {
        return update_inner(session, msg);
    }

    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = CursorSnapshot::from_cursor(&session.cursor);
    let result = update_inner(session, msg);
    let after = CursorSnapshot::from_cursor(&session.cursor);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "cursor", %diff, "state changed");
    }
    if let Some((generation, delay_ms)) = result.as_ref().and_then(Cmd::scheduled_blink) {
        debug!(target: "blink", generation, delay_ms, "blink scheduled");
    }

    session.assert_invariants();
    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Editor::PointerDown { page_index: 0, x: 130.0, y: 110.0 }`
/// - `Document::CommitText("x")`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => match m {
            // The config body is large and rarely interesting
            crate::messages::AppMsg::ApplyConfig(_) => "App::ApplyConfig".to_string(),
            crate::messages::AppMsg::ReplaceDocument(doc) => {
                format!("App::ReplaceDocument({} runs)", doc.len())
            }
        },
    }
}
