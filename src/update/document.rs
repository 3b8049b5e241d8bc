//! Document update functions - the edit operations and text input
//!
//! Every mutation is followed by a whole-document relayout and a fresh
//! cursor placement, synchronously, before the next message is handled.

use std::rc::Rc;

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{runs_from_text, EditorSession, Style, BEFORE_START};
use crate::view::surface::SurfaceFactory;

/// Handle document messages (text editing, composition)
pub fn update_document<F: SurfaceFactory>(
    session: &mut EditorSession<F>,
    msg: DocumentMsg,
) -> Option<Cmd> {
    let at = session.cursor.insertion_index;

    match msg {
        DocumentMsg::CommitText(text) => insert(session, &text, at),

        DocumentMsg::DeleteBackward => delete(session, at),

        DocumentMsg::KeyText(text) => {
            let text = session.composition.key_text(&text)?;
            insert(session, &text, at)
        }

        DocumentMsg::Preedit(text) => {
            session.composition.update_preedit(&text);
            None
        }

        DocumentMsg::CompositionCommit(text) => {
            let text = session.composition.commit(&text)?;
            insert(session, &text, at)
        }
    }
}

/// Splice `text` in after run `at`, one run per grapheme.
///
/// New runs share the style of the run at `at` (default style when `at` is
/// `-1`). The cursor ends up after the last inserted run.
pub fn insert<F: SurfaceFactory>(
    session: &mut EditorSession<F>,
    text: &str,
    at: isize,
) -> Option<Cmd> {
    let at = at.clamp(BEFORE_START, session.document.len() as isize - 1);
    let style = usize::try_from(at)
        .ok()
        .and_then(|i| session.document.get(i))
        .map(|run| Rc::clone(&run.style))
        .unwrap_or_else(|| Rc::new(Style::default()));

    let runs = runs_from_text(text, &style);
    if runs.is_empty() {
        return None;
    }
    let count = runs.len() as isize;

    session.document.splice_at((at + 1) as usize, runs);
    session.relayout();

    tracing::debug!(at, count, "inserted runs");
    Some(session.place_cursor(at + count))
}

/// Remove run `at` and move the cursor before where it was.
/// No-op for `-1` and indices past the end.
pub fn delete<F: SurfaceFactory>(session: &mut EditorSession<F>, at: isize) -> Option<Cmd> {
    let index = usize::try_from(at).ok()?;
    let removed = session.document.remove(index)?;
    session.relayout();

    tracing::debug!(at, value = removed.value.as_str(), "deleted run");
    Some(session.place_cursor(at - 1))
}
