//! Editor update functions - cursor placement from pointer input

use crate::commands::Cmd;
use crate::messages::EditorMsg;
use crate::model::EditorSession;
use crate::view::surface::SurfaceFactory;

/// Handle editor messages (pointer-down, direct placement)
pub fn update_editor<F: SurfaceFactory>(
    session: &mut EditorSession<F>,
    msg: EditorMsg,
) -> Option<Cmd> {
    match msg {
        EditorMsg::PointerDown { page_index, x, y } => {
            let hit = session.positions.hit_test(x, y, page_index);
            tracing::debug!(
                page_index,
                x,
                y,
                index = hit.insertion_index,
                tier = ?hit.tier,
                "pointer down"
            );
            Some(session.place_cursor(hit.insertion_index))
        }

        EditorMsg::SetInsertionIndex(index) => Some(session.place_cursor(index)),
    }
}
