//! App message handlers (configuration, document replacement)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{EditorSession, BEFORE_START};
use crate::view::surface::SurfaceFactory;

/// Handle app messages
pub fn update_app<F: SurfaceFactory>(session: &mut EditorSession<F>, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ApplyConfig(config) => {
            session.apply_config(*config);
            let index = session.cursor.insertion_index;
            Some(session.place_cursor(index))
        }

        AppMsg::ReplaceDocument(document) => {
            session.composition.cancel();
            session.document.replace(document.runs().to_vec());
            session.relayout();
            Some(session.place_cursor(BEFORE_START))
        }
    }
}
