//! UI message handlers (cursor blink)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::EditorSession;
use crate::view::surface::SurfaceFactory;

/// Handle UI messages
pub fn update_ui<F: SurfaceFactory>(session: &mut EditorSession<F>, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::BlinkCursor { generation } => {
            // Stale ticks from an earlier placement end their cycle here
            if !session.cursor.blink.tick(generation) {
                return None;
            }
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::ScheduleBlink {
                    generation,
                    delay_ms: session.config.cursor.blink_interval_ms,
                },
            ]))
        }
    }
}
