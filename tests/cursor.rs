//! Cursor placement and blink tests

mod common;

use common::{test_session, test_session_at};
use quire::commands::Cmd;
use quire::messages::{AppMsg, EditorMsg, Msg, UiMsg};
use quire::model::Document;
use quire::update::update;

fn blink(generation: u64) -> Msg {
    Msg::Ui(UiMsg::BlinkCursor { generation })
}

#[test]
fn test_no_cursor_before_first_placement() {
    let mut session = test_session("AB");
    assert!(session.cursor.geometry.is_none());
    assert!(!session.cursor.is_visible());

    // A tick with no running cycle does nothing
    assert!(update(&mut session, blink(0)).is_none());
    assert!(!session.cursor.is_visible());
}

#[test]
fn test_placement_schedules_blink() {
    let mut session = test_session("AB");
    let cmd = session.place_cursor(1);

    let (generation, delay_ms) = cmd.scheduled_blink().expect("blink scheduled");
    assert_eq!(delay_ms, 600);
    assert_eq!(generation, session.cursor.blink.generation());
    assert!(cmd.needs_redraw());
    assert!(session.cursor.is_visible());
}

#[test]
fn test_blink_toggles_and_reschedules() {
    let mut session = test_session("AB");
    let (generation, _) = session.place_cursor(1).scheduled_blink().expect("scheduled");

    let cmd = update(&mut session, blink(generation)).expect("tick handled");
    assert!(!session.cursor.is_visible());
    assert_eq!(
        cmd,
        Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::ScheduleBlink {
                generation,
                delay_ms: 600,
            },
        ])
    );

    update(&mut session, blink(generation));
    assert!(session.cursor.is_visible());
}

#[test]
fn test_stale_tick_after_reposition_is_dropped() {
    let mut session = test_session("AB");
    let (old, _) = session.place_cursor(1).scheduled_blink().expect("scheduled");
    update(&mut session, blink(old));
    assert!(!session.cursor.is_visible());

    // Clicking restarts the cycle with the cursor shown
    update(&mut session, Msg::pointer_down(0, 121.0, 110.0));
    assert!(session.cursor.is_visible());

    assert!(update(&mut session, blink(old)).is_none());
    assert!(session.cursor.is_visible());
}

#[test]
fn test_edit_restarts_blink() {
    let mut session = test_session_at("AB", 1);
    let before = session.cursor.blink.generation();
    update(&mut session, blink(before));
    assert!(!session.cursor.is_visible());

    update(&mut session, Msg::commit_text("C"));
    assert!(session.cursor.is_visible());
    assert_ne!(session.cursor.blink.generation(), before);
}

#[test]
fn test_set_insertion_index_is_clamped() {
    let mut session = test_session("AB");

    update(&mut session, Msg::Editor(EditorMsg::SetInsertionIndex(99)));
    assert_eq!(session.cursor.insertion_index, 1);
    let geometry = session.cursor.geometry.expect("placed");
    assert_eq!((geometry.x, geometry.y), (136.0, 100.0));

    update(&mut session, Msg::Editor(EditorMsg::SetInsertionIndex(-5)));
    assert_eq!(session.cursor.insertion_index, -1);
    let geometry = session.cursor.geometry.expect("placed");
    assert_eq!((geometry.x, geometry.y), (120.0, 100.0));
}

#[test]
fn test_cursor_after_trailing_line_break() {
    let session = test_session_at("A\n", 1);
    let geometry = session.cursor.geometry.expect("placed");
    assert_eq!((geometry.x, geometry.y), (120.0, 124.0));
}

#[test]
fn test_cursor_height_follows_run_size() {
    let mut session = test_session("AB");
    let json = r#"[{"value": "a"}, {"value": "B", "size": 32}]"#;
    let document = Document::from_json(json).expect("valid runs");
    update(&mut session, Msg::App(AppMsg::ReplaceDocument(document)));
    update(&mut session, Msg::Editor(EditorMsg::SetInsertionIndex(1)));

    let geometry = session.cursor.geometry.expect("placed");
    assert_eq!(geometry.height, 48.0);
    assert_eq!(geometry.x, 144.0);
}
