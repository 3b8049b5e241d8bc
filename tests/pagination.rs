//! Pagination tests - page assignment, page reuse and indicators

mod common;

use common::{lines, test_session};
use quire::layout::paginate::{page_count, paginate};
use quire::messages::{AppMsg, Msg};
use quire::model::Document;
use quire::update::update;

#[test]
fn test_full_page_stays_on_one_page() {
    // 923px of content height holds 38 rows of 24px
    let session = test_session(&lines(38));
    assert_eq!(session.rows.len(), 38);
    assert_eq!(session.page_count(), 1);
}

#[test]
fn test_overflow_row_starts_next_page() {
    let session = test_session(&lines(39));
    assert_eq!(session.page_count(), 2);
    assert_eq!(session.factory().created, vec![0, 1]);

    let last = session.placements.last().expect("rows placed");
    assert_eq!(last.page_index, 1);
    assert_eq!(last.top, 0.0);

    // The overflowing row is painted at the top of page 1
    let page1 = &session.pages[1].surface;
    assert_eq!(page1.painted_text(), "L8");
    assert_eq!(page1.texts().next().map(|(_, x, b)| (x, b)), Some((120.0, 116.0)));
}

#[test]
fn test_pagination_is_deterministic() {
    let session = test_session(&lines(100));
    let heights = session.config.content_height();

    let first = paginate(&session.rows, heights);
    let second = paginate(&session.rows, heights);
    assert_eq!(first, second);
    assert_eq!(first, session.placements);
    assert_eq!(page_count(&first), session.page_count());
}

#[test]
fn test_relayout_reproduces_index() {
    let mut session = test_session(&lines(50));
    let before = session.positions.clone();
    session.relayout();
    assert_eq!(session.positions, before);
    assert_eq!(session.page_count(), 2);
}

#[test]
fn test_pages_are_kept_when_document_shrinks() {
    let mut session = test_session(&lines(39));
    assert_eq!(session.page_count(), 2);

    update(
        &mut session,
        Msg::App(AppMsg::ReplaceDocument(Document::with_text("short"))),
    );

    assert_eq!(session.page_count(), 2);
    assert_eq!(session.factory().created, vec![0, 1]);

    // Page 1 was cleared and nothing was painted on it again
    let page1 = &session.pages[1].surface;
    assert!(page1.ops().is_empty());
    assert_eq!(page1.clears, 1);
    assert_eq!(session.pages[0].surface.painted_text(), "short");
}

#[test]
fn test_each_painted_page_gets_indicators() {
    let session = test_session(&lines(80));
    assert_eq!(session.page_count(), 3);
    for page in &session.pages {
        assert_eq!(page.surface.lines().count(), 8, "page {}", page.index);
    }
}

#[test]
fn test_empty_document_still_has_first_page() {
    let session = test_session("");
    assert_eq!(session.page_count(), 1);
    assert!(session.rows.is_empty());
    assert!(session.positions.is_empty());
    assert_eq!(session.pages[0].surface.lines().count(), 8);
}
