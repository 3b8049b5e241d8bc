//! Keyboard and pointer input mapping
//!
//! Turns winit key events into messages and window coordinates into
//! page-local coordinates for hit-testing.

use winit::keyboard::{Key, NamedKey};

use quire::config::PageConfig;
use quire::messages::{DocumentMsg, Msg};

/// Map a pressed key to a document message.
///
/// Shortcut chords (Ctrl/Cmd held) produce nothing; plain text goes through
/// the composition filter in the update layer.
pub fn key_to_msg(key: &Key, text: Option<&str>, ctrl: bool, logo: bool) -> Option<Msg> {
    match key {
        Key::Named(NamedKey::Backspace) => Some(Msg::delete_backward()),
        Key::Named(NamedKey::Enter) => Some(Msg::commit_text("\n")),
        _ if ctrl || logo => None,
        Key::Named(NamedKey::Space) => Some(Msg::Document(DocumentMsg::KeyText(" ".into()))),
        Key::Character(_) => text
            .filter(|t| !t.is_empty())
            .map(|t| Msg::Document(DocumentMsg::KeyText(t.to_string()))),
        _ => None,
    }
}

/// How the page stack is laid out in the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageStack {
    pub page_width: f32,
    pub page_height: f32,
    pub gap: f32,
    pub window_width: f32,
    pub scroll_y: f32,
}

impl PageStack {
    pub fn new(page: &PageConfig, window_width: f32, scroll_y: f32) -> Self {
        Self {
            page_width: page.width,
            page_height: page.height,
            gap: page.gap,
            window_width,
            scroll_y,
        }
    }

    /// Left edge of every page (pages are centered when the window is wider)
    pub fn page_left(&self) -> f32 {
        ((self.window_width - self.page_width) / 2.0).max(0.0)
    }

    /// Window y of page `index`'s top edge
    pub fn page_top(&self, index: usize) -> f32 {
        self.gap + index as f32 * (self.page_height + self.gap) - self.scroll_y
    }

    /// Height of the whole stack including the gaps around it
    pub fn total_height(&self, page_count: usize) -> f32 {
        self.gap + page_count as f32 * (self.page_height + self.gap)
    }

    /// Page index and page-local point for a window position.
    ///
    /// Positions in gaps or beside the pages are clamped onto the nearest
    /// existing page so the hit tester only ever sees in-page coordinates.
    pub fn to_page(&self, x: f32, y: f32, page_count: usize) -> (usize, f32, f32) {
        let stride = self.page_height + self.gap;
        let doc_y = y + self.scroll_y - self.gap;
        let last = page_count.saturating_sub(1);
        let page = ((doc_y / stride).floor().max(0.0) as usize).min(last);

        let local_x = (x - self.page_left()).clamp(0.0, self.page_width);
        let local_y = (doc_y - page as f32 * stride).clamp(0.0, self.page_height);
        (page, local_x, local_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(scroll_y: f32) -> PageStack {
        PageStack::new(&PageConfig::default(), 1000.0, scroll_y)
    }

    #[test]
    fn test_pages_are_centered_and_stacked() {
        let stack = stack(0.0);
        assert_eq!(stack.page_left(), 103.0);
        assert_eq!(stack.page_top(0), 20.0);
        assert_eq!(stack.page_top(1), 20.0 + 1123.0 + 20.0);
        assert_eq!(stack.total_height(2), 20.0 + 2.0 * 1143.0);
    }

    #[test]
    fn test_window_to_page_coordinates() {
        let stack = stack(0.0);
        assert_eq!(stack.to_page(233.0, 130.0, 2), (0, 130.0, 110.0));
        // Second page, accounting for the gap
        assert_eq!(stack.to_page(233.0, 1163.0 + 10.0, 2), (1, 130.0, 10.0));
    }

    #[test]
    fn test_outside_points_are_clamped() {
        let stack = stack(0.0);
        // Above the first page and left of it
        assert_eq!(stack.to_page(0.0, 0.0, 1), (0, 0.0, 0.0));
        // Far below the last existing page
        assert_eq!(stack.to_page(2000.0, 9000.0, 1), (0, 794.0, 1123.0));
    }

    #[test]
    fn test_scroll_shifts_pages() {
        let stack = stack(1143.0);
        assert_eq!(stack.page_top(1), 20.0);
        assert_eq!(stack.to_page(233.0, 30.0, 2), (1, 130.0, 10.0));
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            key_to_msg(&Key::Named(NamedKey::Backspace), None, false, false),
            Some(Msg::delete_backward())
        );
        assert_eq!(
            key_to_msg(&Key::Named(NamedKey::Enter), None, false, false),
            Some(Msg::commit_text("\n"))
        );
        assert_eq!(
            key_to_msg(&Key::Character("a".into()), Some("a"), false, false),
            Some(Msg::Document(DocumentMsg::KeyText("a".into())))
        );
        assert_eq!(
            key_to_msg(&Key::Character("s".into()), Some("s"), true, false),
            None
        );
    }
}
