//! Input composition - coalesces IME pre-edit text into committed strings
//!
//! The platform delivers either plain key text or a composition sequence
//! (pre-edit updates followed by a commit). Only committed text reaches the
//! document; key text that arrives while a composition is open belongs to
//! that composition and is dropped.

/// IME composition state of one editor session
#[derive(Debug, Clone, Default)]
pub struct Composition {
    preedit: Option<String>,
}

impl Composition {
    /// Whether a composition is currently open
    #[inline]
    pub fn is_composing(&self) -> bool {
        self.preedit.is_some()
    }

    /// Current pre-edit text, if composing
    pub fn preedit(&self) -> Option<&str> {
        self.preedit.as_deref()
    }

    /// Update the pre-edit buffer. An empty pre-edit closes the composition.
    pub fn update_preedit(&mut self, text: &str) {
        if text.is_empty() {
            self.preedit = None;
        } else {
            self.preedit = Some(text.to_string());
        }
    }

    /// Finish the composition and hand back the text to commit
    pub fn commit(&mut self, text: &str) -> Option<String> {
        self.preedit = None;
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Plain key text; suppressed while a composition is open
    pub fn key_text(&self, text: &str) -> Option<String> {
        if self.is_composing() || text.is_empty() || text.chars().any(char::is_control) {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Abort any open composition (IME disabled, focus lost)
    pub fn cancel(&mut self) {
        self.preedit = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_text_passes_through_when_idle() {
        let composition = Composition::default();
        assert_eq!(composition.key_text("a"), Some("a".to_string()));
        assert_eq!(composition.key_text("\u{8}"), None);
        assert_eq!(composition.key_text(""), None);
    }

    #[test]
    fn test_key_text_suppressed_while_composing() {
        let mut composition = Composition::default();
        composition.update_preedit("ni");
        assert!(composition.is_composing());
        assert_eq!(composition.preedit(), Some("ni"));
        assert_eq!(composition.key_text("i"), None);
    }

    #[test]
    fn test_commit_closes_composition() {
        let mut composition = Composition::default();
        composition.update_preedit("ni");
        assert_eq!(composition.commit("你"), Some("你".to_string()));
        assert!(!composition.is_composing());
        assert_eq!(composition.key_text("a"), Some("a".to_string()));
    }

    #[test]
    fn test_empty_preedit_ends_composition() {
        let mut composition = Composition::default();
        composition.update_preedit("n");
        composition.update_preedit("");
        assert!(!composition.is_composing());
        assert_eq!(composition.commit(""), None);
    }
}
