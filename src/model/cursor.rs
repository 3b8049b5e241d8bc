//! Cursor state - insertion index, on-screen geometry and the blink cycle

/// Insertion index meaning "before the first run"
pub const BEFORE_START: isize = -1;

/// On-page cursor bar geometry (page-local pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGeometry {
    pub page_index: usize,
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

/// Two-state blink cycle with a generation counter.
///
/// Every reposition bumps the generation, so a toggle scheduled for an older
/// position is recognized as stale and dropped instead of flipping the
/// freshly shown cursor.
#[derive(Debug, Clone, Default)]
pub struct BlinkTimer {
    generation: u64,
    visible: bool,
    armed: bool,
}

impl BlinkTimer {
    /// Force the cursor visible and start a new cycle.
    /// Returns the generation the next tick must carry.
    pub fn restart(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.armed = true;
        self.generation
    }

    /// Handle a scheduled tick. Returns true if visibility flipped.
    pub fn tick(&mut self, generation: u64) -> bool {
        if !self.armed || generation != self.generation {
            return false;
        }
        self.visible = !self.visible;
        true
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a cycle has ever been started
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Process-wide cursor state of one editor session
#[derive(Debug, Clone)]
pub struct CursorState {
    /// Index into the position index; the cursor sits after this record
    pub insertion_index: isize,
    /// Derived geometry, `None` until the first placement
    pub geometry: Option<CursorGeometry>,
    pub blink: BlinkTimer,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            insertion_index: BEFORE_START,
            geometry: None,
            blink: BlinkTimer::default(),
        }
    }

    /// Whether the cursor bar should currently be painted
    pub fn is_visible(&self) -> bool {
        self.geometry.is_some() && self.blink.is_visible()
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}
