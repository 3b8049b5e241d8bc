//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the page stack
    Redraw,
    /// After `delay_ms`, send `Msg::Ui(UiMsg::BlinkCursor { generation })`
    ScheduleBlink { generation: u64, delay_ms: u64 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // The tick itself redraws when it toggles visibility
            Cmd::ScheduleBlink { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Blink schedule carried by this command, if any
    pub fn scheduled_blink(&self) -> Option<(u64, u64)> {
        match self {
            Cmd::ScheduleBlink {
                generation,
                delay_ms,
            } => Some((*generation, *delay_ms)),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(Cmd::scheduled_blink),
            _ => None,
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_needs_redraw() {
        let blink = Cmd::ScheduleBlink {
            generation: 3,
            delay_ms: 600,
        };
        assert!(!blink.needs_redraw());
        assert!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
        assert!(!Cmd::batch(vec![Cmd::None, blink.clone()]).needs_redraw());
        assert_eq!(
            Cmd::batch(vec![Cmd::Redraw, blink]).scheduled_blink(),
            Some((3, 600))
        );
    }
}
