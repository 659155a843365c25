//! Input queue
//!
//! Host callbacks fire whenever the browser delivers an event; the game only
//! sees them when the loop drains the queue at the start of a tick.

use crate::sim::TickInput;

/// The single game action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Jump, start, or restart
    Confirm,
}

impl Action {
    /// Map a `KeyboardEvent.key` / `.code` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "Space" | "Enter" | "ArrowUp" | "w" | "W" => Some(Action::Confirm),
            _ => None,
        }
    }
}

/// Actions received since the last tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Vec<Action>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.pending.push(action);
    }

    /// Key press convenience; returns whether the key was bound
    pub fn push_key(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.push(action);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Collapse everything queued into one tick's input and clear the queue
    ///
    /// Several presses within one frame count as a single jump.
    pub fn drain(&mut self) -> TickInput {
        let jump = self.pending.drain(..).any(|a| a == Action::Confirm);
        TickInput { jump }
    }
}
