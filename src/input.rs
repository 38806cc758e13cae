//! Keyboard mapping and session lifecycle
//!
//! Pure layer between DOM key events and the sim: a key plus the current
//! phase resolves to an intent the host applies. Keeps the start/steer/restart
//! rules testable without a browser.

use crate::sim::state::{GamePhase, GameState};

/// Recognized keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Confirm,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Letter keys are case-insensitive.
    pub fn from_event_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "Enter" => Some(Key::Confirm),
            _ => match key.to_ascii_lowercase().as_str() {
                "w" => Some(Key::Up),
                "s" => Some(Key::Down),
                _ => None,
            },
        }
    }

    fn steer(self) -> Option<i8> {
        match self {
            Key::Up => Some(-1),
            Key::Down => Some(1),
            Key::Confirm => None,
        }
    }
}

/// What the host should do with a key press, given the session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Begin scheduling frames; a direction key also applies its lane change
    Start { steer: Option<i8> },
    /// Shift the train's target lane
    Steer(i8),
    /// Reset session state; the loop stays stopped until the next qualifying key
    Restart,
    /// Drop the event
    Ignore,
}

/// Resolve a key press against the current phase
pub fn resolve(phase: GamePhase, key: Key) -> Intent {
    match phase {
        GamePhase::GameOver => match key {
            Key::Confirm => Intent::Restart,
            _ => Intent::Ignore,
        },
        GamePhase::Ready => Intent::Start { steer: key.steer() },
        GamePhase::Running => match key.steer() {
            Some(direction) => Intent::Steer(direction),
            None => Intent::Ignore,
        },
    }
}

/// Apply an intent to the session. Returns true when the host should start
/// scheduling frames. `reseed` is only consumed by a restart.
pub fn apply(state: &mut GameState, intent: Intent, reseed: u64) -> bool {
    match intent {
        Intent::Start { steer } => {
            state.phase = GamePhase::Running;
            if let Some(direction) = steer {
                state.train.steer(direction);
            }
            true
        }
        Intent::Steer(direction) => {
            state.train.steer(direction);
            false
        }
        Intent::Restart => {
            *state = GameState::with_tuning(reseed, state.tuning.clone());
            false
        }
        Intent::Ignore => false,
    }
}
