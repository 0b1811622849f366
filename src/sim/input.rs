//! Player input
//!
//! Host event handlers feed an [`InputTracker`]; the frame driver consumes a
//! [`FrameInput`] snapshot taken once per frame.

use std::str::FromStr;

use thiserror::Error;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("key {0:?} not in use")]
    Unrecognized(String),
}

impl Key {
    /// Legacy DOM `keyCode` values (37 = left arrow, 39 = right arrow)
    pub fn from_code(code: u32) -> Result<Self, KeyError> {
        match code {
            37 => Ok(Key::Left),
            39 => Ok(Key::Right),
            other => Err(KeyError::Unrecognized(other.to_string())),
        }
    }

    /// Resolve a keyboard event by its `key` name, falling back to the
    /// legacy `keyCode` for browsers that report an empty or odd name.
    pub fn from_event(name: &str, code: u32) -> Result<Self, KeyError> {
        name.parse::<Key>()
            .or_else(|err| Self::from_code(code).map_err(|_| err))
    }
}

impl FromStr for Key {
    type Err = KeyError;

    /// DOM `KeyboardEvent.key` names, including the old Edge spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" | "Left" => Ok(Key::Left),
            "ArrowRight" | "Right" => Ok(Key::Right),
            other => Err(KeyError::Unrecognized(other.to_string())),
        }
    }
}

/// Input for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Latest pointer x (relative to the surface origin) since the last frame
    pub pointer_x: Option<f32>,
}

/// Held-key and pointer state, mutated by host event handlers
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    left: bool,
    right: bool,
    pointer_x: Option<f32>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Result<Key, KeyError>) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: Result<Key, KeyError>) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: Result<Key, KeyError>, pressed: bool) {
        match key {
            Ok(Key::Left) => self.left = pressed,
            Ok(Key::Right) => self.right = pressed,
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Record pointer x relative to the surface origin
    pub fn pointer_move(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    /// Current state for this frame. The pointer position is consumed so a
    /// stationary pointer does not keep pinning the paddle.
    pub fn snapshot(&mut self) -> FrameInput {
        FrameInput {
            left: self.left,
            right: self.right,
            pointer_x: self.pointer_x.take(),
        }
    }

    /// Drop held keys and any pending pointer move
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!("ArrowLeft".parse::<Key>(), Ok(Key::Left));
        assert_eq!("Right".parse::<Key>(), Ok(Key::Right));
        assert_eq!(
            "a".parse::<Key>(),
            Err(KeyError::Unrecognized("a".to_string()))
        );
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code(37), Ok(Key::Left));
        assert_eq!(Key::from_code(39), Ok(Key::Right));
        assert!(Key::from_code(32).is_err());
    }

    #[test]
    fn test_event_falls_back_to_code() {
        assert_eq!(Key::from_event("ArrowRight", 0), Ok(Key::Right));
        assert_eq!(Key::from_event("", 37), Ok(Key::Left));
        assert_eq!(Key::from_event("Unidentified", 39), Ok(Key::Right));
        // Name wins over a conflicting code
        assert_eq!(Key::from_event("Left", 39), Ok(Key::Left));
        assert_eq!(
            Key::from_event("Enter", 13),
            Err(KeyError::Unrecognized("Enter".to_string()))
        );
    }

    #[test]
    fn test_held_keys_persist_across_snapshots() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Ok(Key::Right));

        assert!(tracker.snapshot().right);
        assert!(tracker.snapshot().right);

        tracker.key_up(Ok(Key::Right));
        assert!(!tracker.snapshot().right);
    }

    #[test]
    fn test_unknown_key_changes_nothing() {
        let mut tracker = InputTracker::new();
        tracker.key_down(Ok(Key::Left));
        tracker.key_down("Space".parse());
        tracker.key_up(Key::from_code(13));

        let input = tracker.snapshot();
        assert!(input.left);
        assert!(!input.right);
        assert_eq!(input.pointer_x, None);
    }

    #[test]
    fn test_pointer_consumed_by_snapshot() {
        let mut tracker = InputTracker::new();
        tracker.pointer_move(100.0);
        tracker.pointer_move(150.0);

        assert_eq!(tracker.snapshot().pointer_x, Some(150.0));
        assert_eq!(tracker.snapshot().pointer_x, None);
    }
}
