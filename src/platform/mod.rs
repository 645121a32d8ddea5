//! Platform abstraction layer
//!
//! Turns physical key state into logical [`Action`]s. Bindings are fixed by
//! convention: `w`/`s` drive the left paddle, `up`/`down` the right one.

use std::collections::HashSet;

use crate::error::SimError;
use crate::sim::{Action, InputProvider};

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
}

impl Key {
    pub const ALL: [Key; 4] = [Key::W, Key::S, Key::Up, Key::Down];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" => Some(Key::W),
            "s" => Some(Key::S),
            "up" | "arrowup" => Some(Key::Up),
            "down" | "arrowdown" => Some(Key::Down),
            _ => None,
        }
    }
}

/// Key bound to each action
pub fn binding(action: Action) -> Key {
    match action {
        Action::P1Up => Key::W,
        Action::P1Down => Key::S,
        Action::P2Up => Key::Up,
        Action::P2Down => Key::Down,
    }
}

/// Currently held keys, fed by the windowing layer's key events
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: HashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Query an action by name (`p1_up`, `p1_down`, `p2_up`, `p2_down`)
    pub fn is_action_held_by_name(&self, name: &str) -> Result<bool, SimError> {
        let action: Action = name.parse()?;
        Ok(self.is_action_held(action))
    }
}

impl InputProvider for Keyboard {
    fn is_action_held(&self, action: Action) -> bool {
        self.is_key_held(binding(action))
    }
}
