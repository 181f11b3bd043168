use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A logical game action, decoupled from physical key bindings.
///
/// The host maps whatever device it polls (keyboard, gamepad, touch) onto
/// these actions before each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Jump,
}

/// The set of actions currently held down.
///
/// Games only ever ask "is this action held right now"; press/release edge
/// detection belongs to whatever game logic needs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputState {
    held: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn set_held(&mut self, action: Action, held: bool) {
        if held {
            self.press(action);
        } else {
            self.release(action);
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}
