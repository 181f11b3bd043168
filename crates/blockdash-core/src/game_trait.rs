use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::events::GameEvent;
use crate::input::InputState;
use crate::level::LevelSet;

/// Core trait that all Blockdash games must implement.
///
/// The host manages rendering, menus, input devices, and particle effects;
/// the game only advances the simulation and reports what happened through
/// the returned events.
pub trait ArcadeGame: Send + Sync {
    /// Game metadata for the host's selection screen and window setup.
    fn metadata(&self) -> GameMetadata;

    /// Called once with the parsed level set before any level is loaded.
    /// If `config.custom["level"]` names a valid index, that level is loaded
    /// immediately; otherwise the host picks one via `load_level`.
    fn init(&mut self, levels: &LevelSet, config: &GameConfig);

    /// Select and build a level. Returns false (leaving the previous state
    /// untouched) when the index is out of range.
    fn load_level(&mut self, index: usize) -> bool;

    /// Advance the simulation one fixed tick. Returns the events produced.
    fn update(&mut self, input: &InputState) -> Vec<GameEvent>;

    /// Serialize the current simulation state for saving or inspection.
    fn serialize_state(&self) -> Vec<u8>;

    /// Apply a previously serialized state. Undecodable blobs are ignored.
    fn apply_state(&mut self, state: &[u8]);

    /// Simulation tick rate in Hz.
    fn tick_rate(&self) -> f32 {
        60.0
    }

    /// Whether the game supports the host pausing gameplay.
    fn supports_pause(&self) -> bool {
        true
    }

    /// Called when the host requests a pause (menu open, window unfocused).
    fn pause(&mut self);

    /// Called when gameplay should resume after a pause.
    fn resume(&mut self);

    /// Current score.
    fn score(&self) -> u32;

    /// Horizontal render offset: world x minus the player's screen column.
    fn camera_offset(&self) -> f32;
}

/// Game metadata for the host's selection screen and window setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

/// Configuration for a game session. Game-specific knobs travel in `custom`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub custom: HashMap<String, serde_json::Value>,
}

/// Generates the 4 boilerplate `ArcadeGame` methods that are identical across
/// all games: `serialize_state`, `apply_state`, `pause`, `resume`.
///
/// Requires the implementing struct to have `state: $StateType` and
/// `paused: bool` fields.
#[macro_export]
macro_rules! blockdash_game_boilerplate {
    (state_type: $StateType:ty) => {
        fn serialize_state(&self) -> Vec<u8> {
            rmp_serde::to_vec(&self.state).expect("game state serialization must succeed")
        }

        fn apply_state(&mut self, state: &[u8]) {
            if let Ok(s) = rmp_serde::from_slice::<$StateType>(state) {
                self.state = s;
            }
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn resume(&mut self) {
            self.paused = false;
        }
    };
}
