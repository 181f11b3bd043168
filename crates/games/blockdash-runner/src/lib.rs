pub mod factory;
pub mod levels;
pub mod objects;
pub mod physics;
pub mod scoring;

use serde::{Deserialize, Serialize};

use blockdash_core::blockdash_game_boilerplate;
use blockdash_core::events::{Color, GameEvent};
use blockdash_core::game_trait::{ArcadeGame, GameConfig, GameMetadata};
use blockdash_core::geom::Rect;
use blockdash_core::input::InputState;
use blockdash_core::level::LevelSet;

use factory::ObjectRegistry;
use objects::GameObject;
use physics::{FrameOutcome, PlayerState, RunnerConfig, step_player};

/// Particles requested when the player dies.
pub const DEATH_BURST_COUNT: u32 = 20;
/// Particles requested when the player jumps.
pub const JUMP_BURST_COUNT: u32 = 5;

/// Whether the simulation is live or counting down a death pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Running,
    DeathPause { ticks_left: u32 },
}

/// Serializable simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerState {
    pub player: PlayerState,
    pub floor: Rect,
    pub objects: Vec<GameObject>,
    pub camera_x: f32,
    pub current_level: usize,
    pub score: u32,
    pub phase: Phase,
}

/// The auto-runner game.
///
/// Holds the retained level set and object registry alongside the live
/// [`RunnerState`]; reloading a level rebuilds its objects from the retained
/// descriptors so every one-shot flag starts fresh.
pub struct DashRunner {
    levels: LevelSet,
    registry: ObjectRegistry,
    config: RunnerConfig,
    state: RunnerState,
    paused: bool,
}

impl DashRunner {
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::load())
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        let state = RunnerState {
            player: PlayerState::new(&config),
            floor: Rect::new(
                0.0,
                config.floor_y,
                config.viewport_width,
                config.floor_height,
            ),
            objects: Vec::new(),
            camera_x: 0.0,
            current_level: 0,
            score: 0,
            phase: Phase::Running,
        };
        Self {
            levels: LevelSet::default(),
            registry: ObjectRegistry::default(),
            config,
            state,
            paused: false,
        }
    }

    pub fn state(&self) -> &RunnerState {
        &self.state
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Registry access for hosts that add custom object tags before loading.
    pub fn registry_mut(&mut self) -> &mut ObjectRegistry {
        &mut self.registry
    }

    /// Objects currently inside the camera window, for the renderer.
    pub fn visible_objects(&self) -> impl Iterator<Item = &GameObject> {
        self.state
            .objects
            .iter()
            .filter(|o| o.is_visible(self.state.camera_x, self.config.viewport_width))
    }
}

impl Default for DashRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadeGame for DashRunner {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Block Dash".to_string(),
            description: "Jump the spikes and ride the portals in a one-button auto-runner."
                .to_string(),
            viewport_width: self.config.viewport_width,
            viewport_height: self.config.viewport_height,
        }
    }

    fn tick_rate(&self) -> f32 {
        self.config.tick_rate_hz
    }

    fn init(&mut self, levels: &LevelSet, config: &GameConfig) {
        self.levels = levels.clone();
        self.state = RunnerState {
            player: PlayerState::new(&self.config),
            floor: Rect::new(
                0.0,
                self.config.floor_y,
                self.config.viewport_width,
                self.config.floor_height,
            ),
            objects: Vec::new(),
            camera_x: 0.0,
            current_level: 0,
            score: 0,
            phase: Phase::Running,
        };
        self.paused = false;

        if let Some(index) = config.custom.get("level").and_then(|v| v.as_u64()) {
            self.load_level(index as usize);
        }
    }

    fn load_level(&mut self, index: usize) -> bool {
        let Some(descriptors) = self.levels.get(index) else {
            tracing::warn!(
                "No level {index} to load ({} available), keeping current state",
                self.levels.len()
            );
            return false;
        };
        self.state.objects = self.registry.build_level(descriptors);
        self.state.player.reset();
        self.state.camera_x = self.state.player.display_x - self.state.player.x;
        self.state.score = scoring::distance_score(self.state.player.display_x);
        self.state.current_level = index;
        self.state.phase = Phase::Running;
        true
    }

    fn update(&mut self, input: &InputState) -> Vec<GameEvent> {
        if self.paused {
            return Vec::new();
        }

        // Death pause: everything stays frozen until the countdown elapses,
        // then the level reloads with fresh objects.
        if let Phase::DeathPause { ticks_left } = self.state.phase {
            let ticks_left = ticks_left.saturating_sub(1);
            if ticks_left > 0 {
                self.state.phase = Phase::DeathPause { ticks_left };
                return Vec::new();
            }
            let index = self.state.current_level;
            self.load_level(index);
            return vec![GameEvent::LevelReset];
        }

        let mut events = Vec::new();

        for obj in &mut self.state.objects {
            obj.update();
        }

        // Render offset derives from the pre-step position, trailing the
        // integration by one tick.
        self.state.camera_x = self.state.player.display_x - self.state.player.x;

        match step_player(
            &mut self.state.player,
            &self.state.floor,
            &mut self.state.objects,
            input,
        ) {
            FrameOutcome::Died { x, y } => {
                events.push(GameEvent::PlayerDied { x, y });
                events.push(GameEvent::ParticleBurst {
                    x,
                    y,
                    color: Color::RED,
                    count: DEATH_BURST_COUNT,
                });
                self.state.phase = Phase::DeathPause {
                    ticks_left: self.config.death_pause_ticks,
                };
            },
            FrameOutcome::Jumped => {
                let x = self.state.player.display_x + self.state.player.width / 2.0;
                let y = self.state.player.y + self.state.player.height;
                events.push(GameEvent::PlayerJumped { x, y });
                events.push(GameEvent::ParticleBurst {
                    x,
                    y,
                    color: Color::WHITE,
                    count: JUMP_BURST_COUNT,
                });
            },
            FrameOutcome::None => {},
        }

        let score = scoring::distance_score(self.state.player.display_x);
        if score != self.state.score {
            self.state.score = score;
            events.push(GameEvent::ScoreUpdate { score });
        }

        events
    }

    blockdash_game_boilerplate!(state_type: RunnerState);

    fn score(&self) -> u32 {
        self.state.score
    }

    fn camera_offset(&self) -> f32 {
        self.state.camera_x
    }
}
