use serde::{Deserialize, Serialize};

use blockdash_core::geom::Rect;
use blockdash_core::input::{Action, InputState};

use crate::objects::GameObject;

/// Grid cell size in world units; level coordinates are authored in cells.
pub const GRID_SIZE: f32 = 50.0;
/// Downward velocity added each tick.
pub const GRAVITY: f32 = 1.0;
/// Vertical velocity applied when a jump fires (negative is up).
pub const JUMP_STRENGTH: f32 = -15.0;
/// Horizontal progress per tick.
pub const MOVE_SPEED: f32 = 5.0;
/// Player AABB width.
pub const PLAYER_WIDTH: f32 = 40.0;
/// Player AABB height.
pub const PLAYER_HEIGHT: f32 = 40.0;
/// Fixed on-screen column where the player is drawn.
pub const SPAWN_X: f32 = 50.0;
/// Vertical spawn position.
pub const SPAWN_Y: f32 = 50.0;
/// Top edge of the floor strip.
pub const FLOOR_Y: f32 = 550.0;
/// Floor thickness.
pub const FLOOR_HEIGHT: f32 = 50.0;
/// Camera window width, also the floor strip's span.
pub const VIEWPORT_WIDTH: f32 = 1000.0;
/// Camera window height (renderer hint).
pub const VIEWPORT_HEIGHT: f32 = 600.0;
/// How far above a solid's top the previous-tick feet may sit for contact to
/// count as a landing instead of a fatal hit.
pub const LANDING_TOLERANCE: f32 = 5.0;
/// Ticks the simulation stays frozen after a death before the level reloads.
pub const DEATH_PAUSE_TICKS: u32 = 60;
/// Simulation rate in ticks per second.
pub const TICK_RATE: f32 = 60.0;

/// Configurable player physics parameters, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerPhysicsConfig {
    pub gravity: f32,
    pub jump_strength: f32,
    pub move_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for RunnerPhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            move_speed: MOVE_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
        }
    }
}

/// Top-level runner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub physics: RunnerPhysicsConfig,
    pub floor_y: f32,
    pub floor_height: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub death_pause_ticks: u32,
    pub tick_rate_hz: f32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            physics: RunnerPhysicsConfig::default(),
            floor_y: FLOOR_Y,
            floor_height: FLOOR_HEIGHT,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            death_pause_ticks: DEATH_PAUSE_TICKS,
            tick_rate_hz: TICK_RATE,
        }
    }
}

impl RunnerConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("BLOCKDASH_RUNNER_CONFIG")
            .unwrap_or_else(|_| "config/runner.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RunnerConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    RunnerConfig::default()
                },
            },
            Err(_) => RunnerConfig::default(),
        }
    }
}

/// Construction-time values restored verbatim on reset.
///
/// Speed portals read `speed` from here so repeated crossings scale the
/// original pace instead of compounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBaseline {
    pub x: f32,
    pub display_x: f32,
    pub y: f32,
    pub y_vel: f32,
    pub speed: f32,
    pub gravity: f32,
    pub jump_strength: f32,
}

/// Kinematic state of the runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Fixed on-screen column; never changes after construction.
    pub x: f32,
    /// Logical horizontal progress. Monotonic while alive.
    pub display_x: f32,
    pub y: f32,
    pub y_vel: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    pub grounded: bool,
    pub dead: bool,
    /// Previous-tick positions, snapshotted at the top of each step. Solid
    /// collision uses them to tell landings from side hits.
    pub prev_display_x: f32,
    pub prev_y: f32,
    baseline: PlayerBaseline,
}

impl PlayerState {
    pub fn new(config: &RunnerConfig) -> Self {
        let p = &config.physics;
        let baseline = PlayerBaseline {
            x: p.spawn_x,
            display_x: p.spawn_x,
            y: p.spawn_y,
            y_vel: 0.0,
            speed: p.move_speed,
            gravity: p.gravity,
            jump_strength: p.jump_strength,
        };
        Self {
            x: baseline.x,
            display_x: baseline.display_x,
            y: baseline.y,
            y_vel: baseline.y_vel,
            width: p.player_width,
            height: p.player_height,
            speed: baseline.speed,
            gravity: baseline.gravity,
            jump_strength: baseline.jump_strength,
            grounded: false,
            dead: false,
            prev_display_x: baseline.display_x,
            prev_y: baseline.y,
            baseline,
        }
    }

    /// Restore every baseline field and clear the runtime flags. Undoes
    /// portal effects along with position and velocity.
    pub fn reset(&mut self) {
        self.x = self.baseline.x;
        self.display_x = self.baseline.display_x;
        self.y = self.baseline.y;
        self.y_vel = self.baseline.y_vel;
        self.speed = self.baseline.speed;
        self.gravity = self.baseline.gravity;
        self.jump_strength = self.baseline.jump_strength;
        self.grounded = false;
        self.dead = false;
        self.prev_display_x = self.display_x;
        self.prev_y = self.y;
    }

    /// Kill the player and freeze forward motion. Returns the death point,
    /// the center of the player in world coordinates.
    pub fn die(&mut self) -> (f32, f32) {
        self.dead = true;
        self.speed = 0.0;
        (
            self.display_x + self.width / 2.0,
            self.y + self.height / 2.0,
        )
    }

    pub fn baseline(&self) -> &PlayerBaseline {
        &self.baseline
    }

    /// Player AABB in world coordinates (progress axis).
    pub fn world_rect(&self) -> Rect {
        Rect::new(self.display_x, self.y, self.width, self.height)
    }

    /// Previous-tick AABB in world coordinates.
    pub fn prev_world_rect(&self) -> Rect {
        Rect::new(self.prev_display_x, self.prev_y, self.width, self.height)
    }

    /// Player AABB at the fixed screen column. The floor spans the viewport,
    /// so floor collision runs in this space.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// What a single player step produced. Death and jump are mutually
/// exclusive: a fatal contact ends the step before the jump check runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    None,
    Jumped,
    Died { x: f32, y: f32 },
}

/// Advance the player one tick: gravity, forward motion, floor snap, object
/// collisions in level order, then the jump check.
///
/// A dead player is frozen entirely; the level loop owns the respawn timer.
pub fn step_player(
    player: &mut PlayerState,
    floor: &Rect,
    objects: &mut [GameObject],
    input: &InputState,
) -> FrameOutcome {
    if player.dead {
        return FrameOutcome::None;
    }

    player.prev_display_x = player.display_x;
    player.prev_y = player.y;

    player.y_vel += player.gravity;
    player.y += player.y_vel;
    player.display_x += player.speed;

    player.grounded = false;
    resolve_floor(player, floor);

    if resolve_objects(player, objects, input) {
        let (x, y) = player.die();
        return FrameOutcome::Died { x, y };
    }

    // Runs after collisions so a landing and the next jump can share a tick.
    if input.is_held(Action::Jump) && player.grounded {
        player.y_vel = player.jump_strength;
        return FrameOutcome::Jumped;
    }

    FrameOutcome::None
}

/// Snap onto the floor when the screen-column AABB intersects it.
pub(crate) fn resolve_floor(player: &mut PlayerState, floor: &Rect) {
    if player.screen_rect().overlaps(floor) {
        player.y = floor.y - player.height;
        player.y_vel = 0.0;
        player.grounded = true;
    }
}

/// Run object collisions in level order. The first fatal response wins and
/// stops the scan; later objects see nothing this tick.
pub(crate) fn resolve_objects(
    player: &mut PlayerState,
    objects: &mut [GameObject],
    input: &InputState,
) -> bool {
    for obj in objects.iter_mut() {
        if obj.on_player_collision(player, input) {
            return true;
        }
    }
    false
}
