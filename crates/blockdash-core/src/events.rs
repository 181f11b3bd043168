use serde::{Deserialize, Serialize};

/// RGB color forwarded to the renderer with particle requests and object
/// kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const PURPLE: Color = Color::new(128, 0, 128);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const ORANGE: Color = Color::new(255, 165, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Events emitted by a game during `update`.
///
/// This is the simulation's only outbound channel: hosts drain the returned
/// `Vec` each tick and feed renderers, HUDs, and particle systems from it.
/// Positions are world coordinates; the host subtracts the camera offset when
/// drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The score changed this tick.
    ScoreUpdate { score: u32 },
    /// The player jumped; position is the feet midpoint.
    PlayerJumped { x: f32, y: f32 },
    /// The player died; position is the body center.
    PlayerDied { x: f32, y: f32 },
    /// Request for the host's particle system to spawn a burst.
    ParticleBurst { x: f32, y: f32, color: Color, count: u32 },
    /// A death pause elapsed and the current level was rebuilt.
    LevelReset,
}
