use serde::{Deserialize, Serialize};

use blockdash_core::events::Color;
use blockdash_core::geom::Rect;
use blockdash_core::input::{Action, InputState};

use crate::physics::{GRID_SIZE, LANDING_TOLERANCE, PlayerState};

/// Default upward impulse applied by a jump pad.
pub const JUMP_PAD_IMPULSE: f32 = -15.0;
/// Default upward impulse applied by a jump orb.
pub const JUMP_ORB_IMPULSE: f32 = -12.0;
/// Speed multiplier a speed portal applies when the level omits one.
pub const SPEED_PORTAL_DEFAULT_MULTIPLIER: f32 = 2.0;

/// The closed set of object kinds a level can place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    Block,
    Spike,
    JumpPad { impulse: f32 },
    /// Like a pad, but only fires while the jump action is held at contact.
    JumpOrb { impulse: f32 },
    /// Negates gravity and jump impulse; crossing twice restores them.
    GravityPortal,
    /// Rescales speed from the player's baseline, never the current value.
    SpeedPortal { multiplier: f32 },
}

/// Collision behavior class. Every kind belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Landable from above; fatal from the side or below.
    Solid,
    /// Fatal on any contact.
    Hazard,
    /// One-shot effect on contact, rearming once contact ends. Never fatal.
    Trigger,
    /// Same one-shot mechanism as Trigger, for physics-altering kinds.
    Portal,
}

impl ObjectKind {
    pub fn category(&self) -> Category {
        match self {
            ObjectKind::Block => Category::Solid,
            ObjectKind::Spike => Category::Hazard,
            ObjectKind::JumpPad { .. } | ObjectKind::JumpOrb { .. } => Category::Trigger,
            ObjectKind::GravityPortal | ObjectKind::SpeedPortal { .. } => Category::Portal,
        }
    }

    /// Renderer color for this kind.
    pub fn color(&self) -> Color {
        match self {
            ObjectKind::Block => Color::GREEN,
            ObjectKind::Spike => Color::RED,
            ObjectKind::JumpPad { .. } => Color::PURPLE,
            ObjectKind::JumpOrb { .. } => Color::YELLOW,
            ObjectKind::GravityPortal => Color::BLUE,
            ObjectKind::SpeedPortal { .. } => Color::ORANGE,
        }
    }
}

/// A placed level object: its kind, resolved world bounds, and one-shot state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    pub kind: ObjectKind,
    pub bounds: Rect,
    /// Edge-detector flag for Trigger and Portal kinds: set on contact,
    /// cleared when contact ends. Solid and Hazard kinds never read it.
    pub armed: bool,
}

impl GameObject {
    /// Place an object at a grid cell with the given cell spans.
    pub fn new(
        kind: ObjectKind,
        grid_x: i32,
        grid_y: i32,
        width_cells: i32,
        height_cells: i32,
    ) -> Self {
        Self {
            kind,
            bounds: Rect::new(
                grid_x as f32 * GRID_SIZE,
                grid_y as f32 * GRID_SIZE,
                width_cells as f32 * GRID_SIZE,
                height_cells as f32 * GRID_SIZE,
            ),
            armed: false,
        }
    }

    /// Per-tick animation hook. Current kinds are static; the level loop
    /// still calls this every running tick.
    pub fn update(&mut self) {}

    /// Whether any part of the object falls inside the camera window.
    pub fn is_visible(&self, camera_x: f32, viewport_width: f32) -> bool {
        self.bounds.is_visible(camera_x, viewport_width)
    }

    /// Resolve contact with the player for this tick. Returns true when the
    /// contact kills.
    pub fn on_player_collision(&mut self, player: &mut PlayerState, input: &InputState) -> bool {
        match self.kind.category() {
            Category::Solid => self.resolve_solid(player),
            Category::Hazard => player.world_rect().overlaps(&self.bounds),
            Category::Trigger | Category::Portal => {
                self.resolve_one_shot(player, input);
                false
            },
        }
    }

    fn resolve_solid(&self, player: &mut PlayerState) -> bool {
        if !player.world_rect().overlaps(&self.bounds) {
            return false;
        }
        // A landing needs last tick's feet at or above the top edge, within
        // tolerance. Anything else is a fatal side or bottom hit; with
        // flipped gravity that makes ceilings deadly, which is intended.
        if player.prev_world_rect().bottom() <= self.bounds.y + LANDING_TOLERANCE {
            player.y = self.bounds.y - player.height;
            player.y_vel = 0.0;
            player.grounded = true;
            return false;
        }
        true
    }

    /// Shared edge detector for Trigger and Portal kinds: fire once on the
    /// contact edge, hold while contact lasts, rearm when it ends.
    fn resolve_one_shot(&mut self, player: &mut PlayerState, input: &InputState) {
        let contact = player.world_rect().overlaps(&self.bounds);
        if contact && !self.armed {
            self.apply_effect(player, input);
            self.armed = true;
        } else if !contact {
            self.armed = false;
        }
    }

    fn apply_effect(&self, player: &mut PlayerState, input: &InputState) {
        match self.kind {
            ObjectKind::JumpPad { impulse } => player.y_vel = impulse,
            // The orb arms even when the action is not held; an untaken orb
            // stays consumed for the rest of that overlap.
            ObjectKind::JumpOrb { impulse } => {
                if input.is_held(Action::Jump) {
                    player.y_vel = impulse;
                }
            },
            ObjectKind::GravityPortal => {
                player.gravity = -player.gravity;
                player.jump_strength = -player.jump_strength;
            },
            ObjectKind::SpeedPortal { multiplier } => {
                player.speed = player.baseline().speed * multiplier;
            },
            ObjectKind::Block | ObjectKind::Spike => {},
        }
    }
}
