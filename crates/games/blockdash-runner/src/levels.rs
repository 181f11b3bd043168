//! Built-in levels, used when the host supplies no level file and as
//! fixtures in tests.
//!
//! The grid is 20x12 cells per screen at the default 50-unit cell size. The
//! floor occupies row 11, so ground-level objects sit at row 10 and the
//! player rides the floor with its feet at y=550.

use blockdash_core::level::{Level, LevelSet, ObjectDescriptor};

fn at(tag: &str, x: i32, y: i32) -> ObjectDescriptor {
    ObjectDescriptor {
        object: Some(tag.to_string()),
        x,
        y,
        ..ObjectDescriptor::default()
    }
}

fn sized(tag: &str, x: i32, y: i32, width: i32, height: i32) -> ObjectDescriptor {
    ObjectDescriptor {
        object: Some(tag.to_string()),
        x,
        y,
        width,
        height,
        speed_multiplier: None,
    }
}

/// Lone blocks with plenty of runway between them.
fn warm_up() -> Level {
    vec![
        at("Block", 8, 10),
        at("Block", 14, 10),
        at("Block", 20, 10),
        sized("Block", 26, 10, 2, 1),
        at("Block", 33, 10),
    ]
}

/// Spikes, alone and in pairs, with a block to hop from.
fn spike_run() -> Level {
    vec![
        at("Spike", 7, 10),
        at("Spike", 12, 10),
        at("Spike", 13, 10),
        at("Block", 18, 10),
        at("Spike", 19, 10),
        at("Spike", 25, 10),
        at("Spike", 31, 10),
    ]
}

/// A pad over a wall, then an orb chain across a spike pit.
fn launch_pads() -> Level {
    vec![
        at("JumpPad", 8, 10),
        sized("Block", 10, 9, 1, 2),
        at("JumpOrb", 15, 8),
        at("Spike", 16, 10),
        at("Spike", 17, 10),
        at("Block", 22, 10),
        at("JumpPad", 27, 10),
        sized("Block", 29, 9, 2, 2),
    ]
}

/// A speed portal into a spike, then a gravity flip and a mid-air portal
/// back down.
fn portal_loop() -> Level {
    vec![
        ObjectDescriptor {
            object: Some("SpeedPortal".to_string()),
            x: 6,
            y: 10,
            width: 1,
            height: 1,
            speed_multiplier: Some(1.5),
        },
        at("Spike", 12, 10),
        at("GravityPortal", 16, 10),
        sized("GravityPortal", 20, 4, 1, 3),
        at("Spike", 27, 10),
    ]
}

/// The four built-in levels, easiest first.
pub fn demo_levels() -> LevelSet {
    LevelSet::new(vec![warm_up(), spike_run(), launch_pads(), portal_loop()])
}
