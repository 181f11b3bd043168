pub mod events;
pub mod game_trait;
pub mod geom;
pub mod input;
pub mod level;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::collections::HashMap;

    use crate::events::GameEvent;
    use crate::game_trait::{ArcadeGame, GameConfig};
    use crate::input::InputState;
    use crate::level::{LevelSet, ObjectDescriptor};

    /// Build a 1x1 descriptor with the given tag at a grid cell.
    pub fn make_descriptor(tag: &str, x: i32, y: i32) -> ObjectDescriptor {
        ObjectDescriptor {
            object: Some(tag.to_string()),
            x,
            y,
            ..ObjectDescriptor::default()
        }
    }

    /// Build a set holding a single level.
    pub fn make_level(objects: Vec<ObjectDescriptor>) -> LevelSet {
        LevelSet::new(vec![objects])
    }

    /// Default GameConfig with no custom entries.
    pub fn default_config() -> GameConfig {
        GameConfig {
            custom: HashMap::new(),
        }
    }

    /// Run N game ticks with no actions held, returning all accumulated events.
    pub fn run_game_ticks(game: &mut dyn ArcadeGame, n: usize) -> Vec<GameEvent> {
        let idle = InputState::new();
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(game.update(&idle));
        }
        all_events
    }

    /// Assert that the game's serialized state differs from `before`.
    pub fn assert_game_state_changed(game: &dyn ArcadeGame, before: &[u8]) {
        let after = game.serialize_state();
        assert_ne!(
            before,
            &after[..],
            "Game state should have changed after operation"
        );
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // These functions form a generic test suite that every ArcadeGame
    // implementation must pass. Game crates call them from their own
    // #[cfg(test)] modules with a concrete game instance and level data.

    /// After init() with a non-empty level set, load_level(0) must succeed and
    /// serialize_state() must return non-empty bytes.
    pub fn contract_init_creates_state(game: &mut dyn ArcadeGame, levels: &LevelSet) {
        game.init(levels, &default_config());
        assert!(
            game.load_level(0),
            "load_level(0) must succeed on a non-empty level set"
        );
        let state = game.serialize_state();
        assert!(
            !state.is_empty(),
            "serialize_state() must return non-empty bytes after init"
        );
    }

    /// update() must advance the simulation state.
    pub fn contract_update_advances_state(game: &mut dyn ArcadeGame) {
        let before = game.serialize_state();
        game.update(&InputState::new());
        let after = game.serialize_state();
        assert_ne!(before, after, "update() must advance game state");
    }

    /// serialize_state → apply_state roundtrip: the game must produce
    /// equivalent state after applying its own serialized output. We verify
    /// by doing serialize→apply→serialize→apply→serialize and checking the
    /// last two serializations are identical (stable after one roundtrip).
    pub fn contract_state_roundtrip_preserves(game: &mut dyn ArcadeGame) {
        let state_a = game.serialize_state();
        game.apply_state(&state_a);
        let state_b = game.serialize_state();
        game.apply_state(&state_b);
        let state_c = game.serialize_state();
        assert_eq!(
            state_b, state_c,
            "State must be stable after serialize→apply→serialize roundtrip"
        );
    }

    /// pause() must freeze the simulation, resume() must unfreeze it.
    pub fn contract_pause_stops_updates(game: &mut dyn ArcadeGame) {
        let idle = InputState::new();

        game.pause();
        let before = game.serialize_state();
        game.update(&idle);
        let during_pause = game.serialize_state();
        assert_eq!(before, during_pause, "State must not change while paused");

        game.resume();
        game.update(&idle);
        let after_resume = game.serialize_state();
        assert_ne!(during_pause, after_resume, "State must change after resume");
    }

    /// load_level() past the end must return false and leave state untouched.
    pub fn contract_bad_level_index_is_noop(game: &mut dyn ArcadeGame, bad_index: usize) {
        let before = game.serialize_state();
        assert!(
            !game.load_level(bad_index),
            "out-of-range level index must be rejected"
        );
        let after = game.serialize_state();
        assert_eq!(before, after, "rejected load_level must not change state");
    }

    /// Reloading a level after some play must restore its fresh state exactly.
    /// Call on a game whose level 0 exists.
    pub fn contract_reload_restores_state(game: &mut dyn ArcadeGame) {
        assert!(game.load_level(0), "level 0 must exist for this contract");
        let fresh = game.serialize_state();

        run_game_ticks(game, 10);
        assert_game_state_changed(game, &fresh);

        assert!(game.load_level(0), "reloading level 0 must succeed");
        let reloaded = game.serialize_state();
        assert_eq!(
            fresh, reloaded,
            "reloading a level must restore its fresh state"
        );
    }
}
