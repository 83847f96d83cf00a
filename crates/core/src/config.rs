//! Game configuration
//!
//! Everything the frame loop needs to know up front lives here and is handed
//! to [`GameState::new`](crate::GameState::new); nothing is read from globals
//! once a game is running.

use crate::types::{
    FALL_RAMP_STEP_MS, INITIAL_FALL_MS, MIN_FALL_MS, POINTS_PER_ROW, RAMP_PERIOD_MS, SPAWN_X,
    SPAWN_Y,
};

/// Immutable per-game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for piece selection
    pub seed: u32,
    /// Spawn anchor column
    pub spawn_x: i8,
    /// Spawn anchor row
    pub spawn_y: i8,
    /// Gravity interval at the start of a game
    pub initial_fall_ms: u32,
    /// Gravity interval floor
    pub min_fall_ms: u32,
    /// Speed-up per difficulty step
    pub fall_ramp_step_ms: u32,
    /// Real time between difficulty steps
    pub ramp_period_ms: u32,
    /// Points per cleared row
    pub points_per_row: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            initial_fall_ms: INITIAL_FALL_MS,
            min_fall_ms: MIN_FALL_MS,
            fall_ramp_step_ms: FALL_RAMP_STEP_MS,
            ramp_period_ms: RAMP_PERIOD_MS,
            points_per_row: POINTS_PER_ROW,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Create from environment variables
    ///
    /// - `TETRIS_SEED`: piece selection seed
    /// - `TETRIS_FALL_MS`: starting gravity interval
    /// - `TETRIS_MIN_FALL_MS`: gravity floor
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    /// Missing or unparsable values keep their defaults.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut parse = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u32>().ok())
                .unwrap_or(default)
        };

        let seed = parse("TETRIS_SEED", defaults.seed);
        let initial_fall_ms = parse("TETRIS_FALL_MS", defaults.initial_fall_ms);
        let min_fall_ms = parse("TETRIS_MIN_FALL_MS", defaults.min_fall_ms);

        Self {
            seed,
            initial_fall_ms,
            // The ramp only ever speeds gravity up.
            min_fall_ms: min_fall_ms.min(initial_fall_ms),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_classic_rules() {
        let c = GameConfig::default();
        assert_eq!(c.initial_fall_ms, 270);
        assert_eq!(c.min_fall_ms, 120);
        assert_eq!(c.fall_ramp_step_ms, 5);
        assert_eq!(c.ramp_period_ms, 5000);
        assert_eq!(c.points_per_row, 10);
        assert_eq!((c.spawn_x, c.spawn_y), (5, 0));
    }

    #[test]
    fn lookup_overrides_and_ignores_garbage() {
        let env: HashMap<&str, &str> = [
            ("TETRIS_SEED", "99"),
            ("TETRIS_FALL_MS", "not-a-number"),
            ("TETRIS_MIN_FALL_MS", " 150 "),
        ]
        .into_iter()
        .collect();

        let c = GameConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(c.seed, 99);
        assert_eq!(c.initial_fall_ms, 270);
        assert_eq!(c.min_fall_ms, 150);
    }

    #[test]
    fn floor_never_exceeds_start_speed() {
        let c = GameConfig::from_lookup(|k| match k {
            "TETRIS_FALL_MS" => Some("100".to_string()),
            _ => None,
        });
        assert_eq!(c.min_fall_ms, 100);
    }
}
