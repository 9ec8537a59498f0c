//! Render-facing copy of the game state.
//!
//! Renderers read a `GameSnapshot` instead of borrowing `GameState`, so a
//! frame can be built after the state has moved on. `snapshot_into` reuses
//! the vectors of an existing snapshot, so a long-lived snapshot stops
//! allocating once the snake stops growing.

use crate::game_state::PowerUp;
use crate::types::{DeathCause, Direction, Point, Variant, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    pub variant: Variant,
    /// Head first
    pub snake: Vec<Point>,
    pub direction: Direction,
    pub food: Point,
    pub obstacles: Vec<Point>,
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    /// Remaining invincibility; 0 when inactive
    pub invincible_ms: u32,
    pub game_over: bool,
    pub death_cause: Option<DeathCause>,
    pub can_restart: bool,
    pub episode_id: u32,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }

    pub fn invincible(&self) -> bool {
        self.invincible_ms > 0
    }

    /// Whole seconds left on the invincibility timer, rounded up for display.
    pub fn invincible_secs(&self) -> u32 {
        if self.invincible_ms == 0 {
            0
        } else {
            self.invincible_ms / 1000 + 1
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            variant: Variant::default(),
            snake: Vec::new(),
            direction: Direction::Right,
            food: Point::default(),
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            score: 0,
            high_score: 0,
            level: 1,
            invincible_ms: 0,
            game_over: false,
            death_cause: None,
            can_restart: false,
            episode_id: 0,
            ticks: 0,
        }
    }
}
