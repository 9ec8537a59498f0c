//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminal I/O, or logging, making it:
//!
//! - **Deterministic**: Same seed and same inputs produce identical games
//! - **Testable**: Every rule can be driven tick by tick without a screen
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: The state machine (`Running` / `GameOver`), tick algorithm, scoring
//! - [`snake`]: Head-first snake body with reversal-safe turning
//! - [`rng`]: Seeded LCG and rejection sampling of free cells
//! - [`snapshot`]: Render-facing copy of the state
//!
//! # Game Rules
//!
//! - **Movement**: One cell per tick in the current heading; reversing is ignored
//! - **Walls**: Leaving the grid ends the game (invincibility does not help)
//! - **Collisions**: Hitting the body or an obstacle ends the game unless invincible
//! - **Food**: +10 score and one segment of growth; respawns on a random free cell
//! - **Levels** (arcade): +1 level every 50 points, 2 more ticks per second per level
//! - **Power-ups** (arcade): 1% spawn chance per tick; pickup grants 5s invincibility
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, Layout};
//! use tui_snake_types::{GameAction, GameConfig, Point, Variant};
//!
//! let config = GameConfig::new(40, 30, Variant::Classic);
//! let mut game = GameState::from_layout(config, 1, Layout::start(Point::new(11, 10))).unwrap();
//!
//! let events = game.tick(100);
//! assert_eq!(events.ate_food, Some(Point::new(11, 10)));
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.snake().len(), 4);
//!
//! game.apply_action(GameAction::MoveDown);
//! game.tick(100);
//! assert_eq!(game.snake().head(), Point::new(11, 11));
//! ```
//!
//! # Timing
//!
//! The caller runs a fixed time step of [`GameState::tick_interval_ms`]
//! (100ms at level 1) and passes the measured elapsed time to
//! [`GameState::tick`], which only uses it for the invincibility countdown.

pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, Layout, Phase, PowerUp, TickEvents};
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
