//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid
//!
//! The playfield is an implicit `width x height` grid of integer cells.
//! `(0, 0)` is the top-left corner, `x` grows to the right, `y` grows down.
//!
//! - **Default size**: 40 x 30 cells (an 800x600 surface at 20px cells)
//! - **Start**: snake `[(10,10), (9,10), (8,10)]` heading right
//!
//! # Gameplay Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FOOD_REWARD` | 10 | Score per food |
//! | `LEVEL_SCORE_STEP` | 50 | Score needed per level |
//! | `BASE_TICKS_PER_SEC` | 10 | Speed at level 1 |
//! | `INVINCIBILITY_MS` | 5000 | Invincibility duration |
//! | `POWER_UP_SPAWN_PERCENT` | 1 | Spawn chance per tick |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Point, Variant};
//!
//! let head = Point::new(10, 10);
//! assert_eq!(head.step(Direction::Right), Point::new(11, 10));
//!
//! assert!(Direction::Up.is_opposite(Direction::Down));
//! assert_eq!(GameAction::MoveUp.direction(), Some(Direction::Up));
//!
//! assert!(Variant::Arcade.rules().power_ups);
//! assert!(Variant::Classic.rules().restart);
//! ```

/// Default grid width in cells (800px / 20px)
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default grid height in cells (600px / 20px)
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Smallest accepted grid width; the starting snake sits at x = 8..=10.
pub const MIN_GRID_WIDTH: u16 = 12;

/// Smallest accepted grid height; the starting snake sits at y = 10.
pub const MIN_GRID_HEIGHT: u16 = 12;

/// Largest grid side the core accepts; keeps every cell coordinate inside `i16`.
pub const MAX_GRID_SIDE: u16 = 200;

/// Score awarded per food eaten
pub const FOOD_REWARD: u32 = 10;

/// A level is gained every time the score reaches a multiple of this
pub const LEVEL_SCORE_STEP: u32 = 50;

/// Ticks per second at level 1
pub const BASE_TICKS_PER_SEC: u32 = 10;

/// Extra ticks per second per level gained (arcade)
pub const ARCADE_SPEED_STEP: u32 = 2;

/// Obstacles generated at game start (arcade)
pub const DEFAULT_OBSTACLE_COUNT: u16 = 20;

/// Hard cap for obstacles (fixed-capacity storage in the core)
pub const MAX_OBSTACLES: usize = 256;

/// Invincibility duration after a pickup (5 seconds)
pub const INVINCIBILITY_MS: u32 = 5000;

/// Chance (percent) of attempting a power-up spawn each tick
pub const POWER_UP_SPAWN_PERCENT: u32 = 1;

/// How long the arcade game-over screen stays up before the run ends
pub const GAME_OVER_HOLD_MS: u32 = 2000;

/// Initial snake, head first
pub const START_SNAKE: [Point; 3] = [Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)];

/// Initial heading
pub const START_DIRECTION: Direction = Direction::Right;

/// A grid cell coordinate.
///
/// Signed so that a head stepping off the left/top edge is representable
/// and can be rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True when the point lies inside `[0, width) x [0, height)`.
    pub fn in_bounds(self, width: u16, height: u16) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u16) < width && (self.y as u16) < height
    }
}

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector for this heading (screen coordinates, y grows down)
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Check if this direction is the exact reverse of another
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Game actions that can be applied to modify game state
///
/// Quitting is handled by the runner and never reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Turn the snake up
    MoveUp,
    /// Turn the snake down
    MoveDown,
    /// Turn the snake left
    MoveLeft,
    /// Turn the snake right
    MoveRight,
    /// Start a fresh game after game over (classic only)
    Restart,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Restart => "restart",
        }
    }

    /// The heading requested by a movement action
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Restart => None,
        }
    }
}

/// Effect carried by a power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Self and obstacle collisions are ignored while active
    Invincibility,
}

impl PowerUpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Invincibility => "invincibility",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Head left the grid
    Wall,
    /// Head ran into the snake's own body
    SelfCollision,
    /// Head ran into an obstacle
    Obstacle,
    /// No free cell left to place food
    BoardFilled,
}

impl DeathCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathCause::Wall => "wall",
            DeathCause::SelfCollision => "self",
            DeathCause::Obstacle => "obstacle",
            DeathCause::BoardFilled => "board_filled",
        }
    }
}

/// Rule set switches that separate the two game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Whether the variant has obstacles at all
    pub obstacles: bool,
    /// Obstacles generated at game start (ignored without `obstacles`)
    pub obstacle_count: u16,
    /// Whether invincibility power-ups spawn
    pub power_ups: bool,
    /// Whether `GameAction::Restart` leaves game over
    pub restart: bool,
    /// Whether levels are gained from score
    pub leveling: bool,
    /// Extra ticks per second per level
    pub speed_step: u32,
}

/// The two flavours of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Obstacles, power-ups, levels; game over ends the run
    #[default]
    Arcade,
    /// Empty grid, constant speed; game over can be restarted
    Classic,
}

impl Variant {
    pub fn rules(self) -> Rules {
        match self {
            Variant::Arcade => Rules {
                obstacles: true,
                obstacle_count: DEFAULT_OBSTACLE_COUNT,
                power_ups: true,
                restart: false,
                leveling: true,
                speed_step: ARCADE_SPEED_STEP,
            },
            Variant::Classic => Rules {
                obstacles: false,
                obstacle_count: 0,
                power_ups: false,
                restart: true,
                leveling: false,
                speed_step: 0,
            },
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "arcade" | "a" => Some(Variant::Arcade),
            "classic" | "b" => Some(Variant::Classic),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Arcade => "arcade",
            Variant::Classic => "classic",
        }
    }
}

/// Everything needed to build a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub variant: Variant,
    pub rules: Rules,
}

impl GameConfig {
    pub fn new(width: u16, height: u16, variant: Variant) -> Self {
        Self {
            width,
            height,
            variant,
            rules: variant.rules(),
        }
    }

    /// Override the obstacle count. No effect on variants without obstacles.
    pub fn with_obstacles(mut self, count: u16) -> Self {
        if self.rules.obstacles {
            self.rules.obstacle_count = count;
        }
        self
    }

    /// Number of cells on the grid
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT, Variant::default())
    }
}
