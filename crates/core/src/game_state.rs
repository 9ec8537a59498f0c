//! Game state module - the snake state machine
//!
//! This module ties together the snake body, food, obstacles, power-ups, RNG
//! and scoring. `GameState` is owned by the caller; every change happens
//! through [`GameState::apply_action`] (queued input) and
//! [`GameState::tick`] (one fixed simulation step).

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::*;

/// A power-up lying on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerUp {
    pub pos: Point,
    pub kind: PowerUpKind,
}

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// What happened during one tick (consumed by the runner for logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    /// The snake advanced one cell
    pub moved: bool,
    /// Food eaten at this cell
    pub ate_food: Option<Point>,
    /// Level gained (new level)
    pub level_up: Option<u32>,
    pub power_up_collected: Option<PowerUpKind>,
    pub power_up_spawned: Option<Point>,
    pub invincibility_expired: bool,
    /// Set on the tick that ended the game
    pub game_over: Option<DeathCause>,
}

/// Explicit starting arrangement, used for scenarios and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Head first
    pub snake: Vec<Point>,
    pub direction: Direction,
    pub food: Point,
    pub obstacles: Vec<Point>,
    pub power_ups: Vec<PowerUp>,
}

impl Layout {
    /// The default start: fixed snake, no obstacles, food and power-ups supplied by the caller.
    pub fn start(food: Point) -> Self {
        Self {
            snake: START_SNAKE.to_vec(),
            direction: START_DIRECTION,
            food,
            obstacles: Vec::new(),
            power_ups: Vec::new(),
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: SimpleRng,
    snake: Snake,
    /// Latest accepted direction command, applied on the next tick.
    pending_direction: Option<Direction>,
    food: Point,
    obstacles: ArrayVec<Point, MAX_OBSTACLES>,
    power_ups: Vec<PowerUp>,
    invincible: bool,
    invincible_ms: u32,
    score: u32,
    high_score: u32,
    level: u32,
    phase: Phase,
    death_cause: Option<DeathCause>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Ticks simulated in the current episode.
    ticks: u64,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The config is expected to be validated (grid at least
    /// `MIN_GRID_WIDTH x MIN_GRID_HEIGHT`). Sides above `MAX_GRID_SIDE` are
    /// clamped to it so every cell fits a `Point`. Obstacles are only placed
    /// when the rules enable them, and are capped so that the grid always
    /// keeps free cells.
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut state = Self::blank(config, SimpleRng::new(seed));
        state.populate();
        state
    }

    /// Build a game from an explicit layout.
    ///
    /// Returns `None` if the layout is not a legal position: empty or
    /// self-overlapping snake, cells outside the grid, food, obstacles and
    /// power-ups overlapping each other or the snake, or obstacles in a
    /// variant without them.
    pub fn from_layout(config: GameConfig, seed: u32, layout: Layout) -> Option<Self> {
        let snake = Snake::new(&layout.snake, layout.direction)?;
        let mut state = Self::blank(config, SimpleRng::new(seed));
        let (w, h) = (state.config.width, state.config.height);

        if snake.cells().any(|p| !p.in_bounds(w, h)) {
            return None;
        }
        if !layout.food.in_bounds(w, h) || snake.contains(layout.food) {
            return None;
        }
        if !state.config.rules.obstacles && !layout.obstacles.is_empty() {
            return None;
        }

        state.snake = snake;
        state.food = layout.food;

        for p in layout.obstacles {
            if !p.in_bounds(w, h) || state.is_occupied(p) {
                return None;
            }
            state.obstacles.try_push(p).ok()?;
        }
        for pu in layout.power_ups {
            if !pu.pos.in_bounds(w, h) || state.is_occupied(pu.pos) {
                return None;
            }
            state.power_ups.push(pu);
        }

        Some(state)
    }

    fn blank(mut config: GameConfig, rng: SimpleRng) -> Self {
        config.width = config.width.min(MAX_GRID_SIDE);
        config.height = config.height.min(MAX_GRID_SIDE);
        Self {
            config,
            rng,
            snake: Snake::initial(),
            pending_direction: None,
            food: Point::default(),
            obstacles: ArrayVec::new(),
            power_ups: Vec::new(),
            invincible: false,
            invincible_ms: 0,
            score: 0,
            high_score: 0,
            level: 1,
            phase: Phase::Running,
            death_cause: None,
            episode_id: 0,
            ticks: 0,
        }
    }

    /// Place the initial food, then the obstacles around snake and food.
    fn populate(&mut self) {
        let (w, h) = (self.config.width, self.config.height);
        let snake = &self.snake;
        self.food = self.rng.sample_free(w, h, |p| snake.contains(p));

        // Leave at least one cell free for the next food.
        let room = self
            .config
            .area()
            .saturating_sub(self.snake.len() + 2)
            .min(MAX_OBSTACLES);
        let wanted = if self.config.rules.obstacles {
            (self.config.rules.obstacle_count as usize).min(room)
        } else {
            0
        };

        while self.obstacles.len() < wanted {
            let p = {
                let (snake, food, obstacles) = (&self.snake, self.food, &self.obstacles);
                self.rng
                    .sample_free(w, h, |p| snake.contains(p) || p == food || obstacles.contains(&p))
            };
            self.obstacles.push(p);
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.death_cause
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn invincible(&self) -> bool {
        self.invincible
    }

    /// Remaining invincibility in milliseconds (0 when inactive)
    pub fn invincible_ms(&self) -> u32 {
        self.invincible_ms
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn can_restart(&self) -> bool {
        self.config.rules.restart && self.game_over()
    }

    /// Simulation speed for the current level.
    pub fn ticks_per_sec(&self) -> u32 {
        BASE_TICKS_PER_SEC + self.level.saturating_sub(1) * self.config.rules.speed_step
    }

    /// Fixed time step for the current level in milliseconds.
    pub fn tick_interval_ms(&self) -> u32 {
        1000 / self.ticks_per_sec().max(1)
    }

    /// True if `p` holds a snake segment, an obstacle, the food or a power-up.
    pub fn is_occupied(&self, p: Point) -> bool {
        self.snake.contains(p)
            || self.obstacles.contains(&p)
            || self.food == p
            || self.power_ups.iter().any(|pu| pu.pos == p)
    }

    /// Apply a player action.
    ///
    /// Movement actions queue a heading for the next tick; the latest one
    /// replaces any earlier one. A heading that exactly reverses the current
    /// one is still queued but reported as `false`, and the tick drops it.
    /// Restart only works from game over in variants that allow it.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action.direction() {
            Some(dir) => {
                if self.game_over() {
                    return false;
                }
                self.pending_direction = Some(dir);
                !dir.is_opposite(self.snake.direction())
            }
            None => {
                if !self.can_restart() {
                    return false;
                }
                self.restart();
                true
            }
        }
    }

    /// Start a fresh episode. High score and the RNG stream carry over.
    pub fn restart(&mut self) {
        let rng = self.rng.clone();
        let high_score = self.high_score;
        let episode_id = self.episode_id.wrapping_add(1);

        *self = Self::blank(self.config, rng);
        self.high_score = high_score;
        self.episode_id = episode_id;
        self.populate();
    }

    /// Advance the simulation by one step.
    ///
    /// `elapsed_ms` is the wall time since the previous tick; it only drives
    /// the invincibility countdown. Nothing changes once the game is over.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickEvents {
        let mut events = TickEvents::default();
        if self.game_over() {
            return events;
        }
        self.ticks += 1;

        // Only the latest command counts; a reversal leaves the heading alone.
        if let Some(dir) = self.pending_direction.take() {
            self.snake.turn(dir);
        }

        let new_head = self.snake.next_head();

        // Walls are fatal even while invincible.
        if !new_head.in_bounds(self.config.width, self.config.height) {
            self.end(DeathCause::Wall, &mut events);
            return events;
        }

        if !self.invincible {
            if self.snake.contains(new_head) {
                self.end(DeathCause::SelfCollision, &mut events);
                return events;
            }
            if self.obstacles.contains(&new_head) {
                self.end(DeathCause::Obstacle, &mut events);
                return events;
            }
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);
        events.moved = true;

        if ate {
            events.ate_food = Some(new_head);
            self.score += FOOD_REWARD;
            self.high_score = self.high_score.max(self.score);

            if self.config.rules.leveling && self.score % LEVEL_SCORE_STEP == 0 {
                self.level += 1;
                events.level_up = Some(self.level);
            }

            match self.free_cell() {
                Some(p) => self.food = p,
                None => {
                    self.end(DeathCause::BoardFilled, &mut events);
                    return events;
                }
            }
        }

        if let Some(i) = self.power_ups.iter().position(|pu| pu.pos == new_head) {
            let pu = self.power_ups.remove(i);
            match pu.kind {
                PowerUpKind::Invincibility => {
                    self.invincible = true;
                    self.invincible_ms = INVINCIBILITY_MS;
                }
            }
            events.power_up_collected = Some(pu.kind);
        }

        if self.invincible {
            self.invincible_ms = self.invincible_ms.saturating_sub(elapsed_ms);
            if self.invincible_ms == 0 {
                self.invincible = false;
                events.invincibility_expired = true;
            }
        }

        if self.config.rules.power_ups && self.rng.chance_percent(POWER_UP_SPAWN_PERCENT) {
            // One draw per tick; an occupied cell means no spawn this time.
            let p = self.rng.next_point(self.config.width, self.config.height);
            if !self.is_occupied(p) {
                self.power_ups.push(PowerUp {
                    pos: p,
                    kind: PowerUpKind::Invincibility,
                });
                events.power_up_spawned = Some(p);
            }
        }

        events
    }

    fn end(&mut self, cause: DeathCause, events: &mut TickEvents) {
        self.phase = Phase::GameOver;
        self.death_cause = Some(cause);
        self.pending_direction = None;
        events.game_over = Some(cause);
    }

    /// Uniformly random cell not holding snake, obstacle, food or power-up.
    ///
    /// `None` only when the grid is saturated.
    fn free_cell(&mut self) -> Option<Point> {
        let occupants = self.snake.len() + self.obstacles.len() + self.power_ups.len() + 1;
        if occupants >= self.config.area() && !self.has_free_cell() {
            return None;
        }

        let (w, h) = (self.config.width, self.config.height);
        let (snake, obstacles, power_ups, food) =
            (&self.snake, &self.obstacles, &self.power_ups, self.food);
        Some(self.rng.sample_free(w, h, |p| {
            snake.contains(p)
                || obstacles.contains(&p)
                || p == food
                || power_ups.iter().any(|pu| pu.pos == p)
        }))
    }

    fn has_free_cell(&self) -> bool {
        (0..self.config.height as i16)
            .flat_map(|y| (0..self.config.width as i16).map(move |x| Point::new(x, y)))
            .any(|p| !self.is_occupied(p))
    }

    pub fn snapshot_into(&self, out: &mut crate::snapshot::GameSnapshot) {
        out.width = self.config.width;
        out.height = self.config.height;
        out.variant = self.config.variant;

        out.snake.clear();
        out.snake.extend(self.snake.cells());
        out.direction = self.snake.direction();
        out.food = self.food;
        out.obstacles.clear();
        out.obstacles.extend_from_slice(&self.obstacles);
        out.power_ups.clear();
        out.power_ups.extend_from_slice(&self.power_ups);

        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.invincible_ms = if self.invincible { self.invincible_ms } else { 0 };
        out.game_over = self.game_over();
        out.death_cause = self.death_cause;
        out.can_restart = self.can_restart();
        out.episode_id = self.episode_id;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> crate::snapshot::GameSnapshot {
        let mut s = crate::snapshot::GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
