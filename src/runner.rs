//! Terminal game loop: read input, tick the core at a fixed step, render.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use crate::core::{GameSnapshot, GameState, TickEvents};
use crate::input::{handle_key_event, should_quit};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::{DeathCause, GameAction, GameConfig, GAME_OVER_HOLD_MS};

/// How a run ended, reported after the terminal is restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    /// Games played, restarts included
    pub games: u32,
    pub death_cause: Option<DeathCause>,
    pub quit: bool,
}

impl RunSummary {
    pub fn from_state(state: &GameState, quit: bool) -> Self {
        Self {
            score: state.score(),
            high_score: state.high_score(),
            level: state.level(),
            games: state.episode_id() + 1,
            death_cause: state.death_cause(),
            quit,
        }
    }
}

/// Run one session until the player quits or an arcade game-over screen times out.
pub fn run(term: &mut TerminalRenderer, config: GameConfig, seed: u32) -> Result<RunSummary> {
    let mut state = GameState::new(config, seed);
    info!(
        seed,
        variant = config.variant.as_str(),
        width = config.width,
        height = config.height,
        obstacles = state.obstacles().len(),
        "game initialized"
    );

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let mut game_over_at: Option<Instant> = None;
    let hold = Duration::from_millis(GAME_OVER_HOLD_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        state.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if state.game_over() {
            let since = *game_over_at.get_or_insert_with(Instant::now);
            if !config.rules.restart && since.elapsed() >= hold {
                return Ok(RunSummary::from_state(&state, false));
            }
        } else {
            game_over_at = None;
        }

        // Input with timeout until next tick.
        let tick_duration = Duration::from_millis(state.tick_interval_ms() as u64);
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = state.score(), "quit requested");
                        return Ok(RunSummary::from_state(&state, true));
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(&mut state, action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            let elapsed_ms = u32::try_from(last_tick.elapsed().as_millis()).unwrap_or(u32::MAX);
            last_tick = Instant::now();
            let events = state.tick(elapsed_ms);
            log_tick_events(&state, &events);
        }
    }
}

fn apply_action(state: &mut GameState, action: GameAction) {
    if !state.apply_action(action) {
        debug!(action = action.as_str(), "action ignored");
        return;
    }
    if action == GameAction::Restart {
        info!(
            episode = state.episode_id(),
            high_score = state.high_score(),
            "game restarted"
        );
    }
}

/// Log what a tick changed.
pub fn log_tick_events(state: &GameState, events: &TickEvents) {
    if let Some(p) = events.ate_food {
        debug!(x = p.x, y = p.y, score = state.score(), "food eaten");
    }
    if let Some(level) = events.level_up {
        info!(level, tick_ms = state.tick_interval_ms(), "level up");
    }
    if let Some(p) = events.power_up_spawned {
        info!(x = p.x, y = p.y, "power-up generated");
    }
    if let Some(kind) = events.power_up_collected {
        info!(kind = kind.as_str(), ms = state.invincible_ms(), "power-up collected");
    }
    if events.invincibility_expired {
        debug!("invincibility expired");
    }
    if let Some(cause) = events.game_over {
        info!(
            cause = cause.as_str(),
            score = state.score(),
            high_score = state.high_score(),
            level = state.level(),
            length = state.snake().len(),
            "game over"
        );
    }
}
