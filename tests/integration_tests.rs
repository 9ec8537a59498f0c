//! Integration tests for the snake rules, driven through the facade crate

use tui_snake::core::{GameSnapshot, GameState, Layout, PowerUp};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::types::{
    DeathCause, Direction, GameAction, GameConfig, Point, PowerUpKind, Variant,
    INVINCIBILITY_MS,
};

fn classic() -> GameConfig {
    GameConfig::new(40, 30, Variant::Classic)
}

fn arcade_empty() -> GameConfig {
    GameConfig::new(40, 30, Variant::Arcade).with_obstacles(0)
}

fn start_with_food(config: GameConfig, food: Point) -> GameState {
    GameState::from_layout(config, 12345, Layout::start(food)).unwrap()
}

fn cells(state: &GameState) -> Vec<Point> {
    state.snake().cells().collect()
}

#[test]
fn test_tick_without_food_moves_one_cell() {
    let mut state = start_with_food(classic(), Point::new(30, 20));

    let events = state.tick(100);

    assert!(events.moved);
    assert_eq!(
        cells(&state),
        vec![Point::new(11, 10), Point::new(10, 10), Point::new(9, 10)]
    );
    assert_eq!(state.score(), 0);
    assert_eq!(state.food(), Point::new(30, 20));
}

#[test]
fn test_tick_onto_food_grows_and_scores() {
    let mut state = start_with_food(classic(), Point::new(11, 10));

    let events = state.tick(100);

    assert_eq!(events.ate_food, Some(Point::new(11, 10)));
    assert_eq!(
        cells(&state),
        vec![
            Point::new(11, 10),
            Point::new(10, 10),
            Point::new(9, 10),
            Point::new(8, 10)
        ]
    );
    assert_eq!(state.score(), 10);
    assert_eq!(state.high_score(), 10);
    assert!(!state.snake().contains(state.food()));
    assert!(state.food().in_bounds(40, 30));
}

#[test]
fn test_heading_into_left_wall_ends_game() {
    let layout = Layout {
        snake: vec![Point::new(0, 5), Point::new(1, 5), Point::new(2, 5)],
        direction: Direction::Left,
        food: Point::new(20, 20),
        obstacles: Vec::new(),
        power_ups: Vec::new(),
    };
    let mut state = GameState::from_layout(classic(), 1, layout).unwrap();

    let events = state.tick(100);

    assert_eq!(events.game_over, Some(DeathCause::Wall));
    assert!(state.game_over());
    assert_eq!(state.snake().head(), Point::new(0, 5));
}

#[test]
fn test_length_constant_until_food() {
    let mut state = start_with_food(classic(), Point::new(25, 10));

    for _ in 0..14 {
        state.tick(100);
        assert_eq!(state.snake().len(), 3);
    }
    let events = state.tick(100);
    assert_eq!(events.ate_food, Some(Point::new(25, 10)));
    assert_eq!(state.snake().len(), 4);
    assert_eq!(state.score(), 10);
}

#[test]
fn test_exact_reverse_never_applies() {
    let mut state = start_with_food(classic(), Point::new(30, 20));

    assert!(!state.apply_action(GameAction::MoveLeft));
    state.tick(100);
    assert_eq!(state.direction(), Direction::Right);

    // The latest command wins even when it is a reversal, so Up is dropped too.
    assert!(state.apply_action(GameAction::MoveUp));
    assert!(!state.apply_action(GameAction::MoveLeft));
    state.tick(100);
    assert_eq!(state.direction(), Direction::Right);
    assert_eq!(state.snake().head(), Point::new(12, 10));

    // A later valid command replaces a queued reversal.
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(state.apply_action(GameAction::MoveDown));
    state.tick(100);
    assert_eq!(state.direction(), Direction::Down);
    assert_eq!(state.snake().head(), Point::new(12, 11));

    assert!(!state.apply_action(GameAction::MoveUp));
}

#[test]
fn test_new_food_avoids_snake_and_obstacles() {
    for seed in 1..50 {
        let state = GameState::new(GameConfig::default(), seed);
        assert!(!state.snake().contains(state.food()), "seed {}", seed);
        assert!(!state.obstacles().contains(&state.food()), "seed {}", seed);
        for o in state.obstacles() {
            assert!(!state.snake().contains(*o), "seed {}", seed);
        }
    }
}

#[test]
fn test_respawned_food_avoids_obstacles_and_power_ups() {
    // 12x12 arcade grid: rows 0..8 are walls of obstacles, so the free
    // area is small and a bad placement would be hit quickly.
    let mut obstacles = Vec::new();
    for y in 0..8 {
        for x in 0..12 {
            obstacles.push(Point::new(x, y));
        }
    }
    let power_up = PowerUp {
        pos: Point::new(0, 9),
        kind: PowerUpKind::Invincibility,
    };
    let config = GameConfig::new(12, 12, Variant::Arcade).with_obstacles(0);

    for seed in 1..100 {
        let layout = Layout {
            obstacles: obstacles.clone(),
            power_ups: vec![power_up],
            ..Layout::start(Point::new(11, 10))
        };
        let mut state = GameState::from_layout(config, seed, layout).unwrap();

        let events = state.tick(100);
        assert_eq!(events.ate_food, Some(Point::new(11, 10)), "seed {}", seed);

        let food = state.food();
        assert!(food.in_bounds(12, 12), "seed {}", seed);
        assert!(!state.obstacles().contains(&food), "seed {}", seed);
        assert!(!state.snake().contains(food), "seed {}", seed);
        assert!(state.power_ups().iter().all(|pu| pu.pos != food), "seed {}", seed);
    }
}

#[test]
fn test_nothing_changes_after_game_over() {
    let layout = Layout {
        snake: vec![Point::new(5, 0), Point::new(5, 1), Point::new(5, 2)],
        direction: Direction::Up,
        food: Point::new(20, 20),
        obstacles: Vec::new(),
        power_ups: Vec::new(),
    };
    let mut state = GameState::from_layout(arcade_empty(), 7, layout).unwrap();
    assert_eq!(state.tick(100).game_over, Some(DeathCause::Wall));

    let frozen = state.snapshot();
    for _ in 0..200 {
        state.apply_action(GameAction::MoveRight);
        state.apply_action(GameAction::Restart);
        state.tick(100);
    }
    assert_eq!(state.snapshot(), frozen);
}

#[test]
fn test_invincibility_scenario() {
    let layout = Layout {
        snake: vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)],
        direction: Direction::Right,
        food: Point::new(30, 25),
        obstacles: vec![Point::new(12, 10)],
        power_ups: vec![PowerUp {
            pos: Point::new(11, 10),
            kind: PowerUpKind::Invincibility,
        }],
    };
    let mut state = GameState::from_layout(arcade_empty(), 3, layout).unwrap();

    let events = state.tick(100);
    assert_eq!(events.power_up_collected, Some(PowerUpKind::Invincibility));
    assert_eq!(state.invincible_ms(), INVINCIBILITY_MS - 100);

    // Straight through the obstacle.
    let events = state.tick(100);
    assert_eq!(events.game_over, None);
    assert_eq!(state.snake().head(), Point::new(12, 10));

    assert!(!state.tick(2000).invincibility_expired);
    assert!(state.tick(2800).invincibility_expired);
    assert!(!state.invincible());
    assert_eq!(state.snapshot().invincible_ms, 0);
}

#[test]
fn test_invincibility_does_not_protect_from_walls() {
    let layout = Layout {
        snake: vec![Point::new(1, 5), Point::new(2, 5), Point::new(3, 5)],
        direction: Direction::Left,
        food: Point::new(20, 20),
        obstacles: Vec::new(),
        power_ups: vec![PowerUp {
            pos: Point::new(0, 5),
            kind: PowerUpKind::Invincibility,
        }],
    };
    let mut state = GameState::from_layout(arcade_empty(), 3, layout).unwrap();

    state.tick(16);
    assert!(state.invincible());

    let events = state.tick(16);
    assert_eq!(events.game_over, Some(DeathCause::Wall));
}

#[test]
fn test_obstacle_is_fatal_without_invincibility() {
    let mut layout = Layout::start(Point::new(30, 25));
    layout.obstacles = vec![Point::new(11, 10)];
    let mut state = GameState::from_layout(arcade_empty(), 3, layout).unwrap();

    assert_eq!(state.tick(100).game_over, Some(DeathCause::Obstacle));
}

#[test]
fn test_classic_restart_vs_arcade() {
    let dead_end = || Layout {
        snake: vec![Point::new(39, 3), Point::new(38, 3), Point::new(37, 3)],
        direction: Direction::Right,
        food: Point::new(20, 20),
        obstacles: Vec::new(),
        power_ups: Vec::new(),
    };

    let mut classic_state = GameState::from_layout(classic(), 5, dead_end()).unwrap();
    classic_state.tick(100);
    assert!(classic_state.game_over());
    assert!(classic_state.can_restart());
    assert!(classic_state.apply_action(GameAction::Restart));
    assert!(!classic_state.game_over());
    assert_eq!(classic_state.episode_id(), 1);
    assert_eq!(classic_state.snake().head(), Point::new(10, 10));

    let mut arcade_state = GameState::from_layout(arcade_empty(), 5, dead_end()).unwrap();
    arcade_state.tick(100);
    assert!(arcade_state.game_over());
    assert!(!arcade_state.can_restart());
    assert!(!arcade_state.apply_action(GameAction::Restart));
    assert!(arcade_state.game_over());
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveDown,
        GameAction::MoveRight,
        GameAction::MoveUp,
        GameAction::MoveRight,
    ];
    let play = |seed: u32| {
        let mut state = GameState::new(classic(), seed);
        let mut frames = Vec::new();
        let mut snap = GameSnapshot::default();
        for (i, action) in script.iter().cycle().take(40).enumerate() {
            if i % 4 == 0 {
                state.apply_action(*action);
            }
            state.tick(100);
            state.snapshot_into(&mut snap);
            frames.push(snap.clone());
        }
        frames
    };

    assert_eq!(play(99), play(99));

    let mut foods: Vec<Point> = (1..20)
        .map(|seed| GameState::new(classic(), seed).food())
        .collect();
    foods.dedup();
    assert!(foods.len() > 1);
}

#[test]
fn test_keys_drive_the_game() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    let mut state = start_with_food(classic(), Point::new(30, 20));

    let down = handle_key_event(KeyEvent::from(KeyCode::Char('s'))).unwrap();
    assert!(state.apply_action(down));
    state.tick(100);
    assert_eq!(state.snake().head(), Point::new(10, 11));

    assert!(should_quit(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL
    )));
    assert!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))).is_none());
}
