use tui_snake::core::{GameState, Layout};
use tui_snake::term::{AnchorY, FrameBuffer, GameView, Viewport};
use tui_snake::types::{Direction, GameConfig, Point, Variant};

fn classic_state() -> GameState {
    let config = GameConfig::new(40, 30, Variant::Classic);
    GameState::from_layout(config, 1, Layout::start(Point::new(30, 20))).unwrap()
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = classic_state().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // grid 40x30 => 80x30 columns/rows, plus border => 82x32
    assert_eq!(view.frame_size(40, 30), (82, 32));
    let fb = view.render(&snap, Viewport::new(82, 32));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(81, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 31).unwrap().ch, '└');
    assert_eq!(fb.get(81, 31).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_snake_and_food_two_chars_wide() {
    let snap = classic_state().snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(82, 32));

    // Inside border: (1,1) origin. Head at grid (10,10).
    let (hx, hy) = (1 + 10 * 2, 1 + 10);
    assert_eq!(fb.get(hx, hy).unwrap().ch, '█');
    assert_eq!(fb.get(hx + 1, hy).unwrap().ch, '█');

    // Tail at grid (8,10).
    assert_eq!(fb.get(1 + 8 * 2, hy).unwrap().ch, '█');

    // Food at grid (30,20).
    let (fx, fy) = (1 + 30 * 2, 1 + 20);
    assert_eq!(fb.get(fx, fy).unwrap().ch, '█');
    assert_eq!(fb.get(fx + 1, fy).unwrap().ch, '█');
    assert_ne!(fb.get(fx, fy).unwrap().style, fb.get(hx, hy).unwrap().style);

    // Empty cell.
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_obstacles_and_power_ups() {
    let mut snap = classic_state().snapshot();
    snap.variant = Variant::Arcade;
    snap.obstacles = vec![Point::new(0, 0)];
    snap.power_ups = vec![tui_snake::core::PowerUp {
        pos: Point::new(39, 29),
        kind: tui_snake::types::PowerUpKind::Invincibility,
    }];

    let fb = GameView::default().render(&snap, Viewport::new(82, 32));
    assert_eq!(fb.get(1, 1).unwrap().ch, '▓');
    assert_eq!(fb.get(2, 1).unwrap().ch, '▓');
    assert_eq!(fb.get(1 + 39 * 2, 30).unwrap().ch, '◆');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = classic_state().snapshot();
    snap.score = 1230;
    snap.high_score = 2000;
    snap.level = 3;

    let view = GameView::default();
    let all = screen_text(&view.render(&snap, Viewport::new(120, 32)));

    assert!(all.contains("SCORE"));
    assert!(all.contains("1230"));
    assert!(all.contains("HIGH"));
    assert!(all.contains("LENGTH"));
    assert!(all.contains("CLASSIC"));
    assert!(!all.contains("INVINCIBLE"));

    // No room for a panel next to the frame.
    let narrow = screen_text(&view.render(&snap, Viewport::new(82, 32)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_shows_invincibility_seconds() {
    let mut snap = classic_state().snapshot();
    snap.invincible_ms = 4200;

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(120, 32)));
    assert!(all.contains("INVINCIBLE"));
    assert!(all.contains("5s"));
}

#[test]
fn term_view_game_over_overlay() {
    let layout = Layout {
        snake: vec![Point::new(0, 5), Point::new(1, 5), Point::new(2, 5)],
        direction: Direction::Left,
        food: Point::new(20, 20),
        obstacles: Vec::new(),
        power_ups: Vec::new(),
    };

    let classic = GameConfig::new(40, 30, Variant::Classic);
    let mut state = GameState::from_layout(classic, 1, layout.clone()).unwrap();
    state.tick(100);
    let all = screen_text(&GameView::default().render(&state.snapshot(), Viewport::new(82, 32)));
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("R RESTART"));

    let arcade = GameConfig::new(40, 30, Variant::Arcade).with_obstacles(0);
    let mut state = GameState::from_layout(arcade, 1, layout).unwrap();
    state.tick(100);
    let all = screen_text(&GameView::default().render(&state.snapshot(), Viewport::new(82, 32)));
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains("R RESTART"));
}

#[test]
fn term_view_centers_grid_by_default_on_tall_viewports() {
    let snap = classic_state().snapshot();

    // Frame is 32 rows tall (30 + border).
    let fb = GameView::default().render(&snap, Viewport::new(82, 40));
    // start_y = (40 - 32) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(82, 40));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
