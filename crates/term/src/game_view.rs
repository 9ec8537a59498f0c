//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Point, Variant};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(20, 24, 20);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// What occupies a grid cell, in draw order (later wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sprite {
    Obstacle,
    PowerUp,
    Food,
    Body,
    Head,
}

/// A lightweight terminal renderer for the snake grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show the whole grid plus its border.
    pub fn frame_size(&self, grid_w: u16, grid_h: u16) -> (u16, u16) {
        (
            grid_w.saturating_mul(self.cell_w).saturating_add(2),
            grid_h.saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap.width, snap.height);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Rgb::new(70, 80, 70), PLAY_BG).dim();
        for y in 0..snap.height {
            for x in 0..snap.width {
                self.fill_cell_rect(fb, start_x, start_y, x, y, '·', empty);
            }
        }

        for &p in &snap.obstacles {
            self.draw_sprite(fb, snap, start_x, start_y, p, Sprite::Obstacle);
        }
        for pu in &snap.power_ups {
            self.draw_sprite(fb, snap, start_x, start_y, pu.pos, Sprite::PowerUp);
        }
        self.draw_sprite(fb, snap, start_x, start_y, snap.food, Sprite::Food);

        // Tail to head so the head stays visible if segments overlap.
        for &p in snap.snake.iter().skip(1).rev() {
            self.draw_sprite(fb, snap, start_x, start_y, p, Sprite::Body);
        }
        if let Some(head) = snap.head() {
            self.draw_sprite(fb, snap, start_x, start_y, head, Sprite::Head);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "GAME OVER");
            if snap.can_restart {
                let hint = "R RESTART  Q QUIT";
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 1, hint);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_sprite(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        p: Point,
        sprite: Sprite,
    ) {
        if !p.in_bounds(snap.width, snap.height) {
            return;
        }

        let invincible = snap.invincible();
        let (ch, style) = match sprite {
            Sprite::Obstacle => ('▓', CellStyle::new(Rgb::new(110, 110, 110), PLAY_BG)),
            Sprite::PowerUp => ('◆', CellStyle::new(Rgb::new(0, 230, 230), PLAY_BG).bold()),
            Sprite::Food => ('█', CellStyle::new(Rgb::new(230, 50, 50), PLAY_BG)),
            Sprite::Body if invincible => ('█', CellStyle::new(Rgb::new(220, 200, 40), PLAY_BG)),
            Sprite::Body => ('█', CellStyle::new(Rgb::new(40, 190, 60), PLAY_BG)),
            Sprite::Head if invincible => {
                ('█', CellStyle::new(Rgb::new(255, 240, 80), PLAY_BG).bold())
            }
            Sprite::Head => ('█', CellStyle::new(Rgb::new(110, 255, 120), PLAY_BG).bold()),
        };
        self.fill_cell_rect(fb, start_x, start_y, p.x as u16, p.y as u16, ch, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        let stats = [
            ("SCORE", snap.score),
            ("HIGH", snap.high_score),
            ("LEVEL", snap.level),
            ("LENGTH", snap.snake.len() as u32),
        ];
        for (name, v) in stats {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), v, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "MODE", label);
        let mode = match snap.variant {
            Variant::Arcade => "ARCADE",
            Variant::Classic => "CLASSIC",
        };
        fb.put_str(panel_x, y.saturating_add(1), mode, value);
        y = y.saturating_add(3);

        if snap.invincible() {
            let warn = CellStyle::new(Rgb::new(255, 240, 80), PANEL_BG).bold();
            fb.put_str(panel_x, y, "INVINCIBLE", warn);
            let n = fb.put_u32(panel_x, y.saturating_add(1), snap.invincible_secs(), warn);
            fb.put_char(panel_x + n, y.saturating_add(1), 's', warn);
            y = y.saturating_add(3);
        }

        let hint = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG).dim();
        if y.saturating_add(1) < viewport.height {
            fb.put_str(panel_x, y, "ARROWS MOVE", hint);
            fb.put_str(panel_x, y.saturating_add(1), "Q QUIT", hint);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        line: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
