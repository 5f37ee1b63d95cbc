//! GameScreen: terminal implementation of the engine's UI capabilities.
//!
//! Presents the game as a bordered playfield with a white canvas, a score
//! readout in the header line, and a footer hint that doubles as the
//! restart control. One grid tile is two terminal
//! columns wide to compensate for the glyph aspect ratio.

use crate::engine::{Renderer, RestartControl, ScoreDisplay};
use crate::term::fb::{FrameBuffer, Style};
use crate::types::{Cell, Rgb, TILE_COUNT};

/// Terminal columns per grid tile.
const CELL_W: u16 = 2;

const BOARD_W: u16 = TILE_COUNT as u16 * CELL_W;
const BOARD_H: u16 = TILE_COUNT as u16;

/// Playfield offset inside the frame: one header row plus the border.
const BOARD_X: u16 = 1;
const BOARD_Y: u16 = 2;

/// Header, top border, playfield, bottom border, footer.
const SCREEN_W: u16 = BOARD_W + 2;
const SCREEN_H: u16 = BOARD_H + 4;

/// Palette: white canvas, orange food, grey chrome.
const CANVAS_BG: Rgb = Rgb::new(255, 255, 255);
const CANVAS_FG: Rgb = Rgb::new(51, 51, 51);
const FOOD_FILL: Rgb = Rgb::new(247, 147, 26);
const CHROME_FG: Rgb = Rgb::new(200, 200, 200);
const CHROME_BG: Rgb = Rgb::new(0, 0, 0);
const OVERLAY_TEXT: Rgb = Rgb::new(255, 255, 255);

/// Brightness kept by the game-over overlay (~30%, like a 0.7 black dim).
const OVERLAY_KEEP: u8 = 77;

fn canvas_style() -> Style {
    Style {
        fg: CANVAS_FG,
        bg: CANVAS_BG,
        dim: false,
    }
}

fn chrome_style() -> Style {
    Style {
        fg: CHROME_FG,
        bg: CHROME_BG,
        dim: false,
    }
}

pub struct GameScreen {
    fb: FrameBuffer,
    score: u32,
    restart_visible: bool,
}

impl GameScreen {
    pub fn new() -> Self {
        let mut screen = Self {
            fb: FrameBuffer::new(SCREEN_W, SCREEN_H),
            score: 0,
            restart_visible: false,
        };
        screen.draw_frame();
        screen.draw_header();
        screen.draw_footer();
        screen
            .fb
            .fill_rect(BOARD_X, BOARD_Y, BOARD_W, BOARD_H, ' ', canvas_style());
        screen
    }

    /// The frame to flush to the terminal.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Whether the restart control is currently shown. The host consults
    /// this before forwarding restart input to the engine.
    pub fn restart_visible(&self) -> bool {
        self.restart_visible
    }

    /// Top-left terminal position of a grid cell, if it is on the board.
    fn tile_origin(cell: Cell) -> Option<(u16, u16)> {
        if !cell.in_bounds() {
            return None;
        }
        let (tx, ty) = cell.tile();
        Some((BOARD_X + tx as u16 * CELL_W, BOARD_Y + ty as u16))
    }

    fn draw_frame(&mut self) {
        let style = chrome_style();
        let (top, bottom) = (BOARD_Y - 1, BOARD_Y + BOARD_H);
        let right = SCREEN_W - 1;

        self.fb.put(0, top, '┌', style);
        self.fb.put(right, top, '┐', style);
        self.fb.put(0, bottom, '└', style);
        self.fb.put(right, bottom, '┘', style);

        for x in 1..right {
            self.fb.put(x, top, '─', style);
            self.fb.put(x, bottom, '─', style);
        }
        for y in BOARD_Y..bottom {
            self.fb.put(0, y, '│', style);
            self.fb.put(right, y, '│', style);
        }
    }

    fn draw_header(&mut self) {
        self.fb.fill_rect(0, 0, SCREEN_W, 1, ' ', chrome_style());
        self.fb
            .put_str(1, 0, &format!("SCORE {}", self.score), chrome_style());

        let quit = "[q] quit";
        let x = SCREEN_W - quit.chars().count() as u16 - 1;
        self.fb.put_str(x, 0, quit, chrome_style());
    }

    fn draw_footer(&mut self) {
        let y = SCREEN_H - 1;
        self.fb.fill_rect(0, y, SCREEN_W, 1, ' ', chrome_style());

        if self.restart_visible {
            let hint = "[r] restart";
            let x = (SCREEN_W - hint.chars().count() as u16) / 2;
            self.fb.put_str(x, y, hint, chrome_style());
        }
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for GameScreen {
    fn clear(&mut self) {
        self.fb
            .fill_rect(BOARD_X, BOARD_Y, BOARD_W, BOARD_H, ' ', canvas_style());
    }

    fn fill_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb) {
        let Some((px, py)) = Self::tile_origin(cell) else {
            return;
        };
        // The border color sits behind the block glyph; terminals with
        // glyph gaps show it as an edge.
        let style = Style {
            fg: fill,
            bg: border,
            dim: false,
        };
        self.fb.fill_rect(px, py, CELL_W, 1, '█', style);
    }

    fn glyph(&mut self, ch: char, cell: Cell) {
        let Some((px, py)) = Self::tile_origin(cell) else {
            return;
        };
        let style = Style {
            fg: FOOD_FILL,
            bg: CANVAS_BG,
            dim: false,
        };
        self.fb.put(px, py, ch, style);
        self.fb.put(px + 1, py, ' ', style);
    }

    fn overlay(&mut self) {
        self.fb
            .shade_rect(BOARD_X, BOARD_Y, BOARD_W, BOARD_H, OVERLAY_KEEP);
    }

    fn text(&mut self, line: i32, s: &str) {
        let y = (BOARD_Y + BOARD_H / 2).saturating_add_signed(line as i16);
        let w = s.chars().count() as u16;
        let x = BOARD_X + BOARD_W.saturating_sub(w) / 2;
        let style = Style {
            fg: OVERLAY_TEXT,
            bg: CANVAS_BG.scale(OVERLAY_KEEP),
            dim: false,
        };
        self.fb.put_str(x, y, s, style);
    }
}

impl ScoreDisplay for GameScreen {
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.draw_header();
    }
}

impl RestartControl for GameScreen {
    fn set_restart_visible(&mut self, visible: bool) {
        self.restart_visible = visible;
        self.draw_footer();
    }
}
