//! UI capability interfaces the engine drives.
//!
//! The engine draws, reports the score, and toggles the restart control
//! exclusively through these traits, so the terminal screen and the
//! recording stand-ins used by the tests are interchangeable.

use crate::types::{Cell, Rgb};

/// Drawing surface for one frame of the playfield.
pub trait Renderer {
    /// Reset the surface to the background.
    fn clear(&mut self);

    /// Draw one grid cell filled with `fill` and edged with `border`.
    fn fill_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb);

    /// Draw a single glyph centered in a grid cell.
    fn glyph(&mut self, ch: char, cell: Cell);

    /// Dim the whole surface for the game-over screen.
    fn overlay(&mut self);

    /// Draw horizontally centered text `line` rows away from the surface
    /// center (negative is up).
    fn text(&mut self, line: i32, s: &str);
}

/// The score readout next to the playfield.
pub trait ScoreDisplay {
    fn set_score(&mut self, score: u32);
}

/// The restart control shown after game over.
///
/// The host is expected to deliver restart requests only while the control
/// is visible; the engine does not re-check.
pub trait RestartControl {
    fn set_restart_visible(&mut self, visible: bool);
}
