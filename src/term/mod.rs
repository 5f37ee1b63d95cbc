//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: [`screen::GameScreen`]
//! implements the engine's UI capabilities by painting into a styled-glyph
//! framebuffer, and [`renderer::TerminalRenderer`] flushes that framebuffer
//! to a real terminal with diff-based redraws.
//!
//! Goals:
//! - Keep `core` and `engine` free of terminal concerns
//! - Allow precise control over aspect ratio (2 chars wide per grid tile)

pub mod fb;
pub mod renderer;
pub mod screen;

pub use fb::{FrameBuffer, Glyph, Style};
pub use renderer::TerminalRenderer;
pub use screen::GameScreen;
