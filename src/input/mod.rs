//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Steering is
//! latched once per tick by the engine, so no key-repeat handling is
//! needed here.

pub mod map;

pub use map::{handle_key_event, should_quit};
