//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! zero dependencies on UI, scheduling, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Every rule is exercised headlessly by unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`snake`]: head-first body container with collision predicates
//! - [`game_state`]: steering latch, per-tick advance, food placement
//! - [`rng`]: seeded LCG for food placement

pub mod game_state;
pub mod rng;
pub mod snake;

pub use game_state::{GameState, Step};
pub use rng::SimpleRng;
pub use snake::Snake;
