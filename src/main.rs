//! Terminal snake runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input
//! and the framebuffer-based renderer, and hosts the engine's tick chain
//! on a deadline scheduler.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::engine::{DeadlineScheduler, GameEngine};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{GameScreen, TerminalRenderer};
use tui_snake::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = GameEngine::new(seed(), GameScreen::new(), DeadlineScheduler::new());
    engine.start();

    loop {
        term.present(engine.ui().frame())?;

        // Sleep in the input poll until the next tick is due. After game
        // over there is no deadline; keep polling for restart or quit.
        let timeout = engine
            .scheduler()
            .due_in(Instant::now())
            .unwrap_or(Duration::from_millis(TICK_MS));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Steer(dir)) => engine.on_key_press(dir),
                        Some(GameAction::Restart) => {
                            // The restart control only "exists" after game
                            // over, mirroring the hidden-button contract.
                            if engine.ui().restart_visible() {
                                engine.on_restart_requested();
                            }
                        }
                        None => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if engine.scheduler_mut().pop_due(Instant::now()).is_some() {
            engine.on_tick();
        }
    }
}

/// RNG seed: `SNAKE_SEED` for reproducible games, otherwise clock-derived
/// so each run sees a fresh food sequence.
fn seed() -> u32 {
    std::env::var("SNAKE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(1)
        })
}
