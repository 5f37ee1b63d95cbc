//! Game engine: owns the state and drives the UI through capabilities.
//!
//! The engine exposes four operations to its host: [`GameEngine::start`],
//! [`GameEngine::on_key_press`], [`GameEngine::on_tick`], and
//! [`GameEngine::on_restart_requested`]. Everything it does to the outside
//! world goes through the [`capabilities`] traits and the
//! [`scheduler::TickScheduler`], which keeps the whole loop testable
//! without a terminal.
//!
//! The tick chain is self-rescheduling: each tick arranges the next one
//! after it finishes its work, so at most one callback is ever pending and
//! stopping the loop is a single cancellation.

pub mod capabilities;
pub mod scheduler;

pub use capabilities::{Renderer, RestartControl, ScoreDisplay};
pub use scheduler::{DeadlineScheduler, TickHandle, TickScheduler};

use crate::core::{GameState, Step};
use crate::types::{Direction, Rgb, FOOD_GLYPH, TICK_MS};

/// Snake cell colors: green body with a dark edge.
const SNAKE_FILL: Rgb = Rgb::new(76, 175, 80);
const SNAKE_BORDER: Rgb = Rgb::new(51, 51, 51);

pub struct GameEngine<U, S> {
    ui: U,
    scheduler: S,
    state: GameState,
    pending_tick: Option<TickHandle>,
}

impl<U, S> GameEngine<U, S>
where
    U: Renderer + ScoreDisplay + RestartControl,
    S: TickScheduler,
{
    pub fn new(seed: u32, ui: U, scheduler: S) -> Self {
        Self {
            ui,
            scheduler,
            state: GameState::new(seed),
            pending_tick: None,
        }
    }

    /// Begin a fresh game and start the tick chain.
    ///
    /// Any pending tick from a previous game is cancelled first, so two
    /// tick chains can never coexist.
    pub fn start(&mut self) {
        self.cancel_pending();
        self.state.reset();
        self.ui.set_score(0);
        self.ui.set_restart_visible(false);
        self.pending_tick = Some(self.scheduler.schedule_after(TICK_MS));
    }

    /// A steering key was pressed.
    pub fn on_key_press(&mut self, dir: Direction) {
        self.state.steer(dir);
    }

    /// The scheduled tick fired: draw the frame and advance the game.
    pub fn on_tick(&mut self) {
        self.cancel_pending();
        if self.state.game_over() {
            return;
        }

        self.ui.clear();
        // The food glyph is drawn from the pre-move position; when the
        // snake eats this tick, the replacement appears on the next frame.
        self.ui.glyph(FOOD_GLYPH, self.state.food());

        match self.state.advance() {
            Step::Moved { ate } => {
                if ate {
                    self.ui.set_score(self.state.score());
                }
                for &segment in self.state.snake().segments() {
                    self.ui.fill_cell(segment, SNAKE_FILL, SNAKE_BORDER);
                }
                self.pending_tick = Some(self.scheduler.schedule_after(TICK_MS));
            }
            Step::Collided => {
                // The snake is not drawn on the collision frame.
                self.ui.overlay();
                self.ui.text(-1, "Game Over!");
                self.ui.text(1, &format!("Final Score: {}", self.state.score()));
                self.ui.set_restart_visible(true);
            }
        }
    }

    /// The restart control was activated.
    pub fn on_restart_requested(&mut self) {
        self.start();
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Whether a tick callback is currently outstanding.
    pub fn tick_pending(&self) -> bool {
        self.pending_tick.is_some()
    }
}
