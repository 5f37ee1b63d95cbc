//! Game state module - the per-tick rules of the game
//!
//! This module ties together the snake body, food placement, and scoring.
//! It owns a seeded RNG and performs no I/O, so every rule here is
//! exercised headlessly by the tests.

use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::types::{Cell, Direction, FOOD_SCORE, GRID_SIZE, INITIAL_SNAKE_LEN, TILE_COUNT};

/// Outcome of advancing the state by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The snake moved; `ate` is set when it grew through food.
    Moved { ate: bool },
    /// The new head hit a wall or the body; the state is now frozen.
    Collided,
}

/// Complete game state.
///
/// All fields are reinitialized together by [`GameState::reset`]; the only
/// terminal condition is the game-over flag, which freezes the state until
/// the next reset.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Cell,
    /// Current velocity in pixels per tick; one axis is ±[`GRID_SIZE`].
    dx: i32,
    dy: i32,
    score: u32,
    game_over: bool,
    /// One accepted steering change per tick.
    turn_latched: bool,
    rng: SimpleRng,
}

impl GameState {
    /// Create a freshly initialized game from an RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            snake: Snake::new(Cell::new(0, 0), 1, Direction::Right),
            food: Cell::new(0, 0),
            dx: 0,
            dy: 0,
            score: 0,
            game_over: false,
            turn_latched: false,
            rng: SimpleRng::new(seed),
        };
        state.reset();
        state
    }

    /// Reinitialize every field for a new game.
    ///
    /// The RNG stream is kept, so a restarted game draws fresh food
    /// positions instead of replaying the previous ones.
    pub fn reset(&mut self) {
        let center = (TILE_COUNT / 2) * GRID_SIZE;
        self.snake = Snake::new(
            Cell::new(center, center),
            INITIAL_SNAKE_LEN,
            Direction::Right,
        );
        let (dx, dy) = Direction::Right.velocity();
        self.dx = dx;
        self.dy = dy;
        self.score = 0;
        self.game_over = false;
        self.turn_latched = false;
        self.place_food();
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    #[cfg(test)]
    pub fn set_food(&mut self, cell: Cell) {
        self.food = cell;
    }

    /// Apply a steering request.
    ///
    /// The first request per tick wins; later ones are dropped until the
    /// next tick releases the latch. Reversing into the body is rejected,
    /// but still consumes the per-tick slot. Requests after game over are
    /// ignored.
    pub fn steer(&mut self, dir: Direction) {
        if self.turn_latched || self.game_over {
            return;
        }
        self.turn_latched = true;

        let (dx, dy) = dir.velocity();
        if dx == -self.dx && dy == -self.dy {
            // Reversal would fold the snake onto its own neck.
            return;
        }
        self.dx = dx;
        self.dy = dy;
    }

    /// Advance one tick: release the steering latch, move the head, grow
    /// through food or drop the tail, then collision-check the new head
    /// against the walls and the rest of the body.
    ///
    /// Calling this after game over moves nothing and reports the
    /// collision again.
    pub fn advance(&mut self) -> Step {
        if self.game_over {
            return Step::Collided;
        }
        self.turn_latched = false;

        let head = self.snake.head().offset(self.dx, self.dy);
        self.snake.push_head(head);

        // Food is never on the body and always in bounds, so eating and
        // colliding are mutually exclusive.
        let ate = head == self.food;
        if ate {
            self.score += FOOD_SCORE;
            self.place_food();
        } else {
            self.snake.pop_tail();
        }

        if !head.in_bounds() || self.snake.head_hits_body() {
            self.game_over = true;
            return Step::Collided;
        }

        Step::Moved { ate }
    }

    /// Sample random tiles until one is off the snake and put food there.
    ///
    /// Expected O(1) while the board is mostly free; there is no attempt
    /// bound, so a board-filling snake would spin here.
    pub fn place_food(&mut self) {
        loop {
            let cell = Cell::new(
                self.rng.next_range(TILE_COUNT as u32) as i32 * GRID_SIZE,
                self.rng.next_range(TILE_COUNT as u32) as i32 * GRID_SIZE,
            );
            if !self.snake.contains(cell) {
                self.food = cell;
                return;
            }
        }
    }
}
