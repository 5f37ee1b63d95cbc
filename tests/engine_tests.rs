//! Integration tests for the game engine.
//!
//! The engine is driven headlessly: a recording surface captures every UI
//! capability call and a manual scheduler lets the tests fire ticks by
//! hand while checking the at-most-one-pending invariant.

use tui_snake::core::GameState;
use tui_snake::engine::{
    GameEngine, Renderer, RestartControl, ScoreDisplay, TickHandle, TickScheduler,
};
use tui_snake::types::{Cell, Direction, Rgb, GRID_SIZE, TICK_MS};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Clear,
    FillCell(Cell),
    Glyph(char, Cell),
    Overlay,
    Text(i32, String),
    SetScore(u32),
    SetRestartVisible(bool),
}

/// Records every capability call the engine makes.
#[derive(Debug, Default)]
struct RecordingSurface {
    calls: Vec<Call>,
    score: u32,
    restart_visible: bool,
}

impl Renderer for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn fill_cell(&mut self, cell: Cell, _fill: Rgb, _border: Rgb) {
        self.calls.push(Call::FillCell(cell));
    }

    fn glyph(&mut self, ch: char, cell: Cell) {
        self.calls.push(Call::Glyph(ch, cell));
    }

    fn overlay(&mut self) {
        self.calls.push(Call::Overlay);
    }

    fn text(&mut self, line: i32, s: &str) {
        self.calls.push(Call::Text(line, s.to_string()));
    }
}

impl ScoreDisplay for RecordingSurface {
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.calls.push(Call::SetScore(score));
    }
}

impl RestartControl for RecordingSurface {
    fn set_restart_visible(&mut self, visible: bool) {
        self.restart_visible = visible;
        self.calls.push(Call::SetRestartVisible(visible));
    }
}

/// Scheduler that records scheduling activity; ticks are fired by hand.
#[derive(Debug, Default)]
struct ManualScheduler {
    next_id: u64,
    pending: Option<TickHandle>,
    scheduled: u32,
    cancelled: u32,
}

impl TickScheduler for ManualScheduler {
    fn schedule_after(&mut self, delay_ms: u64) -> TickHandle {
        assert_eq!(delay_ms, TICK_MS, "ticks must use the fixed delay");
        assert!(
            self.pending.is_none(),
            "two tick callbacks pending at once"
        );
        self.next_id += 1;
        self.scheduled += 1;
        let handle = TickHandle::new(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

type TestEngine = GameEngine<RecordingSurface, ManualScheduler>;

fn started_engine(seed: u32) -> TestEngine {
    let mut engine = GameEngine::new(seed, RecordingSurface::default(), ManualScheduler::default());
    engine.start();
    engine
}

/// Fire the pending tick, returning the calls it produced.
fn fire_tick(engine: &mut TestEngine) -> Vec<Call> {
    assert!(engine.tick_pending(), "no tick scheduled");
    let before = engine.ui().calls.len();
    engine.on_tick();
    engine.ui().calls[before..].to_vec()
}

fn segment_cells(engine: &TestEngine) -> Vec<Cell> {
    engine.state().snake().segments().to_vec()
}

/// A seed whose initial food is nowhere near the snake's starting path.
fn seed_with_food_off(cell: Cell) -> u32 {
    (1..)
        .find(|&s| GameState::new(s).food() != cell)
        .unwrap()
}

/// A seed whose initial food sits exactly at `cell`.
fn seed_with_food_at(cell: Cell) -> u32 {
    (1..)
        .find(|&s| GameState::new(s).food() == cell)
        .unwrap()
}

#[test]
fn test_start_initializes_the_session() {
    let engine = started_engine(1);

    assert_eq!(
        segment_cells(&engine),
        vec![
            Cell::new(200, 200),
            Cell::new(180, 200),
            Cell::new(160, 200)
        ]
    );
    assert_eq!(engine.state().velocity(), (GRID_SIZE, 0));
    assert_eq!(engine.state().score(), 0);

    // Score display reset, restart control hidden, first tick scheduled,
    // and nothing drawn before the first tick fires.
    assert_eq!(
        engine.ui().calls,
        vec![Call::SetScore(0), Call::SetRestartVisible(false)]
    );
    assert!(engine.tick_pending());
    assert_eq!(engine.scheduler().scheduled, 1);
}

#[test]
fn test_tick_draws_food_then_snake_in_order() {
    let next_head = Cell::new(220, 200);
    let mut engine = started_engine(seed_with_food_off(next_head));
    let food = engine.state().food();

    let calls = fire_tick(&mut engine);

    assert_eq!(
        calls,
        vec![
            Call::Clear,
            Call::Glyph('₿', food),
            Call::FillCell(Cell::new(220, 200)),
            Call::FillCell(Cell::new(200, 200)),
            Call::FillCell(Cell::new(180, 200)),
        ]
    );
    assert_eq!(engine.state().score(), 0);
    assert!(engine.tick_pending());
}

#[test]
fn test_eating_grows_scores_and_replaces_food() {
    let food = Cell::new(220, 200);
    let mut engine = started_engine(seed_with_food_at(food));

    let calls = fire_tick(&mut engine);

    assert_eq!(engine.state().score(), 10);
    assert_eq!(engine.ui().score, 10);
    assert!(calls.contains(&Call::SetScore(10)));

    // Tail kept: four segments drawn, oldest still present.
    assert_eq!(
        segment_cells(&engine),
        vec![
            Cell::new(220, 200),
            Cell::new(200, 200),
            Cell::new(180, 200),
            Cell::new(160, 200)
        ]
    );
    let drawn = calls
        .iter()
        .filter(|c| matches!(c, Call::FillCell(_)))
        .count();
    assert_eq!(drawn, 4);

    // The glyph this frame still shows the food that was eaten; the
    // replacement is elsewhere and off the body.
    assert!(calls.contains(&Call::Glyph('₿', food)));
    let new_food = engine.state().food();
    assert_ne!(new_food, food);
    assert!(!engine.state().snake().contains(new_food));
}

#[test]
fn test_steering_applies_on_the_next_tick() {
    let mut engine = started_engine(seed_with_food_off(Cell::new(200, 180)));

    engine.on_key_press(Direction::Up);
    fire_tick(&mut engine);

    assert_eq!(engine.state().snake().head(), Cell::new(200, 180));
}

#[test]
fn test_latch_only_first_steer_counts() {
    let mut engine = started_engine(seed_with_food_off(Cell::new(200, 180)));

    engine.on_key_press(Direction::Up);
    engine.on_key_press(Direction::Down);
    fire_tick(&mut engine);

    assert_eq!(engine.state().snake().head(), Cell::new(200, 180));

    // The latch is released per tick: the next steer works again.
    engine.on_key_press(Direction::Left);
    fire_tick(&mut engine);
    assert_eq!(engine.state().snake().head(), Cell::new(180, 180));
}

#[test]
fn test_reversal_is_silently_ignored() {
    let mut engine = started_engine(seed_with_food_off(Cell::new(220, 200)));

    engine.on_key_press(Direction::Left);
    fire_tick(&mut engine);

    assert_eq!(engine.state().snake().head(), Cell::new(220, 200));
    assert_eq!(engine.state().velocity(), (GRID_SIZE, 0));
}

#[test]
fn test_wall_collision_renders_game_over_and_stops_the_chain() {
    let mut engine = started_engine(1);

    engine.on_key_press(Direction::Up);
    // Head starts at y = 200: ten moves reach the top row, the eleventh
    // leaves the playfield.
    for _ in 0..10 {
        fire_tick(&mut engine);
    }
    let score = engine.state().score();

    let calls = fire_tick(&mut engine);

    assert!(engine.state().game_over());
    assert_eq!(calls[0], Call::Clear);
    assert!(matches!(calls[1], Call::Glyph('₿', _)));
    assert_eq!(
        &calls[2..],
        &[
            Call::Overlay,
            Call::Text(-1, "Game Over!".to_string()),
            Call::Text(1, format!("Final Score: {}", score)),
            Call::SetRestartVisible(true),
        ]
    );
    // No snake segment was drawn on the collision frame.
    assert!(!calls.iter().any(|c| matches!(c, Call::FillCell(_))));

    // The chain is stopped: nothing pending, and a stray tick is a no-op.
    assert!(!engine.tick_pending());
    let before = engine.ui().calls.len();
    engine.on_tick();
    assert_eq!(engine.ui().calls.len(), before);
}

#[test]
fn test_steering_after_game_over_is_ignored() {
    let mut engine = started_engine(1);
    engine.on_key_press(Direction::Up);
    for _ in 0..11 {
        fire_tick(&mut engine);
        if engine.state().game_over() {
            break;
        }
    }
    assert!(engine.state().game_over());

    engine.on_key_press(Direction::Down);
    assert_eq!(engine.state().velocity(), (0, -GRID_SIZE));
}

#[test]
fn test_restart_reproduces_the_start_state() {
    let mut engine = started_engine(1);
    engine.on_key_press(Direction::Up);
    while !engine.state().game_over() {
        fire_tick(&mut engine);
    }
    assert!(engine.ui().restart_visible);

    let before = engine.ui().calls.len();
    engine.on_restart_requested();

    assert_eq!(
        segment_cells(&engine),
        vec![
            Cell::new(200, 200),
            Cell::new(180, 200),
            Cell::new(160, 200)
        ]
    );
    assert_eq!(engine.state().velocity(), (GRID_SIZE, 0));
    assert_eq!(engine.state().score(), 0);
    assert!(!engine.state().game_over());
    assert!(!engine.state().snake().contains(engine.state().food()));

    assert_eq!(
        engine.ui().calls[before..],
        [Call::SetScore(0), Call::SetRestartVisible(false)]
    );
    assert!(!engine.ui().restart_visible);
    assert!(engine.tick_pending());

    // The restarted game actually runs.
    fire_tick(&mut engine);
    assert_eq!(engine.state().snake().head(), Cell::new(220, 200));
}

#[test]
fn test_restart_mid_game_cancels_the_pending_tick() {
    let mut engine = started_engine(1);
    assert!(engine.tick_pending());

    engine.on_restart_requested();

    // The old callback was cancelled before the new chain began; the
    // manual scheduler would have panicked otherwise.
    assert_eq!(engine.scheduler().cancelled, 1);
    assert_eq!(engine.scheduler().scheduled, 2);
    assert!(engine.tick_pending());
}

#[test]
fn test_fixed_seed_games_are_identical() {
    let mut a = started_engine(42);
    let mut b = started_engine(42);

    for engine in [&mut a, &mut b] {
        engine.on_key_press(Direction::Up);
        for _ in 0..5 {
            fire_tick(engine);
        }
    }

    assert_eq!(a.ui().calls, b.ui().calls);
    assert_eq!(a.state().food(), b.state().food());
}
