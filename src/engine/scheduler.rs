//! Tick scheduling capability.
//!
//! The engine arranges each next tick itself and keeps at most one
//! outstanding handle, so stopping the loop is a single cancellation of at
//! most one pending callback.

use std::time::{Duration, Instant};

/// Identifies one scheduled tick callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

pub trait TickScheduler {
    /// Arrange for one tick to fire after `delay_ms`.
    fn schedule_after(&mut self, delay_ms: u64) -> TickHandle;

    /// Cancel a previously scheduled tick if it has not fired yet.
    /// Cancelling a handle that already fired is a no-op.
    fn cancel(&mut self, handle: TickHandle);
}

/// Deadline-based scheduler for a synchronous host loop.
///
/// The host polls [`DeadlineScheduler::due_in`] to size its input timeout
/// and [`DeadlineScheduler::pop_due`] to learn when the tick should fire.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_id: u64,
    pending: Option<(TickHandle, Instant)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time remaining until the pending deadline; zero if overdue.
    pub fn due_in(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, at)| at.saturating_duration_since(now))
    }

    /// Take the pending deadline if it has passed.
    pub fn pop_due(&mut self, now: Instant) -> Option<TickHandle> {
        match self.pending {
            Some((handle, at)) if at <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }
}

impl TickScheduler for DeadlineScheduler {
    fn schedule_after(&mut self, delay_ms: u64) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some((handle, Instant::now() + Duration::from_millis(delay_ms)));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if matches!(self.pending, Some((h, _)) if h == handle) {
            self.pending = None;
        }
    }
}
