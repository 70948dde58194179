/// Cancellable timers driven by delayed messages
///
/// Nothing here sleeps. Each timer hands out a `Tick` describing what to
/// schedule; the UI layer turns it into a delayed task and feeds it back when
/// it fires. Cancelling or restarting bumps a generation counter so ticks
/// already in flight become stale and are ignored.

use std::time::Duration;

/// A scheduled wake-up for one timer generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
    /// How long to wait before delivering this tick
    pub after: Duration,
}

/// A repeating timer, at most one generation armed at a time
#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    interval: Duration,
    generation: u64,
    armed: bool,
}

impl RepeatingTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            armed: false,
        }
    }

    /// Arm a fresh generation, cancelling any previous one
    pub fn start(&mut self) -> Tick {
        self.generation += 1;
        self.armed = true;
        self.tick()
    }

    pub fn cancel(&mut self) {
        if self.armed {
            self.generation += 1;
            self.armed = false;
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether `tick` belongs to the currently armed generation
    pub fn accepts(&self, tick: Tick) -> bool {
        self.armed && tick.generation == self.generation
    }

    /// Next tick of the current generation (the "repeat" in repeating)
    pub fn tick(&self) -> Tick {
        Tick {
            generation: self.generation,
            after: self.interval,
        }
    }
}

/// Trailing-edge debouncer: only the last value of a burst comes out
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Replace the pending value and restart the quiet period
    pub fn push(&mut self, value: T) -> Tick {
        self.generation += 1;
        self.pending = Some(value);
        Tick {
            generation: self.generation,
            after: self.delay,
        }
    }

    /// Take the pending value if `tick` is the latest one issued
    pub fn settle(&mut self, tick: Tick) -> Option<T> {
        if tick.generation != self.generation {
            return None;
        }
        self.pending.take()
    }
}
