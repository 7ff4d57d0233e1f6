//! Testimonial carousel state

use std::time::{Duration, Instant};

/// Time between automatic advances
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(5);

/// Fixed-interval index rotation over `len` items.
///
/// Manual navigation moves the index immediately but leaves the schedule
/// alone: the next automatic advance still fires one interval after the
/// previous scheduled one.
#[derive(Debug, Clone)]
pub struct TestimonialRotator {
    index: usize,
    len: usize,
    interval: Duration,
    next_tick: Instant,
}

impl TestimonialRotator {
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            index: 0,
            len,
            interval,
            next_tick: now + interval,
        }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Apply every automatic advance due by `now`; returns whether the index moved
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_empty() || self.interval.is_zero() {
            return false;
        }
        let mut moved = false;
        while now >= self.next_tick {
            self.index = (self.index + 1) % self.len;
            self.next_tick += self.interval;
            moved = true;
        }
        moved
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a dot; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}
