//! System clock adapter.
//!
//! Implements [`ClockPort`] with a plain blocking `thread::sleep`. The
//! poll loop is intentionally single-threaded and sequential; tests
//! swap this out for a recording clock.

use std::thread;
use std::time::Duration;

use crate::app::ports::ClockPort;

/// Blocking wall-clock sleeper.
#[derive(Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn sleep(&mut self, interval: Duration) {
        thread::sleep(interval);
    }
}
