//! Port traits — the boundary between the poll loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PinPoller (domain)
//! ```
//!
//! Driven adapters (GPIO backend, script runner, clock, event sinks)
//! implement these traits. The [`PinPoller`](super::poller::PinPoller)
//! consumes them via generics, so the loop never touches hardware
//! directly and backends are selected at startup.

use std::time::Duration;

use crate::app::events::AppEvent;
use crate::error::Result;

/// Read-side port onto the GPIO subsystem.
pub trait GpioPort {
    /// Claim `pin` as a digital input. Must be called before any read.
    fn configure_input(&mut self, pin: u8) -> Result<()>;

    /// Read the current level of `pin`. `true` = high.
    fn read_level(&mut self, pin: u8) -> Result<bool>;
}

/// The external action fired on a high reading.
pub trait ActionPort {
    /// Launch the action and block until it completes.
    ///
    /// `Err` means the action could not be started at all; a started
    /// action's exit status is ignored.
    fn run(&mut self) -> Result<()>;
}

/// Injected clock, so tests can observe the per-cycle pause.
pub trait ClockPort {
    /// Block the calling thread for `interval`.
    fn sleep(&mut self, interval: Duration);
}

/// The loop emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go (stdout log today).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
