//! The pin poller — dialmon's single long-running task.
//!
//! Samples the dial line once per cycle and fires the external action
//! while it reads high, pausing a fixed interval between polls:
//!
//! ```text
//!  GpioPort ──▶ ┌──────────────────┐ ──▶ ActionPort
//!               │    PinPoller      │ ──▶ EventSink
//!  ClockPort ◀──│  read · act · sleep│
//!               └──────────────────┘
//! ```
//!
//! A sustained high level re-fires the action on **every** cycle. There
//! is no debouncing, edge detection, or minimum re-trigger gap beyond
//! the fixed sleep — the dial script does its own pulse accounting, and
//! the loop must not second-guess it.

use std::time::Duration;

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::{ActionPort, ClockPort, EventSink, GpioPort};
use crate::cancel::CancelToken;
use crate::config::PollerConfig;
use crate::error::Result;

/// What a single poll cycle did, for callers that care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Line read low; slept only.
    Idle,
    /// Line read high; action ran, then slept.
    Triggered,
}

/// The poll loop. Owns nothing but its parameters and a cycle counter;
/// all I/O flows through ports injected at call sites.
pub struct PinPoller {
    pin: u8,
    interval: Duration,
    cycle: u64,
}

impl PinPoller {
    pub fn new(config: &PollerConfig) -> Self {
        Self {
            pin: config.dial_gpio,
            interval: config.poll_interval(),
            cycle: 0,
        }
    }

    /// GPIO line this poller samples.
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Cycles completed so far.
    pub fn cycles(&self) -> u64 {
        self.cycle
    }

    /// Run until `cancel` trips.
    ///
    /// Configures the pin, then polls forever. Returns `Ok(())` only on
    /// cancellation, after emitting [`AppEvent::Stopped`] exactly once.
    /// A GPIO read failure or an unlaunchable action aborts the loop
    /// with `Err` — no farewell on that path.
    pub fn run(
        &mut self,
        gpio: &mut impl GpioPort,
        action: &mut impl ActionPort,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
        cancel: &CancelToken,
    ) -> Result<()> {
        gpio.configure_input(self.pin)?;
        sink.emit(&AppEvent::Started { pin: self.pin });
        info!(
            "polling GPIO {} every {}ms",
            self.pin,
            self.interval.as_millis()
        );

        while !cancel.is_cancelled() {
            self.poll_once(gpio, action, clock, sink)?;
        }

        sink.emit(&AppEvent::Stopped);
        Ok(())
    }

    /// One poll cycle: read the line, fire the action if high, sleep.
    ///
    /// The sleep runs on both branches, so every cycle pauses at least
    /// the configured interval regardless of what the line read.
    pub fn poll_once(
        &mut self,
        gpio: &mut impl GpioPort,
        action: &mut impl ActionPort,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) -> Result<PollOutcome> {
        self.cycle += 1;
        let high = gpio.read_level(self.pin)?;

        let outcome = if high {
            sink.emit(&AppEvent::DialPulse { cycle: self.cycle });
            action.run()?;
            PollOutcome::Triggered
        } else {
            debug!("cycle {}: line low", self.cycle);
            PollOutcome::Idle
        };

        clock.sleep(self.interval);
        Ok(outcome)
    }
}
