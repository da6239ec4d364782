//! Outbound application events.
//!
//! The [`PinPoller`](super::poller::PinPoller) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them — today that is the process log.

/// Structured events emitted by the poll loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The loop has configured its pin and is about to start polling.
    Started { pin: u8 },

    /// The dial line read high on this cycle; the script is about to run.
    DialPulse { cycle: u64 },

    /// Cancellation observed — the loop is done. Emitted exactly once,
    /// and only on the clean shutdown path.
    Stopped,
}
