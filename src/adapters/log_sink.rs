//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the process log. The `Stopped` event doubles as the operator-facing
//! farewell on Ctrl-C, so it goes to stdout as well as the log.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { pin } => {
                info!("START | dial line on GPIO {}", pin);
            }
            AppEvent::DialPulse { cycle } => {
                info!("PULSE | cycle={} line high, running dial script", cycle);
            }
            AppEvent::Stopped => {
                println!("\nexit");
                info!("STOP  | interrupted, shutting down");
            }
        }
    }
}
