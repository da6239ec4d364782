//! dialmon — main entry point.
//!
//! Bootstraps logging, loads configuration from the environment, wires
//! the concrete adapters to the poll loop, and runs until Ctrl-C:
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              Adapters (outer ring)            │
//! │                                               │
//! │  RppalGpio     ScriptRunner    SystemClock    │
//! │  (GpioPort)    (ActionPort)    (ClockPort)    │
//! │  LogEventSink                                 │
//! │  (EventSink)                                  │
//! │                                               │
//! │  ───────────── Port Trait Boundary ────────── │
//! │                                               │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │        PinPoller (pure logic)           │  │
//! │  │  read line · run script · sleep         │  │
//! │  └─────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{info, warn};

use dialmon::adapters::clock::SystemClock;
use dialmon::adapters::exec::ScriptRunner;
use dialmon::adapters::gpio::RppalGpio;
use dialmon::adapters::log_sink::LogEventSink;
use dialmon::app::poller::PinPoller;
use dialmon::cancel::CancelToken;
use dialmon::config::PollerConfig;

fn main() -> Result<()> {
    env_logger::init();

    info!("dialmon v{}", env!("CARGO_PKG_VERSION"));

    // Config from env vars (sourced from .env by the service unit),
    // falling back to the built-in deployment defaults.
    let config = match PollerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("config load failed ({}), using defaults", e);
            PollerConfig::default()
        }
    };
    info!(
        "dial line GPIO {} | interval {}ms | script {}",
        config.dial_gpio,
        config.poll_interval_ms,
        config.dial_script.display()
    );

    // Ctrl-C trips the token; the loop observes it between cycles.
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.cancel())?;
    }

    // Concrete backends, selected here and nowhere else.
    let mut gpio = RppalGpio::new()?;
    let mut action = ScriptRunner::new(config.dial_script.clone());
    let mut clock = SystemClock::new();
    let mut sink = LogEventSink::new();

    let mut poller = PinPoller::new(&config);
    poller.run(&mut gpio, &mut action, &mut clock, &mut sink, &cancel)?;

    Ok(())
}
