//! Unified error types for dialmon.
//!
//! Every fallible operation funnels into a single `Error` enum, keeping
//! the poll loop's error handling uniform. The only condition the daemon
//! recovers from is operator interruption; everything here propagates to
//! `main` and crashes the process.

use std::io;

/// Every fallible operation in the daemon funnels into this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The GPIO chip could not be opened, the pin could not be claimed,
    /// or a read was attempted on an unconfigured pin.
    #[error("gpio: {0}")]
    Gpio(String),

    /// The dial script could not be spawned or waited on.
    /// The script's own exit status is never inspected.
    #[error("dial script: {0}")]
    Script(#[from] io::Error),

    /// An environment override failed to parse or validate.
    #[error("config: {0}")]
    Config(String),
}

#[cfg(feature = "hardware")]
impl From<rppal::gpio::Error> for Error {
    fn from(e: rppal::gpio::Error) -> Self {
        Self::Gpio(e.to_string())
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
