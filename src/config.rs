//! Runtime configuration.
//!
//! All tunable parameters for the dial monitor. Defaults mirror the
//! original deployment; each value can be overridden through the
//! environment (the deployment sources a `.env` file before launch).
//!
//! | Variable           | Overrides          |
//! |--------------------|--------------------|
//! | `DIALMON_PIN`      | `dial_gpio`        |
//! | `DIALMON_POLL_MS`  | `poll_interval_ms` |
//! | `DIALMON_SCRIPT`   | `dial_script`      |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Default dial-handling script, invoked with no arguments.
pub const DEFAULT_DIAL_SCRIPT: &str = "/home/orangepi/scripts/get_dial.sh";

/// Pause between polls of the dial line (milliseconds).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Core daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// GPIO line the rotary dial is wired to.
    pub dial_gpio: u8,
    /// Pause between polls (milliseconds). Applies on both the high and
    /// low branch, so every poll cycle takes at least this long.
    pub poll_interval_ms: u64,
    /// External script launched each cycle the line reads high.
    pub dial_script: PathBuf,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            dial_gpio: pins::DEFAULT_DIAL_GPIO,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            dial_script: PathBuf::from(DEFAULT_DIAL_SCRIPT),
        }
    }
}

impl PollerConfig {
    /// Build a config from the environment, starting from defaults.
    ///
    /// Unset variables keep their default; a set-but-invalid variable is
    /// an error (the binary logs a warning and runs with defaults).
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("DIALMON_PIN").ok().as_deref(),
            env::var("DIALMON_POLL_MS").ok().as_deref(),
            env::var("DIALMON_SCRIPT").ok().as_deref(),
        )
    }

    /// Apply raw override values on top of the defaults.
    ///
    /// Separated from [`from_env`](Self::from_env) so parsing can be
    /// tested without touching the process-global environment.
    fn from_vars(pin: Option<&str>, poll_ms: Option<&str>, script: Option<&str>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(raw) = pin {
            cfg.dial_gpio = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("DIALMON_PIN: not a pin number: {raw:?}")))?;
        }
        if let Some(raw) = poll_ms {
            cfg.poll_interval_ms = raw
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("DIALMON_POLL_MS: not a duration: {raw:?}")))?;
        }
        if let Some(raw) = script {
            cfg.dial_script = PathBuf::from(raw);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Range-check the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be > 0".into()));
        }
        if self.dial_script.as_os_str().is_empty() {
            return Err(Error::Config("dial_script must not be empty".into()));
        }
        Ok(())
    }

    /// Poll interval as a [`Duration`].
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
