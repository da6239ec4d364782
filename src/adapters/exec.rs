//! Script runner adapter.
//!
//! Implements [`ActionPort`] by launching the configured dial script as
//! a child process with no arguments and inherited stdio, then blocking
//! until it exits. The exit status is discarded — the script owns its
//! own logging and pulse accounting. Only a failure to *start* the
//! process (missing file, permissions) surfaces as an error.

use std::path::PathBuf;
use std::process::Command;

use crate::app::ports::ActionPort;
use crate::error::Result;

/// Adapter that fires the external dial script.
pub struct ScriptRunner {
    script: PathBuf,
}

impl ScriptRunner {
    pub fn new(script: PathBuf) -> Self {
        Self { script }
    }

    /// Path of the script this runner launches.
    pub fn script(&self) -> &PathBuf {
        &self.script
    }
}

impl ActionPort for ScriptRunner {
    fn run(&mut self) -> Result<()> {
        let _status = Command::new(&self.script).status()?;
        Ok(())
    }
}
