//! Concrete backends for the port traits in [`crate::app::ports`].
//!
//! This is the only layer that touches the GPIO character device, spawns
//! processes, or sleeps for real. The `gpio` module requires the
//! `hardware` cargo feature; everything else builds everywhere.

pub mod clock;
pub mod exec;
#[cfg(feature = "hardware")]
pub mod gpio;
pub mod log_sink;
