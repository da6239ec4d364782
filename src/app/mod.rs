//! Application core — pure domain logic, zero I/O.
//!
//! The poll loop lives here. All interaction with the GPIO line, the
//! external script, and the clock happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without hardware.

pub mod events;
pub mod poller;
pub mod ports;
