//! dialmon library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All code touching the GPIO character device is guarded by
//! the `hardware` cargo feature within `adapters`.

#![deny(unused_must_use)]

pub mod app;
pub mod cancel;
pub mod config;
pub mod error;
pub mod pins;

pub mod adapters;
