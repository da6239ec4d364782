//! GPIO pin assignments for the rotary-dial line.
//!
//! Single source of truth — the default config references this module
//! rather than hard-coding pin numbers. The dial line sits on a different
//! header pin per board; pick the constant matching your hardware.

/// Dial line on the 26-pin header, position A.
pub const DIAL_GPIO_26PIN_A: u8 = 17;
/// Dial line on the 26-pin header, position B.
pub const DIAL_GPIO_26PIN_B: u8 = 18;
/// Dial line on the Orange Pi Zero 2.
pub const DIAL_GPIO_OPI_ZERO2: u8 = 20;
/// Dial line on the Orange Pi 4.
pub const DIAL_GPIO_OPI4: u8 = 10;
/// Dial line on the 40-pin header.
pub const DIAL_GPIO_40PIN: u8 = 28;

/// Default dial line — the Orange Pi 4 deployment.
pub const DEFAULT_DIAL_GPIO: u8 = DIAL_GPIO_OPI4;
