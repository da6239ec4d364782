//! rppal GPIO backend.
//!
//! Implements [`GpioPort`] over `/dev/gpiomem` via the `rppal` crate.
//! The dial line is claimed as a plain input — no internal pull, the
//! dial board provides its own, and the line is active-high.

use rppal::gpio::{Gpio, InputPin};

use crate::app::ports::GpioPort;
use crate::error::{Error, Result};

/// Hardware backend holding the claimed input pin.
pub struct RppalGpio {
    chip: Gpio,
    input: Option<(u8, InputPin)>,
}

impl RppalGpio {
    /// Open the GPIO chip. Fails off-target or without permissions.
    pub fn new() -> Result<Self> {
        Ok(Self {
            chip: Gpio::new()?,
            input: None,
        })
    }
}

impl GpioPort for RppalGpio {
    fn configure_input(&mut self, pin: u8) -> Result<()> {
        let input = self.chip.get(pin)?.into_input();
        self.input = Some((pin, input));
        Ok(())
    }

    fn read_level(&mut self, pin: u8) -> Result<bool> {
        match &self.input {
            Some((configured, input)) if *configured == pin => Ok(input.is_high()),
            other => Err(unconfigured_read(other.as_ref().map(|(p, _)| *p), pin)),
        }
    }
}

/// Error for a read of a pin that is not the configured input.
fn unconfigured_read(configured: Option<u8>, pin: u8) -> Error {
    match configured {
        Some(p) => Error::Gpio(format!(
            "read of pin {pin} but pin {p} is the configured input"
        )),
        None => Error::Gpio(format!("pin {pin} not configured as input")),
    }
}
