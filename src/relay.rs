//! Dispensing relay output.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::config::DispenseTiming;
use crate::error::RelayError;

/// A relay on a digital output that remembers the level it last drove.
pub struct Relay<P: OutputPin> {
    pin: P,
    level: PinState,
}

impl<P: OutputPin> Relay<P> {
    /// Take ownership of the relay pin and drive it low.
    ///
    /// # Errors
    ///
    /// Returns an error if the pin cannot be driven.
    pub fn new(mut pin: P) -> Result<Self, RelayError> {
        pin.set_low().map_err(|_| RelayError::PinError)?;
        Ok(Self {
            pin,
            level: PinState::Low,
        })
    }

    /// Drive the relay to a level.
    pub fn set(&mut self, level: PinState) -> Result<(), RelayError> {
        self.pin.set_state(level).map_err(|_| RelayError::PinError)?;
        self.level = level;
        Ok(())
    }

    /// Level last driven.
    #[inline]
    pub fn level(&self) -> PinState {
        self.level
    }

    /// Whether the relay is currently energised.
    #[inline]
    pub fn is_high(&self) -> bool {
        self.level == PinState::High
    }

    /// One dispense cycle: high, hold, low, hold.
    pub fn pulse<D: DelayNs>(
        &mut self,
        delay: &mut D,
        timing: &DispenseTiming,
    ) -> Result<(), RelayError> {
        self.set(PinState::High)?;
        delay.delay_ms(timing.pulse_high_ms);
        self.set(PinState::Low)?;
        delay.delay_ms(timing.pulse_low_ms);
        Ok(())
    }

    /// Give back the pin.
    pub fn release(self) -> P {
        self.pin
    }
}
