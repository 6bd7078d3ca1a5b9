//! Pin read/write capability.
//!
//! The toggle algorithm only needs two things from the hardware: the level the
//! output is currently driving, and a way to drive a new one. [`PinBackend`]
//! captures exactly that. Any embedded-hal output pin that cannot fail (such as
//! `esp_hal::gpio::Output`) is a backend through the blanket impl, and
//! [`SimulatedPin`] stands in for the hardware in host tests.

use core::convert::Infallible;
use core::ops::Not;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// Logic level of an output pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    /// Logic 0
    #[default]
    Low,
    /// Logic 1
    High,
}

impl PinLevel {
    /// Returns `true` for [`PinLevel::High`].
    pub const fn is_high(self) -> bool {
        matches!(self, PinLevel::High)
    }
}

impl Not for PinLevel {
    type Output = PinLevel;

    fn not(self) -> PinLevel {
        match self {
            PinLevel::Low => PinLevel::High,
            PinLevel::High => PinLevel::Low,
        }
    }
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> Self {
        if high { PinLevel::High } else { PinLevel::Low }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> Self {
        level.is_high()
    }
}

/// Read/write access to the output level of a single pin.
///
/// # Invariants
///
/// - The pin is already configured as an output
/// - `read_pin` returns the level the hardware is actually driving, not a copy
///   kept in software
/// - Neither method can fail
pub trait PinBackend {
    /// Reads the level currently driven on the pin.
    fn read_pin(&mut self) -> PinLevel;

    /// Drives the pin to `level`.
    fn set_pin(&mut self, level: PinLevel);
}

impl<P> PinBackend for P
where
    P: StatefulOutputPin<Error = Infallible>,
{
    fn read_pin(&mut self) -> PinLevel {
        let Ok(high) = self.is_set_high();
        PinLevel::from(high)
    }

    fn set_pin(&mut self, level: PinLevel) {
        let Ok(()) = match level {
            PinLevel::High => self.set_high(),
            PinLevel::Low => self.set_low(),
        };
    }
}

/// In-memory output pin for host testing.
///
/// Holds the driven level and counts writes. [`SimulatedPin::disturb`] changes
/// the level behind the driver's back, the way a reset glitch or another
/// peripheral would.
#[derive(Debug, Clone, Default)]
pub struct SimulatedPin {
    level: PinLevel,
    writes: u32,
}

impl SimulatedPin {
    /// Creates a pin driving [`PinLevel::Low`].
    pub const fn new() -> Self {
        Self::with_level(PinLevel::Low)
    }

    /// Creates a pin already driving `level`.
    pub const fn with_level(level: PinLevel) -> Self {
        Self { level, writes: 0 }
    }

    /// Current level, without counting as a write.
    pub const fn level(&self) -> PinLevel {
        self.level
    }

    /// Number of writes made through the output pin interface.
    pub const fn writes(&self) -> u32 {
        self.writes
    }

    /// Forces the level from outside, without counting as a write.
    pub fn disturb(&mut self, level: PinLevel) {
        self.level = level;
    }

    fn drive(&mut self, level: PinLevel) {
        self.level = level;
        self.writes = self.writes.wrapping_add(1);
    }
}

impl ErrorType for SimulatedPin {
    type Error = Infallible;
}

impl OutputPin for SimulatedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(PinLevel::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(PinLevel::High);
        Ok(())
    }
}

impl StatefulOutputPin for SimulatedPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level.is_high())
    }
}
