//! GPIO pin abstractions
//!
//! Output lines are addressed by number so that pin assignment can live in
//! configuration instead of in the type system.

use core::ops::Not;

/// Pin number as understood by the GPIO implementor
pub type PinId = u8;

/// Logic level of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is the high level
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

impl Not for Level {
    type Output = Level;

    fn not(self) -> Self::Output {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Bank of digital output lines
pub trait GpioPort {
    /// Error type for GPIO operations
    type Error;

    /// Configure every pin in `pins` as an output driven to `initial`
    fn configure_outputs(&mut self, pins: &[PinId], initial: Level) -> Result<(), Self::Error>;

    /// Drive a configured output to `level`
    fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error>;

    /// Drive a pin high
    fn set_high(&mut self, pin: PinId) -> Result<(), Self::Error> {
        self.set_level(pin, Level::High)
    }

    /// Drive a pin low
    fn set_low(&mut self, pin: PinId) -> Result<(), Self::Error> {
        self.set_level(pin, Level::Low)
    }
}

impl<T: GpioPort + ?Sized> GpioPort for &mut T {
    type Error = T::Error;

    fn configure_outputs(&mut self, pins: &[PinId], initial: Level) -> Result<(), Self::Error> {
        T::configure_outputs(self, pins, initial)
    }

    fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        T::set_level(self, pin, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(!bool::from(Level::Low));
    }

    #[test]
    fn test_level_not() {
        assert_eq!(!Level::High, Level::Low);
        assert_eq!(!Level::Low, Level::High);
    }
}
