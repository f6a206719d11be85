//! embedded-hal 1.0 adapters
//!
//! Lets any board HAL that speaks embedded-hal provide the capabilities:
//!
//! - [`EhalSpi`] wraps a [`SpiDevice`]. Chip-select is framed by the device
//!   itself, so pair it with `ChipSelect::Hardware` in the driver config.
//! - [`PinBank`] maps numeric pin ids onto owned [`OutputPin`]s.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use heapless::Vec;

use crate::gpio::{GpioPort, Level, PinId};
use crate::spi::{BusAddress, SpiBus};

/// Errors from the SPI adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiAdapterError<E> {
    /// Channel used before `open` or after `close`
    NotOpen,
    /// Underlying device error
    Device(E),
}

/// [`SpiBus`] over an embedded-hal [`SpiDevice`]
///
/// embedded-hal fixes the clock when the device is built, so the requested
/// rate is only recorded; board code reads it back with [`Self::clock_rate`]
/// to confirm the device was configured to match.
pub struct EhalSpi<D> {
    device: D,
    address: Option<BusAddress>,
    clock_hz: Option<u32>,
}

impl<D> EhalSpi<D> {
    /// Wrap a device; the channel starts closed
    pub fn new(device: D) -> Self {
        Self {
            device,
            address: None,
            clock_hz: None,
        }
    }

    /// Check if the channel is open
    pub fn is_open(&self) -> bool {
        self.address.is_some()
    }

    /// Address the channel was opened with
    pub fn address(&self) -> Option<BusAddress> {
        self.address
    }

    /// Last clock rate requested while open
    pub fn clock_rate(&self) -> Option<u32> {
        self.clock_hz
    }

    /// Give the device back
    pub fn release(self) -> D {
        self.device
    }
}

impl<D: SpiDevice> SpiBus for EhalSpi<D> {
    type Error = SpiAdapterError<D::Error>;

    fn open(&mut self, address: BusAddress) -> Result<(), Self::Error> {
        self.address = Some(address);
        Ok(())
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.address = None;
        self.clock_hz = None;
        Ok(())
    }

    fn set_clock_rate(&mut self, hz: u32) -> Result<(), Self::Error> {
        if !self.is_open() {
            return Err(SpiAdapterError::NotOpen);
        }
        self.clock_hz = Some(hz);
        Ok(())
    }

    fn transfer(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if !self.is_open() {
            return Err(SpiAdapterError::NotOpen);
        }
        self.device.write(data).map_err(SpiAdapterError::Device)
    }
}

/// Errors from the pin bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinBankError<E> {
    /// No pin registered under this id
    UnknownPin(PinId),
    /// Pin registered but never configured as an output
    NotConfigured(PinId),
    /// Underlying pin error
    Pin(E),
}

struct Line<P> {
    id: PinId,
    pin: P,
    configured: bool,
}

/// [`GpioPort`] over up to `N` embedded-hal [`OutputPin`]s
pub struct PinBank<P, const N: usize> {
    lines: Vec<Line<P>, N>,
}

impl<P, const N: usize> Default for PinBank<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, const N: usize> PinBank<P, N> {
    /// Create an empty bank
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Register `pin` under `id`
    ///
    /// Hands the pin back if the id is taken or the bank is full.
    pub fn add(&mut self, id: PinId, pin: P) -> Result<(), P> {
        if self.contains(id) {
            return Err(pin);
        }
        self.lines
            .push(Line {
                id,
                pin,
                configured: false,
            })
            .map_err(|line| line.pin)
    }

    /// Check if a pin id is registered
    pub fn contains(&self, id: PinId) -> bool {
        self.lines.iter().any(|l| l.id == id)
    }

    /// Check if a pin has been configured as an output
    pub fn is_configured(&self, id: PinId) -> bool {
        self.lines.iter().any(|l| l.id == id && l.configured)
    }

    /// Number of registered pins
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no pins are registered
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take the pins back out of the bank
    pub fn into_pins(self) -> impl Iterator<Item = (PinId, P)> {
        self.lines.into_iter().map(|l| (l.id, l.pin))
    }

    fn line_mut(&mut self, id: PinId) -> Option<&mut Line<P>> {
        self.lines.iter_mut().find(|l| l.id == id)
    }
}

fn drive<P: OutputPin>(pin: &mut P, level: Level) -> Result<(), P::Error> {
    match level {
        Level::High => pin.set_high(),
        Level::Low => pin.set_low(),
    }
}

impl<P: OutputPin, const N: usize> GpioPort for PinBank<P, N> {
    type Error = PinBankError<P::Error>;

    fn configure_outputs(&mut self, pins: &[PinId], initial: Level) -> Result<(), Self::Error> {
        // Reject the whole request before touching any line
        if let Some(&missing) = pins.iter().find(|&&id| !self.contains(id)) {
            return Err(PinBankError::UnknownPin(missing));
        }

        for &id in pins {
            if let Some(line) = self.line_mut(id) {
                drive(&mut line.pin, initial).map_err(PinBankError::Pin)?;
                line.configured = true;
            }
        }
        Ok(())
    }

    fn set_level(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        let line = self.line_mut(pin).ok_or(PinBankError::UnknownPin(pin))?;
        if !line.configured {
            return Err(PinBankError::NotConfigured(pin));
        }
        drive(&mut line.pin, level).map_err(PinBankError::Pin)
    }
}
