//! SPI bus abstractions
//!
//! The display only ever writes, so the bus capability is a write-only
//! channel with an explicit open/close lifecycle.

/// Bus and device numbers identifying one SPI channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusAddress {
    /// SPI controller number
    pub bus: u8,
    /// Chip-select index on that controller
    pub device: u8,
}

impl BusAddress {
    /// Create a new bus address
    pub const fn new(bus: u8, device: u8) -> Self {
        Self { bus, device }
    }
}

/// SPI bus master
///
/// The implementor owns the channel handle. Opening binds it to a
/// [`BusAddress`]; closing releases it. `close` must be safe to call on a
/// channel that is not open.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Open the channel at the given address
    fn open(&mut self, address: BusAddress) -> Result<(), Self::Error>;

    /// Release the channel
    fn close(&mut self) -> Result<(), Self::Error>;

    /// Set the clock frequency in Hz
    fn set_clock_rate(&mut self, hz: u32) -> Result<(), Self::Error>;

    /// Clock `data` out in order
    ///
    /// Bit order within each byte is the implementor's concern.
    fn transfer(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn open(&mut self, address: BusAddress) -> Result<(), Self::Error> {
        T::open(self, address)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        T::close(self)
    }

    fn set_clock_rate(&mut self, hz: u32) -> Result<(), Self::Error> {
        T::set_clock_rate(self, hz)
    }

    fn transfer(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::transfer(self, data)
    }
}
