//! Configuration types
//!
//! Everything fixed at driver construction: pin assignments, chip-select
//! ownership, backlight polarity, contrast and SPI channel. With the `serde`
//! feature the configuration can be stored as postcard binary data.

#[cfg(feature = "serde")]
pub mod binary;
pub mod hardware;

pub use hardware::*;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Contrast above 127
    ContrastOutOfRange(u8),
    /// Two output lines assigned to the same pin
    PinConflict(u8),
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
    /// Stored config has an unsupported version
    VersionMismatch(u8),
}
