//! Hardware configuration types
//!
//! Pin numbers are whatever the [`GpioPort`](lcd5110_hal::GpioPort)
//! implementation understands; the defaults match the common Raspberry Pi
//! header wiring (physical pin numbering) for these modules.

use heapless::Vec;
use lcd5110_hal::{BusAddress, PinId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::command::{Contrast, DEFAULT_CONTRAST};

/// Current configuration layout version
pub const CONFIG_VERSION: u8 = 1;

/// Most output lines the driver ever claims
pub const MAX_OUTPUT_PINS: usize = 4;

/// Output lines claimed by the driver, in configuration order
pub type OutputPins = Vec<PinId, MAX_OUTPUT_PINS>;

/// Who frames transfers with the chip-select line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChipSelect {
    /// The SPI controller asserts chip-select itself
    Hardware,
    /// The driver toggles this GPIO around each transfer (active low)
    Software(PinId),
}

impl ChipSelect {
    /// GPIO pin, if software-managed
    pub const fn pin(&self) -> Option<PinId> {
        match self {
            ChipSelect::Hardware => None,
            ChipSelect::Software(pin) => Some(*pin),
        }
    }
}

/// GPIO pin assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayPins {
    /// Reset line (RST), active low
    pub reset: PinId,
    /// Data/command select (D/C): low = command, high = data
    pub data_command: PinId,
    /// Backlight enable (LED)
    pub backlight: PinId,
    /// Chip enable (SCE)
    pub chip_select: ChipSelect,
}

impl Default for DisplayPins {
    fn default() -> Self {
        Self {
            reset: 21,
            data_command: 26,
            backlight: 18,
            chip_select: ChipSelect::Software(24),
        }
    }
}

/// SPI channel selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiHwConfig {
    /// SPI controller number
    pub bus: u8,
    /// Device (hardware chip-select) index
    pub device: u8,
}

impl SpiHwConfig {
    /// Address to pass to [`SpiBus::open`](lcd5110_hal::SpiBus::open)
    pub const fn address(&self) -> BusAddress {
        BusAddress::new(self.bus, self.device)
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Configuration version for compatibility checks
    pub version: u8,
    /// GPIO pin assignments
    pub pins: DisplayPins,
    /// Backlight turns on when its line is LOW
    ///
    /// Red boards are usually active low, blue ones active high.
    pub backlight_active_low: bool,
    /// Contrast (Vop), 0..=127; checked at init
    pub contrast: u8,
    /// SPI channel
    pub spi: SpiHwConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            pins: DisplayPins::default(),
            backlight_active_low: true,
            contrast: DEFAULT_CONTRAST,
            spi: SpiHwConfig::default(),
        }
    }
}

impl DisplayConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Use different pin assignments
    pub const fn with_pins(mut self, pins: DisplayPins) -> Self {
        self.pins = pins;
        self
    }

    /// Use a different chip-select arrangement
    pub const fn with_chip_select(mut self, chip_select: ChipSelect) -> Self {
        self.pins.chip_select = chip_select;
        self
    }

    /// Set backlight polarity
    pub const fn with_backlight_active_low(mut self, active_low: bool) -> Self {
        self.backlight_active_low = active_low;
        self
    }

    /// Set contrast (validated at init)
    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Use a different SPI channel
    pub const fn with_spi(mut self, bus: u8, device: u8) -> Self {
        self.spi = SpiHwConfig { bus, device };
        self
    }

    /// Output lines to claim, chip-select last when present
    pub fn output_pins(&self) -> OutputPins {
        let mut pins = OutputPins::new();
        // Capacity covers every field, pushes cannot fail
        let _ = pins.push(self.pins.reset);
        let _ = pins.push(self.pins.data_command);
        let _ = pins.push(self.pins.backlight);
        if let Some(cs) = self.pins.chip_select.pin() {
            let _ = pins.push(cs);
        }
        pins
    }

    /// Check the configuration before it reaches hardware
    pub fn validate(&self) -> Result<Contrast, ConfigError> {
        let contrast = Contrast::new(self.contrast)?;

        let pins = self.output_pins();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Err(ConfigError::PinConflict(*pin));
            }
        }

        Ok(contrast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::new();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.pins.reset, 21);
        assert_eq!(config.pins.data_command, 26);
        assert_eq!(config.pins.backlight, 18);
        assert_eq!(config.pins.chip_select, ChipSelect::Software(24));
        assert!(config.backlight_active_low);
        assert_eq!(config.contrast, 50);
        assert_eq!(config.spi.address(), BusAddress::new(0, 0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_pins() {
        let config = DisplayConfig::new();
        assert_eq!(config.output_pins().as_slice(), &[21, 26, 18, 24]);

        let config = config.with_chip_select(ChipSelect::Hardware);
        assert_eq!(config.output_pins().as_slice(), &[21, 26, 18]);
    }

    #[test]
    fn test_contrast_validation() {
        let config = DisplayConfig::new().with_contrast(127);
        assert_eq!(config.validate().map(Contrast::value), Ok(127));

        let config = DisplayConfig::new().with_contrast(128);
        assert_eq!(config.validate(), Err(ConfigError::ContrastOutOfRange(128)));
    }

    #[test]
    fn test_pin_conflict() {
        let config = DisplayConfig::new().with_chip_select(ChipSelect::Software(18));
        assert_eq!(config.validate(), Err(ConfigError::PinConflict(18)));

        let config = DisplayConfig::new().with_pins(DisplayPins {
            reset: 5,
            data_command: 5,
            backlight: 6,
            chip_select: ChipSelect::Hardware,
        });
        assert_eq!(config.validate(), Err(ConfigError::PinConflict(5)));
    }

    #[test]
    fn test_builder() {
        let config = DisplayConfig::new()
            .with_backlight_active_low(false)
            .with_spi(1, 2);
        assert!(!config.backlight_active_low);
        assert_eq!(config.spi.address(), BusAddress::new(1, 2));
    }
}
