//! Controller command encoding
//!
//! Contrast (Vop) and bias commands only exist in the extended instruction
//! set. The controller accepts them silently in basic mode but they then
//! decode as something else, so the init sequence must bracket them with
//! extended-mode entry and basic-mode entry.

use crate::config::ConfigError;

/// PCD8544 command bytes
pub mod cmd {
    /// Function set: extended instruction set
    pub const EXTENDED_MODE: u8 = 0x21;
    /// Function set: basic instruction set
    pub const BASIC_MODE: u8 = 0x20;
    /// Set Vop (contrast), extended mode only; OR in the 7-bit value
    pub const SET_VOP: u8 = 0x80;
    /// Bias system 1:48, extended mode only
    pub const BIAS_1_48: u8 = 0x13;
    /// Display control: all segments on
    pub const ALL_PIXELS_ON: u8 = 0x09;
    /// Display control: normal mode
    pub const NORMAL_MODE: u8 = 0x0C;
}

/// Highest accepted contrast value
pub const MAX_CONTRAST: u8 = 0x7F;

/// Contrast that suits most modules
pub const DEFAULT_CONTRAST: u8 = 50;

/// Validated contrast (Vop) setting, 0..=127
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Contrast(u8);

impl Contrast {
    /// Default contrast
    pub const DEFAULT: Self = Self(DEFAULT_CONTRAST);

    /// Validate a raw contrast value
    pub const fn new(value: u8) -> Result<Self, ConfigError> {
        if value > MAX_CONTRAST {
            return Err(ConfigError::ContrastOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Raw value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Set-Vop command byte
    pub const fn command(self) -> u8 {
        cmd::SET_VOP | self.0
    }
}

impl Default for Contrast {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Contrast {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Commands sent before the display RAM is cleared during init
pub const fn init_sequence(contrast: Contrast) -> [u8; 4] {
    [
        cmd::EXTENDED_MODE,
        contrast.command(),
        cmd::BIAS_1_48,
        cmd::BASIC_MODE,
    ]
}

/// Commands sent after the display RAM is cleared during init
pub const POST_CLEAR: [u8; 2] = [cmd::ALL_PIXELS_ON, cmd::NORMAL_MODE];
