//! Postcard binary encoding of [`DisplayConfig`]
//!
//! Boards that keep their display wiring in flash store it in this form.

use super::{ConfigError, DisplayConfig, CONFIG_VERSION};

/// Upper bound on the encoded size
pub const MAX_CONFIG_SIZE: usize = 32;

impl DisplayConfig {
    /// Encode into `buf`, returning the used prefix
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode, check the version and validate
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: DisplayConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;

        if config.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch(config.version));
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChipSelect;

    #[test]
    fn test_roundtrip() {
        let config = DisplayConfig::new()
            .with_chip_select(ChipSelect::Hardware)
            .with_contrast(60);
        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let encoded = config.to_bytes(&mut buf).unwrap();

        assert_eq!(DisplayConfig::from_bytes(encoded), Ok(config));
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buf = [0u8; 2];
        assert_eq!(
            DisplayConfig::new().to_bytes(&mut buf),
            Err(ConfigError::Serialize)
        );
    }

    #[test]
    fn test_version_mismatch() {
        let mut config = DisplayConfig::new();
        config.version = 9;
        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let encoded = config.to_bytes(&mut buf).unwrap();

        assert_eq!(
            DisplayConfig::from_bytes(encoded),
            Err(ConfigError::VersionMismatch(9))
        );
    }

    #[test]
    fn test_rejects_invalid_contrast() {
        let config = DisplayConfig::new().with_contrast(200);
        let mut buf = [0u8; MAX_CONFIG_SIZE];
        let encoded = config.to_bytes(&mut buf).unwrap();

        assert_eq!(
            DisplayConfig::from_bytes(encoded),
            Err(ConfigError::ContrastOutOfRange(200))
        );
    }

    #[test]
    fn test_garbage() {
        assert_eq!(DisplayConfig::from_bytes(&[]), Err(ConfigError::Deserialize));
    }
}
