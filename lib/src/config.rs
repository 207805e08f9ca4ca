use std::path::PathBuf;

use crate::brightness::BrightnessStrategy;
use crate::error::EtchError;

/// Largest allowed side of the working bitmap, in pixels.
pub const MAX_DIMENSION: u32 = 400;

/// How many times each cell's character is emitted per row.
///
/// Terminal cells are roughly twice as tall as they are wide, so doubling
/// each character keeps the rendered aspect ratio close to the source.
pub const DEFAULT_REPEAT: usize = 2;

/// Default output file, created or truncated in the working directory.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct EtchConfig {
    /// Brightness formula applied to every pixel
    pub strategy: BrightnessStrategy,
    /// Maximum side length after resizing, default 400
    pub max_dimension: u32,
    /// Horizontal repetition factor per character, default 2
    pub repeat: usize,
    /// Destination for the rendered text
    pub output_path: PathBuf,
}

impl Default for EtchConfig {
    fn default() -> Self {
        Self {
            strategy: BrightnessStrategy::Luminosity,
            max_dimension: MAX_DIMENSION,
            repeat: DEFAULT_REPEAT,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl EtchConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), EtchError> {
        if self.max_dimension == 0 {
            return Err(EtchError::Config(format!(
                "max_dimension must be at least 1, got {}",
                self.max_dimension
            )));
        }
        if self.repeat == 0 {
            return Err(EtchError::Config(format!(
                "repeat must be at least 1, got {}",
                self.repeat
            )));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(EtchError::Config("output_path must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EtchConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_values() {
        let config = EtchConfig::default();
        assert_eq!(config.max_dimension, 400);
        assert_eq!(config.repeat, 2);
        assert_eq!(config.output_path, PathBuf::from("output.txt"));
        assert_eq!(config.strategy, BrightnessStrategy::Luminosity);
    }

    #[test]
    fn test_invalid_max_dimension() {
        let mut config = EtchConfig::default();
        config.max_dimension = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_repeat() {
        let mut config = EtchConfig::default();
        config.repeat = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_output_path() {
        let mut config = EtchConfig::default();
        config.output_path = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
