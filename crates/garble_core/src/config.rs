use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Threshold used when none is configured.
pub const DEFAULT_VALID_WORD_THRESHOLD: f64 = 0.7;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("valid_word_threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Settings for the English word validation strategy.
///
/// The threshold is checked on construction and on deserialization, so a
/// value of this type always holds a ratio in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWordValidationConfig")]
pub struct WordValidationConfig {
    valid_word_threshold: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWordValidationConfig {
    #[serde(default = "default_threshold")]
    valid_word_threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_VALID_WORD_THRESHOLD
}

impl TryFrom<RawWordValidationConfig> for WordValidationConfig {
    type Error = ConfigError;

    fn try_from(raw: RawWordValidationConfig) -> Result<Self, Self::Error> {
        Self::new(raw.valid_word_threshold)
    }
}

impl Default for WordValidationConfig {
    fn default() -> Self {
        Self {
            valid_word_threshold: DEFAULT_VALID_WORD_THRESHOLD,
        }
    }
}

impl WordValidationConfig {
    pub fn new(valid_word_threshold: f64) -> Result<Self, ConfigError> {
        // NaN fails the range check.
        if !(0.0..=1.0).contains(&valid_word_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(valid_word_threshold));
        }
        Ok(Self {
            valid_word_threshold,
        })
    }

    pub fn valid_word_threshold(&self) -> f64 {
        self.valid_word_threshold
    }

    /// Parses a RON config such as `(valid_word_threshold: 0.6)`.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_seven_tenths() {
        assert_eq!(WordValidationConfig::default().valid_word_threshold(), 0.7);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(WordValidationConfig::new(0.0).is_ok());
        assert!(WordValidationConfig::new(1.0).is_ok());
    }

    #[test]
    fn out_of_range_and_nan_are_rejected() {
        for bad in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    WordValidationConfig::new(bad),
                    Err(ConfigError::ThresholdOutOfRange(_))
                ),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn parses_ron_and_fills_missing_threshold() {
        let config = WordValidationConfig::from_ron_str("(valid_word_threshold: 0.55)").unwrap();
        assert_eq!(config.valid_word_threshold(), 0.55);

        let config = WordValidationConfig::from_ron_str("()").unwrap();
        assert_eq!(config, WordValidationConfig::default());
    }

    #[test]
    fn ron_values_are_validated() {
        assert!(WordValidationConfig::from_ron_str("(valid_word_threshold: 1.5)").is_err());
        assert!(WordValidationConfig::from_ron_str("(threshold: 0.5)").is_err());
    }
}
