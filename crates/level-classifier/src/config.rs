//! Configuration for level classification and parameter name parsing.

use serde::{Deserialize, Serialize};

use crate::generation::DELETION_GUARD_SECS;
use crate::param_name::NumericParsing;

/// Configuration for the level classifier crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum time to a scheduled deletion for a generation to be readable.
    pub deletion_guard_secs: i64,

    /// Separator between the fields of a parameter identifier.
    pub param_delimiter: char,

    /// Handling of non-numeric text in numeric parameter fields.
    pub numeric_parsing: NumericParsing,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            deletion_guard_secs: DELETION_GUARD_SECS,
            param_delimiter: ':',
            numeric_parsing: NumericParsing::Lenient,
        }
    }
}

impl ClassifierConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GENERATION_DELETION_GUARD_SECS") {
            if let Ok(secs) = val.parse() {
                config.deletion_guard_secs = secs;
            }
        }

        if let Ok(val) = std::env::var("PARAM_NAME_DELIMITER") {
            let mut chars = val.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                config.param_delimiter = c;
            }
        }

        if let Ok(val) = std::env::var("PARAM_NUMERIC_PARSING") {
            if let Ok(mode) = val.parse() {
                config.numeric_parsing = mode;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.deletion_guard_secs < 0 {
            return Err("deletion_guard_secs must not be negative".to_string());
        }

        if self.param_delimiter.is_alphanumeric() || self.param_delimiter.is_whitespace() {
            return Err(format!(
                "param_delimiter '{}' must be a punctuation character",
                self.param_delimiter
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.deletion_guard_secs, 5);
        assert_eq!(config.param_delimiter, ':');
        assert_eq!(config.numeric_parsing, NumericParsing::Lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ClassifierConfig::default();
        config.deletion_guard_secs = -1;
        assert!(config.validate().is_err());

        config.deletion_guard_secs = 0;
        config.param_delimiter = 'x';
        assert!(config.validate().is_err());

        config.param_delimiter = ' ';
        assert!(config.validate().is_err());

        config.param_delimiter = ';';
        assert!(config.validate().is_ok());
    }
}
