//! Engine configuration.
//!
//! Load limits from a TOML file; every key is optional and falls back to its default.
//!
//! ```
//! use datepoll_engine::EngineConfig;
//!
//! let config = EngineConfig::from_toml_str("max_range_days = 14").unwrap();
//! assert_eq!(config.max_range_days, 14);
//!
//! let defaults = EngineConfig::from_toml_str("").unwrap();
//! assert_eq!(defaults, EngineConfig::default());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default upper bound on the number of days between the first and last candidate date.
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum span, in days, of a range passed to
    /// [`Event::from_range`](crate::event::Event::from_range).
    pub max_range_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_range_days == 0 {
            return Err(ConfigError::Invalid(
                "max_range_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
