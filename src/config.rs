//! Validation limits for catalog entities
//!
//! Limits can be built in code, or loaded from YAML. Every field is optional
//! in YAML and falls back to its default:
//!
//! ```yaml
//! title: { min: 5, max: 50 }
//! magazine_name: { min: 2, max: 16 }
//! contributor_threshold: 2
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading limits
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid range for {field}: min {min} exceeds max {max}")]
    InvalidRange {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

/// Inclusive character-count range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether `len` lies within the range, bounds included
    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }
}

/// Bounds applied by the catalog when validating fields and ranking contributors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Article title length
    pub title: LengthRange,
    /// Magazine name length
    pub magazine_name: LengthRange,
    /// An author counts as contributing once their article count in a
    /// magazine is strictly greater than this
    pub contributor_threshold: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            title: LengthRange::new(5, 50),
            magazine_name: LengthRange::new(2, 16),
            contributor_threshold: 2,
        }
    }
}

impl Limits {
    /// Parse limits from a YAML document, filling omitted fields with defaults
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let limits: Limits = serde_yaml::from_str(source)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Read limits from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }

    /// Reject ranges whose lower bound exceeds the upper bound
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, range) in [("title", self.title), ("magazine_name", self.magazine_name)] {
            if range.min > range.max {
                return Err(ConfigError::InvalidRange {
                    field,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }
}
