//! Configuration for the diff engine.
//!
//! `DiffConfig` centralizes behavioral knobs so thresholds are not hardcoded
//! at call sites.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Pre-filter elements whose symbol never occurs on the opposite side.
    pub enable_discard: bool,
    /// Run the canonicalizing block-shift post-pass.
    pub shift_blocks: bool,
    /// Opposite-side occurrence count at or above which an element is
    /// classified as a provisional discard candidate. `None` disables
    /// provisional classification entirely.
    pub provisional_threshold: Option<u32>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            enable_discard: true,
            shift_blocks: true,
            provisional_threshold: None,
        }
    }
}

impl DiffConfig {
    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder {
            inner: DiffConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(threshold) = self.provisional_threshold {
            ensure_non_zero_u32(threshold, "provisional_threshold")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveLimit { field: &'static str, value: u64 },
}

fn ensure_non_zero_u32(value: u32, field: &'static str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NonPositiveLimit {
            field,
            value: value as u64,
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct DiffConfigBuilder {
    inner: DiffConfig,
}

impl Default for DiffConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffConfigBuilder {
    pub fn new() -> Self {
        DiffConfig::builder()
    }

    pub fn enable_discard(mut self, value: bool) -> Self {
        self.inner.enable_discard = value;
        self
    }

    pub fn shift_blocks(mut self, value: bool) -> Self {
        self.inner.shift_blocks = value;
        self
    }

    pub fn provisional_threshold(mut self, value: Option<u32>) -> Self {
        self.inner.provisional_threshold = value;
        self
    }

    pub fn build(self) -> Result<DiffConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
