//! Configuration file support for focus-qa.
//!
//! The only recognised setting is the focus threshold:
//!
//! ```toml
//! [focus]
//! threshold = 3000.0
//! ```
//!
//! Files can be layered with [`AppConfig::merge`]; later layers win.

use std::path::Path;

use anyhow::{Context, Result};
use focus_qa_core::{FocusClassifier, DEFAULT_FOCUS_THRESHOLD};
use serde::Deserialize;
use tracing::{info, warn};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Focus classification settings.
    pub focus: FocusConfig,
}

/// Focus classification configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Metric below which an image is blurry/dark.
    pub threshold: Option<f64>,
}

impl AppConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has wrongly
    /// typed fields.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Loads a config file, falling back to defaults.
    ///
    /// A missing file yields the default config. Unreadable or invalid files
    /// are logged as warnings and also yield the default config.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_strict(path) {
            Ok(config) => {
                info!("Loaded config: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config file {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_strict(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Merges another config into this one.
    /// Values from `other` override values in `self` when present.
    pub fn merge(&mut self, other: Self) {
        self.focus.threshold = other.focus.threshold.or(self.focus.threshold);
    }

    /// Checks values are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is negative or not finite.
    pub fn validate(&self) -> Result<()> {
        if let Some(t) = self.focus.threshold {
            if !t.is_finite() || t < 0.0 {
                anyhow::bail!("focus.threshold must be a finite non-negative number, got {t}");
            }
        }
        Ok(())
    }

    /// Focus threshold with fallback to [`DEFAULT_FOCUS_THRESHOLD`].
    #[must_use]
    pub fn focus_threshold(&self) -> f64 {
        self.focus.threshold.unwrap_or(DEFAULT_FOCUS_THRESHOLD)
    }

    /// Builds a classifier from this config.
    #[must_use]
    pub fn classifier(&self) -> FocusClassifier {
        FocusClassifier::new(self.focus_threshold())
    }
}
