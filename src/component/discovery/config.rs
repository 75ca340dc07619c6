//! Discovery configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned while loading discovery configuration.
#[derive(Debug, Error)]
pub enum DiscoveryConfigError {
    /// The configuration document is not valid JSON for this schema.
    #[error("invalid discovery configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings applied while scanning the plugin manifest.
///
/// # Examples
///
/// ```
/// use colonnade::component::discovery::DiscoveryConfig;
///
/// let config = DiscoveryConfig::from_json_str(r#"{"disabled_plugins": ["walrus"]}"#)
///     .expect("valid configuration");
/// assert!(config.is_disabled("walrus"));
/// assert!(!config.is_disabled("cluster"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Plugin names that discovery skips.
    pub disabled_plugins: Vec<String>,
}

impl DiscoveryConfig {
    /// Parses configuration from a JSON document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryConfigError::Parse`] when the document is malformed.
    pub fn from_json_str(raw: &str) -> Result<Self, DiscoveryConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Adds a plugin to the disabled list.
    #[must_use]
    pub fn with_disabled(mut self, plugin: impl Into<String>) -> Self {
        self.disabled_plugins.push(plugin.into());
        self
    }

    /// Returns whether `plugin` is disabled.
    #[must_use]
    pub fn is_disabled(&self, plugin: &str) -> bool {
        self.disabled_plugins.iter().any(|name| name == plugin)
    }
}
