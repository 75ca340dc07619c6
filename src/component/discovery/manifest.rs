//! Start-time manifest of builder plugins.

use crate::component::{
    builder::{BuilderCapabilities, ServiceBuilder},
    domain::ComponentIdentity,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while processing a plugin candidate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PluginError {
    /// The plugin constructor failed.
    #[error("plugin {plugin} could not be constructed: {reason}")]
    Construction {
        /// Plugin name.
        plugin: &'static str,
        /// Failure reason.
        reason: String,
    },

    /// The plugin declares neither request types nor identities.
    #[error("plugin {0} declares no capabilities")]
    NoCapabilities(&'static str),

    /// The plugin declares a component its builder does not build.
    #[error("plugin {plugin} declares component {declared} but builds {built} services")]
    IdentityMismatch {
        /// Plugin name.
        plugin: &'static str,
        /// Component named in the manifest.
        declared: ComponentIdentity,
        /// Component reported by the constructed builder.
        built: ComponentIdentity,
    },
}

impl PluginError {
    /// Creates a construction failure for `plugin`.
    pub fn construction(plugin: &'static str, reason: impl Into<String>) -> Self {
        Self::Construction {
            plugin,
            reason: reason.into(),
        }
    }
}

/// Constructor invoked once per plugin during discovery.
pub type PluginConstructor = fn() -> Result<Arc<dyn ServiceBuilder>, PluginError>;

/// One entry of the plugin manifest: a capability set and the constructor
/// of the builder that provides it.
#[derive(Debug, Clone, Copy)]
pub struct PluginManifest {
    name: &'static str,
    capabilities: BuilderCapabilities,
    construct: PluginConstructor,
}

impl PluginManifest {
    /// Creates a manifest entry.
    #[must_use]
    pub const fn new(
        name: &'static str,
        capabilities: BuilderCapabilities,
        construct: PluginConstructor,
    ) -> Self {
        Self {
            name,
            capabilities,
            construct,
        }
    }

    /// Returns the plugin name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the declared capabilities.
    #[must_use]
    pub const fn capabilities(&self) -> BuilderCapabilities {
        self.capabilities
    }

    /// Invokes the plugin constructor.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError`] when the constructor fails.
    pub fn instantiate(&self) -> Result<Arc<dyn ServiceBuilder>, PluginError> {
        (self.construct)()
    }
}
