//! Start-time plugin discovery.
//!
//! A static manifest of `(capabilities, constructor)` entries replaces any
//! runtime scanning. [`Bootstrapper`] walks the manifest once, before the
//! registry is shared, and each [`DiscoveryPass`] decides what to do with
//! each candidate.

mod bootstrap;
mod config;
mod manifest;
mod pass;

pub use bootstrap::{Bootstrapper, DiscoveryReport, PassOutcome, SkippedCandidate};
pub use config::{DiscoveryConfig, DiscoveryConfigError};
pub use manifest::{PluginConstructor, PluginError, PluginManifest};
pub use pass::{DiscoveryPass, ServiceBuilderDiscovery};

use crate::component::{builder::ServiceBuilderRegistry, plugins::BUILTIN_PLUGINS};

/// Builds a registry populated from the built-in plugin manifest.
#[must_use]
pub fn discover_builtin(config: DiscoveryConfig) -> (ServiceBuilderRegistry, DiscoveryReport) {
    let registry = ServiceBuilderRegistry::new();
    let report = Bootstrapper::with_default_passes(config).run(BUILTIN_PLUGINS, &registry);
    (registry, report)
}
