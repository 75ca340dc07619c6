//! Discovery passes run over the plugin manifest.

use super::{PluginError, PluginManifest};
use crate::component::builder::ServiceBuilderRegistry;
use std::sync::Arc;

/// A single scan over the plugin manifest.
///
/// Passes run in ascending [`priority`](DiscoveryPass::priority) order.
pub trait DiscoveryPass: Send + Sync {
    /// Returns the pass name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Returns the pass priority. Lower values run first.
    fn priority(&self) -> u32;

    /// Processes one candidate.
    ///
    /// Returns `Ok(false)` when the candidate is not relevant to this pass.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError`] when the candidate is relevant but unusable.
    fn process(
        &self,
        candidate: &PluginManifest,
        registry: &ServiceBuilderRegistry,
    ) -> Result<bool, PluginError>;
}

/// Instantiates one builder per plugin and registers it under every
/// capability the plugin declares.
///
/// A plugin may only declare the component its builder reports; a mismatch
/// skips the whole plugin before anything is registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceBuilderDiscovery;

impl ServiceBuilderDiscovery {
    /// Priority of the builder discovery pass.
    pub const PRIORITY: u32 = 20;
}

impl DiscoveryPass for ServiceBuilderDiscovery {
    fn name(&self) -> &'static str {
        "service-builders"
    }

    fn priority(&self) -> u32 {
        Self::PRIORITY
    }

    fn process(
        &self,
        candidate: &PluginManifest,
        registry: &ServiceBuilderRegistry,
    ) -> Result<bool, PluginError> {
        let builder = candidate.instantiate()?;
        let capabilities = candidate.capabilities();
        if capabilities.is_empty() {
            return Err(PluginError::NoCapabilities(candidate.name()));
        }
        let built = builder.component_identity();
        if let Some(declared) = capabilities
            .identities()
            .iter()
            .find(|declared| **declared != built)
        {
            return Err(PluginError::IdentityMismatch {
                plugin: candidate.name(),
                declared: *declared,
                built,
            });
        }

        for identity in capabilities.identities() {
            registry.register_for_identity(*identity, Arc::clone(&builder));
        }
        for request_type in capabilities.request_types() {
            registry.register_for_request_type(*request_type, Arc::clone(&builder));
        }
        Ok(true)
    }
}
