//! Runs discovery passes over the plugin manifest at process start.

use super::{DiscoveryConfig, DiscoveryPass, PluginManifest, ServiceBuilderDiscovery};
use crate::component::builder::ServiceBuilderRegistry;
use tracing::{debug, info, warn};

/// A candidate a pass could not use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCandidate {
    /// Plugin name.
    pub plugin: &'static str,
    /// Why the candidate was skipped.
    pub reason: String,
}

/// Outcome of a single discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutcome {
    /// Pass name.
    pub pass: &'static str,
    /// Pass priority.
    pub priority: u32,
    /// Candidates the pass consumed.
    pub accepted: Vec<&'static str>,
    /// Candidates the pass did not apply to.
    pub ignored: Vec<&'static str>,
    /// Candidates the pass failed to use.
    pub skipped: Vec<SkippedCandidate>,
    /// Candidates disabled by configuration.
    pub disabled: Vec<&'static str>,
}

impl PassOutcome {
    fn new(pass: &dyn DiscoveryPass) -> Self {
        Self {
            pass: pass.name(),
            priority: pass.priority(),
            accepted: Vec::new(),
            ignored: Vec::new(),
            skipped: Vec::new(),
            disabled: Vec::new(),
        }
    }
}

/// Per-pass results of a discovery run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    passes: Vec<PassOutcome>,
}

impl DiscoveryReport {
    /// Returns the outcome of every pass in execution order.
    #[must_use]
    pub fn passes(&self) -> &[PassOutcome] {
        &self.passes
    }

    /// Returns the outcome of the named pass.
    #[must_use]
    pub fn pass(&self, name: &str) -> Option<&PassOutcome> {
        self.passes.iter().find(|outcome| outcome.pass == name)
    }

    /// Returns every skipped candidate across all passes.
    pub fn skipped(&self) -> impl Iterator<Item = &SkippedCandidate> {
        self.passes.iter().flat_map(|outcome| outcome.skipped.iter())
    }
}

/// Ordered set of discovery passes.
///
/// # Examples
///
/// ```
/// use colonnade::component::builder::ServiceBuilderRegistry;
/// use colonnade::component::discovery::{Bootstrapper, DiscoveryConfig};
/// use colonnade::component::domain::ComponentIdentity;
/// use colonnade::component::plugins::{BUILTIN_PLUGINS, REGISTER_CLUSTER};
///
/// let registry = ServiceBuilderRegistry::new();
/// let report = Bootstrapper::with_default_passes(DiscoveryConfig::default())
///     .run(BUILTIN_PLUGINS, &registry);
///
/// assert_eq!(report.skipped().count(), 0);
/// assert_eq!(
///     registry.identity_for_request_type(REGISTER_CLUSTER),
///     Ok(ComponentIdentity::CLUSTER)
/// );
/// ```
pub struct Bootstrapper {
    config: DiscoveryConfig,
    passes: Vec<Box<dyn DiscoveryPass>>,
}

impl Bootstrapper {
    /// Creates a bootstrapper with no passes.
    #[must_use]
    pub fn new(config: DiscoveryConfig) -> Self {
        Self {
            config,
            passes: Vec::new(),
        }
    }

    /// Creates a bootstrapper running [`ServiceBuilderDiscovery`].
    #[must_use]
    pub fn with_default_passes(config: DiscoveryConfig) -> Self {
        Self::new(config).with_pass(ServiceBuilderDiscovery)
    }

    /// Adds a discovery pass.
    #[must_use]
    pub fn with_pass(mut self, pass: impl DiscoveryPass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Runs every pass over every candidate exactly once.
    ///
    /// Passes run in ascending priority; passes sharing a priority keep
    /// insertion order. Candidate failures are logged and recorded in the
    /// report, never propagated. Must complete before `registry` is shared
    /// with concurrent callers.
    #[must_use]
    pub fn run(
        &self,
        manifest: &[PluginManifest],
        registry: &ServiceBuilderRegistry,
    ) -> DiscoveryReport {
        let mut ordered: Vec<&dyn DiscoveryPass> =
            self.passes.iter().map(|pass| &**pass).collect();
        ordered.sort_by_key(|pass| pass.priority());

        let mut report = DiscoveryReport::default();
        for pass in ordered {
            debug!(pass = pass.name(), priority = pass.priority(), "running discovery pass");
            let mut outcome = PassOutcome::new(pass);
            for candidate in manifest {
                self.process_candidate(pass, candidate, registry, &mut outcome);
            }
            info!(
                pass = outcome.pass,
                accepted = outcome.accepted.len(),
                skipped = outcome.skipped.len(),
                "discovery pass complete"
            );
            report.passes.push(outcome);
        }
        report
    }

    fn process_candidate(
        &self,
        pass: &dyn DiscoveryPass,
        candidate: &PluginManifest,
        registry: &ServiceBuilderRegistry,
        outcome: &mut PassOutcome,
    ) {
        let plugin = candidate.name();
        if self.config.is_disabled(plugin) {
            info!(pass = pass.name(), plugin, "plugin disabled by configuration");
            outcome.disabled.push(plugin);
            return;
        }

        match pass.process(candidate, registry) {
            Ok(true) => outcome.accepted.push(plugin),
            Ok(false) => outcome.ignored.push(plugin),
            Err(err) => {
                warn!(pass = pass.name(), plugin, error = %err, "skipping plugin");
                outcome.skipped.push(SkippedCandidate {
                    plugin,
                    reason: err.to_string(),
                });
            }
        }
    }
}
