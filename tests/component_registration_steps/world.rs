//! Shared world state for component registration BDD scenarios.

use std::sync::Arc;

use colonnade::component::{
    adapters::memory::{InMemoryLifecycle, InMemoryNodeDirectory, InMemoryTopology},
    discovery::{DiscoveryConfig, discover_builtin},
    domain::{ComponentCatalog, RequestType},
    plugins::{
        DEREGISTER_ARBITRATOR, DEREGISTER_CLUSTER, DEREGISTER_NODE, DEREGISTER_STORAGE_CONTROLLER,
        DEREGISTER_WALRUS, DESCRIBE_ARBITRATORS, DESCRIBE_CLUSTERS, DESCRIBE_NODE_AGENTS,
        DESCRIBE_STORAGE_CONTROLLERS, DESCRIBE_WALRUSES, MODIFY_ARBITRATOR_ATTRIBUTE,
        MODIFY_CLUSTER_ATTRIBUTE, MODIFY_NODE_ATTRIBUTE, MODIFY_STORAGE_CONTROLLER_ATTRIBUTE,
        MODIFY_WALRUS_ATTRIBUTE, REGISTER_ARBITRATOR, REGISTER_CLUSTER, REGISTER_NODE,
        REGISTER_STORAGE_CONTROLLER, REGISTER_WALRUS,
    },
    services::{ConfigurationService, ConfigurationServiceResult},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Host name whose services count as local.
pub const LOCAL_HOST: &str = "10.0.0.5";

/// Topology adapter used by the BDD world.
pub type TestTopology = InMemoryTopology<DefaultClock>;

/// Service type used by the BDD world.
pub type TestService =
    ConfigurationService<TestTopology, TestTopology, InMemoryLifecycle, InMemoryNodeDirectory>;

/// Request types of one built-in component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentRequests {
    /// Registration request type.
    pub register: RequestType,
    /// Deregistration request type.
    pub deregister: RequestType,
    /// Attribute modification request type.
    pub modify: RequestType,
    /// Describe request type.
    pub describe: RequestType,
}

/// Scenario world for component registration behaviour tests.
pub struct RegistrationWorld {
    /// The configuration service under test.
    pub service: TestService,
    /// Result of the last registration attempt.
    pub last_register_result: Option<ConfigurationServiceResult<bool>>,
    /// Result of the last modify attempt.
    pub last_modify_result: Option<ConfigurationServiceResult<()>>,
}

impl RegistrationWorld {
    /// Creates a world whose service was discovered with `config`.
    #[must_use]
    pub fn with_config(config: DiscoveryConfig) -> Self {
        let (registry, _) = discover_builtin(config);
        let builders = Arc::new(registry);
        let topology = Arc::new(
            InMemoryTopology::new(
                ComponentCatalog::builtin(),
                Arc::clone(&builders),
                Arc::new(DefaultClock),
            )
            .with_local_host(LOCAL_HOST),
        );
        let service = ConfigurationService::new(
            builders,
            Arc::clone(&topology),
            topology,
            Arc::new(InMemoryLifecycle::new()),
            Arc::new(InMemoryNodeDirectory::new()),
        );
        Self {
            service,
            last_register_result: None,
            last_modify_result: None,
        }
    }
}

impl Default for RegistrationWorld {
    fn default() -> Self {
        Self::with_config(DiscoveryConfig::default())
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistrationWorld {
    RegistrationWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Resolves a component name used in feature files to its request types.
///
/// # Errors
///
/// Returns an error when the component has no built-in plugin.
pub fn requests_for(component: &str) -> Result<ComponentRequests, eyre::Report> {
    let requests = match component {
        "cluster" => ComponentRequests {
            register: REGISTER_CLUSTER,
            deregister: DEREGISTER_CLUSTER,
            modify: MODIFY_CLUSTER_ATTRIBUTE,
            describe: DESCRIBE_CLUSTERS,
        },
        "storage" => ComponentRequests {
            register: REGISTER_STORAGE_CONTROLLER,
            deregister: DEREGISTER_STORAGE_CONTROLLER,
            modify: MODIFY_STORAGE_CONTROLLER_ATTRIBUTE,
            describe: DESCRIBE_STORAGE_CONTROLLERS,
        },
        "walrus" => ComponentRequests {
            register: REGISTER_WALRUS,
            deregister: DEREGISTER_WALRUS,
            modify: MODIFY_WALRUS_ATTRIBUTE,
            describe: DESCRIBE_WALRUSES,
        },
        "arbitrator" => ComponentRequests {
            register: REGISTER_ARBITRATOR,
            deregister: DEREGISTER_ARBITRATOR,
            modify: MODIFY_ARBITRATOR_ATTRIBUTE,
            describe: DESCRIBE_ARBITRATORS,
        },
        "node" => ComponentRequests {
            register: REGISTER_NODE,
            deregister: DEREGISTER_NODE,
            modify: MODIFY_NODE_ATTRIBUTE,
            describe: DESCRIBE_NODE_AGENTS,
        },
        other => return Err(eyre::eyre!("no built-in plugin for component '{other}'")),
    };
    Ok(requests)
}
