//! Built-in service builder plugins and their manifest.
//!
//! The cloud controller and node agents have no dedicated builder; lookups
//! for them receive a fallback builder. The node plugin only claims the node
//! request types, so node registrations go through that fallback.

mod arbitrator;
mod cluster;
mod naming;
mod requests;
mod storage;
mod walrus;

pub use arbitrator::ArbitratorBuilder;
pub use cluster::ClusterBuilder;
pub use requests::*;
pub use storage::StorageControllerBuilder;
pub use walrus::WalrusBuilder;

use crate::component::{
    builder::{BuilderCapabilities, FallbackBuilder, ServiceBuilder},
    discovery::{PluginError, PluginManifest},
    domain::ComponentIdentity,
};
use std::sync::Arc;

#[expect(
    clippy::unnecessary_wraps,
    reason = "must match the fallible PluginConstructor signature"
)]
fn construct<B>() -> Result<Arc<dyn ServiceBuilder>, PluginError>
where
    B: ServiceBuilder + Default + 'static,
{
    Ok(Arc::new(B::default()))
}

#[expect(
    clippy::unnecessary_wraps,
    reason = "must match the fallible PluginConstructor signature"
)]
fn construct_node() -> Result<Arc<dyn ServiceBuilder>, PluginError> {
    Ok(Arc::new(FallbackBuilder::new(ComponentIdentity::NODE)))
}

/// Manifest of the builders shipped with this crate.
pub static BUILTIN_PLUGINS: &[PluginManifest] = &[
    PluginManifest::new(
        "cluster",
        BuilderCapabilities::new(
            &[
                REGISTER_CLUSTER,
                DEREGISTER_CLUSTER,
                MODIFY_CLUSTER_ATTRIBUTE,
                DESCRIBE_CLUSTERS,
            ],
            &[ComponentIdentity::CLUSTER],
        ),
        construct::<ClusterBuilder>,
    ),
    PluginManifest::new(
        "storage",
        BuilderCapabilities::new(
            &[
                REGISTER_STORAGE_CONTROLLER,
                DEREGISTER_STORAGE_CONTROLLER,
                MODIFY_STORAGE_CONTROLLER_ATTRIBUTE,
                DESCRIBE_STORAGE_CONTROLLERS,
            ],
            &[ComponentIdentity::STORAGE],
        ),
        construct::<StorageControllerBuilder>,
    ),
    PluginManifest::new(
        "walrus",
        BuilderCapabilities::new(
            &[
                REGISTER_WALRUS,
                DEREGISTER_WALRUS,
                MODIFY_WALRUS_ATTRIBUTE,
                DESCRIBE_WALRUSES,
            ],
            &[ComponentIdentity::WALRUS],
        ),
        construct::<WalrusBuilder>,
    ),
    PluginManifest::new(
        "arbitrator",
        BuilderCapabilities::new(
            &[
                REGISTER_ARBITRATOR,
                DEREGISTER_ARBITRATOR,
                MODIFY_ARBITRATOR_ATTRIBUTE,
                DESCRIBE_ARBITRATORS,
            ],
            &[ComponentIdentity::ARBITRATOR],
        ),
        construct::<ArbitratorBuilder>,
    ),
    PluginManifest::new(
        "node",
        BuilderCapabilities::new(
            &[
                REGISTER_NODE,
                DEREGISTER_NODE,
                MODIFY_NODE_ATTRIBUTE,
                DESCRIBE_NODE_AGENTS,
            ],
            &[],
        ),
        construct_node,
    ),
];
