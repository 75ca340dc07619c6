//! Topology port: the authoritative view of registered services.

use crate::component::domain::{ComponentIdentity, ServiceConfiguration};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for topology queries.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// A known component and the service it runs on this host, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    /// Component identity.
    pub identity: ComponentIdentity,
    /// Service of the component running on this host.
    pub local_service: Option<ServiceConfiguration>,
}

/// Read access to the set of live registered services.
#[async_trait]
pub trait ComponentTopology: Send + Sync {
    /// Lists every known component with its local service.
    async fn list_components(&self) -> TopologyResult<Vec<ComponentEntry>>;

    /// Lists every registered service of `identity`.
    async fn list_configurations(
        &self,
        identity: ComponentIdentity,
    ) -> TopologyResult<Vec<ServiceConfiguration>>;
}

/// Errors returned by topology and node directory adapters.
#[derive(Debug, Clone, Error)]
pub enum TopologyError {
    /// The backing store could not be read.
    #[error("topology unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TopologyError {
    /// Wraps a backing store failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
