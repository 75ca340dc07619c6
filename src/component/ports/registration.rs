//! Registration handler port: the authority that admits and removes
//! service instances.

use crate::component::domain::{ComponentIdentity, Partition};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for registration handler operations.
pub type RegistrationHandlerResult<T> = Result<T, RegistrationHandlerError>;

/// Admits and removes service instances of a component.
///
/// Implementations own name collision detection, persistence and topology
/// insertion. Callers impose no timeout or retry.
#[async_trait]
pub trait RegistrationHandler: Send + Sync {
    /// Registers a service instance.
    ///
    /// Returns whether the instance was registered.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationHandlerError`] when the instance is rejected or
    /// cannot be stored.
    async fn register(
        &self,
        identity: ComponentIdentity,
        partition: &Partition,
        name: &str,
        host_name: &str,
        port: u16,
    ) -> RegistrationHandlerResult<bool>;

    /// Removes the service instance of `identity` in `partition`.
    ///
    /// Returns whether an instance was removed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationHandlerError`] when the instance cannot be
    /// removed.
    async fn deregister(
        &self,
        identity: ComponentIdentity,
        partition: &Partition,
    ) -> RegistrationHandlerResult<bool>;
}

/// Errors returned by registration handler implementations.
#[derive(Debug, Clone, Error)]
pub enum RegistrationHandlerError {
    /// A service with the same name is already registered for the component.
    #[error("{identity} service named '{name}' is already registered")]
    DuplicateName {
        /// Component identity.
        identity: ComponentIdentity,
        /// Conflicting service name.
        name: String,
    },

    /// The partition already holds a service of the component.
    #[error("partition {partition} already holds a {identity} service")]
    PartitionOccupied {
        /// Component identity.
        identity: ComponentIdentity,
        /// Occupied partition.
        partition: Partition,
    },

    /// No service of the component is registered in the partition.
    #[error("no {identity} service is registered in partition {partition}")]
    NotRegistered {
        /// Component identity.
        identity: ComponentIdentity,
        /// Requested partition.
        partition: Partition,
    },

    /// The service builder rejected the configuration.
    #[error("configuration rejected: {0}")]
    Rejected(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistrationHandlerError {
    /// Wraps a builder validation failure.
    pub fn rejected(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Rejected(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
