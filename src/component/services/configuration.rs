//! Service layer for component registration, deregistration and discovery.
//!
//! Provides [`ConfigurationService`], the administrative operation surface.
//! Each operation validates its request, resolves the component through the
//! builder registry, and delegates to the external collaborators.

use super::{
    projection::project,
    requests::{
        DeregisterComponentRequest, DescribeComponentsRequest, ModifyComponentAttributeRequest,
        RegisterComponentRequest,
    },
};
use crate::component::{
    builder::{RegistryError, ServiceBuilderRegistry},
    domain::{
        ComponentAttribute, ComponentDomainError, ComponentIdentity, ComponentInfo,
        NodeRegistration, Partition, PartitionPolicy,
    },
    ports::{
        ComponentTopology, NodeDirectory, RegistrationHandler, RegistrationHandlerError,
        ServiceLifecycle, TopologyError,
    },
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigurationServiceError {
    /// A required registration field is missing or invalid.
    #[error("invalid component request: {0}")]
    Validation(#[from] ComponentDomainError),

    /// A modify request named an attribute outside the recognised set.
    #[error("request to modify unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The registration handler failed.
    #[error("component registration failed because: {source}")]
    RegistrationFailed {
        /// Handler failure.
        source: RegistrationHandlerError,
    },

    /// The registration handler failed to deregister.
    #[error("component deregistration failed because: {source}")]
    DeregistrationFailed {
        /// Handler failure.
        source: RegistrationHandlerError,
    },

    /// No builder handles the request type.
    #[error(transparent)]
    NotFound(#[from] RegistryError),

    /// The topology or node directory could not be read.
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Result type for configuration service operations.
pub type ConfigurationServiceResult<T> = Result<T, ConfigurationServiceError>;

/// Component registration and discovery orchestration service.
pub struct ConfigurationService<H, T, L, N>
where
    H: RegistrationHandler,
    T: ComponentTopology,
    L: ServiceLifecycle,
    N: NodeDirectory,
{
    builders: Arc<ServiceBuilderRegistry>,
    handler: Arc<H>,
    topology: Arc<T>,
    lifecycle: Arc<L>,
    nodes: Arc<N>,
}

impl<H, T, L, N> Clone for ConfigurationService<H, T, L, N>
where
    H: RegistrationHandler,
    T: ComponentTopology,
    L: ServiceLifecycle,
    N: NodeDirectory,
{
    fn clone(&self) -> Self {
        Self {
            builders: Arc::clone(&self.builders),
            handler: Arc::clone(&self.handler),
            topology: Arc::clone(&self.topology),
            lifecycle: Arc::clone(&self.lifecycle),
            nodes: Arc::clone(&self.nodes),
        }
    }
}

impl<H, T, L, N> ConfigurationService<H, T, L, N>
where
    H: RegistrationHandler,
    T: ComponentTopology,
    L: ServiceLifecycle,
    N: NodeDirectory,
{
    /// Creates a new configuration service.
    ///
    /// `builders` must already be populated by discovery.
    #[must_use]
    pub const fn new(
        builders: Arc<ServiceBuilderRegistry>,
        handler: Arc<H>,
        topology: Arc<T>,
        lifecycle: Arc<L>,
        nodes: Arc<N>,
    ) -> Self {
        Self {
            builders,
            handler,
            topology,
            lifecycle,
            nodes,
        }
    }

    /// Registers a service instance of the component handling the request
    /// type.
    ///
    /// Unpartitioned components always use their fixed partition. A
    /// partitioned component registered without a partition uses the service
    /// name as its partition.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationServiceError::NotFound`] when no builder handles
    /// the request type, [`ConfigurationServiceError::Validation`] when name,
    /// host or port is missing, and
    /// [`ConfigurationServiceError::RegistrationFailed`] when the handler
    /// fails.
    pub async fn register(
        &self,
        request: RegisterComponentRequest,
    ) -> ConfigurationServiceResult<bool> {
        let identity = self
            .builders
            .identity_for_request_type(request.request_type)?;

        let RegisterComponentRequest {
            name: raw_name,
            host: raw_host,
            port: raw_port,
            partition: requested_partition,
            ..
        } = request;
        let name = require(raw_name, ComponentDomainError::EmptyName)?;
        let host_name = require(raw_host, ComponentDomainError::EmptyHostName)?;
        let port = raw_port
            .filter(|value| *value != 0)
            .ok_or(ComponentDomainError::InvalidPort)?;
        let partition = resolve_partition(identity, requested_partition.as_deref(), &name)?;

        self.handler
            .register(identity, &partition, &name, &host_name, port)
            .await
            .map_err(|source| ConfigurationServiceError::RegistrationFailed { source })
    }

    /// Deregisters the service of the component handling the request type in
    /// the given partition.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationServiceError::NotFound`] when no builder handles
    /// the request type, and [`ConfigurationServiceError::DeregistrationFailed`]
    /// when the partition is blank or the handler fails.
    pub async fn deregister(
        &self,
        request: DeregisterComponentRequest,
    ) -> ConfigurationServiceResult<bool> {
        let identity = self
            .builders
            .identity_for_request_type(request.request_type)?;
        let partition = Partition::new(request.partition).map_err(|err| {
            ConfigurationServiceError::DeregistrationFailed {
                source: RegistrationHandlerError::rejected(err),
            }
        })?;

        self.handler
            .deregister(identity, &partition)
            .await
            .map_err(|source| ConfigurationServiceError::DeregistrationFailed { source })
    }

    /// Validates a modify request.
    ///
    /// Only `partition` and `state` are recognised. No attribute is changed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationServiceError::UnknownAttribute`] before any
    /// lookup when the attribute is not recognised, and
    /// [`ConfigurationServiceError::NotFound`] when no builder handles the
    /// request type.
    pub fn modify(
        &self,
        request: &ModifyComponentAttributeRequest,
    ) -> ConfigurationServiceResult<()> {
        let attribute = ComponentAttribute::try_from(request.attribute.as_str())
            .map_err(|err| ConfigurationServiceError::UnknownAttribute(err.0))?;
        let identity = self
            .builders
            .identity_for_request_type(request.request_type)?;
        let builder = self.builders.lookup_by_identity(identity);

        info!(component = %identity, builder = builder.kind(), "using builder");
        warn!(
            component = %identity,
            attribute = %attribute,
            value = %request.value,
            "nothing to do while processing modify request"
        );
        Ok(())
    }

    /// Describes registered components.
    ///
    /// Without a request type, every known component is listed: its local
    /// service when one runs on this host, otherwise a placeholder with empty
    /// fields. With a request type, every service of the handling component
    /// is listed. Details are cleared unless verbose output was requested.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationServiceError::NotFound`] when the request type
    /// is not handled, or [`ConfigurationServiceError::Topology`] when the
    /// topology cannot be read.
    pub async fn describe_components(
        &self,
        request: DescribeComponentsRequest,
    ) -> ConfigurationServiceResult<Vec<ComponentInfo>> {
        let infos: Vec<ComponentInfo> = match request.request_type {
            None => self
                .topology
                .list_components()
                .await?
                .into_iter()
                .map(|entry| {
                    let identity = entry.identity;
                    entry.local_service.map_or_else(
                        || ComponentInfo::without_local_service(identity),
                        |service| project(&service, &*self.lifecycle),
                    )
                })
                .collect(),
            Some(request_type) => {
                let identity = self.builders.identity_for_request_type(request_type)?;
                self.topology
                    .list_configurations(identity)
                    .await?
                    .iter()
                    .map(|service| project(service, &*self.lifecycle))
                    .collect()
            }
        };

        if request.is_verbose() {
            return Ok(infos);
        }
        Ok(infos.into_iter().map(ComponentInfo::without_detail).collect())
    }

    /// Lists node registrations supplied by the node directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationServiceError::Topology`] when the directory
    /// cannot be read.
    pub async fn describe_nodes(&self) -> ConfigurationServiceResult<Vec<NodeRegistration>> {
        Ok(self.nodes.describe_nodes().await?)
    }
}

fn require(
    value: Option<String>,
    missing: ComponentDomainError,
) -> Result<String, ComponentDomainError> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
        .ok_or(missing)
}

/// Chooses the partition a service is registered in.
///
/// Caller mistakes are logged and corrected rather than rejected.
pub(crate) fn resolve_partition(
    identity: ComponentIdentity,
    requested: Option<&str>,
    name: &str,
) -> Result<Partition, ComponentDomainError> {
    let named = requested.map(str::trim).filter(|value| !value.is_empty());
    match identity.partition_policy() {
        PartitionPolicy::Fixed(fixed) => {
            if let Some(value) = named
                && value != fixed
            {
                warn!(
                    component = %identity,
                    requested = value,
                    partition = fixed,
                    "unpartitioned component registered with a partition, using its fixed partition"
                );
            }
            Partition::new(fixed)
        }
        PartitionPolicy::PerInstance => named.map_or_else(
            || {
                warn!(
                    component = %identity,
                    partition = name,
                    "partitioned component registered without a partition, using its name"
                );
                Partition::new(name)
            },
            Partition::new,
        ),
    }
}
