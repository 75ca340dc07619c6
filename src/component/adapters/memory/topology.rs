//! In-memory topology and registration handler.

use crate::component::{
    builder::{BuilderError, ServiceBuilderRegistry},
    domain::{ComponentCatalog, ComponentIdentity, Partition, ServiceConfiguration},
    ports::{
        ComponentEntry, ComponentTopology, RegistrationHandler, RegistrationHandlerError,
        RegistrationHandlerResult, TopologyError, TopologyResult,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Thread-safe in-memory set of registered services.
///
/// Registrations are validated by the builder the registry resolves for the
/// component, so discovered plugins and fallbacks both take part. A service
/// is local when its host name matches the configured local host.
pub struct InMemoryTopology<C>
where
    C: Clock + Send + Sync,
{
    catalog: ComponentCatalog,
    builders: Arc<ServiceBuilderRegistry>,
    clock: Arc<C>,
    local_host: Option<String>,
    state: Arc<RwLock<TopologyState>>,
}

#[derive(Debug, Default)]
struct TopologyState {
    services: BTreeMap<ServiceKey, RegisteredService>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ServiceKey {
    component: &'static str,
    partition: Partition,
}

impl ServiceKey {
    fn new(identity: ComponentIdentity, partition: &Partition) -> Self {
        Self {
            component: identity.name(),
            partition: partition.clone(),
        }
    }
}

#[derive(Debug, Clone)]
struct RegisteredService {
    configuration: ServiceConfiguration,
    registered_at: DateTime<Utc>,
}

impl<C> Clone for InMemoryTopology<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            builders: Arc::clone(&self.builders),
            clock: Arc::clone(&self.clock),
            local_host: self.local_host.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<C> InMemoryTopology<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty topology over `catalog`.
    #[must_use]
    pub fn new(
        catalog: ComponentCatalog,
        builders: Arc<ServiceBuilderRegistry>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            catalog,
            builders,
            clock,
            local_host: None,
            state: Arc::new(RwLock::new(TopologyState::default())),
        }
    }

    /// Sets the host name whose services count as local.
    #[must_use]
    pub fn with_local_host(mut self, host_name: impl Into<String>) -> Self {
        self.local_host = Some(host_name.into().trim().to_owned());
        self
    }

    /// Returns when the service of `identity` in `partition` was registered.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::Unavailable`] when lock acquisition fails.
    pub fn registered_at(
        &self,
        identity: ComponentIdentity,
        partition: &Partition,
    ) -> TopologyResult<Option<DateTime<Utc>>> {
        let state = self
            .state
            .read()
            .map_err(|err| TopologyError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state
            .services
            .get(&ServiceKey::new(identity, partition))
            .map(|service| service.registered_at))
    }

    fn is_local(&self, configuration: &ServiceConfiguration) -> bool {
        self.local_host
            .as_deref()
            .is_some_and(|host| host == configuration.host_name())
    }
}

#[async_trait]
impl<C> RegistrationHandler for InMemoryTopology<C>
where
    C: Clock + Send + Sync,
{
    async fn register(
        &self,
        identity: ComponentIdentity,
        partition: &Partition,
        name: &str,
        host_name: &str,
        port: u16,
    ) -> RegistrationHandlerResult<bool> {
        let builder = self.builders.lookup_by_identity(identity);
        let configuration = builder
            .build(partition.clone(), name, host_name, port)
            .map_err(RegistrationHandlerError::rejected)?;
        if configuration.identity() != identity {
            return Err(RegistrationHandlerError::rejected(BuilderError::rejected(
                builder.kind(),
                format!(
                    "built a {} configuration for a {identity} registration",
                    configuration.identity()
                ),
            )));
        }

        let mut state = self.state.write().map_err(|err| {
            RegistrationHandlerError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let key = ServiceKey::new(identity, partition);
        if state.services.contains_key(&key) {
            return Err(RegistrationHandlerError::PartitionOccupied {
                identity,
                partition: partition.clone(),
            });
        }

        let name_taken = state.services.values().any(|service| {
            service.configuration.identity() == identity
                && service.configuration.name() == configuration.name()
        });
        if name_taken {
            return Err(RegistrationHandlerError::DuplicateName {
                identity,
                name: configuration.name().to_owned(),
            });
        }

        info!(
            full_name = %configuration.full_name(),
            builder = builder.kind(),
            "registered service"
        );
        state.services.insert(
            key,
            RegisteredService {
                configuration,
                registered_at: self.clock.utc(),
            },
        );
        Ok(true)
    }

    async fn deregister(
        &self,
        identity: ComponentIdentity,
        partition: &Partition,
    ) -> RegistrationHandlerResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            RegistrationHandlerError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let removed = state
            .services
            .remove(&ServiceKey::new(identity, partition))
            .ok_or_else(|| RegistrationHandlerError::NotRegistered {
                identity,
                partition: partition.clone(),
            })?;
        info!(full_name = %removed.configuration.full_name(), "deregistered service");
        Ok(true)
    }
}

#[async_trait]
impl<C> ComponentTopology for InMemoryTopology<C>
where
    C: Clock + Send + Sync,
{
    async fn list_components(&self) -> TopologyResult<Vec<ComponentEntry>> {
        let state = self
            .state
            .read()
            .map_err(|err| TopologyError::unavailable(std::io::Error::other(err.to_string())))?;

        let entries = self
            .catalog
            .iter()
            .map(|identity| ComponentEntry {
                identity,
                local_service: state
                    .services
                    .values()
                    .map(|service| &service.configuration)
                    .find(|configuration| {
                        configuration.identity() == identity && self.is_local(configuration)
                    })
                    .cloned(),
            })
            .collect();
        Ok(entries)
    }

    async fn list_configurations(
        &self,
        identity: ComponentIdentity,
    ) -> TopologyResult<Vec<ServiceConfiguration>> {
        let state = self
            .state
            .read()
            .map_err(|err| TopologyError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state
            .services
            .values()
            .filter(|service| service.configuration.identity() == identity)
            .map(|service| service.configuration.clone())
            .collect())
    }
}
