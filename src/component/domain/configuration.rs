//! Registered service instances.

use super::{ComponentDomainError, ComponentIdentity, Partition};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Deterministic, fully qualified name of a registered service.
///
/// Rendered as `{component}:{partition}:{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceFullName(String);

impl ServiceFullName {
    /// Derives the full name of a service.
    #[must_use]
    pub fn new(identity: ComponentIdentity, partition: &Partition, name: &str) -> Self {
        Self(format!("{}:{partition}:{name}", identity.name()))
    }

    /// Returns the full name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceFullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered, addressable running instance of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfiguration {
    identity: ComponentIdentity,
    partition: Partition,
    name: String,
    host_name: String,
    port: u16,
    full_name: ServiceFullName,
}

impl ServiceConfiguration {
    /// Creates a validated service configuration.
    ///
    /// Name and host name are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentDomainError::EmptyName`] or
    /// [`ComponentDomainError::EmptyHostName`] when the corresponding field
    /// is blank, and [`ComponentDomainError::InvalidPort`] when `port` is 0.
    pub fn new(
        identity: ComponentIdentity,
        partition: Partition,
        raw_name: impl Into<String>,
        raw_host_name: impl Into<String>,
        port: u16,
    ) -> Result<Self, ComponentDomainError> {
        let name = raw_name.into().trim().to_owned();
        let host_name = raw_host_name.into().trim().to_owned();

        if name.is_empty() {
            return Err(ComponentDomainError::EmptyName);
        }
        if host_name.is_empty() {
            return Err(ComponentDomainError::EmptyHostName);
        }
        if port == 0 {
            return Err(ComponentDomainError::InvalidPort);
        }

        let full_name = ServiceFullName::new(identity, &partition, &name);
        Ok(Self {
            identity,
            partition,
            name,
            host_name,
            port,
            full_name,
        })
    }

    /// Returns the component this service is an instance of.
    #[must_use]
    pub const fn identity(&self) -> ComponentIdentity {
        self.identity
    }

    /// Returns the partition the service is registered in.
    #[must_use]
    pub const fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Returns the service name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the host the service runs on.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Returns the service port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the derived full name.
    #[must_use]
    pub const fn full_name(&self) -> &ServiceFullName {
        &self.full_name
    }
}
