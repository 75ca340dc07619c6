//! Service builder capability and its identity-only fallback.

use crate::component::domain::{
    ComponentDomainError, ComponentIdentity, Partition, ServiceConfiguration,
};
use std::fmt;
use thiserror::Error;

/// Errors returned by service builders while validating a registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// The configuration failed domain validation.
    #[error(transparent)]
    Domain(#[from] ComponentDomainError),

    /// The builder rejected the registration for a role-specific reason.
    #[error("{kind} builder rejected the registration: {reason}")]
    Rejected {
        /// Builder kind that rejected the registration.
        kind: &'static str,
        /// Human-readable rejection reason.
        reason: String,
    },
}

impl BuilderError {
    /// Creates a role-specific rejection.
    pub fn rejected(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            kind,
            reason: reason.into(),
        }
    }
}

/// Validates and constructs service configurations for one component.
///
/// Builders are singletons shared by every request type and identity they
/// are registered under.
pub trait ServiceBuilder: Send + Sync + fmt::Debug {
    /// Returns a short name for the builder implementation.
    fn kind(&self) -> &'static str;

    /// Returns the component this builder serves.
    fn component_identity(&self) -> ComponentIdentity;

    /// Checks role-specific registration rules.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError`] when the registration is not acceptable.
    fn validate(
        &self,
        _partition: &Partition,
        _name: &str,
        _host_name: &str,
        _port: u16,
    ) -> Result<(), BuilderError> {
        Ok(())
    }

    /// Validates and constructs a configuration for a new service.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError`] when validation fails.
    fn build(
        &self,
        partition: Partition,
        name: &str,
        host_name: &str,
        port: u16,
    ) -> Result<ServiceConfiguration, BuilderError> {
        self.validate(&partition, name, host_name, port)?;
        Ok(ServiceConfiguration::new(
            self.component_identity(),
            partition,
            name,
            host_name,
            port,
        )?)
    }
}

/// Builder installed for an identity no discovered plugin serves.
///
/// It reports its identity and applies only the domain validation every
/// configuration goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackBuilder {
    identity: ComponentIdentity,
}

impl FallbackBuilder {
    /// Creates a fallback builder for `identity`.
    #[must_use]
    pub const fn new(identity: ComponentIdentity) -> Self {
        Self { identity }
    }
}

impl ServiceBuilder for FallbackBuilder {
    fn kind(&self) -> &'static str {
        "fallback"
    }

    fn component_identity(&self) -> ComponentIdentity {
        self.identity
    }
}
