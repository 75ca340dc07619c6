//! Lifecycle port: live state of a running service.

use crate::component::domain::{ServiceConfiguration, ServiceFullName};
use thiserror::Error;

/// Result type for lifecycle queries.
pub type LifecycleResult<T> = Result<T, LifecycleError>;

/// Reports the lifecycle state machine of registered services.
pub trait ServiceLifecycle: Send + Sync {
    /// Returns the current lifecycle state of `service`.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError`] when the state cannot be determined.
    fn state(&self, service: &ServiceConfiguration) -> LifecycleResult<String>;

    /// Returns free-form status details of `service`, most relevant first.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError`] when the details cannot be read.
    fn details(&self, service: &ServiceConfiguration) -> LifecycleResult<Vec<String>>;
}

/// Errors returned by lifecycle adapters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifecycleError {
    /// No state machine tracks the service.
    #[error("no lifecycle tracked for {0}")]
    Untracked(ServiceFullName),

    /// The state machine failed to answer.
    #[error("{0}")]
    Query(String),
}
