//! Error types for component domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing component domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ComponentDomainError {
    /// The service name is missing or blank.
    #[error("name must not be empty")]
    EmptyName,

    /// The host name is missing or blank.
    #[error("host name must not be empty")]
    EmptyHostName,

    /// The port is missing or zero.
    #[error("port must be a non-zero value")]
    InvalidPort,

    /// The partition is blank after trimming.
    #[error("partition must not be empty")]
    EmptyPartition,
}

/// Error returned when a modify request names an unrecognised attribute.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown component attribute: {0}")]
pub struct ParseComponentAttributeError(pub String);
