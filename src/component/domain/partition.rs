//! Validated partition name.

use super::ComponentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named scope within which instances of a partitioned role are
/// distinguished, typically an availability zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition(String);

impl Partition {
    /// Creates a partition name.
    ///
    /// The input is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentDomainError::EmptyPartition`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ComponentDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(ComponentDomainError::EmptyPartition);
        }
        Ok(Self(normalized))
    }

    /// Returns the partition as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Partition {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
