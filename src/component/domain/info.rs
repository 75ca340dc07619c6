//! Read-only projections returned by describe operations.

use super::ComponentIdentity;
use serde::{Deserialize, Serialize};

/// Describe-time view of one component or registered service.
///
/// Absent values are rendered as empty strings, never omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// Component name.
    #[serde(rename = "type")]
    pub component_type: String,
    /// Partition the service is registered in.
    pub partition: String,
    /// Service name.
    pub name: String,
    /// Host the service runs on.
    pub host_name: String,
    /// Derived full name of the service.
    pub full_name: String,
    /// Lifecycle state, or an `n/a: <cause>` diagnostic.
    pub state: String,
    /// First lifecycle detail, if requested.
    pub detail: String,
}

impl ComponentInfo {
    /// Creates the placeholder entry for a component with no local service.
    #[must_use]
    pub fn without_local_service(identity: ComponentIdentity) -> Self {
        Self {
            component_type: identity.name().to_owned(),
            partition: identity.fixed_partition().unwrap_or_default().to_owned(),
            ..Self::default()
        }
    }

    /// Clears the detail field.
    #[must_use]
    pub fn without_detail(mut self) -> Self {
        self.detail.clear();
        self
    }
}

/// Registration record of a node agent, as reported by the node directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRegistration {
    /// Node name.
    pub name: String,
    /// Cluster partition the node belongs to.
    pub partition: String,
    /// Host the node agent runs on.
    pub host_name: String,
    /// Last reported node state.
    pub state: String,
}

impl NodeRegistration {
    /// Creates a node registration record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        partition: impl Into<String>,
        host_name: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            partition: partition.into(),
            host_name: host_name.into(),
            state: state.into(),
        }
    }
}
