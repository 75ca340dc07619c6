//! Node directory port.

use super::TopologyResult;
use crate::component::domain::NodeRegistration;
use async_trait::async_trait;

/// Supplies registration records of node agents.
#[async_trait]
pub trait NodeDirectory: Send + Sync {
    /// Lists every known node registration.
    async fn describe_nodes(&self) -> TopologyResult<Vec<NodeRegistration>>;
}
