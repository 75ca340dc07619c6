//! In-memory node directory.

use crate::component::{
    domain::NodeRegistration,
    ports::{NodeDirectory, TopologyError, TopologyResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Node directory holding a fixed list of node registrations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNodeDirectory {
    nodes: Arc<RwLock<Vec<NodeRegistration>>>,
}

impl InMemoryNodeDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node registration.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::Unavailable`] when lock acquisition fails.
    pub fn add_node(&self, node: NodeRegistration) -> TopologyResult<()> {
        let mut nodes = self
            .nodes
            .write()
            .map_err(|err| TopologyError::unavailable(std::io::Error::other(err.to_string())))?;
        nodes.push(node);
        Ok(())
    }
}

#[async_trait]
impl NodeDirectory for InMemoryNodeDirectory {
    async fn describe_nodes(&self) -> TopologyResult<Vec<NodeRegistration>> {
        let nodes = self
            .nodes
            .read()
            .map_err(|err| TopologyError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(nodes.clone())
    }
}
