//! Cluster controller builder.

use super::naming::check_name;
use crate::component::{
    builder::{BuilderError, ServiceBuilder},
    domain::{ComponentIdentity, Partition},
};

/// Builds cluster controller configurations.
///
/// A cluster controller owns one availability zone, so both the controller
/// name and its partition must be plain identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterBuilder;

impl ServiceBuilder for ClusterBuilder {
    fn kind(&self) -> &'static str {
        "cluster"
    }

    fn component_identity(&self) -> ComponentIdentity {
        ComponentIdentity::CLUSTER
    }

    fn validate(
        &self,
        partition: &Partition,
        name: &str,
        _host_name: &str,
        _port: u16,
    ) -> Result<(), BuilderError> {
        check_name(self.kind(), "name", name)?;
        check_name(self.kind(), "partition", partition.as_str())
    }
}
