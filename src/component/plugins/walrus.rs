//! Object store builder.

use super::naming::check_name;
use crate::component::{
    builder::{BuilderError, ServiceBuilder},
    domain::{ComponentIdentity, Partition},
};

/// Builds object store configurations.
///
/// The object store is unpartitioned; a configuration outside its fixed
/// partition is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalrusBuilder;

impl ServiceBuilder for WalrusBuilder {
    fn kind(&self) -> &'static str {
        "walrus"
    }

    fn component_identity(&self) -> ComponentIdentity {
        ComponentIdentity::WALRUS
    }

    fn validate(
        &self,
        partition: &Partition,
        name: &str,
        _host_name: &str,
        _port: u16,
    ) -> Result<(), BuilderError> {
        check_name(self.kind(), "name", name)?;
        match self.component_identity().fixed_partition() {
            Some(fixed) if fixed != partition.as_str() => Err(BuilderError::rejected(
                self.kind(),
                format!("partition must be '{fixed}', got '{partition}'"),
            )),
            _ => Ok(()),
        }
    }
}
