//! Block storage controller builder.

use super::naming::check_name;
use crate::component::{
    builder::{BuilderError, ServiceBuilder},
    domain::{ComponentIdentity, Partition},
};

/// Builds storage controller configurations.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageControllerBuilder;

impl ServiceBuilder for StorageControllerBuilder {
    fn kind(&self) -> &'static str {
        "storage"
    }

    fn component_identity(&self) -> ComponentIdentity {
        ComponentIdentity::STORAGE
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
