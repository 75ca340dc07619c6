//! Reachability arbitrator builder.

use super::naming::check_name;
use crate::component::{
    builder::{BuilderError, ServiceBuilder},
    domain::{ComponentIdentity, Partition},
};

/// Builds arbitrator configurations.
///
/// Arbitrators check reachability from outside the controller host, so a
/// loopback host name is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArbitratorBuilder;

impl ServiceBuilder for ArbitratorBuilder {
    fn kind(&self) -> &'static str {
        "arbitrator"
    }

    fn component_identity(&self) -> ComponentIdentity {
        ComponentIdentity::ARBITRATOR
    }

    fn validate(
        &self,
        _partition: &Partition,
        name: &str,
        host_name: &str,
        _port: u16,
    ) -> Result<(), BuilderError> {
        check_name(self.kind(), "name", name)?;
        if is_loopback(host_name) {
            return Err(BuilderError::rejected(
                self.kind(),
                format!("host '{host_name}' is a loopback address"),
            ));
        }
        Ok(())
    }
}

fn is_loopback(host_name: &str) -> bool {
    let host = host_name.trim();
    host.eq_ignore_ascii_case("localhost") || host.starts_with("127.") || host == "::1"
}
