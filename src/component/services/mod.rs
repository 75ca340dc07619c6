//! Application services for component registration and discovery.

mod configuration;
mod projection;
mod requests;

pub use configuration::{
    ConfigurationService, ConfigurationServiceError, ConfigurationServiceResult,
};
#[cfg(test)]
pub(crate) use configuration::resolve_partition;
pub use projection::project;
pub use requests::{
    DeregisterComponentRequest, DescribeComponentsRequest, ModifyComponentAttributeRequest,
    RegisterComponentRequest,
};
