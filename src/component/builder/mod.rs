//! Service builders and the registry that dispatches to them.

mod capabilities;
mod registry;
mod service_builder;

pub use capabilities::BuilderCapabilities;
pub use registry::{RegistryError, RegistryResult, ServiceBuilderRegistry};
pub use service_builder::{BuilderError, FallbackBuilder, ServiceBuilder};
