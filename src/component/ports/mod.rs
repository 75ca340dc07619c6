//! Port contracts for component registration and discovery.
//!
//! Ports define infrastructure-agnostic interfaces to the external
//! collaborators the configuration service delegates to.

pub mod lifecycle;
pub mod nodes;
pub mod registration;
pub mod topology;

pub use lifecycle::{LifecycleError, LifecycleResult, ServiceLifecycle};
pub use nodes::NodeDirectory;
pub use registration::{RegistrationHandler, RegistrationHandlerError, RegistrationHandlerResult};
pub use topology::{ComponentEntry, ComponentTopology, TopologyError, TopologyResult};
