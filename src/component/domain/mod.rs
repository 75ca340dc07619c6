//! Domain model for component registration and discovery.
//!
//! Component identities describe the pluggable cluster roles; service
//! configurations describe registered instances of those roles. All
//! infrastructure concerns are kept outside the domain boundary.

mod attribute;
mod configuration;
mod error;
mod identity;
mod info;
mod partition;
mod request;

pub use attribute::ComponentAttribute;
pub use configuration::{ServiceConfiguration, ServiceFullName};
pub use error::{ComponentDomainError, ParseComponentAttributeError};
pub use identity::{ComponentCatalog, ComponentIdentity, PartitionPolicy};
pub use info::{ComponentInfo, NodeRegistration};
pub use partition::Partition;
pub use request::RequestType;
