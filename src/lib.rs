//! Colonnade: component registration and discovery for a partitioned
//! cluster control plane.
//!
//! Independently pluggable implementations of cluster roles (cluster
//! controllers, storage controllers, the object store, ...) are discovered
//! once at start-up and looked up by component identity or by the
//! administrative request type they handle.
//!
//! # Architecture
//!
//! Colonnade follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external collaborators
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`component`]: Builder registry, plugin discovery and the configuration
//!   service
//! - [`telemetry`]: Logging setup

pub mod component;
pub mod telemetry;
