//! Component registration and discovery for Colonnade.
//!
//! Pluggable implementations of cluster roles declare the request types
//! they handle and the components they build. Discovery registers them once
//! at start-up; the configuration service then dispatches every
//! administrative request through the builder registry. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Builder registry in [`builder`]
//! - Start-time discovery in [`discovery`] over the [`plugins`] manifest
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod builder;
pub mod discovery;
pub mod domain;
pub mod plugins;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
