//! Lookup tables from request types and identities to service builders.
//!
//! The registry is populated by discovery before it is shared. After that,
//! lookups run concurrently without blocking each other; the only write on
//! the hot path is the one-time installation of a fallback builder.

use super::{FallbackBuilder, ServiceBuilder};
use crate::component::domain::{ComponentIdentity, RequestType};
use dashmap::DashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Errors returned by registry lookups.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No builder was registered for the request type.
    #[error("no service builder handles request type {0}")]
    NotFound(RequestType),
}

/// Result type for registry lookups.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Request-type and identity tables of service builders.
#[derive(Debug, Default)]
pub struct ServiceBuilderRegistry {
    by_request_type: DashMap<RequestType, Arc<dyn ServiceBuilder>>,
    by_identity: DashMap<ComponentIdentity, Arc<dyn ServiceBuilder>>,
}

impl ServiceBuilderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `builder` as the handler of `request_type`.
    ///
    /// The last registration wins. Every replacement is logged; replacing a
    /// different builder is a configuration error and logs a warning.
    pub fn register_for_request_type(
        &self,
        request_type: RequestType,
        builder: Arc<dyn ServiceBuilder>,
    ) {
        let kind = builder.kind();
        let address = Arc::as_ptr(&builder).cast::<()>();
        trace!(
            request_type = %request_type,
            builder = kind,
            "registered service builder for request type"
        );
        let Some(previous) = self.by_request_type.insert(request_type, builder) else {
            return;
        };
        if std::ptr::eq(Arc::as_ptr(&previous).cast::<()>(), address) {
            debug!(
                request_type = %request_type,
                builder = kind,
                "request type re-registered with the same service builder"
            );
        } else {
            warn!(
                request_type = %request_type,
                previous = previous.kind(),
                builder = kind,
                "request type claimed by more than one service builder, keeping the latest"
            );
        }
    }

    /// Registers `builder` as the designated builder for `identity`.
    pub fn register_for_identity(
        &self,
        identity: ComponentIdentity,
        builder: Arc<dyn ServiceBuilder>,
    ) {
        trace!(
            component = %identity,
            builder = builder.kind(),
            "registered service builder for component"
        );
        self.by_identity.insert(identity, builder);
    }

    /// Returns the builder handling `request_type`.
    ///
    /// Only the exact request type matches.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no builder was registered for
    /// the request type.
    pub fn lookup_by_request_type(
        &self,
        request_type: RequestType,
    ) -> RegistryResult<Arc<dyn ServiceBuilder>> {
        self.by_request_type
            .get(&request_type)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(RegistryError::NotFound(request_type))
    }

    /// Returns the builder for `identity`, installing a [`FallbackBuilder`]
    /// the first time an identity without a discovered builder is queried.
    ///
    /// Concurrent callers racing on the same absent identity all receive the
    /// first installed fallback.
    #[must_use]
    pub fn lookup_by_identity(&self, identity: ComponentIdentity) -> Arc<dyn ServiceBuilder> {
        if let Some(entry) = self.by_identity.get(&identity) {
            return Arc::clone(entry.value());
        }

        let entry = self.by_identity.entry(identity).or_insert_with(|| {
            debug!(component = %identity, "no discovered service builder, installing fallback");
            let fallback: Arc<dyn ServiceBuilder> = Arc::new(FallbackBuilder::new(identity));
            fallback
        });
        Arc::clone(entry.value())
    }

    /// Returns the component served by the builder handling `request_type`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no builder was registered for
    /// the request type.
    pub fn identity_for_request_type(
        &self,
        request_type: RequestType,
    ) -> RegistryResult<ComponentIdentity> {
        Ok(self
            .lookup_by_request_type(request_type)?
            .component_identity())
    }

    /// Returns every registered request type, sorted by name.
    #[must_use]
    pub fn request_types(&self) -> Vec<RequestType> {
        let mut request_types: Vec<RequestType> =
            self.by_request_type.iter().map(|entry| *entry.key()).collect();
        request_types.sort_unstable();
        request_types
    }

    /// Returns whether a builder, discovered or fallback, is installed for
    /// `identity`.
    #[must_use]
    pub fn has_builder_for(&self, identity: ComponentIdentity) -> bool {
        self.by_identity.contains_key(&identity)
    }
}
