//! Capability tags a builder declares at registration time.

use crate::component::domain::{ComponentIdentity, RequestType};

/// Request types a builder handles and identities it is the designated
/// builder for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderCapabilities {
    request_types: &'static [RequestType],
    identities: &'static [ComponentIdentity],
}

impl BuilderCapabilities {
    /// Creates a capability set.
    #[must_use]
    pub const fn new(
        request_types: &'static [RequestType],
        identities: &'static [ComponentIdentity],
    ) -> Self {
        Self {
            request_types,
            identities,
        }
    }

    /// Creates an empty capability set.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(&[], &[])
    }

    /// Returns the handled request types.
    #[must_use]
    pub const fn request_types(&self) -> &'static [RequestType] {
        self.request_types
    }

    /// Returns the served component identities.
    #[must_use]
    pub const fn identities(&self) -> &'static [ComponentIdentity] {
        self.identities
    }

    /// Returns whether nothing is declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.request_types.is_empty() && self.identities.is_empty()
    }
}
