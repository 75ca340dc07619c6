//! Request type keys used to dispatch administrative requests to builders.

use std::fmt;

/// Name of an administrative request message type, such as
/// `RegisterClusterType`.
///
/// Each request type is handled by exactly one service builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestType(&'static str);

impl RequestType {
    /// Creates a request type key.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the request type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
