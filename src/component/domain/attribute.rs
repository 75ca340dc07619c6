//! Component attributes accepted by modify requests.

use super::ParseComponentAttributeError;
use std::fmt;

/// Attribute of a registered component that a modify request may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentAttribute {
    /// The partition the service is registered in.
    Partition,
    /// The lifecycle state of the service.
    State,
}

impl ComponentAttribute {
    /// Returns the canonical attribute name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Partition => "partition",
            Self::State => "state",
        }
    }
}

impl fmt::Display for ComponentAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ComponentAttribute {
    type Error = ParseComponentAttributeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "partition" => Ok(Self::Partition),
            "state" => Ok(Self::State),
            _ => Err(ParseComponentAttributeError(value.to_owned())),
        }
    }
}
