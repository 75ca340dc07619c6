//! Request payloads accepted by the configuration service.

use crate::component::domain::RequestType;

/// Request to register a service instance.
///
/// Required fields are optional here so that missing values can be reported
/// as validation failures rather than rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterComponentRequest {
    /// Request type naming the component.
    pub request_type: RequestType,
    /// Service name.
    pub name: Option<String>,
    /// Host the service runs on.
    pub host: Option<String>,
    /// Service port.
    pub port: Option<u16>,
    /// Requested partition.
    pub partition: Option<String>,
}

impl RegisterComponentRequest {
    /// Creates a request with every field set except the partition.
    #[must_use]
    pub fn new(
        request_type: RequestType,
        name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            request_type,
            name: Some(name.into()),
            host: Some(host.into()),
            port: Some(port),
            partition: None,
        }
    }

    /// Creates a request with no fields set.
    #[must_use]
    pub const fn empty(request_type: RequestType) -> Self {
        Self {
            request_type,
            name: None,
            host: None,
            port: None,
            partition: None,
        }
    }

    /// Sets the requested partition.
    #[must_use]
    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }

    /// Clears the host.
    #[must_use]
    pub fn without_host(mut self) -> Self {
        self.host = None;
        self
    }
}

/// Request to remove a service instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeregisterComponentRequest {
    /// Request type naming the component.
    pub request_type: RequestType,
    /// Partition of the service to remove.
    pub partition: String,
}

impl DeregisterComponentRequest {
    /// Creates a deregistration request.
    #[must_use]
    pub fn new(request_type: RequestType, partition: impl Into<String>) -> Self {
        Self {
            request_type,
            partition: partition.into(),
        }
    }
}

/// Request to change an attribute of a registered component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyComponentAttributeRequest {
    /// Request type naming the component.
    pub request_type: RequestType,
    /// Attribute name.
    pub attribute: String,
    /// New attribute value.
    pub value: String,
}

impl ModifyComponentAttributeRequest {
    /// Creates a modify request.
    #[must_use]
    pub fn new(
        request_type: RequestType,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            request_type,
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

/// Request to describe registered components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescribeComponentsRequest {
    /// Whether lifecycle details are included.
    pub verbose: Option<bool>,
    /// Restricts the listing to the component handling this request type.
    pub request_type: Option<RequestType>,
}

impl DescribeComponentsRequest {
    /// Describes every known component.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            verbose: None,
            request_type: None,
        }
    }

    /// Describes every service of the component handling `request_type`.
    #[must_use]
    pub const fn for_request_type(request_type: RequestType) -> Self {
        Self {
            verbose: None,
            request_type: Some(request_type),
        }
    }

    /// Sets the verbose flag.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Returns whether details were explicitly requested.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        matches!(self.verbose, Some(true))
    }
}
