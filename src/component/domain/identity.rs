//! Component identities and the process-wide catalog of known roles.

use std::fmt;

/// How instances of a component are assigned to partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionPolicy {
    /// Every instance names its own partition.
    PerInstance,
    /// All instances share one fixed partition.
    Fixed(&'static str),
}

/// Static description of a pluggable cluster role.
///
/// Identities are defined once as constants and shared by copy; two
/// identities are equal only when every field matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentIdentity {
    name: &'static str,
    policy: PartitionPolicy,
}

impl ComponentIdentity {
    /// The cloud controller. One per deployment.
    pub const CLOUD: Self = Self::unpartitioned("cloud", "cloud");
    /// A cluster controller, one per availability zone.
    pub const CLUSTER: Self = Self::partitioned("cluster");
    /// A node agent running instances inside a cluster.
    pub const NODE: Self = Self::partitioned("node");
    /// A block storage controller, one per availability zone.
    pub const STORAGE: Self = Self::partitioned("storage");
    /// The object store. One per deployment.
    pub const WALRUS: Self = Self::unpartitioned("walrus", "walrus");
    /// A network reachability arbitrator.
    pub const ARBITRATOR: Self = Self::partitioned("arbitrator");

    /// Creates an identity whose instances each name their own partition.
    #[must_use]
    pub const fn partitioned(name: &'static str) -> Self {
        Self {
            name,
            policy: PartitionPolicy::PerInstance,
        }
    }

    /// Creates an identity whose instances all live in `fixed_partition`.
    #[must_use]
    pub const fn unpartitioned(name: &'static str, fixed_partition: &'static str) -> Self {
        Self {
            name,
            policy: PartitionPolicy::Fixed(fixed_partition),
        }
    }

    /// Returns the stable component name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the partition assignment policy.
    #[must_use]
    pub const fn partition_policy(&self) -> PartitionPolicy {
        self.policy
    }

    /// Returns whether instances must be registered with a partition.
    #[must_use]
    pub const fn is_partitioned(&self) -> bool {
        matches!(self.policy, PartitionPolicy::PerInstance)
    }

    /// Returns the fixed partition of an unpartitioned component.
    #[must_use]
    pub const fn fixed_partition(&self) -> Option<&'static str> {
        match self.policy {
            PartitionPolicy::Fixed(partition) => Some(partition),
            PartitionPolicy::PerInstance => None,
        }
    }
}

impl fmt::Display for ComponentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Immutable list of the component identities known to this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentCatalog {
    identities: Vec<ComponentIdentity>,
}

impl ComponentCatalog {
    /// Creates a catalog from the given identities.
    ///
    /// Later identities reusing an earlier name are dropped.
    #[must_use]
    pub fn new(identities: impl IntoIterator<Item = ComponentIdentity>) -> Self {
        let mut unique: Vec<ComponentIdentity> = Vec::new();
        for identity in identities {
            if !unique.iter().any(|known| known.name() == identity.name()) {
                unique.push(identity);
            }
        }
        Self { identities: unique }
    }

    /// Returns the catalog of built-in cluster roles.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new([
            ComponentIdentity::CLOUD,
            ComponentIdentity::CLUSTER,
            ComponentIdentity::NODE,
            ComponentIdentity::STORAGE,
            ComponentIdentity::WALRUS,
            ComponentIdentity::ARBITRATOR,
        ])
    }

    /// Finds an identity by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ComponentIdentity> {
        self.identities
            .iter()
            .find(|identity| identity.name() == name)
            .copied()
    }

    /// Iterates over identities in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = ComponentIdentity> + '_ {
        self.identities.iter().copied()
    }

    /// Returns the number of identities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.identities.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

impl Default for ComponentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
