//! In-memory adapters for component registration tests and local runs.

mod lifecycle;
mod nodes;
mod topology;

pub use lifecycle::InMemoryLifecycle;
pub use nodes::InMemoryNodeDirectory;
pub use topology::InMemoryTopology;
