//! Step definitions for component registration BDD scenarios.

pub mod world;

mod given;
mod when;
