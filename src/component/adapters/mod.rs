//! Adapter implementations for component registration ports.

pub mod memory;
