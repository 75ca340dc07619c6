//! Unit tests for component registration and discovery.
