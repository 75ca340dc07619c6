//! In-memory lifecycle adapter for describe tests.

use crate::component::{
    domain::{ServiceConfiguration, ServiceFullName},
    ports::{LifecycleError, LifecycleResult, ServiceLifecycle},
};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Lifecycle adapter backed by a map of recorded states.
///
/// Services with no recorded state report [`LifecycleError::Untracked`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLifecycle {
    records: Arc<RwLock<HashMap<ServiceFullName, LifecycleRecord>>>,
}

#[derive(Debug, Clone, Default)]
struct LifecycleRecord {
    state: RecordedState,
    details: Vec<String>,
}

#[derive(Debug, Clone, Default)]
enum RecordedState {
    #[default]
    Unset,
    Known(String),
    Failed(String),
}

impl InMemoryLifecycle {
    /// Creates an adapter with no recorded states.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current state of a service.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Query`] when lock acquisition fails.
    pub fn set_state(
        &self,
        full_name: &ServiceFullName,
        state: impl Into<String>,
    ) -> LifecycleResult<()> {
        self.update(full_name, |record| {
            record.state = RecordedState::Known(state.into());
        })
    }

    /// Makes state queries for a service fail with `cause`.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Query`] when lock acquisition fails.
    pub fn set_failure(
        &self,
        full_name: &ServiceFullName,
        cause: impl Into<String>,
    ) -> LifecycleResult<()> {
        self.update(full_name, |record| {
            record.state = RecordedState::Failed(cause.into());
        })
    }

    /// Replaces the status details of a service.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::Query`] when lock acquisition fails.
    pub fn set_details(
        &self,
        full_name: &ServiceFullName,
        details: impl IntoIterator<Item = String>,
    ) -> LifecycleResult<()> {
        self.update(full_name, |record| {
            record.details = details.into_iter().collect();
        })
    }

    fn update(
        &self,
        full_name: &ServiceFullName,
        apply: impl FnOnce(&mut LifecycleRecord),
    ) -> LifecycleResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|err| LifecycleError::Query(err.to_string()))?;
        apply(records.entry(full_name.clone()).or_default());
        Ok(())
    }
}

impl ServiceLifecycle for InMemoryLifecycle {
    fn state(&self, service: &ServiceConfiguration) -> LifecycleResult<String> {
        let records = self
            .records
            .read()
            .map_err(|err| LifecycleError::Query(err.to_string()))?;
        match records.get(service.full_name()).map(|record| &record.state) {
            Some(RecordedState::Known(state)) => Ok(state.clone()),
            Some(RecordedState::Failed(cause)) => Err(LifecycleError::Query(cause.clone())),
            Some(RecordedState::Unset) | None => {
                Err(LifecycleError::Untracked(service.full_name().clone()))
            }
        }
    }

    fn details(&self, service: &ServiceConfiguration) -> LifecycleResult<Vec<String>> {
        let records = self
            .records
            .read()
            .map_err(|err| LifecycleError::Query(err.to_string()))?;
        Ok(records
            .get(service.full_name())
            .map(|record| record.details.clone())
            .unwrap_or_default())
    }
}
