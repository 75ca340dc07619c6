//! Projection of registered services into describe output.

use crate::component::{
    domain::{ComponentInfo, ServiceConfiguration},
    ports::ServiceLifecycle,
};

/// Projects `service` into a [`ComponentInfo`].
///
/// State query failures render as `n/a: <cause>`. The detail is the first
/// lifecycle detail, or empty when there is none or the query fails.
#[must_use]
pub fn project<L>(service: &ServiceConfiguration, lifecycle: &L) -> ComponentInfo
where
    L: ServiceLifecycle + ?Sized,
{
    let state = lifecycle
        .state(service)
        .unwrap_or_else(|err| format!("n/a: {err}"));
    let detail = lifecycle
        .details(service)
        .ok()
        .and_then(|details| details.into_iter().next())
        .unwrap_or_default();

    ComponentInfo {
        component_type: service.identity().name().to_owned(),
        partition: service.partition().to_string(),
        name: service.name().to_owned(),
        host_name: service.host_name().to_owned(),
        full_name: service.full_name().to_string(),
        state,
        detail,
    }
}
