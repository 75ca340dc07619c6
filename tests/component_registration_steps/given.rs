//! Given steps for component registration BDD scenarios.

use super::world::{LOCAL_HOST, RegistrationWorld, requests_for, run_async};
use colonnade::{
    component::{discovery::DiscoveryConfig, services::RegisterComponentRequest},
    telemetry,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("a control plane with the built-in plugins")]
fn control_plane_with_builtins(world: &mut RegistrationWorld) {
    let _ = telemetry::init_tracing();
    *world = RegistrationWorld::default();
}

#[given(r#"a control plane with plugin "{plugin}" disabled"#)]
fn control_plane_with_disabled_plugin(world: &mut RegistrationWorld, plugin: String) {
    let _ = telemetry::init_tracing();
    *world = RegistrationWorld::with_config(DiscoveryConfig::default().with_disabled(plugin));
}

#[given(r#"a registered {component} service "{name}" in partition "{partition}""#)]
fn registered_service(
    world: &mut RegistrationWorld,
    component: String,
    name: String,
    partition: String,
) -> Result<(), eyre::Report> {
    let requests = requests_for(&component)?;
    let request = RegisterComponentRequest::new(requests.register, name, LOCAL_HOST, 8774)
        .with_partition(partition);
    run_async(world.service.register(request)).wrap_err("register service for scenario")?;
    Ok(())
}
