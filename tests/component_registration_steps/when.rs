//! When steps for component registration BDD scenarios.

use super::world::{RegistrationWorld, requests_for, run_async};
use colonnade::component::services::{
    DeregisterComponentRequest, ModifyComponentAttributeRequest, RegisterComponentRequest,
};
use rstest_bdd_macros::when;

#[when(r#"a {component} service "{name}" on host "{host}" port {port:u16} is registered"#)]
fn register_service(
    world: &mut RegistrationWorld,
    component: String,
    name: String,
    host: String,
    port: u16,
) -> Result<(), eyre::Report> {
    let requests = requests_for(&component)?;
    let request = RegisterComponentRequest::new(requests.register, name, host, port);
    world.last_register_result = Some(run_async(world.service.register(request)));
    Ok(())
}

#[when(
    r#"a {component} service "{name}" on host "{host}" port {port:u16} is registered in partition "{partition}""#
)]
fn register_service_in_partition(
    world: &mut RegistrationWorld,
    component: String,
    name: String,
    host: String,
    port: u16,
    partition: String,
) -> Result<(), eyre::Report> {
    let requests = requests_for(&component)?;
    let request = RegisterComponentRequest::new(requests.register, name, host, port)
        .with_partition(partition);
    world.last_register_result = Some(run_async(world.service.register(request)));
    Ok(())
}

#[when(r#"a {component} service "{name}" without a host is registered"#)]
fn register_service_without_host(
    world: &mut RegistrationWorld,
    component: String,
    name: String,
) -> Result<(), eyre::Report> {
    let requests = requests_for(&component)?;
    let request = RegisterComponentRequest {
        name: Some(name),
        port: Some(8774),
        ..RegisterComponentRequest::empty(requests.register)
    };
    world.last_register_result = Some(run_async(world.service.register(request)));
    Ok(())
}

#[when(r#"the {component} attribute "{attribute}" is set to "{value}""#)]
fn modify_attribute(
    world: &mut RegistrationWorld,
    component: String,
    attribute: String,
    value: String,
) -> Result<(), eyre::Report> {
    let requests = requests_for(&component)?;
    let request = ModifyComponentAttributeRequest::new(requests.modify, attribute, value);
    world.last_modify_result = Some(world.service.modify(&request));
    Ok(())
}

#[when(r#"the {component} service in partition "{partition}" is deregistered"#)]
fn deregister_service(
    world: &mut RegistrationWorld,
    component: String,
    partition: String,
) -> Result<(), eyre::Report> {
    let requests = requests_for(&component)?;
    let request = DeregisterComponentRequest::new(requests.deregister, partition);
    run_async(world.service.deregister(request))
        .map_err(|err| eyre::eyre!("deregistration failed: {err}"))?;
    Ok(())
}
