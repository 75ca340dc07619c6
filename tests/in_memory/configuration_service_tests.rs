//! End-to-end tests of the configuration service over in-memory adapters.

use super::helpers::{ControlPlane, LOCAL_HOST, control_plane};
use chrono::Utc;
use colonnade::component::{
    domain::{ComponentIdentity, NodeRegistration, Partition, ServiceFullName},
    plugins::{
        DEREGISTER_NODE, DEREGISTER_WALRUS, DESCRIBE_ARBITRATORS, DESCRIBE_CLUSTERS,
        DESCRIBE_NODE_AGENTS, DESCRIBE_STORAGE_CONTROLLERS, DESCRIBE_WALRUSES,
        MODIFY_STORAGE_CONTROLLER_ATTRIBUTE, REGISTER_ARBITRATOR, REGISTER_CLUSTER,
        REGISTER_NODE, REGISTER_STORAGE_CONTROLLER, REGISTER_WALRUS,
    },
    ports::RegistrationHandlerError,
    services::{
        ConfigurationServiceError, DeregisterComponentRequest, DescribeComponentsRequest,
        ModifyComponentAttributeRequest, RegisterComponentRequest,
    },
};
use rstest::rstest;

fn zone(value: &str) -> Partition {
    Partition::new(value).expect("valid partition")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn zone_services_register_side_by_side(control_plane: ControlPlane) {
    let service = &control_plane.service;
    service
        .register(
            RegisterComponentRequest::new(REGISTER_CLUSTER, "cc1", LOCAL_HOST, 8774)
                .with_partition("zone-a"),
        )
        .await
        .expect("cluster registration should succeed");
    service
        .register(
            RegisterComponentRequest::new(REGISTER_STORAGE_CONTROLLER, "sc1", LOCAL_HOST, 8773)
                .with_partition("zone-a"),
        )
        .await
        .expect("storage registration should succeed");

    let clusters = service
        .describe_components(DescribeComponentsRequest::for_request_type(DESCRIBE_CLUSTERS))
        .await
        .expect("describe clusters");
    let storage = service
        .describe_components(DescribeComponentsRequest::for_request_type(
            DESCRIBE_STORAGE_CONTROLLERS,
        ))
        .await
        .expect("describe storage controllers");

    assert_eq!(clusters.len(), 1);
    assert_eq!(storage.len(), 1);
    assert_eq!(
        storage.first().map(|info| info.full_name.as_str()),
        Some("storage:zone-a:sc1")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn walrus_always_lands_in_its_fixed_partition(control_plane: ControlPlane) {
    control_plane
        .service
        .register(
            RegisterComponentRequest::new(REGISTER_WALRUS, "ws1", LOCAL_HOST, 8773)
                .with_partition("zone-a"),
        )
        .await
        .expect("walrus registration should succeed");

    let walruses = control_plane
        .service
        .describe_components(DescribeComponentsRequest::for_request_type(DESCRIBE_WALRUSES))
        .await
        .expect("describe walruses");
    let info = walruses.first().expect("one walrus");
    assert_eq!(info.partition, "walrus");
    assert_eq!(info.full_name, "walrus:walrus:ws1");

    let removed = control_plane
        .service
        .deregister(DeregisterComponentRequest::new(DEREGISTER_WALRUS, "walrus"))
        .await
        .expect("walrus deregistration should succeed");
    assert!(removed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_cluster_in_same_partition_is_refused(control_plane: ControlPlane) {
    let service = &control_plane.service;
    service
        .register(
            RegisterComponentRequest::new(REGISTER_CLUSTER, "cc1", LOCAL_HOST, 8774)
                .with_partition("zone-a"),
        )
        .await
        .expect("first registration should succeed");

    let err = service
        .register(
            RegisterComponentRequest::new(REGISTER_CLUSTER, "cc2", "10.0.0.6", 8774)
                .with_partition("zone-a"),
        )
        .await
        .expect_err("partition already occupied");

    assert!(matches!(
        err,
        ConfigurationServiceError::RegistrationFailed {
            source: RegistrationHandlerError::PartitionOccupied { .. }
        }
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn arbitrator_on_loopback_is_rejected(control_plane: ControlPlane) {
    let err = control_plane
        .service
        .register(
            RegisterComponentRequest::new(REGISTER_ARBITRATOR, "arb1", "127.0.0.1", 8777)
                .with_partition("zone-a"),
        )
        .await
        .expect_err("loopback host");
    assert!(matches!(
        err,
        ConfigurationServiceError::RegistrationFailed {
            source: RegistrationHandlerError::Rejected(_)
        }
    ));

    let arbitrators = control_plane
        .service
        .describe_components(DescribeComponentsRequest::for_request_type(DESCRIBE_ARBITRATORS))
        .await
        .expect("describe arbitrators");
    assert!(arbitrators.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registration_time_comes_from_clock(control_plane: ControlPlane) {
    let before = Utc::now();
    control_plane
        .service
        .register(
            RegisterComponentRequest::new(REGISTER_CLUSTER, "cc1", LOCAL_HOST, 8774)
                .with_partition("zone-a"),
        )
        .await
        .expect("registration should succeed");
    let after = Utc::now();

    let registered_at = control_plane
        .topology
        .registered_at(ComponentIdentity::CLUSTER, &zone("zone-a"))
        .expect("topology readable")
        .expect("service registered");
    assert!(before <= registered_at && registered_at <= after);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn describe_all_projects_local_services(control_plane: ControlPlane) {
    let service = &control_plane.service;
    service
        .register(
            RegisterComponentRequest::new(REGISTER_CLUSTER, "cc1", LOCAL_HOST, 8774)
                .with_partition("zone-a"),
        )
        .await
        .expect("registration should succeed");
    let full_name = ServiceFullName::new(ComponentIdentity::CLUSTER, &zone("zone-a"), "cc1");
    control_plane
        .lifecycle
        .set_state(&full_name, "ENABLED")
        .expect("state recorded");
    control_plane
        .lifecycle
        .set_details(&full_name, ["last heartbeat 3s ago".to_owned()])
        .expect("details recorded");

    let infos = service
        .describe_components(DescribeComponentsRequest::all().verbose(true))
        .await
        .expect("describe all");

    let types: Vec<&str> = infos.iter().map(|info| info.component_type.as_str()).collect();
    assert_eq!(
        types,
        vec!["cloud", "cluster", "node", "storage", "walrus", "arbitrator"]
    );

    let cluster = infos
        .iter()
        .find(|info| info.component_type == "cluster")
        .expect("cluster entry");
    assert_eq!(cluster.name, "cc1");
    assert_eq!(cluster.state, "ENABLED");
    assert_eq!(cluster.detail, "last heartbeat 3s ago");

    let cloud = infos.first().expect("cloud entry");
    assert_eq!(cloud.partition, "cloud");
    assert_eq!(cloud.name, "");
    assert_eq!(cloud.state, "");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failing_lifecycle_query_is_reported_inline(control_plane: ControlPlane) {
    control_plane
        .service
        .register(
            RegisterComponentRequest::new(REGISTER_CLUSTER, "cc1", LOCAL_HOST, 8774)
                .with_partition("zone-a"),
        )
        .await
        .expect("registration should succeed");
    let full_name = ServiceFullName::new(ComponentIdentity::CLUSTER, &zone("zone-a"), "cc1");
    control_plane
        .lifecycle
        .set_failure(&full_name, "state machine offline")
        .expect("failure recorded");

    let infos = control_plane
        .service
        .describe_components(DescribeComponentsRequest::for_request_type(DESCRIBE_CLUSTERS))
        .await
        .expect("describe clusters");

    assert_eq!(
        infos.first().map(|info| info.state.as_str()),
        Some("n/a: state machine offline")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn modify_never_changes_topology(control_plane: ControlPlane) {
    let service = &control_plane.service;
    service
        .register(
            RegisterComponentRequest::new(REGISTER_STORAGE_CONTROLLER, "sc1", LOCAL_HOST, 8773)
                .with_partition("zone-a"),
        )
        .await
        .expect("registration should succeed");

    service
        .modify(&ModifyComponentAttributeRequest::new(
            MODIFY_STORAGE_CONTROLLER_ATTRIBUTE,
            "partition",
            "zone-b",
        ))
        .expect("recognised attribute");

    let storage = service
        .describe_components(DescribeComponentsRequest::for_request_type(
            DESCRIBE_STORAGE_CONTROLLERS,
        ))
        .await
        .expect("describe storage controllers");
    assert_eq!(
        storage.first().map(|info| info.partition.as_str()),
        Some("zone-a")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn node_listing_passes_through(control_plane: ControlPlane) {
    let nodes = [
        NodeRegistration::new("nc1", "zone-a", "10.0.1.1", "ENABLED"),
        NodeRegistration::new("nc2", "zone-a", "10.0.1.2", "DISABLED"),
    ];
    for node in &nodes {
        control_plane
            .nodes
            .add_node(node.clone())
            .expect("node recorded");
    }

    let described = control_plane
        .service
        .describe_nodes()
        .await
        .expect("describe nodes");
    assert_eq!(described, nodes.to_vec());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn node_agents_register_through_the_fallback(control_plane: ControlPlane) {
    assert!(!control_plane.builders.has_builder_for(ComponentIdentity::NODE));

    control_plane
        .service
        .register(
            RegisterComponentRequest::new(REGISTER_NODE, "nc1", LOCAL_HOST, 8775)
                .with_partition("zone-a"),
        )
        .await
        .expect("node registration should succeed");

    assert!(control_plane.builders.has_builder_for(ComponentIdentity::NODE));
    assert_eq!(
        control_plane
            .builders
            .lookup_by_identity(ComponentIdentity::NODE)
            .kind(),
        "fallback"
    );

    let agents = control_plane
        .service
        .describe_components(DescribeComponentsRequest::for_request_type(DESCRIBE_NODE_AGENTS))
        .await
        .expect("describe node agents");
    let agent = agents.first().expect("one node agent");
    assert_eq!(agent.component_type, "node");
    assert_eq!(agent.full_name, "node:zone-a:nc1");

    let removed = control_plane
        .service
        .deregister(DeregisterComponentRequest::new(DEREGISTER_NODE, "zone-a"))
        .await
        .expect("node deregistration should succeed");
    assert!(removed);
}
