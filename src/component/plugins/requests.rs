//! Administrative request types handled by the built-in builders.

use crate::component::domain::RequestType;

/// Registers a cluster controller.
pub const REGISTER_CLUSTER: RequestType = RequestType::new("RegisterClusterType");
/// Deregisters a cluster controller.
pub const DEREGISTER_CLUSTER: RequestType = RequestType::new("DeregisterClusterType");
/// Modifies a cluster controller attribute.
pub const MODIFY_CLUSTER_ATTRIBUTE: RequestType =
    RequestType::new("ModifyClusterAttributeType");
/// Describes registered cluster controllers.
pub const DESCRIBE_CLUSTERS: RequestType = RequestType::new("DescribeClustersType");

/// Registers a storage controller.
pub const REGISTER_STORAGE_CONTROLLER: RequestType =
    RequestType::new("RegisterStorageControllerType");
/// Deregisters a storage controller.
pub const DEREGISTER_STORAGE_CONTROLLER: RequestType =
    RequestType::new("DeregisterStorageControllerType");
/// Modifies a storage controller attribute.
pub const MODIFY_STORAGE_CONTROLLER_ATTRIBUTE: RequestType =
    RequestType::new("ModifyStorageControllerAttributeType");
/// Describes registered storage controllers.
pub const DESCRIBE_STORAGE_CONTROLLERS: RequestType =
    RequestType::new("DescribeStorageControllersType");

/// Registers the object store.
pub const REGISTER_WALRUS: RequestType = RequestType::new("RegisterWalrusType");
/// Deregisters the object store.
pub const DEREGISTER_WALRUS: RequestType = RequestType::new("DeregisterWalrusType");
/// Modifies an object store attribute.
pub const MODIFY_WALRUS_ATTRIBUTE: RequestType = RequestType::new("ModifyWalrusAttributeType");
/// Describes the registered object store.
pub const DESCRIBE_WALRUSES: RequestType = RequestType::new("DescribeWalrusesType");

/// Registers a reachability arbitrator.
pub const REGISTER_ARBITRATOR: RequestType = RequestType::new("RegisterArbitratorType");
/// Deregisters a reachability arbitrator.
pub const DEREGISTER_ARBITRATOR: RequestType = RequestType::new("DeregisterArbitratorType");
/// Modifies an arbitrator attribute.
pub const MODIFY_ARBITRATOR_ATTRIBUTE: RequestType =
    RequestType::new("ModifyArbitratorAttributeType");
/// Describes registered arbitrators.
pub const DESCRIBE_ARBITRATORS: RequestType = RequestType::new("DescribeArbitratorsType");

/// Registers a node agent.
pub const REGISTER_NODE: RequestType = RequestType::new("RegisterNodeType");
/// Deregisters a node agent.
pub const DEREGISTER_NODE: RequestType = RequestType::new("DeregisterNodeType");
/// Modifies a node agent attribute.
pub const MODIFY_NODE_ATTRIBUTE: RequestType = RequestType::new("ModifyNodeAttributeType");
/// Describes registered node agents.
pub const DESCRIBE_NODE_AGENTS: RequestType = RequestType::new("DescribeNodeAgentsType");
