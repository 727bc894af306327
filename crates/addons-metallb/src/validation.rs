//! MetalLB prerequisite validation
//!
//! MetalLB has no hardware floor of its own. The cluster must run a supported
//! platform release, and each host must have reported its inventory.

use addons_common::version::base_version_less_than;
use addons_common::{ClusterSnapshot, HostSnapshot, Result, ValidationOutcome};

use crate::config::MetalLbConfig;

/// Identifier of the cluster-level validation
pub const CLUSTER_VALIDATION_ID: &str = "metallb-requirements-satisfied";

/// Identifier of the host-level validation
pub const HOST_VALIDATION_ID: &str = "metallb-requirements-satisfied";

/// Reason reported while a host has no inventory
pub const MISSING_INVENTORY_REASON: &str = "Missing Inventory in the host";

/// Validate the cluster's platform version against the configured minimum
///
/// # Errors
///
/// Returns [`addons_common::Error::InvalidVersion`] if either version cannot
/// be parsed. An old-but-valid version is a failed outcome, not an error.
pub fn validate_cluster(
    config: &MetalLbConfig,
    cluster: &ClusterSnapshot,
) -> Result<Vec<ValidationOutcome>> {
    let outcome =
        if base_version_less_than(&cluster.platform_version, &config.min_platform_version)? {
            ValidationOutcome::failure(
                CLUSTER_VALIDATION_ID,
                format!(
                    "MetalLB is only supported for OpenShift versions {} and above",
                    config.min_platform_version
                ),
            )
        } else {
            ValidationOutcome::success(CLUSTER_VALIDATION_ID)
        };
    Ok(vec![outcome])
}

/// Validate that a host has reported its inventory
///
/// The inventory content is not inspected.
pub fn validate_host(host: &HostSnapshot) -> Result<ValidationOutcome> {
    if !host.has_inventory() {
        return Ok(ValidationOutcome::pending(
            HOST_VALIDATION_ID,
            MISSING_INVENTORY_REASON,
        ));
    }
    Ok(ValidationOutcome::success(HOST_VALIDATION_ID))
}
