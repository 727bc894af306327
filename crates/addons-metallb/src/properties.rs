//! MetalLB properties carried on the cluster's add-on record

use serde::Deserialize;

use addons_common::{ClusterSnapshot, Result};

use crate::METALLB_NAME;

/// Optional addresses MetalLB should announce
///
/// Parsed from the add-on record's JSON blob, e.g.
/// `{"api_ip": "192.168.111.5", "ingress_ip": "192.168.111.4"}`.
/// Missing, `null`, and empty values all mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MetalLbProperties {
    api_ip: Option<String>,
    ingress_ip: Option<String>,
}

impl MetalLbProperties {
    /// Create properties from optional addresses
    pub fn new(api_ip: Option<&str>, ingress_ip: Option<&str>) -> Self {
        Self {
            api_ip: api_ip.map(str::to_string),
            ingress_ip: ingress_ip.map(str::to_string),
        }
    }

    /// Parse the MetalLB properties attached to a cluster
    pub fn from_cluster(cluster: &ClusterSnapshot) -> Result<Self> {
        cluster.addon_properties(METALLB_NAME)
    }

    /// Address the API load balancer should use, if set
    pub fn api_ip(&self) -> Option<&str> {
        self.api_ip.as_deref().filter(|ip| !ip.is_empty())
    }

    /// Address the ingress load balancer should use, if set
    pub fn ingress_ip(&self) -> Option<&str> {
        self.ingress_ip.as_deref().filter(|ip| !ip.is_empty())
    }
}
