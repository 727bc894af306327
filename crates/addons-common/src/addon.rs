//! The add-on contract
//!
//! Every add-on implements [`Addon`]. The installer holds add-ons as
//! `&dyn Addon` and drives them uniformly:
//!
//! 1. [`Addon::validate_cluster`] once per cluster
//! 2. [`Addon::validate_host`] for each host
//! 3. [`Addon::generate_manifests`] once validations pass
//!
//! Implementations are stateless apart from immutable configuration. All
//! methods are pure functions of their arguments, so one instance can serve
//! concurrent callers.

use serde::{Deserialize, Serialize};

use crate::cluster::{ClusterSnapshot, HostSnapshot};
use crate::manifest::ManifestSet;
use crate::requirements::{PreflightRequirements, ResourceRequirements};
use crate::validation::ValidationOutcome;
use crate::Result;

/// How an add-on is delivered to the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorType {
    /// Installed through the Operator Lifecycle Manager
    Olm,
    /// Part of the platform payload
    Builtin,
}

/// CPU architectures a cluster can be installed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuArchitecture {
    /// 64-bit x86
    #[serde(rename = "x86_64")]
    X86_64,
    /// 64-bit ARM
    #[serde(rename = "arm64")]
    Arm64,
    /// 64-bit little-endian POWER
    #[serde(rename = "ppc64le")]
    Ppc64le,
    /// IBM Z
    #[serde(rename = "s390x")]
    S390x,
}

impl CpuArchitecture {
    /// Installer name for the architecture
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Arm64 => "arm64",
            Self::Ppc64le => "ppc64le",
            Self::S390x => "s390x",
        }
    }
}

impl std::fmt::Display for CpuArchitecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static identity the installer uses to monitor an installed add-on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonIdentity {
    /// Short name (e.g. "metallb")
    pub name: String,
    /// Delivery mechanism
    pub operator_type: OperatorType,
    /// Namespace the add-on's operator runs in
    pub namespace: String,
    /// OLM subscription name
    pub subscription_name: String,
    /// How long the installer waits for the add-on to become available
    pub timeout_seconds: u64,
}

/// Contract every add-on implements
pub trait Addon: Send + Sync {
    /// Short name of the add-on
    fn name(&self) -> &str;

    /// Human-readable name of the add-on
    fn full_name(&self) -> &str;

    /// Short names of add-ons that must be installed alongside this one
    fn dependencies(&self, cluster: &ClusterSnapshot) -> Result<Vec<String>>;

    /// Identifiers of the cluster validations this add-on produces
    fn cluster_validation_ids(&self) -> Vec<String>;

    /// Identifier of the host validation this add-on produces
    fn host_validation_id(&self) -> &str;

    /// Validate cluster-level prerequisites
    ///
    /// Unmet prerequisites are reported as non-success outcomes. `Err` is
    /// reserved for input that cannot be interpreted at all.
    fn validate_cluster(&self, cluster: &ClusterSnapshot) -> Result<Vec<ValidationOutcome>>;

    /// Validate a single host
    ///
    /// `additional` carries requirements other add-ons already place on the
    /// host, for add-ons whose checks depend on the total.
    fn validate_host(
        &self,
        cluster: &ClusterSnapshot,
        host: &HostSnapshot,
        additional: Option<&ResourceRequirements>,
    ) -> Result<ValidationOutcome>;

    /// Synthesize the manifests that install and configure the add-on
    fn generate_manifests(&self, cluster: &ClusterSnapshot) -> Result<ManifestSet>;

    /// Names of user-settable add-on properties
    fn properties(&self) -> Vec<String>;

    /// Identity used to monitor the installed add-on
    fn identity(&self) -> AddonIdentity;

    /// Requirements this add-on places on a single host
    fn host_requirements(
        &self,
        cluster: &ClusterSnapshot,
        host: &HostSnapshot,
    ) -> Result<ResourceRequirements>;

    /// Requirements determinable from cluster data alone
    fn preflight_requirements(&self, cluster: &ClusterSnapshot) -> Result<PreflightRequirements>;

    /// CPU architectures the add-on can be installed on
    fn supported_architectures(&self) -> &[CpuArchitecture];

    /// Identifier of the installer feature gating this add-on
    fn feature_support_id(&self) -> &str;

    /// Bundle labels this add-on belongs to
    fn bundle_labels(&self) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_architecture_names_match_wire_form() {
        for arch in [
            CpuArchitecture::X86_64,
            CpuArchitecture::Arm64,
            CpuArchitecture::Ppc64le,
            CpuArchitecture::S390x,
        ] {
            let wire = serde_json::to_value(arch).unwrap();
            assert_eq!(wire, arch.as_str());
        }
    }

    #[test]
    fn test_identity_serializes_camel_case() {
        let identity = AddonIdentity {
            name: "metallb".to_string(),
            operator_type: OperatorType::Olm,
            namespace: "metallb-system".to_string(),
            subscription_name: "metallb-operator".to_string(),
            timeout_seconds: 1800,
        };
        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(json["operatorType"], "olm");
        assert_eq!(json["subscriptionName"], "metallb-operator");
        assert_eq!(json["timeoutSeconds"], 1800);
    }
}
