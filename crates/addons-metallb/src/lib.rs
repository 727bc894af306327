//! MetalLB add-on
//!
//! Installs the MetalLB operator through OLM and configures it to announce the
//! cluster's API and ingress addresses from bare-metal hosts:
//!
//! - [`validation`]: platform version and host inventory checks
//! - [`manifests`]: Namespace/OperatorGroup/Subscription files plus the operand blob
//! - [`config`]: immutable add-on configuration
//! - [`properties`]: the add-on's JSON properties on the cluster record
//!
//! [`MetalLbAddon`] ties these together behind the shared
//! [`Addon`](addons_common::Addon) contract.

pub mod config;
pub mod manifests;
pub mod properties;
mod templates;
pub mod validation;

use addons_common::{
    Addon, AddonIdentity, ClusterSnapshot, CpuArchitecture, HostSnapshot, ManifestSet,
    OperatorType, PreflightRequirements, ResourceRequirements, Result, ValidationOutcome,
};

pub use config::MetalLbConfig;
pub use properties::MetalLbProperties;

/// Short name of the add-on
pub const METALLB_NAME: &str = "metallb";

/// Display name of the add-on
pub const METALLB_FULL_NAME: &str = "MetalLB";

/// How long the installer waits for MetalLB to become available
pub const INSTALL_TIMEOUT_SECONDS: u64 = 30 * 60;

/// Installer feature gating MetalLB
pub const FEATURE_SUPPORT_ID: &str = "METALLB";

const SUPPORTED_ARCHITECTURES: [CpuArchitecture; 2] =
    [CpuArchitecture::X86_64, CpuArchitecture::Arm64];

/// MetalLB add-on
#[derive(Debug, Clone, Default)]
pub struct MetalLbAddon {
    config: MetalLbConfig,
}

impl MetalLbAddon {
    /// Create the add-on with the given configuration
    pub fn new(config: MetalLbConfig) -> Self {
        Self { config }
    }

    /// The add-on configuration
    pub fn config(&self) -> &MetalLbConfig {
        &self.config
    }
}

impl Addon for MetalLbAddon {
    fn name(&self) -> &str {
        METALLB_NAME
    }

    fn full_name(&self) -> &str {
        METALLB_FULL_NAME
    }

    fn dependencies(&self, _cluster: &ClusterSnapshot) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn cluster_validation_ids(&self) -> Vec<String> {
        vec![validation::CLUSTER_VALIDATION_ID.to_string()]
    }

    fn host_validation_id(&self) -> &str {
        validation::HOST_VALIDATION_ID
    }

    fn validate_cluster(&self, cluster: &ClusterSnapshot) -> Result<Vec<ValidationOutcome>> {
        validation::validate_cluster(&self.config, cluster)
    }

    fn validate_host(
        &self,
        _cluster: &ClusterSnapshot,
        host: &HostSnapshot,
        _additional: Option<&ResourceRequirements>,
    ) -> Result<ValidationOutcome> {
        validation::validate_host(host)
    }

    fn generate_manifests(&self, cluster: &ClusterSnapshot) -> Result<ManifestSet> {
        manifests::synthesize(&self.config, cluster)
    }

    fn properties(&self) -> Vec<String> {
        Vec::new()
    }

    fn identity(&self) -> AddonIdentity {
        AddonIdentity {
            name: METALLB_NAME.to_string(),
            operator_type: OperatorType::Olm,
            namespace: self.config.namespace.clone(),
            subscription_name: self.config.subscription_name.clone(),
            timeout_seconds: INSTALL_TIMEOUT_SECONDS,
        }
    }

    fn host_requirements(
        &self,
        _cluster: &ClusterSnapshot,
        _host: &HostSnapshot,
    ) -> Result<ResourceRequirements> {
        Ok(self.config.host_requirements)
    }

    fn preflight_requirements(&self, cluster: &ClusterSnapshot) -> Result<PreflightRequirements> {
        let dependencies = self.dependencies(cluster)?;
        Ok(PreflightRequirements::uniform(
            METALLB_NAME,
            dependencies,
            self.config.host_requirements,
        ))
    }

    fn supported_architectures(&self) -> &[CpuArchitecture] {
        &SUPPORTED_ARCHITECTURES
    }

    fn feature_support_id(&self) -> &str {
        FEATURE_SUPPORT_ID
    }

    fn bundle_labels(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addons_common::{AddonRecord, HostRole, ValidationStatus};

    fn addon() -> MetalLbAddon {
        MetalLbAddon::default()
    }

    fn cluster() -> ClusterSnapshot {
        ClusterSnapshot::new("test-cluster", "4.11.0")
    }

    #[test]
    fn test_names() {
        assert_eq!(addon().name(), "metallb");
        assert_eq!(addon().full_name(), "MetalLB");
    }

    #[test]
    fn test_no_dependencies() {
        assert!(addon().dependencies(&ClusterSnapshot::default()).unwrap().is_empty());
    }

    #[test]
    fn test_validation_ids() {
        assert_eq!(
            addon().cluster_validation_ids(),
            vec!["metallb-requirements-satisfied".to_string()]
        );
        assert_eq!(addon().host_validation_id(), "metallb-requirements-satisfied");
    }

    #[test]
    fn test_identity() {
        let identity = addon().identity();
        assert_eq!(identity.name, "metallb");
        assert_eq!(identity.operator_type, OperatorType::Olm);
        assert_eq!(identity.namespace, "metallb-system");
        assert_eq!(identity.subscription_name, "metallb-operator");
        assert_eq!(identity.timeout_seconds, 1800);
    }

    #[test]
    fn test_supported_architectures() {
        let archs = addon().supported_architectures().to_vec();
        assert_eq!(archs, vec![CpuArchitecture::X86_64, CpuArchitecture::Arm64]);
        assert!(!archs.contains(&CpuArchitecture::S390x));
        assert!(!archs.contains(&CpuArchitecture::Ppc64le));
    }

    #[test]
    fn test_static_metadata() {
        assert_eq!(addon().feature_support_id(), "METALLB");
        assert!(addon().bundle_labels().is_empty());
        assert!(addon().properties().is_empty());
    }

    /// Story: Every host gets the configured requirements, whatever its role
    #[test]
    fn story_host_requirements_are_uniform() {
        let addon = MetalLbAddon::new(MetalLbConfig::default().with_host_requirements(3, 512));
        let expected = ResourceRequirements::new(3, 512);

        for role in [HostRole::Master, HostRole::Worker, HostRole::AutoAssign] {
            let host = HostSnapshot::default().with_role(role);
            assert_eq!(addon.host_requirements(&cluster(), &host).unwrap(), expected);
        }

        let preflight = addon.preflight_requirements(&cluster()).unwrap();
        assert_eq!(preflight.addon_name, "metallb");
        assert!(preflight.dependencies.is_empty());
        assert_eq!(preflight.requirements.master, preflight.requirements.worker);
        assert_eq!(preflight.requirements.master.quantitative, expected);
        assert!(preflight.requirements.worker.qualitative.is_empty());
    }

    #[test]
    fn test_default_host_requirements_are_positive() {
        let req = addon()
            .host_requirements(&cluster(), &HostSnapshot::default())
            .unwrap();
        assert!(req.cpu_cores > 0);
        assert!(req.ram_mib > 0);
    }

    /// Story: The installer drives MetalLB purely through the trait object
    #[test]
    fn story_dispatch_through_trait_object() {
        let addon: Box<dyn Addon> = Box::new(addon());
        let cluster = cluster().with_addon(AddonRecord::new(
            METALLB_NAME,
            r#"{"api_ip": "10.0.0.1", "ingress_ip": "10.0.0.2"}"#,
        ));

        let cluster_outcomes = addon.validate_cluster(&cluster).unwrap();
        assert!(cluster_outcomes.iter().all(ValidationOutcome::is_success));

        let pending = addon
            .validate_host(&cluster, &HostSnapshot::default(), None)
            .unwrap();
        assert_eq!(pending.status, ValidationStatus::Pending);

        let ready = addon
            .validate_host(&cluster, &HostSnapshot::new("{}"), None)
            .unwrap();
        assert_eq!(ready.status, ValidationStatus::Success);

        let manifests = addon.generate_manifests(&cluster).unwrap();
        assert_eq!(manifests.per_file().len(), 3);
        assert!(!manifests.combined().is_empty());
    }

    #[test]
    fn test_addon_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MetalLbAddon>();
    }
}
