//! MetalLB add-on configuration
//!
//! Built once at process start and passed by reference into validation and
//! manifest synthesis. Nothing here is read from global state.

use addons_common::ResourceRequirements;

/// Oldest platform release MetalLB can be installed on
pub const MIN_PLATFORM_VERSION: &str = "4.11.0";

/// Namespace the MetalLB operator and its resources live in
pub const METALLB_NAMESPACE: &str = "metallb-system";

/// OLM subscription (and operator group) name
pub const METALLB_SUBSCRIPTION_NAME: &str = "metallb-operator";

/// Default additional CPU cores per host
pub const DEFAULT_CPU_PER_HOST: u64 = 1;

/// Default additional memory per host, in MiB
pub const DEFAULT_MEMORY_PER_HOST_MIB: u64 = 100;

/// Environment variable overriding [`DEFAULT_CPU_PER_HOST`]
pub const CPU_PER_HOST_ENV: &str = "METALLB_CPU_PER_HOST";

/// Environment variable overriding [`DEFAULT_MEMORY_PER_HOST_MIB`]
pub const MEMORY_PER_HOST_MIB_ENV: &str = "METALLB_MEMORY_PER_HOST_MIB";

/// Immutable MetalLB add-on configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetalLbConfig {
    /// Minimum supported platform version
    pub min_platform_version: String,
    /// Target namespace
    pub namespace: String,
    /// Subscription and operator group name
    pub subscription_name: String,
    /// Requirements placed on every host, regardless of role
    pub host_requirements: ResourceRequirements,
}

impl Default for MetalLbConfig {
    fn default() -> Self {
        Self {
            min_platform_version: MIN_PLATFORM_VERSION.to_string(),
            namespace: METALLB_NAMESPACE.to_string(),
            subscription_name: METALLB_SUBSCRIPTION_NAME.to_string(),
            host_requirements: ResourceRequirements::new(
                DEFAULT_CPU_PER_HOST,
                DEFAULT_MEMORY_PER_HOST_MIB,
            ),
        }
    }
}

impl MetalLbConfig {
    /// Set per-host requirements
    pub fn with_host_requirements(mut self, cpu_cores: u64, ram_mib: u64) -> Self {
        self.host_requirements = ResourceRequirements::new(cpu_cores, ram_mib);
        self
    }

    /// Set the minimum supported platform version
    pub fn with_min_platform_version(mut self, version: impl Into<String>) -> Self {
        self.min_platform_version = version.into();
        self
    }

    /// Set the target namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}
