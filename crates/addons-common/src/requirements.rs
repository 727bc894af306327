//! Hardware requirements reported by add-ons
//!
//! Requirements come from static configuration, never from measured
//! inventory. The installer adds them to its own per-host accumulator.

use serde::{Deserialize, Serialize};

/// Quantitative per-host requirements
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirements {
    /// Additional CPU cores per host
    pub cpu_cores: u64,
    /// Additional memory per host, in MiB
    pub ram_mib: u64,
}

impl ResourceRequirements {
    /// Create requirements
    pub const fn new(cpu_cores: u64, ram_mib: u64) -> Self {
        Self { cpu_cores, ram_mib }
    }
}

/// Requirements towards hosts of one role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequirements {
    /// Free-form requirements the installer cannot measure
    pub qualitative: Vec<String>,
    /// Measurable requirements
    pub quantitative: ResourceRequirements,
}

impl RoleRequirements {
    /// Requirements with no qualitative part
    pub fn quantitative(requirements: ResourceRequirements) -> Self {
        Self {
            qualitative: Vec::new(),
            quantitative: requirements,
        }
    }
}

/// Per-role requirements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostTypeRequirements {
    /// Control plane hosts
    pub master: RoleRequirements,
    /// Worker hosts
    pub worker: RoleRequirements,
}

/// Requirements an add-on can state from cluster data alone, before hosts
/// report inventory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreflightRequirements {
    /// Short name of the add-on
    pub addon_name: String,
    /// Short names of add-ons this one depends on
    pub dependencies: Vec<String>,
    /// Per-role requirements
    pub requirements: HostTypeRequirements,
}

impl PreflightRequirements {
    /// Preflight requirements that are identical for every role
    pub fn uniform(
        addon_name: impl Into<String>,
        dependencies: Vec<String>,
        requirements: ResourceRequirements,
    ) -> Self {
        Self {
            addon_name: addon_name.into(),
            dependencies,
            requirements: HostTypeRequirements {
                master: RoleRequirements::quantitative(requirements),
                worker: RoleRequirements::quantitative(requirements),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_requirements_match_across_roles() {
        let req = ResourceRequirements::new(1, 100);
        let preflight = PreflightRequirements::uniform("metallb", vec![], req);

        assert_eq!(preflight.requirements.master, preflight.requirements.worker);
        assert_eq!(preflight.requirements.master.quantitative, req);
        assert!(preflight.requirements.master.qualitative.is_empty());
    }

    #[test]
    fn test_requirements_serialize_camel_case() {
        let json = serde_json::to_value(ResourceRequirements::new(2, 512)).unwrap();
        assert_eq!(json["cpuCores"], 2);
        assert_eq!(json["ramMib"], 512);
    }
}
