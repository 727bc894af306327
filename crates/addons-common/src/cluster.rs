//! Read-only cluster and host snapshots
//!
//! The installer owns cluster and host records; add-ons only ever see these
//! borrowed snapshots. Field names serialize in camelCase to match the
//! installer's JSON records.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// An add-on attached to a cluster, with its opaque properties blob
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddonRecord {
    /// Short name of the add-on (e.g. "metallb")
    pub name: String,
    /// Add-on owned configuration, normally a serialized JSON object.
    /// Empty when the add-on has no configuration.
    pub properties: String,
}

impl AddonRecord {
    /// Create a record
    pub fn new(name: impl Into<String>, properties: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: properties.into(),
        }
    }
}

/// Read-only view of a cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterSnapshot {
    /// Cluster name
    pub name: String,
    /// Platform release the cluster will be installed with (e.g. "4.11.0")
    pub platform_version: String,
    /// Add-ons attached to the cluster, in installer order
    pub monitored_addons: Vec<AddonRecord>,
}

impl ClusterSnapshot {
    /// Create a snapshot with no add-ons attached
    pub fn new(name: impl Into<String>, platform_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            platform_version: platform_version.into(),
            monitored_addons: Vec::new(),
        }
    }

    /// Attach an add-on record
    pub fn with_addon(mut self, record: AddonRecord) -> Self {
        self.monitored_addons.push(record);
        self
    }

    /// Parse the properties of the named add-on
    ///
    /// Uses the first record for `addon` with a non-empty properties blob.
    /// When no such record exists, returns `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PropertiesParse`] if the blob is not valid JSON for `T`.
    /// A malformed blob is never replaced by a default.
    pub fn addon_properties<T>(&self, addon: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let record = self
            .monitored_addons
            .iter()
            .find(|r| r.name == addon && !r.properties.is_empty());

        match record {
            Some(record) => serde_json::from_str(&record.properties)
                .map_err(|e| Error::properties_parse(addon, e)),
            None => {
                debug!(cluster = %self.name, addon, "no add-on properties, using defaults");
                Ok(T::default())
            }
        }
    }
}

/// Role a host plays in the cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostRole {
    /// Role not yet decided by the installer
    #[default]
    AutoAssign,
    /// Control plane host
    Master,
    /// Worker host
    Worker,
}

/// Read-only view of a host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostSnapshot {
    /// Host identifier, if known
    pub id: Option<String>,
    /// Role of the host
    pub role: HostRole,
    /// Serialized hardware inventory; empty until the host reports it
    pub inventory: String,
}

impl HostSnapshot {
    /// Create a host snapshot with the given inventory
    pub fn new(inventory: impl Into<String>) -> Self {
        Self {
            inventory: inventory.into(),
            ..Self::default()
        }
    }

    /// Set the host role
    pub fn with_role(mut self, role: HostRole) -> Self {
        self.role = role;
        self
    }

    /// Whether the host has reported its hardware inventory
    pub fn has_inventory(&self) -> bool {
        !self.inventory.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Props {
        #[serde(default)]
        address: Option<String>,
    }

    #[test]
    fn test_cluster_deserializes_from_camel_case_json() {
        let json = r#"{
            "name": "edge-1",
            "platformVersion": "4.12.0",
            "monitoredAddons": [{"name": "metallb", "properties": "{}"}]
        }"#;
        let cluster: ClusterSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(cluster.name, "edge-1");
        assert_eq!(cluster.platform_version, "4.12.0");
        assert_eq!(cluster.monitored_addons, vec![AddonRecord::new("metallb", "{}")]);
    }

    #[test]
    fn test_host_deserializes_with_defaults() {
        let host: HostSnapshot = serde_json::from_str(r#"{"role": "worker"}"#).unwrap();
        assert_eq!(host.role, HostRole::Worker);
        assert!(!host.has_inventory());
    }

    #[test]
    fn test_missing_record_yields_default() {
        let cluster = ClusterSnapshot::new("c", "4.11.0");
        let props: Props = cluster.addon_properties("metallb").unwrap();
        assert_eq!(props, Props::default());
    }

    #[test]
    fn test_empty_blobs_are_skipped() {
        let cluster = ClusterSnapshot::new("c", "4.11.0")
            .with_addon(AddonRecord::new("metallb", ""))
            .with_addon(AddonRecord::new("metallb", r#"{"address": "10.1.1.1"}"#));

        let props: Props = cluster.addon_properties("metallb").unwrap();
        assert_eq!(props.address.as_deref(), Some("10.1.1.1"));
    }

    #[test]
    fn test_first_non_empty_record_wins() {
        let cluster = ClusterSnapshot::new("c", "4.11.0")
            .with_addon(AddonRecord::new("metallb", r#"{"address": "first"}"#))
            .with_addon(AddonRecord::new("metallb", r#"{"address": "second"}"#));

        let props: Props = cluster.addon_properties("metallb").unwrap();
        assert_eq!(props.address.as_deref(), Some("first"));
    }

    #[test]
    fn test_other_addons_records_are_ignored() {
        let cluster = ClusterSnapshot::new("c", "4.11.0")
            .with_addon(AddonRecord::new("lvm", "{not json"));

        let props: Props = cluster.addon_properties("metallb").unwrap();
        assert_eq!(props, Props::default());
    }

    /// Story: A corrupt blob is a hard error, never silently defaulted
    #[test]
    fn story_malformed_properties_are_rejected() {
        let cluster = ClusterSnapshot::new("c", "4.11.0")
            .with_addon(AddonRecord::new("metallb", "{not json"));

        let err = cluster.addon_properties::<Props>("metallb").unwrap_err();
        assert!(matches!(err, Error::PropertiesParse { ref addon, .. } if addon == "metallb"));
    }
}
