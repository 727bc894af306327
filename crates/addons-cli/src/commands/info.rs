//! Info command

use std::io::Write;

use serde::Serialize;

use addons_common::{Addon, AddonIdentity, CpuArchitecture};

use super::write_json;
use crate::Result;

/// Static description of an add-on
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonInfo {
    pub full_name: String,
    pub identity: AddonIdentity,
    pub cluster_validation_ids: Vec<String>,
    pub host_validation_id: String,
    pub supported_architectures: Vec<CpuArchitecture>,
    pub feature_support_id: String,
    pub bundle_labels: Vec<String>,
    pub properties: Vec<String>,
}

impl AddonInfo {
    pub fn from_addon(addon: &dyn Addon) -> Self {
        Self {
            full_name: addon.full_name().to_string(),
            identity: addon.identity(),
            cluster_validation_ids: addon.cluster_validation_ids(),
            host_validation_id: addon.host_validation_id().to_string(),
            supported_architectures: addon.supported_architectures().to_vec(),
            feature_support_id: addon.feature_support_id().to_string(),
            bundle_labels: addon.bundle_labels(),
            properties: addon.properties(),
        }
    }
}

pub fn run(addon: &dyn Addon, out: &mut dyn Write) -> Result<()> {
    write_json(out, &AddonInfo::from_addon(addon))
}
