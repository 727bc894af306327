//! CLI commands

use std::io::Write;
use std::path::Path;

use clap::Args;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use addons_metallb::config::{
    CPU_PER_HOST_ENV, DEFAULT_CPU_PER_HOST, DEFAULT_MEMORY_PER_HOST_MIB, MEMORY_PER_HOST_MIB_ENV,
};
use addons_metallb::{MetalLbAddon, MetalLbConfig};

use crate::{Error, Result};

pub mod info;
pub mod manifests;
pub mod requirements;
pub mod validate;

/// Add-on configuration shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Additional CPU cores MetalLB needs on every host
    #[arg(long, global = true, env = CPU_PER_HOST_ENV, default_value_t = DEFAULT_CPU_PER_HOST)]
    pub cpu_per_host: u64,

    /// Additional memory in MiB MetalLB needs on every host
    #[arg(long, global = true, env = MEMORY_PER_HOST_MIB_ENV, default_value_t = DEFAULT_MEMORY_PER_HOST_MIB)]
    pub memory_per_host_mib: u64,
}

impl ConfigArgs {
    /// Build the add-on from the resolved configuration
    pub fn addon(&self) -> MetalLbAddon {
        let config = MetalLbConfig::default()
            .with_host_requirements(self.cpu_per_host, self.memory_per_host_mib);
        MetalLbAddon::new(config)
    }
}

/// Read and deserialize a JSON snapshot
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(path = %path.display(), "reading snapshot");
    let content = std::fs::read_to_string(path).map_err(|e| Error::read_input(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::parse_input(path, e))
}

/// Write a value as pretty JSON followed by a newline
pub fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
