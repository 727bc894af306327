//! Validate commands

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use addons_common::{Addon, ClusterSnapshot, HostSnapshot};

use super::{read_json, write_json};
use crate::Result;

#[derive(Args, Debug)]
pub struct ValidateClusterArgs {
    /// Cluster snapshot (JSON)
    #[arg(short = 'f', long = "cluster")]
    pub cluster: PathBuf,
}

#[derive(Args, Debug)]
pub struct ValidateHostArgs {
    /// Cluster snapshot (JSON)
    #[arg(short = 'f', long = "cluster")]
    pub cluster: PathBuf,

    /// Host snapshot (JSON)
    #[arg(long)]
    pub host: PathBuf,
}

pub fn run_cluster(addon: &dyn Addon, args: ValidateClusterArgs, out: &mut dyn Write) -> Result<()> {
    let cluster: ClusterSnapshot = read_json(&args.cluster)?;
    let outcomes = addon.validate_cluster(&cluster)?;

    let passed = outcomes.iter().filter(|o| o.is_success()).count();
    info!(
        addon = addon.name(),
        cluster = %cluster.name,
        passed,
        total = outcomes.len(),
        "cluster validated"
    );
    write_json(out, &outcomes)
}

pub fn run_host(addon: &dyn Addon, args: ValidateHostArgs, out: &mut dyn Write) -> Result<()> {
    let cluster: ClusterSnapshot = read_json(&args.cluster)?;
    let host: HostSnapshot = read_json(&args.host)?;
    let outcome = addon.validate_host(&cluster, &host, None)?;

    info!(
        addon = addon.name(),
        host = host.id.as_deref().unwrap_or("unknown"),
        status = %outcome.status,
        "host validated"
    );
    write_json(out, &outcome)
}
