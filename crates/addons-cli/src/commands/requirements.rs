//! Requirements command

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use addons_common::{Addon, ClusterSnapshot};

use super::{read_json, write_json};
use crate::Result;

#[derive(Args, Debug)]
pub struct RequirementsArgs {
    /// Cluster snapshot (JSON)
    #[arg(short = 'f', long = "cluster")]
    pub cluster: PathBuf,
}

pub fn run(addon: &dyn Addon, args: RequirementsArgs, out: &mut dyn Write) -> Result<()> {
    let cluster: ClusterSnapshot = read_json(&args.cluster)?;
    write_json(out, &addon.preflight_requirements(&cluster)?)
}
