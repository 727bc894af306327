//! Manifests command
//!
//! Writes per-file manifests and the combined operand blob to a directory, or
//! streams every document to the output when no directory is given.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use addons_common::{Addon, ClusterSnapshot, ManifestSet, DOCUMENT_SEPARATOR};

use super::read_json;
use crate::Result;

/// Filename the combined blob is written under
pub const OPERAND_FILE: &str = "metallb_operand.yaml";

#[derive(Args, Debug)]
pub struct ManifestsArgs {
    /// Cluster snapshot (JSON)
    #[arg(short = 'f', long = "cluster")]
    pub cluster: PathBuf,

    /// Directory to write manifests to (prints to stdout if not specified)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

pub fn run(addon: &dyn Addon, args: ManifestsArgs, out: &mut dyn Write) -> Result<()> {
    let cluster: ClusterSnapshot = read_json(&args.cluster)?;
    let manifests = addon.generate_manifests(&cluster)?;

    match args.output {
        Some(dir) => write_dir(&manifests, &dir, out),
        None => write_stream(&manifests, out),
    }
}

fn write_dir(manifests: &ManifestSet, dir: &Path, out: &mut dyn Write) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let files = manifests
        .files()
        .chain(std::iter::once((OPERAND_FILE, manifests.combined())));
    for (name, content) in files {
        let path = dir.join(name);
        std::fs::write(&path, content)?;
        info!(path = %path.display(), bytes = content.len(), "wrote manifest");
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

fn write_stream(manifests: &ManifestSet, out: &mut dyn Write) -> Result<()> {
    let documents = manifests
        .files()
        .map(|(_, content)| content)
        .chain(std::iter::once(manifests.combined()));
    for (i, content) in documents.enumerate() {
        if i > 0 {
            writeln!(out, "{DOCUMENT_SEPARATOR}")?;
        }
        out.write_all(content)?;
        if !content.ends_with(b"\n") {
            writeln!(out)?;
        }
    }
    Ok(())
}
