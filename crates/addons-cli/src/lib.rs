//! addonctl library
//!
//! Each subcommand reads JSON snapshots, drives the MetalLB add-on through
//! the [`Addon`](addons_common::Addon) contract and writes its result to the
//! given writer.

pub mod commands;
pub mod error;

pub use error::{Error, Result};

use std::io::Write;

use clap::{Parser, Subcommand};

use commands::ConfigArgs;

/// addonctl - cluster add-on validation and manifest synthesis
#[derive(Parser, Debug)]
#[command(name = "addonctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the add-on's identity and static metadata
    Info,
    /// Validate a cluster snapshot
    ValidateCluster(commands::validate::ValidateClusterArgs),
    /// Validate a host snapshot
    ValidateHost(commands::validate::ValidateHostArgs),
    /// Print preflight hardware requirements
    Requirements(commands::requirements::RequirementsArgs),
    /// Generate the add-on's manifests
    Manifests(commands::manifests::ManifestsArgs),
}

impl Cli {
    /// Run the CLI command, writing its output to `out`
    pub fn run(self, out: &mut dyn Write) -> Result<()> {
        let addon = self.config.addon();
        match self.command {
            Commands::Info => commands::info::run(&addon, out),
            Commands::ValidateCluster(args) => commands::validate::run_cluster(&addon, args, out),
            Commands::ValidateHost(args) => commands::validate::run_host(&addon, args, out),
            Commands::Requirements(args) => commands::requirements::run(&addon, args, out),
            Commands::Manifests(args) => commands::manifests::run(&addon, args, out),
        }
    }
}
