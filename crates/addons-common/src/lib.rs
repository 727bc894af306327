//! Common types for cluster add-ons: the plugin contract, snapshots, and utilities
//!
//! An add-on is an optional component the installer attaches to a cluster. Every
//! add-on implements the same [`Addon`] contract so the installer can treat them
//! uniformly: validate the cluster, validate each host, report hardware
//! requirements, and synthesize the manifests that install it.
//!
//! # Modules
//!
//! - [`addon`] - The [`Addon`] trait and static identity/metadata types
//! - [`cluster`] - Read-only cluster and host snapshots supplied by the installer
//! - [`validation`] - Tri-state validation outcomes
//! - [`requirements`] - Per-host and per-role hardware requirements
//! - [`manifest`] - Generated manifest sets
//! - [`template`] - Placeholder rendering and ordered fragment assembly
//! - [`version`] - Base-version comparison for platform versions
//! - [`error`] - Error types
//!
//! Everything here is pure: no I/O, no shared mutable state. Concurrent calls
//! from many threads need no coordination.

#![deny(missing_docs)]

pub mod addon;
pub mod cluster;
pub mod error;
pub mod manifest;
pub mod requirements;
pub mod template;
pub mod validation;
pub mod version;

pub use addon::{Addon, AddonIdentity, CpuArchitecture, OperatorType};
pub use cluster::{AddonRecord, ClusterSnapshot, HostRole, HostSnapshot};
pub use error::Error;
pub use manifest::ManifestSet;
pub use requirements::{
    HostTypeRequirements, PreflightRequirements, ResourceRequirements, RoleRequirements,
};
pub use validation::{ValidationOutcome, ValidationStatus};

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Separator line between documents in a multi-document YAML stream
pub const DOCUMENT_SEPARATOR: &str = "---";
