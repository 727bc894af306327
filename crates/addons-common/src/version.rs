//! Platform version comparison
//!
//! Platform versions arrive in several shapes: `4.11.0`, `v4.11.0`, `4.11`, and
//! pre-release builds such as `4.12.0-0.nightly-2022-08-01-123456` or
//! `4.14.0-ec.2`. Prerequisite checks compare only the base
//! `major.minor.patch`, so a nightly of 4.12 satisfies a 4.12 minimum.

use semver::Version;

use crate::{Error, Result};

/// Parse the base `major.minor.patch` of a platform version
///
/// A leading `v` is accepted, a missing minor or patch component is treated
/// as `0`, and any pre-release or build suffix is dropped.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] if the base is not a numeric dotted
/// triple after normalization (e.g. empty, `four`, `4.x.0`, `4.11.0.1`).
pub fn parse_base_version(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let clean = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let core = match clean.find(['-', '+']) {
        Some(idx) => &clean[..idx],
        None => clean,
    };

    let mut normalized = core.to_string();
    match core.matches('.').count() {
        0 if !core.is_empty() => normalized.push_str(".0.0"),
        1 => normalized.push_str(".0"),
        _ => {}
    }

    let version = Version::parse(&normalized).map_err(|e| Error::invalid_version(raw, e))?;
    Ok(Version::new(version.major, version.minor, version.patch))
}

/// Whether `version`'s base is strictly below `minimum`'s base
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] if either string cannot be parsed.
pub fn base_version_less_than(version: &str, minimum: &str) -> Result<bool> {
    let version = parse_base_version(version)?;
    let minimum = parse_base_version(minimum)?;
    Ok(version < minimum)
}
