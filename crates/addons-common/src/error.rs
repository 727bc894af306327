//! Error types for add-on operations
//!
//! Only genuine faults are errors: malformed input that cannot be parsed and
//! defects in the packaged templates. A cluster that does not meet an add-on's
//! prerequisites is not an error; it is reported as a non-success
//! [`ValidationOutcome`](crate::ValidationOutcome).
//!
//! All variants are terminal. Retrying with the same input yields the same
//! error.

use thiserror::Error;

use crate::template::TemplateError;

/// Main error type for add-on operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A version string could not be interpreted as a semantic version
    #[error("invalid version {version:?}: {source}")]
    InvalidVersion {
        /// The offending version string, as supplied
        version: String,
        /// The underlying parse error
        #[source]
        source: semver::Error,
    },

    /// An add-on properties blob was not valid JSON for the expected shape
    #[error("failed to parse {addon} properties: {source}")]
    PropertiesParse {
        /// Short name of the add-on whose record held the blob
        addon: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A packaged template failed to parse or render
    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl Error {
    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>, source: semver::Error) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            source,
        }
    }

    /// Create a properties parse error for the named add-on
    pub fn properties_parse(addon: impl Into<String>, source: serde_json::Error) -> Self {
        Self::PropertiesParse {
            addon: addon.into(),
            source,
        }
    }
}
