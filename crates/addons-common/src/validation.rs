//! Validation outcomes
//!
//! Add-ons report prerequisite checks as outcomes rather than errors. The
//! installer drives its own state machine from them:
//!
//! - [`ValidationStatus::Success`] - prerequisite met
//! - [`ValidationStatus::Pending`] - not decidable yet (e.g. inventory not
//!   collected); re-checked later
//! - [`ValidationStatus::Failure`] - prerequisite not met; blocks installation
//!   until the cluster configuration changes

use serde::{Deserialize, Serialize};

/// Tri-state validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// Prerequisite met
    Success,
    /// Prerequisite not met
    Failure,
    /// Not decidable yet
    Pending,
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Pending => "pending",
        };
        f.write_str(s)
    }
}

/// Result of a single validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// Identifier of the validation that produced this outcome
    pub validation_id: String,
    /// Outcome status
    pub status: ValidationStatus,
    /// Human-readable reasons; empty on success
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl ValidationOutcome {
    /// A successful outcome
    pub fn success(validation_id: impl Into<String>) -> Self {
        Self {
            validation_id: validation_id.into(),
            status: ValidationStatus::Success,
            reasons: Vec::new(),
        }
    }

    /// A failed outcome with a single reason
    pub fn failure(validation_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            validation_id: validation_id.into(),
            status: ValidationStatus::Failure,
            reasons: vec![reason.into()],
        }
    }

    /// A pending outcome with a single reason
    pub fn pending(validation_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            validation_id: validation_id.into(),
            status: ValidationStatus::Pending,
            reasons: vec![reason.into()],
        }
    }

    /// Whether the prerequisite is met
    pub fn is_success(&self) -> bool {
        self.status == ValidationStatus::Success
    }
}
