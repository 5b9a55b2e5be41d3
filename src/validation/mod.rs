//! Validation functionality
//!
//! Provides validation logic for:
//! - Validity (metadata scope, value counts, field checks)
//! - Completeness at the basic or complete compliance level

pub mod metadata;

pub use metadata::MetadataValidator;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How much metadata a document is required to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceLevel {
    /// Minimum needed for the file to be machine usable
    Basic,
    /// Fuller provenance
    Complete,
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceLevel::Basic => write!(f, "basic"),
            ComplianceLevel::Complete => write!(f, "complete"),
        }
    }
}

impl FromStr for ComplianceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(ComplianceLevel::Basic),
            "complete" => Ok(ComplianceLevel::Complete),
            other => Err(format!(
                "Unknown compliance level '{}', expected basic or complete",
                other
            )),
        }
    }
}
