//! Configuration for reading and writing BADC-CSV documents

use serde::{Deserialize, Serialize};

use crate::validation::ComplianceLevel;

/// Default normal comment written into legacy fixed-header exports
pub const DEFAULT_LEGACY_COMMENT: &str = "File created from BADC text file";

/// Configuration shared by the importer and exporters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BadcConfig {
    /// Run the validity pass after parsing
    pub validate_on_read: bool,

    /// Also run the completeness pass at this level after parsing
    pub compliance_level: Option<ComplianceLevel>,

    /// Normal comment line of the legacy fixed-header export
    pub legacy_comment: String,

    /// Dataset name used in the CDL header
    pub cdl_name: String,
}

impl Default for BadcConfig {
    fn default() -> Self {
        Self {
            validate_on_read: true,
            compliance_level: None,
            legacy_comment: DEFAULT_LEGACY_COMMENT.to_string(),
            cdl_name: "badc".to_string(),
        }
    }
}

impl BadcConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> BadcConfigBuilder {
        BadcConfigBuilder::default()
    }
}

/// Builder for BadcConfig
#[derive(Debug, Default)]
pub struct BadcConfigBuilder {
    config: BadcConfig,
}

impl BadcConfigBuilder {
    /// Enable or disable the validity pass after parsing
    pub fn validate_on_read(mut self, validate: bool) -> Self {
        self.config.validate_on_read = validate;
        self
    }

    /// Require completeness at the given level after parsing
    pub fn compliance_level(mut self, level: ComplianceLevel) -> Self {
        self.config.compliance_level = Some(level);
        self
    }

    /// Set the legacy export comment line
    pub fn legacy_comment(mut self, comment: impl Into<String>) -> Self {
        self.config.legacy_comment = comment.into();
        self
    }

    /// Set the CDL dataset name
    pub fn cdl_name(mut self, name: impl Into<String>) -> Self {
        self.config.cdl_name = name.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> BadcConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BadcConfig::default();
        assert!(config.validate_on_read);
        assert_eq!(config.compliance_level, None);
        assert_eq!(config.legacy_comment, DEFAULT_LEGACY_COMMENT);
    }

    #[test]
    fn test_builder() {
        let config = BadcConfig::builder()
            .validate_on_read(false)
            .compliance_level(ComplianceLevel::Complete)
            .cdl_name("station")
            .build();

        assert!(!config.validate_on_read);
        assert_eq!(config.compliance_level, Some(ComplianceLevel::Complete));
        assert_eq!(config.cdl_name, "station");
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: BadcConfig =
            serde_json::from_str(r#"{"complianceLevel": "basic"}"#).unwrap();
        assert!(config.validate_on_read);
        assert_eq!(config.compliance_level, Some(ComplianceLevel::Basic));
    }
}
