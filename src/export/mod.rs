//! Export functionality
//!
//! Provides exporters for various formats:
//! - Canonical BADC-CSV (round-trips through the importer)
//! - CDL attribute dump and full CDL document
//! - NASA Ames FFI 1001
//! - Array-model description (serde serializable)

pub mod array;
pub mod canonical;
pub mod cdl;
pub mod nasa_ames;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::BadcConfig;
use crate::error::{BadcError, Result};
use crate::models::Document;

pub use array::{ArrayDescription, ArrayVariable, Attribute, ScalarType};
pub use canonical::CsvExporter;
pub use cdl::CdlExporter;
pub use nasa_ames::NasaAmesExporter;

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    Csv,
    Cdl,
    NasaAmes,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Cdl => write!(f, "cdl"),
            ExportFormat::NasaAmes => write!(f, "nasa-ames"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = BadcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "cdl" => Ok(ExportFormat::Cdl),
            "na" | "nasa-ames" | "nasa_ames" => Ok(ExportFormat::NasaAmes),
            other => Err(BadcError::Precondition(format!(
                "Unknown export format: {}",
                other
            ))),
        }
    }
}

/// Result of an export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Exported content
    pub content: String,
    /// Format the content was written in
    pub format: ExportFormat,
}

/// Export a document in the requested format
pub fn export_document(
    doc: &Document,
    format: ExportFormat,
    config: &BadcConfig,
) -> Result<ExportResult> {
    let content = match format {
        ExportFormat::Csv => CsvExporter::new().export(doc)?,
        ExportFormat::Cdl => CdlExporter::with_name(config.cdl_name.clone()).export(doc),
        ExportFormat::NasaAmes => {
            NasaAmesExporter::with_comment(config.legacy_comment.clone()).export(doc)?
        }
    };
    info!(%format, bytes = content.len(), "Exported document");
    Ok(ExportResult { content, format })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("na".parse::<ExportFormat>().unwrap(), ExportFormat::NasaAmes);
        assert_eq!(
            "nasa-ames".parse::<ExportFormat>().unwrap(),
            ExportFormat::NasaAmes
        );
        assert!("netcdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_document_uses_config() {
        let mut doc = Document::new();
        doc.add_variable("x", [1]).unwrap();
        let config = BadcConfig::builder().cdl_name("survey").build();
        let result = export_document(&doc, ExportFormat::Cdl, &config).unwrap();
        assert_eq!(result.format, ExportFormat::Cdl);
        assert!(result.content.contains("netcdf survey {"));
    }
}
