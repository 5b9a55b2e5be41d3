//! BADC-CSV importer
//!
//! Tokenises text with the `csv` crate, feeds the rows to the [`Parser`],
//! and checks the resulting document as configured.

use std::io::Read;
use std::path::Path;

use tracing::info;

use super::parser::{Parser, ParserState};
use crate::config::BadcConfig;
use crate::error::{BadcError, Result};
use crate::models::Document;

/// BADC-CSV importer
#[derive(Debug, Clone, Default)]
pub struct BadcCsvImporter {
    config: BadcConfig,
}

impl BadcCsvImporter {
    /// Create an importer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an importer with a custom configuration
    pub fn with_config(config: BadcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BadcConfig {
        &self.config
    }

    /// Import a document from text
    ///
    /// # Example
    ///
    /// ```rust
    /// use badc_csv_sdk::import::BadcCsvImporter;
    ///
    /// let text = "Conventions,G,BADC-CSV,1\nData\ntime\n6\n12\nEnd Data\n";
    /// let doc = BadcCsvImporter::new().import(text).unwrap();
    /// assert_eq!(doc.column_names(), vec!["time"]);
    /// assert_eq!(doc.len(), 2);
    /// ```
    pub fn import(&self, content: &str) -> Result<Document> {
        self.import_reader(content.as_bytes())
    }

    /// Import a document from any byte source
    pub fn import_reader<R: Read>(&self, reader: R) -> Result<Document> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut parser = Parser::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            parser.feed(line, record.iter().map(str::to_string).collect())?;
            if parser.state() == ParserState::Done {
                break;
            }
        }
        let doc = parser.finish()?;
        self.check(&doc)?;
        info!(
            columns = doc.nvar(),
            rows = doc.len(),
            records = doc.metadata().len(),
            "Imported BADC-CSV document"
        );
        Ok(doc)
    }

    /// Import a document from a file
    pub fn import_file(&self, path: &Path) -> Result<Document> {
        let file = std::fs::File::open(path).map_err(BadcError::Io)?;
        self.import_reader(std::io::BufReader::new(file))
    }

    /// Import a document from rows that have already been split into cells
    pub fn import_rows<I>(&self, rows: I) -> Result<Document>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let doc = super::parser::parse_rows(rows)?;
        self.check(&doc)?;
        Ok(doc)
    }

    fn check(&self, doc: &Document) -> Result<()> {
        if let Some(level) = self.config.compliance_level {
            doc.check_complete(level)
        } else if self.config.validate_on_read {
            doc.check_valid()
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::validation::ComplianceLevel;

    const MINIMAL: &str = "Conventions,G,BADC-CSV,1\n\
                           long_name,time,\"Time, since start\",hours\n\
                           \n\
                           Data\n\
                           time\n\
                           6\n\
                           12\n\
                           End Data\n";

    #[test]
    fn test_quoted_values_keep_commas() {
        let doc = BadcCsvImporter::new().import(MINIMAL).unwrap();
        let record = &doc.metadata().records()[1];
        assert_eq!(record.values(), ["Time, since start", "hours"]);
    }

    #[test]
    fn test_invalid_metadata_fails_on_read() {
        let text = "Conventions,G,CF,1\nData\nx\n1\nEnd Data\n";
        let err = BadcCsvImporter::new().import(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataInvalid);

        let lenient = BadcConfig::builder().validate_on_read(false).build();
        assert!(BadcCsvImporter::with_config(lenient).import(text).is_ok());
    }

    #[test]
    fn test_compliance_level_on_read() {
        let config = BadcConfig::builder()
            .compliance_level(ComplianceLevel::Basic)
            .build();
        let err = BadcCsvImporter::with_config(config)
            .import(MINIMAL)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataIncomplete);
        assert_eq!(err.label(), Some("coordinate_variable"));
    }

    #[test]
    fn test_shape_error_reports_line() {
        let text = "Data\na,b\n1,2\n3\nEnd Data\n";
        let err = BadcCsvImporter::new().import(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataShape);
        assert!(matches!(err, BadcError::AtRow { line: 4, .. }));
    }
}
