//! Metadata validation against the schema registry
//!
//! Both passes are fail-fast: the first violation found is returned and no
//! further fields are examined. Fields are visited in lexicographic label
//! order, so the reported violation is deterministic.

use tracing::{debug, warn};

use super::ComplianceLevel;
use crate::error::{BadcError, Result};
use crate::models::{COORDINATE_VARIABLE_LABEL, Document, MetadataQuery, MetadataRecord};
use crate::schema::{self, CheckFailure, FieldSpec, Mandatory};

/// Metadata validator
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataValidator;

impl MetadataValidator {
    /// Create a new metadata validator
    pub fn new() -> Self {
        Self
    }

    /// Check that every known label is used in an allowed scope, with an
    /// allowed number of values, and passes its field check
    pub fn check_valid(&self, doc: &Document) -> Result<()> {
        let columns = doc.column_names();
        for record in doc.metadata().column_records() {
            let column = record.scope().column().unwrap_or_default();
            if !columns.contains(&column) {
                warn!(
                    label = record.label(),
                    column, "Metadata refers to a column that is not in the data table"
                );
            }
        }

        for spec in schema::fields() {
            self.check_field(doc, spec)?;
        }
        debug!(records = doc.metadata().len(), "Metadata valid");
        Ok(())
    }

    fn check_field(&self, doc: &Document, spec: &FieldSpec) -> Result<()> {
        let records: Vec<&MetadataRecord> = doc.metadata().with_label(spec.label).collect();
        if records.is_empty() {
            return Ok(());
        }

        let global = records.iter().find(|r| r.scope().is_global());
        if let (false, Some(record)) = (spec.applies_globally, global) {
            return Err(BadcError::invalid(
                spec.label,
                record.values(),
                "Not allowed as global metadata parameter",
            ));
        }

        let on_column = records.iter().find(|r| !r.scope().is_global());
        if let (false, Some(record)) = (spec.applies_to_column, on_column) {
            return Err(BadcError::invalid(
                spec.label,
                record.values(),
                format!("Not allowed as metadata for column {}", record.scope()),
            ));
        }

        for record in &records {
            let count = record.values().len();
            if count > spec.max_values {
                return Err(BadcError::invalid(
                    spec.label,
                    record.values(),
                    format!("Max number of metadata fields ({}) exceeded", spec.max_values),
                ));
            }
            if count < spec.min_values {
                return Err(BadcError::invalid(
                    spec.label,
                    record.values(),
                    format!("Min number of metadata fields ({}) not given", spec.min_values),
                ));
            }
        }

        for record in &records {
            (spec.check)(record.values()).map_err(|failure| match failure {
                CheckFailure::Invalid(reason) => {
                    BadcError::invalid(spec.label, record.values(), reason)
                }
                CheckFailure::Nonstandard(reason) => BadcError::MetadataNonstandard {
                    label: spec.label.to_string(),
                    values: record.values().to_vec(),
                    reason,
                },
                CheckFailure::NotImplemented(what) => {
                    BadcError::NotImplemented(format!("{} ({})", what, spec.label))
                }
            })?;
        }
        Ok(())
    }

    /// Check validity, then that every field mandatory at `level` is present
    pub fn check_complete(&self, doc: &Document, level: ComplianceLevel) -> Result<()> {
        self.check_valid(doc)?;

        for spec in schema::fields() {
            let mandatory = match level {
                ComplianceLevel::Basic => spec.mandatory_basic,
                ComplianceLevel::Complete => spec.mandatory_complete,
            };
            if !mandatory.is_required() {
                continue;
            }

            if spec.applies_globally {
                let present = doc.metadata().contains(MetadataQuery::ByLabel(spec.label))
                    || doc
                        .metadata()
                        .contains(MetadataQuery::ByLabelWildcard(spec.label));
                if !present {
                    return Err(BadcError::incomplete(
                        spec.label,
                        format!("{} global metadata not there", level),
                    ));
                }
            } else if spec.applies_to_column && mandatory == Mandatory::EveryColumn {
                for column in doc.column_names() {
                    if !doc
                        .metadata()
                        .contains(MetadataQuery::ByLabelAndColumn(spec.label, column))
                    {
                        return Err(BadcError::incomplete(
                            spec.label,
                            format!("{} column metadata not there for {}", level, column),
                        ));
                    }
                }
            }
        }

        if doc.coordinate_variables().is_empty() {
            return Err(BadcError::incomplete(
                COORDINATE_VARIABLE_LABEL,
                format!(
                    "At least one column needs to have {} information",
                    COORDINATE_VARIABLE_LABEL
                ),
            ));
        }

        debug!(%level, "Metadata complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn basic_document() -> Document {
        let mut doc = Document::new();
        doc.add_variable("temp", [301.2, 303.4]).unwrap();
        doc.add_variable("time", [6, 12]).unwrap();
        doc.add_column_metadata("long_name", "temp", ["Temperature", "K"]);
        doc.add_column_metadata("long_name", "time", ["Time", "hours"]);
        doc.add_column_metadata("coordinate_variable", "time", ["1"]);
        doc
    }

    #[test]
    fn test_basic_document_is_complete() {
        let validator = MetadataValidator::new();
        validator
            .check_complete(&basic_document(), ComplianceLevel::Basic)
            .unwrap();
    }

    #[test]
    fn test_global_only_field_on_column_is_invalid() {
        let mut doc = basic_document();
        doc.add_column_metadata("title", "temp", ["A title"]);
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataInvalid);
        assert_eq!(err.label(), Some("title"));
    }

    #[test]
    fn test_column_only_field_as_global_is_invalid() {
        let mut doc = basic_document();
        doc.add_global("long_name", ["Temperature", "K"]);
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.label(), Some("long_name"));
        assert!(err.is_metadata_invalid());
    }

    #[test]
    fn test_cardinality() {
        let mut doc = basic_document();
        doc.add_column_metadata("valid_range", "temp", ["0"]);
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataInvalid);
        assert!(err.to_string().contains("Min number"));
    }

    #[test]
    fn test_unknown_labels_are_not_validated() {
        let mut doc = basic_document();
        doc.add_global("my_own_label", ["anything", "goes", "here"]);
        doc.check_valid().unwrap();
    }

    #[test]
    fn test_unrecognised_type_is_nonstandard() {
        let mut doc = basic_document();
        doc.add_column_metadata("type", "temp", ["double"]);
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataNonstandard);
    }

    #[test]
    fn test_cell_method_is_not_implemented() {
        let mut doc = basic_document();
        doc.add_global("cell_method", ["time: mean"]);
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotImplemented);
    }

    #[test]
    fn test_missing_conventions_is_incomplete() {
        let mut doc = Document::empty();
        doc.add_variable("time", [1]).unwrap();
        doc.add_column_metadata("long_name", "time", ["Time", "s"]);
        doc.add_column_metadata("coordinate_variable", "time", Vec::<String>::new());
        doc.check_valid().unwrap();
        let err = doc.check_complete(ComplianceLevel::Basic).unwrap_err();
        assert_eq!(err.label(), Some("Conventions"));
    }

    #[test]
    fn test_every_column_rule() {
        let mut doc = basic_document();
        doc.add_variable("press", [1002.2, 1004.4]).unwrap();
        let err = doc.check_complete(ComplianceLevel::Basic).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataIncomplete);
        assert_eq!(err.label(), Some("long_name"));
    }

    #[test]
    fn test_global_field_satisfied_by_column() {
        let mut doc = basic_document();
        for (label, value) in [
            ("creator", "Scrofulous Student"),
            ("date_valid", "2013-12-01"),
            ("last_revised_date", "2013-12-02"),
            ("source", "My Dummy data program"),
            ("observation_station", "My back yard"),
            ("activity", "testing"),
            ("feature_type", "point series"),
        ] {
            doc.add_global(label, [value]);
        }
        doc.add_column_metadata("type", "temp", ["float"]);
        doc.add_column_metadata("type", "time", ["int"]);
        // location only on a column still satisfies the global rule
        doc.add_column_metadata("location", "temp", ["My back yard"]);
        doc.check_complete(ComplianceLevel::Complete).unwrap();
    }
}
