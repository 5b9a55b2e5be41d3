//! BADC-CSV document model
//!
//! A [`Document`] holds the content of one file: the metadata records and
//! the data table. It is mutated only by appending variables, data rows and
//! metadata records; nothing is ever removed.
//!
//! A document is a plain owned value with no interior locking. Callers
//! sharing one across threads must synchronise mutation themselves.
//!
//! # Example
//!
//! ```rust
//! use badc_csv_sdk::models::{Document, Scope};
//!
//! let mut doc = Document::new();
//! doc.add_variable("time", [6, 12]).unwrap();
//! doc.add_metadata("long_name", ["Time", "hours"], Scope::Column("time".into()));
//! assert_eq!(doc.nvar(), 1);
//! assert_eq!(doc.get_row(1), Some(vec!["12"]));
//! ```

use serde::{Deserialize, Serialize};

use super::data::{DataStore, Variable};
use super::metadata::{Metadata, MetadataQuery, MetadataRecord, Scope};
use crate::error::Result;
use crate::validation::{ComplianceLevel, MetadataValidator};

/// Label of the conventions record every document must carry
pub const CONVENTIONS_LABEL: &str = "Conventions";
/// Conventions values identifying this format
pub const CONVENTIONS_VALUES: [&str; 2] = ["BADC-CSV", "1"];
/// Label marking a column as a coordinate variable
pub const COORDINATE_VARIABLE_LABEL: &str = "coordinate_variable";

/// In-memory content of one BADC-CSV file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    metadata: Metadata,
    data: DataStore,
}

impl Document {
    /// Create a document for writing, already carrying `Conventions`
    pub fn new() -> Self {
        let mut doc = Self::empty();
        doc.add_metadata(CONVENTIONS_LABEL, CONVENTIONS_VALUES, Scope::Global);
        doc
    }

    /// Create a document with no metadata at all, as the parser does
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a data column
    pub fn add_variable<I, S>(&mut self, name: impl Into<String>, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let values = values.into_iter().map(|v| v.to_string()).collect();
        self.data.add_variable(name, values)
    }

    /// Append one data row across all columns
    pub fn add_data_row<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let values = values.into_iter().map(|v| v.to_string()).collect();
        self.data.add_data_row(values)
    }

    /// Append a metadata record
    pub fn add_metadata<I, S>(&mut self, label: impl Into<String>, values: I, scope: Scope)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        self.metadata
            .add_record(MetadataRecord::new(label, scope, values));
    }

    /// Append a global metadata record
    pub fn add_global<I, S>(&mut self, label: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.add_metadata(label, values, Scope::Global);
    }

    /// Append a metadata record on a column
    pub fn add_column_metadata<I, S>(
        &mut self,
        label: impl Into<String>,
        column: impl Into<String>,
        values: I,
    ) where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.add_metadata(label, values, Scope::Column(column.into()));
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn data(&self) -> &DataStore {
        &self.data
    }

    /// Metadata records matching a query
    pub fn query(&self, query: MetadataQuery<'_>) -> Vec<&MetadataRecord> {
        self.metadata.query(query)
    }

    /// Number of variables
    pub fn nvar(&self) -> usize {
        self.data.nvar()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.data.column_names()
    }

    pub fn variables(&self) -> &[Variable] {
        self.data.variables()
    }

    /// All values of one column
    pub fn get(&self, column: usize) -> Option<&[String]> {
        self.data.get(column)
    }

    /// One value
    pub fn get_value(&self, column: usize, row: usize) -> Option<&str> {
        self.data.get_value(column, row)
    }

    /// Values across all columns at one row
    pub fn get_row(&self, row: usize) -> Option<Vec<&str>> {
        self.data.get_row(row)
    }

    /// Names of columns carrying `coordinate_variable`, in column order
    pub fn coordinate_variables(&self) -> Vec<&str> {
        self.column_names()
            .into_iter()
            .filter(|name| {
                self.metadata.contains(MetadataQuery::ByLabelAndColumn(
                    COORDINATE_VARIABLE_LABEL,
                    name,
                ))
            })
            .collect()
    }

    /// Run the validity pass
    pub fn check_valid(&self) -> Result<()> {
        MetadataValidator::new().check_valid(self)
    }

    /// Run the validity pass, then the completeness pass at `level`
    pub fn check_complete(&self, level: ComplianceLevel) -> Result<()> {
        MetadataValidator::new().check_complete(self, level)
    }
}

/// Documents are equal when their metadata is equal. Column data is not
/// compared; use [`Document::data`] for that.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.metadata == other.metadata
    }
}

impl Eq for Document {}
