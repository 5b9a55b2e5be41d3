//! Metadata store
//!
//! Records are kept in a single list in insertion order. The same label may
//! repeat in the same scope (several `creator` entries, for example), so the
//! store is deliberately not a map.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scope reference used in the text format for global records
pub const GLOBAL_REF: &str = "G";

/// What a metadata record applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    /// The whole document
    Global,
    /// One named data column
    Column(String),
}

impl Scope {
    /// Interpret the scope reference cell of a metadata row
    ///
    /// `G` always means global, so a column literally named `G` cannot carry
    /// column metadata in the text format.
    pub fn from_ref(reference: &str) -> Self {
        if reference == GLOBAL_REF {
            Scope::Global
        } else {
            Scope::Column(reference.to_string())
        }
    }

    /// The scope reference written to the text format
    pub fn as_ref_str(&self) -> &str {
        match self {
            Scope::Global => GLOBAL_REF,
            Scope::Column(name) => name,
        }
    }

    pub fn is_global(&self) -> bool {
        matches!(self, Scope::Global)
    }

    /// Column name for column-scoped records
    pub fn column(&self) -> Option<&str> {
        match self {
            Scope::Global => None,
            Scope::Column(name) => Some(name),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref_str())
    }
}

/// One metadata row: a label, its scope and its raw values
///
/// Values cannot be changed once the record exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    label: String,
    scope: Scope,
    values: Vec<String>,
}

impl MetadataRecord {
    pub fn new<I, S>(label: impl Into<String>, scope: Scope, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            scope,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// First value of the tuple, if any
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// The record as a text-format row: label, scope reference, values
    pub fn to_row(&self) -> Vec<&str> {
        let mut row = Vec::with_capacity(self.values.len() + 2);
        row.push(self.label.as_str());
        row.push(self.scope.as_ref_str());
        row.extend(self.values.iter().map(String::as_str));
        row
    }
}

/// A metadata lookup request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataQuery<'a> {
    /// Global records with this label
    ByLabel(&'a str),
    /// Records with this label on one column
    ByLabelAndColumn(&'a str, &'a str),
    /// Every record on one column, whatever its label
    ByColumnWildcard(&'a str),
    /// Records with this label on any column
    ByLabelWildcard(&'a str),
}

impl MetadataQuery<'_> {
    fn matches(&self, record: &MetadataRecord) -> bool {
        match (*self, record.scope()) {
            (MetadataQuery::ByLabel(label), Scope::Global) => record.label() == label,
            (MetadataQuery::ByLabelAndColumn(label, column), Scope::Column(name)) => {
                record.label() == label && name == column
            }
            (MetadataQuery::ByColumnWildcard(column), Scope::Column(name)) => name == column,
            (MetadataQuery::ByLabelWildcard(label), Scope::Column(_)) => record.label() == label,
            _ => false,
        }
    }
}

/// Ordered collection of metadata records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    records: Vec<MetadataRecord>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record
    pub fn add_record(&mut self, record: MetadataRecord) {
        self.records.push(record);
    }

    /// All records in insertion order
    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    /// Global records in insertion order
    pub fn global_records(&self) -> impl Iterator<Item = &MetadataRecord> {
        self.records.iter().filter(|r| r.scope().is_global())
    }

    /// Column records in insertion order
    pub fn column_records(&self) -> impl Iterator<Item = &MetadataRecord> {
        self.records.iter().filter(|r| !r.scope().is_global())
    }

    /// Records matching a query, in insertion order
    pub fn query(&self, query: MetadataQuery<'_>) -> Vec<&MetadataRecord> {
        self.records.iter().filter(|r| query.matches(r)).collect()
    }

    /// Every record with this label, global or column
    pub fn with_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a MetadataRecord> {
        self.records.iter().filter(move |r| r.label() == label)
    }

    /// True when at least one record matches the query
    pub fn contains(&self, query: MetadataQuery<'_>) -> bool {
        self.records.iter().any(|r| query.matches(r))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Global records and column records are each compared list for list, in
/// insertion order. Interleaving between the two lists does not matter.
impl PartialEq for Metadata {
    fn eq(&self, other: &Self) -> bool {
        self.global_records().eq(other.global_records())
            && self.column_records().eq(other.column_records())
    }
}

impl Eq for Metadata {}
