//! Error types for BADC-CSV operations
//!
//! Every failure the SDK can report is a variant of [`BadcError`]. Callers
//! branch on [`BadcError::kind`] rather than on message text, so the row
//! context added by the parser never hides what actually went wrong.

use thiserror::Error;

/// Errors that can occur while reading, validating or writing a document
#[derive(Error, Debug)]
pub enum BadcError {
    /// The text does not follow the section layout of the format
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Column length or row width disagrees with the established width
    #[error("Wrong length of data: expected {expected} values, got {found}")]
    DataShape { expected: usize, found: usize },

    /// Metadata used in a disallowed scope, with the wrong number of values,
    /// or failing its field check
    #[error("Metadata invalid for {label} {values:?}: {reason}")]
    MetadataInvalid {
        label: String,
        values: Vec<String>,
        reason: String,
    },

    /// Metadata value outside a controlled enumeration
    #[error("Metadata nonstandard for {label} {values:?}: {reason}")]
    MetadataNonstandard {
        label: String,
        values: Vec<String>,
        reason: String,
    },

    /// A mandatory field is missing for the requested compliance level
    #[error("Metadata incomplete, {label}: {reason}")]
    MetadataIncomplete { label: String, reason: String },

    /// A field check that has not been implemented was invoked
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// An export was requested on a document that cannot satisfy it
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row-level failure raised while parsing, with the offending row
    #[error("Row {line} {cells:?}: {source}")]
    AtRow {
        line: u64,
        cells: Vec<String>,
        #[source]
        source: Box<BadcError>,
    },
}

/// Discriminant of a [`BadcError`], with row context stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    DataShape,
    MetadataInvalid,
    MetadataNonstandard,
    MetadataIncomplete,
    NotImplemented,
    Precondition,
    Io,
}

/// Result type for BADC-CSV operations
pub type Result<T> = std::result::Result<T, BadcError>;

impl BadcError {
    /// Create a parse error for a source line
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid-metadata error
    pub fn invalid(label: impl Into<String>, values: &[String], reason: impl Into<String>) -> Self {
        Self::MetadataInvalid {
            label: label.into(),
            values: values.to_vec(),
            reason: reason.into(),
        }
    }

    /// Create an incomplete-metadata error
    pub fn incomplete(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MetadataIncomplete {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Attach the offending row to an error raised while parsing
    pub fn at_row(self, line: u64, cells: &[String]) -> Self {
        Self::AtRow {
            line,
            cells: cells.to_vec(),
            source: Box::new(self),
        }
    }

    /// The kind of failure, looking through any row context
    pub fn kind(&self) -> ErrorKind {
        match self {
            BadcError::Parse { .. } => ErrorKind::Parse,
            BadcError::DataShape { .. } => ErrorKind::DataShape,
            BadcError::MetadataInvalid { .. } => ErrorKind::MetadataInvalid,
            BadcError::MetadataNonstandard { .. } => ErrorKind::MetadataNonstandard,
            BadcError::MetadataIncomplete { .. } => ErrorKind::MetadataIncomplete,
            BadcError::NotImplemented(_) => ErrorKind::NotImplemented,
            BadcError::Precondition(_) => ErrorKind::Precondition,
            BadcError::Io(_) => ErrorKind::Io,
            BadcError::AtRow { source, .. } => source.kind(),
        }
    }

    /// True for invalid metadata, including the nonstandard subkind
    pub fn is_metadata_invalid(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::MetadataInvalid | ErrorKind::MetadataNonstandard
        )
    }

    /// The metadata label this error refers to, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            BadcError::MetadataInvalid { label, .. }
            | BadcError::MetadataNonstandard { label, .. }
            | BadcError::MetadataIncomplete { label, .. } => Some(label),
            BadcError::AtRow { source, .. } => source.label(),
            _ => None,
        }
    }
}

impl From<csv::Error> for BadcError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line()).unwrap_or(0);
        match e.into_kind() {
            csv::ErrorKind::Io(io) => BadcError::Io(io),
            kind => BadcError::parse(line, format!("{:?}", kind)),
        }
    }
}
