//! BADC-CSV SDK - Reader, validator and writer for BADC-CSV data files
//!
//! Provides unified interfaces for:
//! - Parsing BADC-CSV text into a document (metadata plus columnar data)
//! - Validating metadata against the field registry
//! - Completeness checks at basic and complete compliance levels
//! - Writing canonical BADC-CSV, CDL and NASA Ames text

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod schema;
pub mod validation;

pub use config::{BadcConfig, BadcConfigBuilder};
pub use error::{BadcError, ErrorKind, Result};
pub use export::{
    ArrayDescription, CdlExporter, CsvExporter, ExportFormat, ExportResult, NasaAmesExporter,
    ScalarType, export_document,
};
pub use import::{BadcCsvImporter, Parser, ParserState, parse_rows};
pub use models::{
    DataStore, Document, GLOBAL_REF, Metadata, MetadataQuery, MetadataRecord, Scope, Variable,
};
pub use schema::{CheckFailure, FieldSpec, Mandatory};
pub use validation::{ComplianceLevel, MetadataValidator};
