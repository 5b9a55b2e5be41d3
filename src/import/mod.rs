//! Import functionality
//!
//! Provides the BADC-CSV reader:
//! - `parser` - section state machine turning rows into a document
//! - `badc_csv` - text tokenising and post-read validation

pub mod badc_csv;
pub mod parser;

pub use badc_csv::BadcCsvImporter;
pub use parser::{Parser, ParserState, parse_rows};
