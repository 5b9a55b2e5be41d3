//! Models module for the SDK
//!
//! Defines the in-memory representation of a BADC-CSV file: the metadata
//! store, the column-oriented data store, and the document joining them.

pub mod data;
pub mod document;
pub mod metadata;

pub use data::{DataStore, Variable};
pub use document::{
    CONVENTIONS_LABEL, CONVENTIONS_VALUES, COORDINATE_VARIABLE_LABEL, Document,
};
pub use metadata::{GLOBAL_REF, Metadata, MetadataQuery, MetadataRecord, Scope};
