//! Canonical BADC-CSV exporter
//!
//! Writes the form the importer reads back: metadata rows in insertion
//! order, the `Data` marker, the column names, the data rows and the
//! `End Data` marker. Cells are quoted only where CSV requires it.

use std::io::Write;

use tracing::warn;

use crate::error::{BadcError, Result};
use crate::models::{Document, GLOBAL_REF};

pub const DATA_MARKER: &str = "Data";
pub const END_DATA_MARKER: &str = "End Data";

/// Canonical BADC-CSV exporter
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

fn into_string(buf: Vec<u8>) -> Result<String> {
    String::from_utf8(buf)
        .map_err(|e| BadcError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

impl CsvExporter {
    /// Create a new canonical exporter
    pub fn new() -> Self {
        Self
    }

    /// Export a document to canonical text
    pub fn export(&self, doc: &Document) -> Result<String> {
        let mut buf = Vec::new();
        self.write(doc, &mut buf)?;
        into_string(buf)
    }

    /// Write a document in canonical form
    pub fn write<W: Write>(&self, doc: &Document, writer: W) -> Result<()> {
        let mut out = csv_writer(writer);
        self.write_metadata_rows(doc, &mut out)?;
        out.write_record([DATA_MARKER])?;
        out.write_record(doc.column_names())?;
        for row in doc.data().rows() {
            out.write_record(row)?;
        }
        out.write_record([END_DATA_MARKER])?;
        out.flush()?;
        Ok(())
    }

    /// Only the metadata rows, as canonical text
    pub fn export_metadata(&self, doc: &Document) -> Result<String> {
        let mut buf = Vec::new();
        {
            let mut out = csv_writer(&mut buf);
            self.write_metadata_rows(doc, &mut out)?;
            out.flush()?;
        }
        into_string(buf)
    }

    fn write_metadata_rows<W: Write>(&self, doc: &Document, out: &mut csv::Writer<W>) -> Result<()> {
        for record in doc.metadata().records() {
            if record.scope().column() == Some(GLOBAL_REF) {
                warn!(
                    label = record.label(),
                    "Column named G will be read back as global metadata"
                );
            }
            out.write_record(record.to_row())?;
        }
        Ok(())
    }
}
