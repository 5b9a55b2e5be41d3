//! Descriptive attribute dump and CDL exporter
//!
//! The attribute dump lists every metadata record as a netCDF-style
//! attribute line. CDL attributes must be unique per variable, so a
//! repeated (label, scope) pair gets a numeric suffix: `creator`,
//! `creator1`, `creator2`, ...
//!
//! This output is descriptive only and is not read back.

use std::collections::HashMap;

use tracing::warn;

use super::array::ScalarType;
use crate::models::{Document, MetadataQuery, MetadataRecord, Scope};

/// CDL exporter
#[derive(Debug, Clone)]
pub struct CdlExporter {
    /// Dataset name in the `netcdf <name> {` header
    pub name: String,
}

impl Default for CdlExporter {
    fn default() -> Self {
        Self {
            name: "badc".to_string(),
        }
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Label with a suffix for every repeat of the same (label, scope)
fn unique_labels<'a>(records: impl Iterator<Item = &'a MetadataRecord>) -> Vec<(String, &'a MetadataRecord)> {
    let mut seen: HashMap<(&str, &Scope), usize> = HashMap::new();
    records
        .map(|record| {
            let count = seen.entry((record.label(), record.scope())).or_insert(0);
            let label = if *count == 0 {
                record.label().to_string()
            } else {
                format!("{}{}", record.label(), count)
            };
            *count += 1;
            (label, record)
        })
        .collect()
}

impl CdlExporter {
    /// Create a new CDL exporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CDL exporter with a dataset name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// One line per column record, then one line per global record
    ///
    /// Column lines read `column:label = "v1, v2";`, global lines
    /// `:label = "v1, v2";`.
    pub fn attribute_lines(&self, doc: &Document) -> Vec<String> {
        let metadata = doc.metadata();
        let column_lines = unique_labels(metadata.column_records()).into_iter().map(|(label, r)| {
            format!(
                "{}:{} = \"{}\";",
                r.scope(),
                label,
                escape(&r.values().join(", "))
            )
        });
        let global_lines = unique_labels(metadata.global_records())
            .into_iter()
            .map(|(label, r)| format!(":{} = \"{}\";", label, escape(&r.values().join(", "))));
        column_lines.chain(global_lines).collect()
    }

    /// The attribute dump as text
    pub fn attribute_dump(&self, doc: &Document) -> String {
        self.attribute_lines(doc)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }

    /// A complete CDL document: dimensions, typed variables, attributes and data
    pub fn export(&self, doc: &Document) -> String {
        let mut s = String::from("// This CDL file was generated from a BADC text file\n");
        s.push_str(&format!("netcdf {} {{\n", self.name));
        s.push_str(&format!("dimensions:\n    point = {} ;\n\n", doc.len()));

        s.push_str("variables:\n");
        let types: Vec<ScalarType> = doc
            .column_names()
            .into_iter()
            .map(|name| self.column_type(doc, name))
            .collect();
        for (name, scalar_type) in doc.column_names().into_iter().zip(&types) {
            s.push_str(&format!("    {} {}(point) ;\n", scalar_type, name));
        }
        s.push('\n');

        let lines = self.attribute_lines(doc);
        let (column_lines, global_lines) =
            lines.split_at(doc.metadata().column_records().count());
        s.push_str("// variable attributes\n");
        for line in column_lines {
            s.push_str(&format!("        {}\n", line));
        }
        s.push_str("\n// global attributes\n");
        for line in global_lines {
            s.push_str(&format!("        {}\n", line));
        }

        s.push_str("\ndata:\n\n");
        for (variable, scalar_type) in doc.variables().iter().zip(&types) {
            let values: Vec<String> = variable
                .values()
                .iter()
                .map(|v| match scalar_type {
                    ScalarType::Char => format!("\"{}\"", escape(v)),
                    _ => v.clone(),
                })
                .collect();
            s.push_str(&format!(" {} = {} ;\n", variable.name(), values.join(", ")));
        }
        s.push_str("}\n");
        s
    }

    fn column_type(&self, doc: &Document, column: &str) -> ScalarType {
        let declared = doc
            .query(MetadataQuery::ByLabelAndColumn("type", column))
            .first()
            .and_then(|r| r.first())
            .and_then(|t| t.parse().ok());
        declared.unwrap_or_else(|| {
            warn!(column, "No usable type for column, writing it as char");
            ScalarType::Char
        })
    }
}
