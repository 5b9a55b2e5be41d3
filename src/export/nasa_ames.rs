//! Legacy fixed-header exporter (NASA Ames FFI 1001)
//!
//! Produces a one-independent-variable file. The independent variable is
//! the single column marked with `coordinate_variable`. All BADC-CSV
//! metadata is carried along as special comments in canonical form.

use tracing::{info, warn};

use super::canonical::CsvExporter;
use crate::config::DEFAULT_LEGACY_COMMENT;
use crate::error::{BadcError, Result};
use crate::models::{Document, MetadataQuery};

const FFI: u32 = 1001;
const DEFAULT_SCALE_FACTOR: &str = "1.0";
const DEFAULT_UPPER_BOUND: &str = "1.0e99";

/// NASA Ames FFI 1001 exporter
#[derive(Debug, Clone)]
pub struct NasaAmesExporter {
    /// Text of the single normal comment line
    pub comment: String,
}

impl Default for NasaAmesExporter {
    fn default() -> Self {
        Self {
            comment: DEFAULT_LEGACY_COMMENT.to_string(),
        }
    }
}

/// First value of a column record, falling back to the global record
fn column_or_global<'a>(doc: &'a Document, label: &'a str, column: &'a str) -> Option<&'a str> {
    doc.query(MetadataQuery::ByLabelAndColumn(label, column))
        .first()
        .copied()
        .or_else(|| doc.query(MetadataQuery::ByLabel(label)).first().copied())
        .and_then(|r| r.first())
}

/// Earliest first value of a global date field, as `YYYY MM DD...`
fn earliest_date(doc: &Document, label: &str) -> Result<String> {
    doc.query(MetadataQuery::ByLabel(label))
        .into_iter()
        .filter_map(|r| r.first())
        .min()
        .map(|d| d.replace('-', " "))
        .ok_or_else(|| BadcError::Precondition(format!("Legacy export needs {} metadata", label)))
}

fn parse_bound(label: &str, column: &str, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        BadcError::Precondition(format!(
            "{} for column {} is not a number: {}",
            label, column, value
        ))
    })
}

impl NasaAmesExporter {
    /// Create an exporter with the default comment line
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with a custom comment line
    pub fn with_comment(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }

    fn long_name(&self, doc: &Document, column: &str) -> String {
        match doc
            .query(MetadataQuery::ByLabelAndColumn("long_name", column))
            .first()
            .copied()
            .map(|r| r.values())
        {
            Some([name, unit, ..]) => format!("{} ({})", name, unit),
            Some([name]) => name.clone(),
            _ => {
                warn!(column, "No long_name for column, using the column name");
                column.to_string()
            }
        }
    }

    /// Smallest of `valid_max` and the top of `valid_range`, if either is given
    fn upper_bound(&self, doc: &Document, column: &str) -> Result<Option<f64>> {
        let valid_max = column_or_global(doc, "valid_max", column)
            .map(|v| parse_bound("valid_max", column, v))
            .transpose()?;
        let range_top = doc
            .query(MetadataQuery::ByLabelAndColumn("valid_range", column))
            .first()
            .copied()
            .or_else(|| doc.query(MetadataQuery::ByLabel("valid_range")).first().copied())
            .and_then(|r| r.values().get(1))
            .map(|v| parse_bound("valid_range", column, v))
            .transpose()?;
        Ok(match (valid_max, range_top) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (bound, None) | (None, bound) => bound,
        })
    }

    /// Export a document as NASA Ames FFI 1001 text
    ///
    /// Fails without producing output when the document does not have
    /// exactly one coordinate column or lacks `date_valid` or
    /// `last_revised_date`.
    pub fn export(&self, doc: &Document) -> Result<String> {
        let coordinate = match doc.coordinate_variables().as_slice() {
            [] => {
                return Err(BadcError::Precondition(
                    "No coordinate variable, cannot convert to NASA Ames".to_string(),
                ));
            }
            [one] => one.to_string(),
            many => {
                return Err(BadcError::Precondition(format!(
                    "Too many coordinate variables for NASA Ames: {}",
                    many.join(", ")
                )));
            }
        };

        let mut header: Vec<String> = Vec::new();

        let creators: Vec<&[String]> = doc
            .query(MetadataQuery::ByLabel("creator"))
            .into_iter()
            .map(|r| r.values())
            .collect();
        header.push(
            creators
                .iter()
                .filter_map(|v| v.first().map(String::as_str))
                .collect::<Vec<_>>()
                .join("; "),
        );
        let institutes: Vec<&str> = creators
            .iter()
            .filter_map(|v| v.get(1).map(String::as_str))
            .collect();
        header.push(if institutes.is_empty() {
            "Unknown".to_string()
        } else {
            institutes.join("; ")
        });

        for label in ["source", "activity"] {
            header.push(
                doc.query(MetadataQuery::ByLabel(label))
                    .into_iter()
                    .filter_map(|r| r.first())
                    .collect::<Vec<_>>()
                    .join("; "),
            );
        }

        header.push("1 1".to_string());
        header.push(format!(
            "{}    {}",
            earliest_date(doc, "date_valid")?,
            earliest_date(doc, "last_revised_date")?
        ));
        header.push("0.0".to_string());
        header.push(self.long_name(doc, &coordinate));

        let dependents: Vec<&str> = doc
            .column_names()
            .into_iter()
            .filter(|name| *name != coordinate)
            .collect();
        header.push(dependents.len().to_string());

        let scale_factors: Vec<&str> = dependents
            .iter()
            .map(|column| column_or_global(doc, "scale_factor", column).unwrap_or(DEFAULT_SCALE_FACTOR))
            .collect();
        header.push(scale_factors.join(" "));

        let bounds = dependents
            .iter()
            .map(|column| {
                self.upper_bound(doc, column).map(|bound| match bound {
                    Some(b) => format!("{:?}", b),
                    None => DEFAULT_UPPER_BOUND.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        header.push(bounds.join(" "));

        for column in &dependents {
            header.push(self.long_name(doc, column));
        }

        header.push("1".to_string());
        header.push(self.comment.clone());

        let metadata = CsvExporter::new().export_metadata(doc)?;
        let metadata_lines: Vec<&str> = metadata.lines().collect();
        header.push((metadata_lines.len() + 1).to_string());
        header.push("BADC-CSV style metadata:".to_string());
        header.extend(metadata_lines.iter().map(|l| l.to_string()));

        let mut out = format!("{} {}\n", header.len() + 1, FFI);
        for line in &header {
            out.push_str(line);
            out.push('\n');
        }
        for row in doc.data().rows() {
            out.push_str(&row.join(" "));
            out.push('\n');
        }

        info!(
            header_lines = header.len() + 1,
            rows = doc.len(),
            "Exported NASA Ames document"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.add_variable("temp", [301.2, 303.4]).unwrap();
        doc.add_variable("time", [6, 12]).unwrap();
        doc.add_column_metadata("long_name", "temp", ["Temperature", "K"]);
        doc.add_column_metadata("long_name", "time", ["Time", "hours"]);
        doc.add_column_metadata("coordinate_variable", "time", ["1"]);
        doc.add_global("creator", ["Scrofulous Student"]);
        doc.add_global("creator", ["Prof Bigshot", "Hogwarts Uni"]);
        doc.add_global("source", ["My Dummy data program"]);
        doc.add_global("activity", ["testing"]);
        doc.add_global("date_valid", ["2013-12-01"]);
        doc.add_global("last_revised_date", ["2013-12-02T10:00:00"]);
        doc
    }

    #[test]
    fn test_header_lines() {
        let text = NasaAmesExporter::new().export(&sample()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "Scrofulous Student; Prof Bigshot");
        assert_eq!(lines[2], "Hogwarts Uni");
        assert_eq!(lines[3], "My Dummy data program");
        assert_eq!(lines[4], "testing");
        assert_eq!(lines[5], "1 1");
        assert_eq!(lines[6], "2013 12 01    2013 12 02T10:00:00");
        assert_eq!(lines[7], "0.0");
        assert_eq!(lines[8], "Time (hours)");
        assert_eq!(lines[9], "1");
        assert_eq!(lines[10], "1.0");
        assert_eq!(lines[11], "1.0e99");
        assert_eq!(lines[12], "Temperature (K)");
        assert_eq!(lines[13], "1");
        assert_eq!(lines[14], DEFAULT_LEGACY_COMMENT);
        assert_eq!(lines[16], "BADC-CSV style metadata:");
    }

    #[test]
    fn test_header_count_matches() {
        let text = NasaAmesExporter::new().export(&sample()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let nlhead: usize = lines[0].split_whitespace().next().unwrap().parse().unwrap();
        assert_eq!(lines[0], format!("{} 1001", nlhead));
        // header is followed by exactly the data rows
        assert_eq!(lines.len(), nlhead + 2);
        assert_eq!(lines[nlhead], "301.2 6");
        assert_eq!(lines[nlhead + 1], "303.4 12");
        let nscoml: usize = lines[15].parse().unwrap();
        assert_eq!(15 + nscoml, nlhead - 1);
    }

    #[test]
    fn test_upper_bound_uses_smallest_limit() {
        let mut doc = sample();
        doc.add_column_metadata("valid_max", "temp", ["400"]);
        doc.add_column_metadata("valid_range", "temp", ["200", "350.5"]);
        doc.add_column_metadata("scale_factor", "temp", ["0.1"]);
        let text = NasaAmesExporter::new().export(&doc).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[10], "0.1");
        assert_eq!(lines[11], "350.5");
    }

    #[test]
    fn test_requires_single_coordinate() {
        let mut doc = sample();
        doc.add_column_metadata("coordinate_variable", "temp", ["1"]);
        let err = NasaAmesExporter::new().export(&doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Precondition);
    }

    #[test]
    fn test_requires_dates() {
        let mut doc = Document::new();
        doc.add_variable("time", [1]).unwrap();
        doc.add_column_metadata("coordinate_variable", "time", ["1"]);
        let err = NasaAmesExporter::new().export(&doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert!(err.to_string().contains("date_valid"));
    }

    #[test]
    fn test_custom_comment() {
        let text = NasaAmesExporter::with_comment("Converted for archive")
            .export(&sample())
            .unwrap();
        assert!(text.contains("\nConverted for archive\n"));
    }
}
