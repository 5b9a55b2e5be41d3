//! Schema registry
//!
//! The registry defines every recognised metadata label: where it may be
//! used, how many values it takes, whether it is mandatory at each
//! compliance level, and the check applied to its values. It is built once
//! and is read-only afterwards. Labels absent from the registry are kept in
//! documents but never validated.

pub mod checks;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

pub use checks::{CheckFailure, CheckFn, CheckResult};
use checks::*;

/// How strongly a field is required at a compliance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mandatory {
    /// Not required
    No,
    /// Required globally or on at least one column
    AtLeastOne,
    /// Required on every column
    EveryColumn,
}

impl Mandatory {
    pub fn is_required(self) -> bool {
        self != Mandatory::No
    }
}

/// Definition of one metadata label
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    /// May appear as a global record
    pub applies_globally: bool,
    /// May appear on a column
    pub applies_to_column: bool,
    pub min_values: usize,
    pub max_values: usize,
    pub mandatory_basic: Mandatory,
    pub mandatory_complete: Mandatory,
    pub check: CheckFn,
    pub description: &'static str,
}

impl FieldSpec {
    /// True when `count` values is an acceptable tuple length
    pub fn accepts_count(&self, count: usize) -> bool {
        (self.min_values..=self.max_values).contains(&count)
    }
}

#[allow(clippy::too_many_arguments)]
const fn field(
    label: &'static str,
    applies_globally: bool,
    applies_to_column: bool,
    min_values: usize,
    max_values: usize,
    mandatory_basic: Mandatory,
    mandatory_complete: Mandatory,
    check: CheckFn,
    description: &'static str,
) -> FieldSpec {
    FieldSpec {
        label,
        applies_globally,
        applies_to_column,
        min_values,
        max_values,
        mandatory_basic,
        mandatory_complete,
        check,
        description,
    }
}

use Mandatory::{AtLeastOne as One, EveryColumn as Every, No};

#[rustfmt::skip]
const FIELDS: &[FieldSpec] = &[
    field("title", true, false, 1, 1, No, No, check_string,
        "A title for the data file"),
    field("comments", true, true, 1, 1, No, No, check_string,
        "Any text associated with data"),
    field("location", true, true, 1, 4, No, One, check_location,
        "Location for the data. Can be a name, bounding box, or lat and long values"),
    field("height", true, true, 2, 2, No, No, check_height,
        "Height valid for data"),
    field("creator", true, true, 1, 2, No, One, check_string,
        "The name of the person and/or institute that created the data"),
    field("contributor", true, true, 1, 2, No, No, check_string,
        "The name of the person and/or institute that contributed to the data"),
    field("date_valid", true, true, 1, 2, No, One, check_date,
        "The date the data is valid for. Needs to be YYYY-MM-DD form"),
    field("last_revised_date", true, true, 1, 1, No, One, check_date,
        "The date the data was revised or worked up. Needs to be YYYY-MM-DD form"),
    field("history", true, true, 1, 1, No, No, check_string,
        "Text description of the file history"),
    field("reference", true, true, 1, 1, No, No, check_string,
        "Bibliographic reference"),
    field("source", true, true, 1, 1, No, One, check_string,
        "The name of the tool used to produce the data. e.g. model name or instrument type"),
    field("observation_station", true, true, 1, 1, No, One, check_string,
        "The name of the observation station or instrument platform used"),
    field("rights", true, true, 1, 1, No, No, check_string,
        "Conditions of use for the data"),
    field("activity", true, true, 1, 1, No, One, check_string,
        "The name of the activity sponsoring the collection of the data"),
    field("add_offset", false, true, 1, 1, No, No, check_float,
        "An offset value to add to the values recorded in the data"),
    field("scale_factor", false, true, 1, 1, No, No, check_float,
        "A scale factor to multiply the data values by"),
    field("valid_min", true, true, 1, 1, No, No, check_float,
        "Values below this value should be interpreted as missing"),
    field("valid_max", true, true, 1, 1, No, No, check_float,
        "Values above this value should be interpreted as missing"),
    field("valid_range", true, true, 2, 2, No, No, check_float,
        "Values outside this range should be interpreted as missing"),
    field("long_name", false, true, 2, 2, Every, Every, check_string,
        "Description of variable and its unit"),
    field("standard_name", false, true, 3, 3, No, No, check_standard_name,
        "Name of variable from a standard list, with unit and the name of the list"),
    field("feature_type", true, false, 1, 1, No, One, check_feature_type,
        "Type of feature: point series, trajectory or point collection"),
    field("coordinate_variable", false, true, 0, 2, One, One, check_int,
        "Flag to show which column(s) are regarded as coordinate variables"),
    field("Conventions", true, false, 2, 2, One, One, check_conventions,
        "Metadata conventions used. Must be BADC-CSV, 1"),
    field("type", false, true, 1, 1, No, Every, check_all_types,
        "The type of the variables in a column. Should be char, int or float"),
    field("cell_method", true, true, 1, 4, No, No, check_cell_method,
        "The cell method used in preparing the data"),
];

static REGISTRY: Lazy<BTreeMap<&'static str, FieldSpec>> =
    Lazy::new(|| FIELDS.iter().map(|spec| (spec.label, *spec)).collect());

/// Look up the definition of a metadata label
pub fn lookup(label: &str) -> Option<&'static FieldSpec> {
    REGISTRY.get(label)
}

/// All field definitions, ordered lexicographically by label
pub fn fields() -> impl Iterator<Item = &'static FieldSpec> {
    REGISTRY.values()
}

/// True when the label is defined by the schema
pub fn is_known(label: &str) -> bool {
    REGISTRY.contains_key(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let spec = lookup("long_name").unwrap();
        assert!(!spec.applies_globally);
        assert!(spec.applies_to_column);
        assert_eq!(spec.mandatory_basic, Mandatory::EveryColumn);
        assert!(spec.accepts_count(2));
        assert!(!spec.accepts_count(1));
        assert!(lookup("not_a_label").is_none());
    }

    #[test]
    fn test_fields_are_lexicographic() {
        let labels: Vec<&str> = fields().map(|f| f.label).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
        assert_eq!(labels.len(), FIELDS.len());
        assert_eq!(labels[0], "Conventions");
    }

    #[test]
    fn test_coordinate_variable_allows_no_values() {
        let spec = lookup("coordinate_variable").unwrap();
        assert!(spec.accepts_count(0));
        assert!(spec.accepts_count(2));
        assert!(!spec.accepts_count(3));
    }

    #[test]
    fn test_height_checks_value_and_unit() {
        let spec = lookup("height").unwrap();
        let values = vec!["2.5".to_string(), "m".to_string()];
        assert!((spec.check)(&values).is_ok());
    }
}
