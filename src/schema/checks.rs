//! Field check functions
//!
//! Each check receives the raw value tuple of one metadata record. Checks
//! know nothing about labels; the validator attaches the label when a
//! failure is reported.

use chrono::NaiveDate;

/// Why a value tuple failed its field check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    /// Values are malformed for the field
    Invalid(String),
    /// A value lies outside a controlled enumeration
    Nonstandard(String),
    /// The check exists in the schema but has no implementation
    NotImplemented(&'static str),
}

/// Result of a field check
pub type CheckResult = Result<(), CheckFailure>;

/// Signature shared by all field checks
pub type CheckFn = fn(&[String]) -> CheckResult;

const FEATURE_TYPES: [&str; 3] = ["point series", "trajectory", "point collection"];
const DATA_TYPES: [&str; 3] = ["char", "int", "float"];

/// Every value must be a string. Always true for text input.
pub fn check_string(_values: &[String]) -> CheckResult {
    Ok(())
}

/// Every value must parse as an integer with no fractional part
pub fn check_int(values: &[String]) -> CheckResult {
    for v in values {
        let trimmed = v.trim();
        let as_int = trimmed
            .parse::<i64>()
            .map_err(|_| CheckFailure::Invalid(format!("{} in {:?} is not int", v, values)))?;
        let as_float = trimmed
            .parse::<f64>()
            .map_err(|_| CheckFailure::Invalid(format!("{} in {:?} is not int", v, values)))?;
        if as_int as f64 != as_float {
            return Err(CheckFailure::Invalid(format!(
                "{} in {:?} is not int",
                v, values
            )));
        }
    }
    Ok(())
}

/// Every value must parse as a float
pub fn check_float(values: &[String]) -> CheckResult {
    for v in values {
        if v.trim().parse::<f64>().is_err() {
            return Err(CheckFailure::Invalid(format!(
                "{} in {:?} is not float",
                v, values
            )));
        }
    }
    Ok(())
}

/// A place name, a lat/long pair, or a bounding box
pub fn check_location(values: &[String]) -> CheckResult {
    match values.len() {
        1 => check_string(values),
        2 | 4 => check_float(values),
        n => Err(CheckFailure::Invalid(format!(
            "Invalid location descriptor with {} values",
            n
        ))),
    }
}

/// The first ten characters of each value must be a `YYYY-MM-DD` date
pub fn check_date(values: &[String]) -> CheckResult {
    for v in values {
        let prefix = v.get(..10).unwrap_or(v.as_str());
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
            .map_err(|e| CheckFailure::Invalid(format!("{} is not a YYYY-MM-DD date: {}", v, e)))?;
    }
    Ok(())
}

/// Standard names are not checked against the external vocabulary
pub fn check_standard_name(values: &[String]) -> CheckResult {
    tracing::warn!(
        values = ?values,
        "Checking for valid standard names not implemented"
    );
    Ok(())
}

/// A height value and its unit
pub fn check_height(values: &[String]) -> CheckResult {
    match values.split_first() {
        Some((value, _unit)) => check_float(std::slice::from_ref(value)),
        None => Err(CheckFailure::Invalid("height needs a value and a unit".to_string())),
    }
}

/// Each value must name a supported feature type
pub fn check_feature_type(values: &[String]) -> CheckResult {
    for v in values {
        if !FEATURE_TYPES.contains(&v.as_str()) {
            return Err(CheckFailure::Nonstandard(format!(
                "FeatureType [{}] not supported",
                v
            )));
        }
    }
    Ok(())
}

/// Presence of a coordinate variable is a completeness rule, not a field check
pub fn check_coordinate_variables(_values: &[String]) -> CheckResult {
    Err(CheckFailure::NotImplemented("coordinate variable check"))
}

/// Cell methods have no checker yet
pub fn check_cell_method(_values: &[String]) -> CheckResult {
    Err(CheckFailure::NotImplemented("cell_method check"))
}

/// Must be exactly `BADC-CSV, 1`
pub fn check_conventions(values: &[String]) -> CheckResult {
    match values {
        [name, version] if name == "BADC-CSV" && version == "1" => Ok(()),
        [name, _] if name != "BADC-CSV" => Err(CheckFailure::Invalid(format!(
            "Conventions must be BADC-CSV, not {}",
            name
        ))),
        [_, version] => Err(CheckFailure::Invalid(format!(
            "Conventions must be 'BADC-CSV, 1', not {}",
            version
        ))),
        _ => Err(CheckFailure::Invalid(format!(
            "Conventions needs exactly two values, got {}",
            values.len()
        ))),
    }
}

/// The first value must be `int`, `float` or `char`
pub fn check_data_type(values: &[String]) -> CheckResult {
    match values.first() {
        Some(v) if DATA_TYPES.contains(&v.as_str()) => Ok(()),
        Some(v) => Err(CheckFailure::Nonstandard(format!(
            "Type must be int, float or char, not {}",
            v
        ))),
        None => Err(CheckFailure::Invalid("missing data type".to_string())),
    }
}

/// Every value must be `int`, `float` or `char`
pub fn check_all_types(values: &[String]) -> CheckResult {
    for v in values {
        if !DATA_TYPES.contains(&v.as_str()) {
            return Err(CheckFailure::Nonstandard(format!(
                "Invalid data type {}",
                v
            )));
        }
    }
    Ok(())
}
