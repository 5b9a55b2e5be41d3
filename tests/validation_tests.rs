//! Validation module tests

use badc_csv_sdk::{BadcCsvImporter, ComplianceLevel, Document, ErrorKind, Scope};

fn basic_dummy() -> Document {
    let mut doc = Document::new();
    doc.add_variable("temp", [301.2, 303.4]).unwrap();
    doc.add_variable("press", [1002.2, 1004.4]).unwrap();
    doc.add_variable("time", [6, 12]).unwrap();
    doc.add_column_metadata("long_name", "temp", ["Temperature", "K"]);
    doc.add_column_metadata("long_name", "press", ["Pressure", "hPa"]);
    doc.add_column_metadata("long_name", "time", ["Time since zero hours on valid date", "hours"]);
    doc.add_column_metadata("coordinate_variable", "time", ["1"]);
    doc
}

/// Typed columns with the basic global fields, optionally marking `time`
/// as coordinate variable
fn station_series(with_coordinate: bool) -> Document {
    let mut doc = Document::new();
    doc.add_variable("temp", [301.2, 303.4]).unwrap();
    doc.add_variable("press", [1002.2, 1004.4]).unwrap();
    doc.add_variable("time", [6, 12]).unwrap();
    for (column, long_name, unit, kind) in [
        ("temp", "Temperature", "K", "float"),
        ("press", "Pressure", "hPa", "float"),
        ("time", "Time since zero hours on valid date", "hours", "int"),
    ] {
        doc.add_column_metadata("long_name", column, [long_name, unit]);
        doc.add_column_metadata("type", column, [kind]);
    }
    if with_coordinate {
        doc.add_column_metadata("coordinate_variable", "time", ["1"]);
    }
    for (label, value) in [
        ("date_valid", "2013-12-01"),
        ("feature_type", "point series"),
        ("observation_station", "My back yard"),
        ("location", "My back yard"),
        ("activity", "testing"),
        ("source", "My Dummy data program"),
        ("last_revised_date", "2013-12-02T09:30:00"),
    ] {
        doc.add_global(label, [value]);
    }
    doc
}

mod conventions_tests {
    use super::*;

    #[test]
    fn test_wrong_conventions_name() {
        let mut doc = Document::empty();
        doc.add_global("Conventions", ["CF", "1"]);
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataInvalid);
        assert_eq!(err.label(), Some("Conventions"));
    }

    #[test]
    fn test_wrong_conventions_version() {
        let mut doc = Document::empty();
        doc.add_global("Conventions", ["BADC-CSV", "2"]);
        assert!(doc.check_valid().unwrap_err().is_metadata_invalid());
    }

    #[test]
    fn test_conventions_on_column_is_invalid() {
        let mut doc = Document::empty();
        doc.add_variable("x", [1]).unwrap();
        doc.add_metadata("Conventions", ["BADC-CSV", "1"], Scope::Column("x".into()));
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataInvalid);
    }
}

mod location_tests {
    use super::*;

    fn with_location(values: &[&str]) -> Document {
        let mut doc = basic_dummy();
        doc.add_global("location", values.iter().copied());
        doc
    }

    #[test]
    fn test_location_cardinality() {
        with_location(&["My back yard"]).check_valid().unwrap();
        with_location(&["51.5", "-1.3"]).check_valid().unwrap();
        with_location(&["50", "-2", "52", "0"]).check_valid().unwrap();

        let err = with_location(&["50", "-2", "52"]).check_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataInvalid);
        assert_eq!(err.label(), Some("location"));
    }

    #[test]
    fn test_location_pair_must_be_numeric() {
        let err = with_location(&["north", "west"]).check_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataInvalid);
    }
}

mod field_check_tests {
    use super::*;

    #[test]
    fn test_dates() {
        let mut doc = basic_dummy();
        doc.add_global("date_valid", ["2013-12-01T00:00:00"]);
        doc.check_valid().unwrap();

        doc.add_global("last_revised_date", ["01/12/2013"]);
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.label(), Some("last_revised_date"));
    }

    #[test]
    fn test_coordinate_variable_flag_must_be_int() {
        let mut doc = basic_dummy();
        doc.add_column_metadata("coordinate_variable", "temp", ["1.5"]);
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.label(), Some("coordinate_variable"));
    }

    #[test]
    fn test_feature_type_outside_vocabulary() {
        let mut doc = basic_dummy();
        doc.add_global("feature_type", ["grid"]);
        let err = doc.check_valid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataNonstandard);
        assert!(err.is_metadata_invalid());
    }

    #[test]
    fn test_height_value_and_unit() {
        let mut doc = basic_dummy();
        doc.add_global("height", ["10.5", "m"]);
        doc.check_valid().unwrap();

        let mut doc = basic_dummy();
        doc.add_global("height", ["ten", "m"]);
        assert!(doc.check_valid().is_err());
    }

    #[test]
    fn test_standard_name_is_accepted() {
        let mut doc = basic_dummy();
        doc.add_column_metadata("standard_name", "temp", ["air_temperature", "K", "CF"]);
        doc.check_valid().unwrap();
    }
}

mod completeness_tests {
    use super::*;

    #[test]
    fn test_station_series_is_basic_complete() {
        station_series(true)
            .check_complete(ComplianceLevel::Basic)
            .unwrap();
    }

    #[test]
    fn test_station_series_with_creator_is_complete() {
        let mut doc = station_series(true);
        doc.add_global("creator", ["Scrofulous Student"]);
        doc.check_complete(ComplianceLevel::Complete).unwrap();
    }

    #[test]
    fn test_missing_coordinate_variable_at_every_level() {
        let mut doc = station_series(false);
        doc.add_global("creator", ["Scrofulous Student"]);
        doc.check_valid().unwrap();

        for level in [ComplianceLevel::Basic, ComplianceLevel::Complete] {
            let err = doc.check_complete(level).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MetadataIncomplete);
            assert_eq!(err.label(), Some("coordinate_variable"));
        }
    }

    #[test]
    fn test_basic_is_not_complete() {
        let err = basic_dummy()
            .check_complete(ComplianceLevel::Complete)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataIncomplete);
    }

    #[test]
    fn test_invalid_metadata_reported_before_missing() {
        let mut doc = Document::new();
        doc.add_variable("x", [1]).unwrap();
        doc.add_global("title", ["One", "Two"]);
        let err = doc.check_complete(ComplianceLevel::Basic).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MetadataInvalid);
    }

    #[test]
    fn test_completeness_from_text() {
        let text = "Conventions,G,BADC-CSV,1\n\
                    long_name,time,Time,hours\n\
                    coordinate_variable,time\n\
                    Data\n\
                    time\n\
                    6\n\
                    End Data\n";
        let doc = BadcCsvImporter::new().import(text).unwrap();
        doc.check_complete(ComplianceLevel::Basic).unwrap();
    }
}
