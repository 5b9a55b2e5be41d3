//! Convert command implementation

use std::path::Path;

use crate::cli::commands::{load_input, write_output};
use crate::cli::error::CliError;
use crate::config::BadcConfig;
use crate::export::{ExportFormat, export_document};
use crate::import::BadcCsvImporter;

/// Handle the convert command
pub fn handle_convert(
    input: &str,
    format: &str,
    output: Option<&Path>,
    config: BadcConfig,
) -> Result<(), CliError> {
    let format: ExportFormat = format
        .parse()
        .map_err(|e: crate::error::BadcError| CliError::InvalidArgument(e.to_string()))?;
    let content = load_input(input)?;

    let doc = BadcCsvImporter::with_config(config.clone()).import(&content)?;
    let result = export_document(&doc, format, &config)?;
    write_output(&result.content, output)?;

    if let Some(path) = output {
        eprintln!("Wrote {} output to {}", result.format, path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Conventions,G,BADC-CSV,1\n\
                          long_name,time,Time,hours\n\
                          Data\n\
                          time\n\
                          6\n\
                          End Data\n";

    #[test]
    fn test_convert_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        let output = dir.path().join("out.cdl");
        std::fs::write(&input, SAMPLE).unwrap();

        handle_convert(
            input.to_str().unwrap(),
            "cdl",
            Some(&output),
            BadcConfig::default(),
        )
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("time:long_name = \"Time, hours\";"));
    }

    #[test]
    fn test_unknown_format() {
        let err = handle_convert("-", "xml", None, BadcConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }
}
