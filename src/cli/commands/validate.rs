//! Validate command implementation

use crate::cli::commands::load_input;
use crate::cli::error::CliError;
use crate::config::BadcConfig;
use crate::import::BadcCsvImporter;
use crate::validation::ComplianceLevel;

/// Handle the validate command
///
/// Parses and checks validity; with a level, also checks completeness.
pub fn handle_validate(
    input: &str,
    level: Option<ComplianceLevel>,
    config: BadcConfig,
) -> Result<(), CliError> {
    let content = load_input(input)?;

    // read without checks so parse errors and metadata errors are reported apart
    let importer = BadcCsvImporter::with_config(BadcConfig {
        validate_on_read: false,
        compliance_level: None,
        ..config.clone()
    });
    let doc = importer.import(&content)?;

    let result = match level.or(config.compliance_level) {
        Some(level) => doc.check_complete(level),
        None => doc.check_valid(),
    };
    result.map_err(CliError::ValidationError)?;

    println!(
        "Validation successful: {} columns, {} rows, {} metadata records",
        doc.nvar(),
        doc.len(),
        doc.metadata().len()
    );
    Ok(())
}
