//! Describe command implementation

use crate::cli::commands::load_input;
use crate::cli::error::CliError;
use crate::config::BadcConfig;
use crate::export::ArrayDescription;
use crate::import::BadcCsvImporter;

/// Render the array description of a document as JSON or YAML
pub fn describe(content: &str, format: &str, config: BadcConfig) -> Result<String, CliError> {
    let doc = BadcCsvImporter::with_config(config).import(content)?;
    let description = ArrayDescription::from_document(&doc)?;
    match format {
        "json" => serde_json::to_string_pretty(&description)
            .map_err(|e| CliError::SerializationError(e.to_string())),
        "yaml" => serde_yaml::to_string(&description)
            .map_err(|e| CliError::SerializationError(e.to_string())),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown output format: {}",
            other
        ))),
    }
}

/// Handle the describe command
pub fn handle_describe(input: &str, format: &str, config: BadcConfig) -> Result<(), CliError> {
    let content = load_input(input)?;
    println!("{}", describe(&content, format, config)?);
    Ok(())
}
