//! Command implementations

pub mod convert;
pub mod describe;
pub mod validate;

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::cli::error::CliError;
use crate::config::BadcConfig;

pub use convert::handle_convert;
pub use describe::handle_describe;
pub use validate::handle_validate;

/// Load input content from file or stdin
pub(crate) fn load_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        let path = PathBuf::from(input);
        std::fs::read_to_string(&path).map_err(|e| CliError::FileReadError(path, e.to_string()))
    }
}

/// Load a TOML configuration file, or the defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<BadcConfig, CliError> {
    let Some(path) = path else {
        return Ok(BadcConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
    toml::from_str(&content).map_err(|e| CliError::ConfigError(path.to_path_buf(), e.to_string()))
}

/// Write output to a file, or stdout when no file is given
pub(crate) fn write_output(content: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, content)
            .map_err(|e| CliError::FileWriteError(path.to_path_buf(), e.to_string())),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
