//! Error and exit-code types shared by every CLI command.

use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::OutputFormat;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// File system or serialization failure
    IoError = 1,
    /// Bad input, unknown device, or failed check
    ValidationError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// File system or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Invalid input or failed validation.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Serializes a value in the requested format.
pub fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}"))),
        OutputFormat::Toml => toml::to_string_pretty(value)
            .map_err(|e| CliError::io(format!("Failed to serialize TOML: {e}"))),
        OutputFormat::Yaml => serde_yml::to_string(value)
            .map_err(|e| CliError::io(format!("Failed to serialize YAML: {e}"))),
    }
}

/// Writes text to a file, or to stdout when no path is given.
pub fn emit(text: &str, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => fs::write(path, text)
            .map_err(|e| CliError::io(format!("Failed to write {}: {e}", path.display()))),
        None => {
            println!("{}", text.trim_end());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        size: f64,
    }

    fn sample() -> Sample {
        Sample {
            name: "home".to_string(),
            size: 30.0,
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::io("x").exit_code.code(), 1);
        assert_eq!(CliError::validation("x").exit_code.code(), 2);
    }

    #[test]
    fn test_serialize_formats() {
        let json = serialize(&sample(), OutputFormat::Json).unwrap();
        assert!(json.contains("\"name\": \"home\""));

        let toml_text = serialize(&sample(), OutputFormat::Toml).unwrap();
        assert!(toml_text.contains("name = \"home\""));

        let yaml = serialize(&sample(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("name: home"));
    }
}
