//! Device classification command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::services::classifier::{is_well_formed, lookup};
use clap::Args;
use serde::Serialize;

/// Resolve a hardware identifier to its layout family
#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// Hardware identifier (e.g., "iPhone16,2")
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// Treat the host as a simulator (forces the configured simulator machine)
    #[arg(long)]
    pub simulator: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyResult {
    identifier: String,
    effective_identifier: String,
    recognized: bool,
    well_formed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        let mut host = config.host;
        host.simulator |= self.simulator;

        let effective = host.effective_identifier(&self.identifier).to_string();
        let machine = lookup(&effective);

        let result = ClassifyResult {
            identifier: self.identifier.clone(),
            well_formed: is_well_formed(&effective),
            recognized: machine.is_some(),
            family: machine.map(|m| m.family.to_string()),
            name: machine.map(|m| m.name.to_string()),
            effective_identifier: effective,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Identifier: {}", result.identifier);
            if result.effective_identifier != result.identifier {
                println!("Simulated:  {}", result.effective_identifier);
            }
            match (&result.family, &result.name) {
                (Some(family), Some(name)) => {
                    println!("Device:     {}", name);
                    println!("Family:     {}", family);
                    println!("Status:     ✓ Supported");
                }
                _ if result.well_formed => {
                    println!("Status:     ✗ Unrecognized (not in device catalog)");
                    println!();
                    println!("Run '{} catalog' to list supported devices.", APP_BINARY_NAME);
                }
                _ => println!("Status:     ✗ Malformed identifier"),
            }
        }

        if !result.recognized {
            return Err(CliError::validation(format!(
                "Unrecognized device identifier: '{}'",
                result.effective_identifier
            )));
        }

        Ok(())
    }
}
