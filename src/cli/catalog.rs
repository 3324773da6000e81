//! Device catalog listing command.

use crate::cli::common::{CliError, CliResult};
use crate::models::{DeviceFamily, Machine, CATALOG};
use clap::Args;

/// List supported hardware identifiers
#[derive(Debug, Clone, Args)]
pub struct CatalogArgs {
    /// Only list one family (phone-mini, phone, or tablet)
    #[arg(long, value_name = "FAMILY")]
    pub family: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CatalogArgs {
    /// Execute the catalog command
    pub fn execute(&self) -> CliResult<()> {
        let family = self
            .family
            .as_deref()
            .map(str::parse::<DeviceFamily>)
            .transpose()
            .map_err(CliError::validation)?;

        let machines: Vec<&Machine> = CATALOG
            .iter()
            .filter(|machine| family.map_or(true, |f| machine.family == f))
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&machines)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        for group in DeviceFamily::ALL {
            let members: Vec<&&Machine> =
                machines.iter().filter(|m| m.family == group).collect();
            if members.is_empty() {
                continue;
            }

            println!("{} ({} devices)", group, members.len());
            for machine in members {
                println!("  {:<12} {}", machine.identifier, machine.name);
            }
            println!();
        }

        Ok(())
    }
}
