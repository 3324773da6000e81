//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{Config, OutputFormat};
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Treat the host as a simulator (true or false)
    #[arg(long, value_name = "BOOL")]
    simulator: Option<bool>,

    /// Machine a simulator host resolves to
    #[arg(long, value_name = "ID")]
    simulator_machine: Option<String>,

    /// Default output format (json, toml, or yaml)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    host: HostOutput,
    output: OutputOutput,
}

#[derive(Serialize, Debug)]
struct HostOutput {
    simulator: bool,
    simulator_machine: String,
}

#[derive(Serialize, Debug)]
struct OutputOutput {
    format: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {}", e)))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.simulator.is_none() && self.simulator_machine.is_none() && self.format.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --simulator, --simulator-machine, or --format",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(simulator) = self.simulator {
            config.host.simulator = simulator;
        }

        if let Some(identifier) = &self.simulator_machine {
            config
                .set_simulator_machine(identifier)
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(format) = &self.format {
            config.output.format = format
                .parse::<OutputFormat>()
                .map_err(CliError::validation)?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        host: HostOutput {
            simulator: config.host.simulator,
            simulator_machine: config.host.simulator_machine.clone(),
        },
        output: OutputOutput {
            format: config.output.format.to_string(),
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{} Configuration", APP_NAME);
    println!("{}", title);
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Host:");
    println!("  Simulator: {}", config.host.simulator);
    println!("  Simulator Machine: {}", config.host.simulator_machine);
    println!();

    println!("Output:");
    println!("  Format: {}", config.output.format);
    println!();

    if let Ok(path) = Config::config_file_path() {
        println!("File: {}", path.display());
    }
}
