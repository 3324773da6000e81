//! TouchSkin - virtual controller layout generator
//!
//! Generates the default on-screen controller skin for a device and screen,
//! and exposes the device catalog and configuration from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use touchskin::cli::{CatalogArgs, ClassifyArgs, CliResult, ConfigArgs, SkinArgs};

/// TouchSkin - virtual controller layout generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the default skin for a device and screen
    Skin(SkinArgs),
    /// Resolve a hardware identifier to its layout family
    Classify(ClassifyArgs),
    /// List supported hardware identifiers
    Catalog(CatalogArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Skin(args) => args.execute(),
            Self::Classify(args) => args.execute(),
            Self::Catalog(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
