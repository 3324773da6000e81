//! Default skin generation command.

use crate::cli::common::{emit, serialize, CliError, CliResult};
use crate::config::{Config, OutputFormat};
use crate::models::{Insets, OrientationKind, Skin};
use crate::services::{assemble_default_skin, WindowSnapshot};
use clap::Args;
use std::path::PathBuf;

/// Generate the default skin for a device and screen
#[derive(Debug, Clone, Args)]
pub struct SkinArgs {
    /// Hardware identifier (e.g., "iPhone16,2")
    #[arg(short, long, value_name = "ID")]
    pub machine: Option<String>,

    /// Screen width in points
    #[arg(long, value_name = "PT")]
    pub width: Option<f64>,

    /// Screen height in points
    #[arg(long, value_name = "PT")]
    pub height: Option<f64>,

    /// Top safe-area inset
    #[arg(long, value_name = "PT", default_value_t = 0.0)]
    pub top: f64,

    /// Left safe-area inset
    #[arg(long, value_name = "PT", default_value_t = 0.0)]
    pub left: f64,

    /// Bottom safe-area inset
    #[arg(long, value_name = "PT", default_value_t = 0.0)]
    pub bottom: f64,

    /// Right safe-area inset
    #[arg(long, value_name = "PT", default_value_t = 0.0)]
    pub right: f64,

    /// Treat the host as a simulator (forces the configured simulator machine)
    #[arg(long)]
    pub simulator: bool,

    /// Output format: json, toml, or yaml (defaults to the configured format)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Only output one orientation (portrait, landscape-left, landscape-right)
    #[arg(long, value_name = "ORIENTATION")]
    pub orientation: Option<String>,

    /// Fail if any rectangle falls outside the screen
    #[arg(long)]
    pub check: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SkinArgs {
    /// Execute the skin command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        let format = match &self.format {
            Some(value) => value.parse::<OutputFormat>().map_err(CliError::validation)?,
            None => config.output.format,
        };

        let orientation = self
            .orientation
            .as_deref()
            .map(str::parse::<OrientationKind>)
            .transpose()
            .map_err(CliError::validation)?;

        let window = self.window()?;

        let mut host = config.host;
        host.simulator |= self.simulator;

        let identifier = self.machine.as_deref().unwrap_or_default();
        let skin = assemble_default_skin(identifier, window.as_ref(), &host)
            .map_err(|e| CliError::validation(e.to_string()))?;

        if self.check {
            if let Some(window) = &window {
                check_bounds(&skin, window)?;
            }
        }

        let text = match orientation {
            Some(kind) => serialize(skin.orientation(kind), format)?,
            None => serialize(&skin, format)?,
        };

        emit(&text, self.output.as_deref())?;

        if let Some(path) = &self.output {
            eprintln!("Wrote {} skin to {}", format, path.display());
        }

        Ok(())
    }

    /// Builds the window snapshot from the geometry flags.
    ///
    /// Returns `None` unless both dimensions were given, which the assembler
    /// reports as an unavailable window.
    fn window(&self) -> CliResult<Option<WindowSnapshot>> {
        let (Some(width), Some(height)) = (self.width, self.height) else {
            return Ok(None);
        };

        // NaN fails every comparison, so test for the valid range
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CliError::validation(format!(
                "Screen dimensions must be positive and finite, got {width}x{height}"
            )));
        }

        for (edge, value) in [
            ("top", self.top),
            ("left", self.left),
            ("bottom", self.bottom),
            ("right", self.right),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CliError::validation(format!(
                    "Safe-area inset '{edge}' must be finite and non-negative, got {value}"
                )));
            }
        }

        let insets = Insets::new(self.top, self.left, self.bottom, self.right);
        if insets.vertical() > height || insets.horizontal() > width {
            return Err(CliError::validation(format!(
                "Safe-area insets {}+{} (vertical) / {}+{} (horizontal) exceed the {width}x{height} screen",
                insets.top, insets.bottom, insets.left, insets.right
            )));
        }

        Ok(Some(WindowSnapshot::new(width, height, insets)))
    }
}

/// Fails with a validation error listing every out-of-bounds rectangle.
fn check_bounds(skin: &Skin, window: &WindowSnapshot) -> CliResult<()> {
    let mut problems = Vec::new();

    for kind in OrientationKind::ALL {
        for name in skin
            .orientation(kind)
            .out_of_bounds(window.width(), window.height())
        {
            problems.push(format!("{kind}: {name}"));
        }
    }

    if problems.is_empty() {
        return Ok(());
    }

    for problem in &problems {
        eprintln!("  ✗ {problem}");
    }

    Err(CliError::validation(format!(
        "{} rectangle(s) fall outside the {}x{} screen",
        problems.len(),
        window.width(),
        window.height()
    )))
}
