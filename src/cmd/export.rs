//! Export command for writing the fleet to text, CSV or JSON.
//!
//! When run without --format or --output on a TTY, launches an interactive
//! wizard asking for the format and file name.

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use std::path::{Path, PathBuf};

use fleet::config::Config;
use fleet::export::{self, ExportFormat};
use fleet::fleet::Fleet;

/// Print usage hint for export command in non-TTY contexts
fn print_export_usage_hint() {
    println!("Usage: fleet export --format <FORMAT> [--output <PATH>]\n");
    println!("Formats: txt, csv, json\n");
    println!("Examples:");
    println!("  fleet export --format json");
    println!("  fleet export --format csv --output inventory.csv\n");
    println!("Run 'fleet export --help' for all options.");
}

/// Holds the result of the interactive wizard
struct WizardOptions {
    format: ExportFormat,
    output: PathBuf,
}

/// Where an export lands: the given path with the format extension appended
/// when missing, or a timestamped name inside the configured directory.
pub fn resolve_destination(config: &Config, output: Option<&Path>, format: ExportFormat) -> PathBuf {
    match output {
        Some(path) => export::with_extension(path, format),
        None => Path::new(&config.export.directory)
            .join(export::default_file_name(format, Local::now())),
    }
}

pub fn cmd_export(
    fleet: &Fleet,
    config: &Config,
    format: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let is_wizard_mode = format.is_none() && output.is_none();

    let options = if is_wizard_mode {
        if !atty::is(atty::Stream::Stdin) {
            print_export_usage_hint();
            return Ok(());
        }
        match run_wizard(fleet, config)? {
            Some(options) => options,
            None => {
                println!("Export cancelled.");
                return Ok(());
            }
        }
    } else {
        let format = match format {
            Some(f) => f.parse::<ExportFormat>()?,
            None => config.export.default_format(),
        };
        WizardOptions {
            format,
            output: resolve_destination(config, output, format),
        }
    };

    let outcome = export::export_as(fleet, &options.output, options.format)?;
    println!("{} {}", "✓".green(), outcome);
    Ok(())
}

/// Run the interactive wizard to configure export options.
///
/// Returns `None` when the user declines the final confirmation.
fn run_wizard(fleet: &Fleet, config: &Config) -> Result<Option<WizardOptions>> {
    let labels: Vec<&str> = ExportFormat::ALL.iter().map(|f| f.label()).collect();
    let default_index = ExportFormat::ALL
        .iter()
        .position(|f| *f == config.export.default_format())
        .unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Export format:")
        .items(&labels)
        .default(default_index)
        .interact()?;
    let format = ExportFormat::ALL[selection];

    let default_path = resolve_destination(config, None, format);
    let filename: String = Input::new()
        .with_prompt("Output filename:")
        .default(default_path.display().to_string())
        .interact_text()?;
    let output = export::with_extension(Path::new(&filename), format);

    println!("\n{}", export::preview(fleet, config.export.preview_limit));

    let confirmed = Confirm::new()
        .with_prompt(format!("Write {}?", output.display()))
        .default(true)
        .interact()
        .context("Failed to read confirmation")?;

    Ok(confirmed.then_some(WizardOptions { format, output }))
}
