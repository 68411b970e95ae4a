//! CLI entry point and command handlers for fleet.

mod cmd;
mod render;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use fleet::logging;

#[derive(Parser)]
#[command(name = "fleet")]
#[command(version)]
#[command(about = "Fleet inventory: taxes, summaries and exports", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    fleet summary              Totals for the sample fleet\n    fleet shell                Interactive session (add, remove, adjust, export)\n\n    Settings are read from .fleet/config.md when it exists."
)]
struct Cli {
    /// Read configuration from this file instead of .fleet/config.md
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show fleet totals, distribution by type and recent vehicles
    Summary,
    /// List vehicles
    List {
        /// Filter by brand (case-insensitive)
        #[arg(long)]
        brand: Option<String>,
        /// Only vehicles from this year or later
        #[arg(long, value_name = "YEAR")]
        min_year: Option<i32>,
        /// Filter by type (Vehicle, ElectricCar, Truck)
        #[arg(long)]
        r#type: Option<String>,
    },
    /// Apply a price adjustment to every vehicle
    ///
    /// Positive percentages are discounts, negative percentages surcharges.
    Adjust {
        /// Percentage, e.g. 10 or -5
        #[arg(allow_hyphen_values = true)]
        percentage: String,
        /// Show the new prices without applying them
        #[arg(long)]
        preview: bool,
    },
    /// Export the fleet to a file
    ///
    /// TIP: Run 'fleet export' with no arguments for an interactive wizard.
    Export {
        /// Output format (txt, csv, json)
        #[arg(long)]
        format: Option<String>,
        /// Output file; the format extension is appended when missing
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Start an interactive session
    Shell,
    /// Show version information
    Version {
        /// Show commit and build date
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Neither of these needs a config or a fleet
    match &cli.command {
        Commands::Version { verbose } => return cmd_version(*verbose),
        Commands::Completion { shell } => return cmd_completion(*shell),
        _ => {}
    }

    let config = cmd::load_config(cli.config.as_deref())?;
    logging::init(&config.log.level);
    let mut fleet = cmd::working_fleet(&config);

    match cli.command {
        Commands::Summary => cmd::summary::cmd_summary(&fleet),
        Commands::List {
            brand,
            min_year,
            r#type,
        } => cmd::list::cmd_list(
            &fleet,
            &cmd::list::ListFilter {
                brand,
                min_year,
                kind: r#type,
            },
        ),
        Commands::Adjust {
            percentage,
            preview,
        } => cmd::adjust::cmd_adjust(&mut fleet, &percentage, preview),
        Commands::Export { format, output } => {
            cmd::export::cmd_export(&fleet, &config, format.as_deref(), output.as_deref())
        }
        Commands::Shell => cmd::shell::cmd_shell(fleet, config),
        Commands::Version { .. } | Commands::Completion { .. } => Ok(()),
    }
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fleet", &mut io::stdout());
    Ok(())
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("fleet {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}
