//! Hotspot Studio CLI
//!
//! Converts sampled profiler snapshots to JSON and optionally reduces them
//! to a ranked hotspot report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use hotspot_studio::commands::{execute_convert, validate_args, ConvertArgs};
use hotspot_studio::decoder::ProfileKind;
use hotspot_studio::utils::config::{DEFAULT_TOP_N, SCHEMA_VERSION};

/// Hotspot Studio - hotspot analysis for sampled profiler snapshots
#[derive(Parser, Debug)]
#[command(name = "hotspot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a snapshot file to JSON
    Convert {
        /// Path to the snapshot file
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON file (derived from the input if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Snapshot type: sampler, heap or health
        #[arg(short = 't', long = "type", default_value = "sampler")]
        profile_type: ProfileKind,

        /// Emit a ranked hotspot report instead of the full document
        #[arg(long)]
        summarize: bool,

        /// Number of hotspot entries to keep when summarizing
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top_n: usize,
    },

    /// Validate a hotspot report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Convert {
            input,
            output,
            profile_type,
            summarize,
            top_n,
        } => {
            let args = ConvertArgs {
                input,
                output,
                profile_type,
                summarize,
                top_n,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute conversion
            execute_convert(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a hotspot report JSON file
///
/// **Private** - internal command implementation
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    use hotspot_studio::output::read_report;

    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid hotspot report JSON");
    println!("  Metadata entries: {}", report.metadata.len());
    println!("  Hotspots: {}", report.hotspots.len());
    if let Some(top) = report.hotspots.first() {
        println!(
            "  Top hotspot: {}.{} (self time {})",
            top.class_name, top.method_name, top.self_time
        );
    }

    Ok(())
}

/// Display schema information
///
/// **Private** - internal command implementation
fn display_schema(show_details: bool) {
    println!("Hotspot Studio Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  metadata: object         - Snapshot metadata, passed through");
        println!("  hotspots: array          - Top methods ranked by self time");
        println!("    methodName: string     - Method name of the first occurrence");
        println!("    className: string      - Class name of the first occurrence");
        println!("    description: string    - Method descriptor");
        println!("    selfTime: number       - Aggregated self time (may be negative");
        println!("                             for malformed snapshots)");
        println!("    totalTime: number      - Aggregated subtree time");
        println!("    sampleCount: number    - Merged call-tree node count");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Hotspot Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Hotspot analysis for sampled profiler snapshots.");
}
