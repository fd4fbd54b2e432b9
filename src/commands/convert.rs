//! Convert command implementation.
//!
//! The convert command:
//! 1. Reads snapshot bytes from disk
//! 2. Inflates them (falling back to raw bytes)
//! 3. Decodes the selected schema variant
//! 4. Optionally summarizes into a hotspot report
//! 5. Writes the JSON output file

use crate::decoder::{decode_snapshot, ProfileKind};
use crate::output::write_json;
use crate::summary::summarize;
use crate::utils::config::DEFAULT_TOP_N;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the snapshot file
    pub input: PathBuf,

    /// Output path for the JSON file (derived from input when None)
    pub output: Option<PathBuf>,

    /// Schema variant to decode the snapshot as
    pub profile_type: ProfileKind,

    /// Emit a hotspot report instead of the full document
    pub summarize: bool,

    /// Number of hotspot entries to keep when summarizing
    pub top_n: usize,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            profile_type: ProfileKind::Sampler,
            summarize: false,
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Input read or decode failures
/// * Malformed call trees during summarization
/// * File write errors
pub fn execute_convert(args: ConvertArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Converting snapshot: {}", args.input.display());

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&args.input, args.summarize));

    // Step 1: decode (read -> inflate -> parse)
    info!("Step 1/3: Decoding '{}' snapshot...", args.profile_type);
    let document = decode_snapshot(&args.input, args.profile_type)
        .with_context(|| format!("Failed to decode snapshot {}", args.input.display()))?;

    // Step 2: summarize or pass through
    if args.summarize {
        info!("Step 2/3: Summarizing top {} hotspots...", args.top_n);
        let report =
            summarize(&document, args.top_n).context("Failed to summarize profile document")?;

        debug!("Top 3 hotspots:");
        for (i, record) in report.hotspots.iter().take(3).enumerate() {
            debug!(
                "  {}. {}.{} self time: {}",
                i + 1,
                record.class_name,
                record.method_name,
                record.self_time
            );
        }

        // Step 3: write
        info!("Step 3/3: Writing hotspot report...");
        write_json(&report, &output_path).context("Failed to write hotspot report")?;
    } else {
        info!("Step 2/3: Summarization not requested, passing document through");

        info!("Step 3/3: Writing decoded document...");
        write_json(&document, &output_path).context("Failed to write decoded document")?;
    }

    info!("Output written to: {}", output_path.display());

    let elapsed = start_time.elapsed();
    info!("Conversion completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Derive the output path from the input path
///
/// **Public** - also used when reporting the chosen path to the user
///
/// Replaces the input's extension with `.summary.json` when summarizing and
/// `.json` otherwise, next to the input file.
pub fn derive_output_path(input: &Path, summarize: bool) -> PathBuf {
    if summarize {
        input.with_extension("summary.json")
    } else {
        input.with_extension("json")
    }
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.top_n == 0 {
        anyhow::bail!("top-n must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = ConvertArgs {
            input: PathBuf::from("snapshot.profile"),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = ConvertArgs::default();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_top_n() {
        let args = ConvertArgs {
            input: PathBuf::from("snapshot.profile"),
            top_n: 0,
            ..Default::default()
        };
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_derive_output_path() {
        let input = Path::new("captures/server.profile");
        assert_eq!(
            derive_output_path(input, false),
            Path::new("captures/server.json")
        );
        assert_eq!(
            derive_output_path(input, true),
            Path::new("captures/server.summary.json")
        );
    }

    #[test]
    fn test_derive_output_path_without_extension() {
        let input = Path::new("snapshot");
        assert_eq!(
            derive_output_path(input, true),
            Path::new("snapshot.summary.json")
        );
    }
}
