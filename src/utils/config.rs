//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default number of hotspot entries kept in a summary report
pub const DEFAULT_TOP_N: usize = 50;

/// Maximum call-tree depth accepted by the walker.
///
/// Sampled stacks from real runtimes stay well below this; anything deeper
/// indicates a malformed snapshot and aborts the run.
pub const MAX_TREE_DEPTH: usize = 4096;

// Sentinel for frames missing an identity field.
// Proto3 cannot distinguish "absent" from "empty", so empty counts as missing.
pub const UNKNOWN_FRAME_FIELD: &str = "unknown";
