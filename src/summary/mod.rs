//! Summarization of a decoded profile document into a hotspot report.
//!
//! This module transforms per-thread call trees into:
//! - Per-node self times (cumulative time minus direct children's time)
//! - Per-method accumulators merged across all threads
//! - A ranked top-N hotspot report
//!
//! The whole pass is a pure function of the document and the configuration;
//! running it twice produces identical output.

pub mod accumulator;
pub mod ranker;
pub mod report;
pub mod walker;

// Re-export main types and functions
pub use accumulator::{AccumulatorStore, MethodAccumulator, MethodKey};
pub use ranker::rank_hotspots;
pub use report::{build_report, HotspotRecord, HotspotReport};
pub use walker::walk_thread;

use crate::decoder::ProfileData;
use crate::utils::error::StructuralError;
use log::debug;

/// Summarize a decoded document into a top-N hotspot report
///
/// **Public** - main entry point for summarization
///
/// Walks each thread into its own accumulator store, merges the stores in
/// document order, ranks by self time and pairs the result with the
/// passthrough metadata. The per-thread walks are independent of each other;
/// this runs them sequentially, which already fixes the deterministic merge
/// order a parallel version would have to reproduce.
///
/// # Errors
/// * `StructuralError` - a call tree exceeded the traversal guard
pub fn summarize(document: &ProfileData, top_n: usize) -> Result<HotspotReport, StructuralError> {
    let mut global = AccumulatorStore::new();

    for thread in document.threads() {
        let mut local = AccumulatorStore::new();
        walk_thread(thread, &mut local)?;
        debug!(
            "Thread '{}': {} distinct methods",
            thread.name,
            local.len()
        );
        global.merge(local);
    }

    let ranked = rank_hotspots(global, top_n);
    Ok(build_report(document.metadata(), ranked))
}
