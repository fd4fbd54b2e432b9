//! Report structures written to JSON.
//!
//! This module defines the summary output shape: the snapshot metadata
//! passed through unchanged, plus the ranked hotspot records.

use crate::summary::accumulator::MethodAccumulator;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hotspot summary written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotspotReport {
    /// Snapshot metadata, passed through from the decoded document
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,

    /// Top methods by aggregated self time, descending
    pub hotspots: Vec<HotspotRecord>,
}

/// One ranked method in the report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotRecord {
    /// Method name from the first occurrence of this identity
    pub method_name: String,

    /// Class name from the first occurrence
    pub class_name: String,

    /// Descriptor from the first occurrence
    pub description: String,

    /// Aggregated self time; negative only for malformed snapshots
    pub self_time: i64,

    /// Aggregated subtree time over all occurrences. Recursive calls count
    /// their subtree once per occurrence, so this can exceed wall time.
    pub total_time: u64,

    /// Number of call-tree nodes merged into this record
    pub sample_count: u64,
}

/// Build the report from ranked accumulators and passthrough metadata
///
/// **Public** - the formatting boundary between the core and the JSON writer
pub fn build_report(
    metadata: &BTreeMap<String, String>,
    ranked: Vec<MethodAccumulator>,
) -> HotspotReport {
    let hotspots = ranked
        .into_iter()
        .map(|acc| HotspotRecord {
            method_name: acc.representative.method_name,
            class_name: acc.representative.class_name,
            description: acc.representative.description,
            self_time: acc.self_time_sum,
            total_time: acc.total_time_sum,
            sample_count: acc.sample_count,
        })
        .collect();

    HotspotReport {
        metadata: metadata.clone(),
        hotspots,
    }
}
