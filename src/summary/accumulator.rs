//! Per-method accumulation of call-tree occurrences.
//!
//! Every node the walker visits is folded into an accumulator keyed by the
//! method's composite identity. Stores remember first-discovery order so
//! ranking ties stay deterministic.

use crate::decoder::CallTreeNode;
use crate::utils::config::UNKNOWN_FRAME_FIELD;
use std::collections::HashMap;

/// Composite identity of a method: class, method and descriptor.
///
/// A genuine tuple key, not a delimiter-joined string. Field values may
/// contain any characters without colliding with other identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodKey {
    pub class_name: String,
    pub method_name: String,
    pub description: String,
}

impl MethodKey {
    /// Build the key for a node, substituting the sentinel for missing fields
    ///
    /// **Public** - used by the walker for every visited node
    pub fn from_node(node: &CallTreeNode) -> Self {
        Self {
            class_name: or_unknown(&node.class_name),
            method_name: or_unknown(&node.method_name),
            description: or_unknown(&node.description),
        }
    }
}

fn or_unknown(field: &str) -> String {
    if field.is_empty() {
        UNKNOWN_FRAME_FIELD.to_string()
    } else {
        field.to_string()
    }
}

/// Descriptive fields of the first node merged under a key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Representative {
    pub class_name: String,
    pub method_name: String,
    pub description: String,
}

/// Running totals for one method identity
///
/// `total_time_sum` re-counts the full subtree time of every occurrence, so
/// a method that recurses into itself is counted once per occurrence. That
/// over-counting is part of the metric's definition, not an accident.
#[derive(Debug, Clone)]
pub struct MethodAccumulator {
    pub key: MethodKey,

    /// Sum of per-occurrence self times. Signed: a malformed snapshot where
    /// children outweigh their parent produces a negative value, and it is
    /// reported as-is rather than clamped.
    pub self_time_sum: i64,

    /// Sum of per-occurrence subtree times
    pub total_time_sum: u64,

    /// Number of occurrences merged under this key
    pub sample_count: u64,

    /// Captured from the first occurrence, raw fields without sentinels
    pub representative: Representative,
}

impl MethodAccumulator {
    fn new(key: MethodKey, node: &CallTreeNode) -> Self {
        Self {
            key,
            self_time_sum: 0,
            total_time_sum: 0,
            sample_count: 0,
            representative: Representative {
                class_name: node.class_name.clone(),
                method_name: node.method_name.clone(),
                description: node.description.clone(),
            },
        }
    }

    fn add_occurrence(&mut self, node: &CallTreeNode, self_time: i64) {
        self.self_time_sum += self_time;
        self.total_time_sum += node.time;
        self.sample_count += 1;
    }
}

/// Keyed accumulation store preserving first-discovery order
///
/// **Public** - one store per thread during the walk, one global store after
/// merging. Entries are created lazily and only ever grow within a run.
#[derive(Debug, Default)]
pub struct AccumulatorStore {
    index: HashMap<MethodKey, usize>,
    accumulators: Vec<MethodAccumulator>,
}

impl AccumulatorStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one node occurrence with its computed self time
    ///
    /// **Public** - called by the walker in traversal order
    pub fn record(&mut self, node: &CallTreeNode, self_time: i64) {
        let key = MethodKey::from_node(node);
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.accumulators.len();
                self.index.insert(key.clone(), slot);
                self.accumulators.push(MethodAccumulator::new(key, node));
                slot
            }
        };
        self.accumulators[slot].add_occurrence(node, self_time);
    }

    /// Merge another store into this one
    ///
    /// **Public** - folds per-thread results into the global store
    ///
    /// The other store's entries are taken in their discovery order, so as
    /// long as threads are merged in document order the combined store keeps
    /// a deterministic first-seen ordering. Sums add; the representative of
    /// whichever store saw the key first wins.
    pub fn merge(&mut self, other: AccumulatorStore) {
        for acc in other.accumulators {
            match self.index.get(&acc.key) {
                Some(&slot) => {
                    let existing = &mut self.accumulators[slot];
                    existing.self_time_sum += acc.self_time_sum;
                    existing.total_time_sum += acc.total_time_sum;
                    existing.sample_count += acc.sample_count;
                }
                None => {
                    let slot = self.accumulators.len();
                    self.index.insert(acc.key.clone(), slot);
                    self.accumulators.push(acc);
                }
            }
        }
    }

    /// Number of distinct method identities seen so far
    pub fn len(&self) -> usize {
        self.accumulators.len()
    }

    /// True if no occurrences were recorded
    pub fn is_empty(&self) -> bool {
        self.accumulators.is_empty()
    }

    /// Consume the store, yielding accumulators in first-discovery order
    pub fn into_accumulators(self) -> Vec<MethodAccumulator> {
        self.accumulators
    }
}
