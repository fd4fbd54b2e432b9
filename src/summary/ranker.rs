//! Ranking of accumulated methods by self time.

use crate::summary::accumulator::{AccumulatorStore, MethodAccumulator};
use log::debug;

/// Rank accumulated methods by self time, descending, keeping the top N
///
/// **Public** - final core step before report formatting
///
/// The sort is stable over first-discovery order, so equal self times keep
/// the order in which the walker first saw them. Asking for more entries
/// than exist returns all of them.
pub fn rank_hotspots(store: AccumulatorStore, top_n: usize) -> Vec<MethodAccumulator> {
    let total = store.len();
    let mut ranked = store.into_accumulators();

    ranked.sort_by(|a, b| b.self_time_sum.cmp(&a.self_time_sum));
    ranked.truncate(top_n);

    debug!("Ranked {} methods, kept top {}", total, ranked.len());

    ranked
}
