//! Corrective re-ranking of a whole list
//!
//! Repeated moves into the same gap make ranks grow one digit at a time, and
//! corrupted state can leave two items sharing a rank. Both are repaired by
//! assigning every item a fresh, evenly spaced rank in current display order.
//! This is the one operation that rewrites ranks of items other than a moved
//! one, so callers run it as an explicit maintenance step.

use crate::config::RankConfig;
use crate::models::{RankAssignment, RankedItem};
use crate::operations::sort::{compare_ranked, validate_ranks};
use crate::rank::Rank;

/// Check if rebalancing is needed
///
/// True when a rank is longer than `config.max_rank_length`, or when the
/// persisted ranks fail [`validate_ranks`] (duplicate or malformed).
pub fn needs_rebalancing<T>(items: &[RankedItem<T>], config: &RankConfig) -> bool {
    let too_long = items
        .iter()
        .filter_map(RankedItem::raw_rank)
        .any(|rank| rank.len() > config.max_rank_length);

    too_long || validate_ranks(items).is_err()
}

/// Fresh ranks for every item, preserving display order
///
/// Unranked items land after ranked ones in their input order, so the plan
/// also assigns ranks to items still awaiting one.
///
/// # Example
/// Input:  [A:"a", B:"aii", C:None]
/// Output: [A:"9", B:"i", C:"r"]
pub fn plan_rebalance<T>(items: &[RankedItem<T>]) -> Vec<RankAssignment> {
    let mut ordered: Vec<&RankedItem<T>> = items.iter().collect();
    ordered.sort_by(|a, b| compare_ranked(a, b));

    let plan: Vec<RankAssignment> = ordered
        .into_iter()
        .zip(Rank::evenly_spaced(items.len()))
        .map(|(item, rank)| RankAssignment {
            id: item.id.clone(),
            rank,
        })
        .collect();

    tracing::debug!("Planned rebalance of {} item(s)", plan.len());
    plan
}
