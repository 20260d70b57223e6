//! Display ordering and integrity checks for ranked lists

use std::cmp::Ordering;

use crate::error::{RankError, Result};
use crate::models::RankedItem;
use crate::rank::Rank;

/// Comparator for rendering a list that may contain unranked items
///
/// Ranked items compare lexicographically by their raw rank string, ranked
/// before unranked, and two unranked items are equal so a stable sort keeps
/// their input order. Never panics, including on malformed rank strings.
pub fn compare_ranked<T>(a: &RankedItem<T>, b: &RankedItem<T>) -> Ordering {
    match (a.display_rank(), b.display_rank()) {
        (Some(a), Some(b)) => a.as_bytes().cmp(b.as_bytes()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort into display order
pub fn sort_ranked<T>(items: &mut [RankedItem<T>]) {
    items.sort_by(compare_ranked);
}

/// Strict integrity check of a persisted list
///
/// Every present rank must be well-formed and no two may be equal. Items
/// without a rank are permitted.
pub fn validate_ranks<T>(items: &[RankedItem<T>]) -> Result<()> {
    let mut ranks: Vec<Rank> = items
        .iter()
        .filter_map(|item| item.parsed_rank().transpose())
        .collect::<Result<_>>()?;
    ranks.sort();

    if let Some(pair) = ranks.windows(2).find(|pair| pair[0] == pair[1]) {
        tracing::warn!("Duplicate rank '{}' found in persisted list", pair[0]);
        return Err(RankError::duplicate(pair[0].as_str()));
    }

    Ok(())
}
