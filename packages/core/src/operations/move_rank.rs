//! Move-to-rank computation for drag reordering
//!
//! Only the moved item gets a new rank; its neighbors are never rewritten.
//! Everything here is a pure function of the snapshot it is handed, so a
//! rapid sequence of moves against stale snapshots is individually correct
//! and reconciliation (last write wins per item) is left to the store.

use crate::error::{RankError, Result};
use crate::models::{ItemId, MoveRequest, RankedItem};
use crate::rank::Rank;

fn find<'a, T>(items: &'a [RankedItem<T>], id: &ItemId) -> Option<&'a RankedItem<T>> {
    items.iter().find(|item| &item.id == id)
}

/// Rank of a neighbor, which must exist and carry a well-formed rank
fn neighbor_rank<T>(items: &[RankedItem<T>], id: &ItemId) -> Result<Rank> {
    let item = find(items, id).ok_or_else(|| RankError::item_not_found(id))?;
    item.parsed_rank()?.ok_or_else(|| RankError::missing_rank(id))
}

/// Compute the new rank for `request.moved_id`
///
/// | before | after | result                                  |
/// |--------|-------|-----------------------------------------|
/// | yes    | yes   | `between(before, after)`                |
/// | no     | yes   | `prev(after)`                           |
/// | yes    | no    | `next(before)`                          |
/// | no     | no    | `next(moved)` if ranked, else `middle()`|
///
/// The last row only applies when the moved item is alone in the snapshot;
/// with any other item present a move needs at least one neighbor. A
/// malformed rank on the moved item is reported, not replaced by `middle()`.
///
/// The moved item itself does not have to be in the snapshot (a freshly
/// created item dropped into place). Neighbors do not have to be adjacent in
/// the snapshot; only `before < after` is required.
///
/// # Errors
///
/// - [`RankError::ItemNotFound`] for an unknown neighbor id
/// - [`RankError::MissingRank`] / [`RankError::MalformedRank`] for a neighbor
///   without a usable rank
/// - [`RankError::SelfNeighbor`] when the moved item is named as a neighbor
/// - [`RankError::SameNeighbors`] when one id is given for both neighbors
/// - [`RankError::MissingNeighbors`] when no neighbor is given but other
///   items exist
/// - [`RankError::MalformedRank`] when the moved item's own rank is used and
///   is malformed
/// - [`RankError::DuplicateRankDetected`] when both neighbors share a rank
/// - [`RankError::InvalidRankOrder`] when the neighbors are reversed
pub fn move_to_rank<T>(items: &[RankedItem<T>], request: &MoveRequest) -> Result<Rank> {
    for neighbor in [&request.before_id, &request.after_id].into_iter().flatten() {
        if neighbor == &request.moved_id {
            return Err(RankError::self_neighbor(neighbor));
        }
    }
    if let (Some(before), Some(after)) = (&request.before_id, &request.after_id) {
        if before == after {
            return Err(RankError::same_neighbors(before));
        }
    }

    let before = request
        .before_id
        .as_ref()
        .map(|id| neighbor_rank(items, id))
        .transpose()?;
    let after = request
        .after_id
        .as_ref()
        .map(|id| neighbor_rank(items, id))
        .transpose()?;

    let rank = match (before, after) {
        (Some(before), Some(after)) => Rank::between(&before, &after).map_err(|e| {
            if e.is_data_corruption() {
                tracing::warn!(
                    "Neighbors of '{}' share rank '{}'; list needs a corrective re-rank",
                    request.moved_id,
                    before
                );
            }
            e
        })?,
        (None, Some(after)) => after.prev(),
        (Some(before), None) => before.next(),
        (None, None) => {
            let others = items
                .iter()
                .filter(|item| item.id != request.moved_id)
                .count();
            if others > 0 {
                return Err(RankError::missing_neighbors(&request.moved_id, others));
            }

            let prior = match find(items, &request.moved_id) {
                Some(item) => item.parsed_rank()?,
                None => None,
            };
            match prior {
                Some(prior) => prior.next(),
                None => Rank::middle(),
            }
        }
    };

    tracing::debug!("Allocated rank '{}' for item '{}'", rank, request.moved_id);
    Ok(rank)
}

/// Build a [`MoveRequest`] from a drag between display indices
///
/// `items` must be in display order (see [`crate::operations::sort_ranked`]).
/// `to` is the index the item should occupy once the move completes.
pub fn derive_move<T>(items: &[RankedItem<T>], from: usize, to: usize) -> Result<MoveRequest> {
    let len = items.len();
    if from >= len {
        return Err(RankError::index_out_of_bounds(from, len));
    }
    if to >= len {
        return Err(RankError::index_out_of_bounds(to, len));
    }

    let remaining: Vec<&RankedItem<T>> = items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != from)
        .map(|(_, item)| item)
        .collect();

    let before_id = to
        .checked_sub(1)
        .and_then(|i| remaining.get(i))
        .map(|item| item.id.clone());
    let after_id = remaining.get(to).map(|item| item.id.clone());

    Ok(MoveRequest {
        moved_id: items[from].id.clone(),
        before_id,
        after_id,
    })
}

/// Rank for a new item appended at the end of the list
///
/// `next` of the greatest well-formed rank, or `middle()` when no item has
/// one. Malformed ranks are skipped.
pub fn append_rank<T>(items: &[RankedItem<T>]) -> Rank {
    items
        .iter()
        .filter_map(|item| item.parsed_rank().ok().flatten())
        .max()
        .map_or_else(Rank::middle, |max| max.next())
}
