//! Rank allocator used by list-reordering flows
//!
//! Wraps the pure move/append computations with a [`RankConfig`] and turns
//! results into [`RankAssignment`]s ready to persist.
//!
//! # Example
//!
//! ```rust
//! use dysperse_core::models::{MoveRequest, RankedItem};
//! use dysperse_core::operations::{sort_ranked, RankAllocator};
//!
//! let mut tabs: Vec<RankedItem> = vec![
//!     RankedItem::with_rank("A", "a"),
//!     RankedItem::with_rank("B", "m"),
//!     RankedItem::with_rank("C", "z"),
//! ];
//!
//! let allocator = RankAllocator::default();
//! let request = MoveRequest::new("C", Some("A".into()), Some("B".into()));
//! let assignment = allocator.allocate(&tabs, &request).unwrap();
//!
//! // Optimistic local update, then persist `assignment` asynchronously
//! if let Some(tab) = tabs.iter_mut().find(|t| t.id == assignment.id) {
//!     tab.set_rank(&assignment.rank);
//! }
//! sort_ranked(&mut tabs);
//!
//! let order: Vec<String> = tabs.iter().map(|t| t.id.to_string()).collect();
//! assert_eq!(order, vec!["A", "C", "B"]);
//! ```

use crate::config::RankConfig;
use crate::error::Result;
use crate::models::{MoveRequest, RankAssignment, RankedItem};
use crate::operations::move_rank::{append_rank, move_to_rank};
use crate::operations::rebalance::{needs_rebalancing, plan_rebalance};
use crate::rank::Rank;

/// Stateless apart from its configuration; every call is independent
#[derive(Debug, Clone, Default)]
pub struct RankAllocator {
    config: RankConfig,
}

impl RankAllocator {
    /// Create an allocator, rejecting invalid configuration
    pub fn new(config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// New rank for the moved item of `request`
    pub fn allocate<T>(
        &self,
        items: &[RankedItem<T>],
        request: &MoveRequest,
    ) -> Result<RankAssignment> {
        let rank = move_to_rank(items, request)?;
        self.check_length(&rank);
        Ok(RankAssignment {
            id: request.moved_id.clone(),
            rank,
        })
    }

    /// Rank for an item created at the end of the list
    pub fn append<T>(&self, items: &[RankedItem<T>]) -> Rank {
        let rank = append_rank(items);
        self.check_length(&rank);
        rank
    }

    pub fn needs_rebalancing<T>(&self, items: &[RankedItem<T>]) -> bool {
        needs_rebalancing(items, &self.config)
    }

    pub fn plan_rebalance<T>(&self, items: &[RankedItem<T>]) -> Vec<RankAssignment> {
        plan_rebalance(items)
    }

    fn check_length(&self, rank: &Rank) {
        if rank.len() > self.config.max_rank_length {
            tracing::warn!(
                "Allocated rank '{}' is {} digits long (limit {}); consider rebalancing the list",
                rank,
                rank.len(),
                self.config.max_rank_length
            );
        }
    }
}
