//! List Operations
//!
//! Everything that computes ranks against a list snapshot:
//!
//! - `move_rank` - rank for a moved item between its intended neighbors
//! - `sort` - display comparator and integrity checks
//! - `rebalance` - corrective re-rank of a whole list
//! - `allocator` - `RankAllocator`, the configured entry point for UI flows
//!
//! All operations are synchronous and side-effect free apart from logging.
//! Persisting the result, retrying failed writes, and reconciling with the
//! store's authoritative state belong to the caller.

pub mod allocator;
pub mod move_rank;
pub mod rebalance;
pub mod sort;

pub use allocator::RankAllocator;
pub use move_rank::{append_rank, derive_move, move_to_rank};
pub use rebalance::{needs_rebalancing, plan_rebalance};
pub use sort::{compare_ranked, sort_ranked, validate_ranks};
