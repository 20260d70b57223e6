//! Dysperse Ordered-List Ranking
//!
//! Drag-reordered lists (tabs, widgets, collection entries) keep their order
//! in opaque, lexicographically sortable rank strings. Moving an item assigns
//! a new rank to that item only; neighbors are never renumbered.
//!
//! # Architecture
//!
//! - **Pure computation**: no I/O, no shared state, every call independent
//! - **Lexicographic only**: ranks are compared as strings, never as numbers
//! - **Optimistic-update friendly**: the caller applies a new rank locally,
//!   then persists `{id, order}` to the remote store on its own schedule
//!
//! # Modules
//!
//! - [`rank`] - The dense `Rank` type (`next`, `prev`, `between`, `middle`)
//! - [`models`] - `RankedItem`, `MoveRequest`, `RankAssignment`
//! - [`operations`] - Move-to-rank, display sorting, validation, rebalancing
//! - [`config`] - `RankConfig`
//! - [`error`] - `RankError`

pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod rank;

// Re-export commonly used types
pub use config::RankConfig;
pub use error::{RankError, Result};
pub use models::{ItemId, MoveRequest, RankAssignment, RankedItem};
pub use operations::{compare_ranked, move_to_rank, sort_ranked, RankAllocator};
pub use rank::{rank_between, Rank};
