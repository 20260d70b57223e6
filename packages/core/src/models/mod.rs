//! Data Models
//!
//! Items of an ordered list, reorder requests, and the rank write-backs
//! handed to the remote store.

mod ranked_item;

pub use ranked_item::{Fields, ItemId, MoveRequest, RankAssignment, RankedItem};
