//! Error types for rank allocation
//!
//! This module defines every error the ranking core can report. Only two of
//! them (`InvalidRankOrder`, `DuplicateRankDetected`) come out of rank
//! arithmetic itself; the rest describe snapshots that cannot be resolved.

use thiserror::Error;

/// Errors that can occur while computing or validating ranks
///
/// # Examples
///
/// ```rust
/// use dysperse_core::{Rank, RankError};
///
/// let a: Rank = "a".parse().unwrap();
/// let b: Rank = "m".parse().unwrap();
///
/// // Reversed neighbors are a caller bug, never silently swapped
/// let err = Rank::between(&b, &a).unwrap_err();
/// assert!(matches!(err, RankError::InvalidRankOrder { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// `between` received neighbors that are not strictly ordered
    ///
    /// Always a caller bug (stale or mis-built snapshot). The caller should
    /// refuse the reorder and refresh its snapshot from the authoritative store.
    #[error("Invalid rank order: '{before}' must sort strictly before '{after}'")]
    InvalidRankOrder { before: String, after: String },

    /// Two neighbors carry the same rank
    ///
    /// Signals corrupted persisted state; the list needs a corrective re-rank.
    #[error("Duplicate rank detected: '{rank}'")]
    DuplicateRankDetected { rank: String },

    /// Rank string is empty, uses characters outside the alphabet, or ends in
    /// the minimum digit
    #[error("Malformed rank '{rank}': {reason}")]
    MalformedRank { rank: String, reason: String },

    /// Referenced item does not exist in the snapshot
    #[error("Item '{id}' does not exist in the list")]
    ItemNotFound { id: String },

    /// The moved item was named as its own neighbor
    #[error("Item '{id}' cannot be its own neighbor")]
    SelfNeighbor { id: String },

    /// The same item was named as both neighbors
    #[error("Item '{id}' cannot be both the before and after neighbor")]
    SameNeighbors { id: String },

    /// No neighbors given while other items remain in the list, so the target
    /// position is undefined
    #[error("Move of '{id}' names no neighbors but the list holds {others} other item(s)")]
    MissingNeighbors { id: String, others: usize },

    /// A neighbor item has no rank assigned yet
    #[error("Item '{id}' has no rank and cannot be used as a neighbor")]
    MissingRank { id: String },

    /// Drag index outside the list
    #[error("Index {index} is out of bounds for a list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid allocator configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON (de)serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RankError {
    /// Create an InvalidRankOrder error
    pub fn invalid_order(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self::InvalidRankOrder {
            before: before.into(),
            after: after.into(),
        }
    }

    /// Create a DuplicateRankDetected error
    pub fn duplicate(rank: impl Into<String>) -> Self {
        Self::DuplicateRankDetected { rank: rank.into() }
    }

    /// Create a MalformedRank error
    pub fn malformed(rank: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRank {
            rank: rank.into(),
            reason: reason.into(),
        }
    }

    /// Create an ItemNotFound error
    pub fn item_not_found(id: impl ToString) -> Self {
        Self::ItemNotFound { id: id.to_string() }
    }

    /// Create a SelfNeighbor error
    pub fn self_neighbor(id: impl ToString) -> Self {
        Self::SelfNeighbor { id: id.to_string() }
    }

    /// Create a SameNeighbors error
    pub fn same_neighbors(id: impl ToString) -> Self {
        Self::SameNeighbors { id: id.to_string() }
    }

    /// Create a MissingNeighbors error
    pub fn missing_neighbors(id: impl ToString, others: usize) -> Self {
        Self::MissingNeighbors {
            id: id.to_string(),
            others,
        }
    }

    /// Create a MissingRank error
    pub fn missing_rank(id: impl ToString) -> Self {
        Self::MissingRank { id: id.to_string() }
    }

    /// Create an IndexOutOfBounds error
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Whether this error indicates corrupted persisted state rather than a
    /// caller bug
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, Self::DuplicateRankDetected { .. })
    }
}

impl From<serde_json::Error> for RankError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RankError>;
