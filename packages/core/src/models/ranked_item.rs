//! Ranked list items and move requests
//!
//! # Examples
//!
//! ```rust
//! use dysperse_core::models::{RankedItem, MoveRequest};
//! use serde_json::json;
//!
//! // Display data rides alongside the required id/rank fields
//! let tab: RankedItem = serde_json::from_value(json!({
//!     "id": "tab-1",
//!     "order": "m",
//!     "slug": "/collections/inbox",
//!     "icon": "inbox"
//! }))
//! .unwrap();
//!
//! assert_eq!(tab.raw_rank(), Some("m"));
//! assert_eq!(tab.data["icon"], "inbox");
//!
//! let request = MoveRequest::new("tab-3", Some("tab-1".into()), Some("tab-2".into()));
//! assert_eq!(request.moved_id.to_string(), "tab-3");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rank::Rank;

/// Free-form display data attached to an item
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Opaque, stable item identifier
///
/// The backend hands out both string and integer ids, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

/// An element of an ordered list
///
/// # Fields
///
/// - `id`: stable identifier
/// - `rank`: raw rank string, absent for items still awaiting a server-assigned
///   rank. Kept unparsed so a list with malformed entries can still be sorted
///   for display; see [`RankedItem::parsed_rank`]. Accepts `order` as an
///   alias since that is the key the remote store uses.
/// - `data`: caller-defined display data, flattened into the same JSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem<T = Fields> {
    pub id: ItemId,

    #[serde(default, alias = "order", skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,

    #[serde(flatten)]
    pub data: T,
}

impl<T: Default> RankedItem<T> {
    /// Item that has not been assigned a rank yet
    pub fn unranked(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            rank: None,
            data: T::default(),
        }
    }

    pub fn with_rank(id: impl Into<ItemId>, rank: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rank: Some(rank.into()),
            data: T::default(),
        }
    }
}

impl<T> RankedItem<T> {
    pub fn with_data(id: impl Into<ItemId>, rank: Option<String>, data: T) -> Self {
        Self {
            id: id.into(),
            rank,
            data,
        }
    }

    pub fn raw_rank(&self) -> Option<&str> {
        self.rank.as_deref()
    }

    /// Rank used for display ordering; an empty string counts as missing
    pub fn display_rank(&self) -> Option<&str> {
        self.raw_rank().filter(|rank| !rank.is_empty())
    }

    /// Whether the item sorts with the unranked tail of a list
    pub fn is_unranked(&self) -> bool {
        self.display_rank().is_none()
    }

    /// Validated rank, `Ok(None)` when no rank is assigned
    pub fn parsed_rank(&self) -> Result<Option<Rank>> {
        self.rank.as_deref().map(Rank::parse).transpose()
    }

    /// Apply a newly allocated rank (optimistic local update)
    pub fn set_rank(&mut self, rank: &Rank) {
        self.rank = Some(rank.as_str().to_string());
    }
}

/// Relocation of one item between two intended neighbors
///
/// `before_id` is the item that should directly precede the moved item after
/// the move, `after_id` the one that should directly follow it. `None` on one
/// side means "move to start" / "move to end".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub moved_id: ItemId,
    #[serde(default)]
    pub before_id: Option<ItemId>,
    #[serde(default)]
    pub after_id: Option<ItemId>,
}

impl MoveRequest {
    pub fn new(
        moved_id: impl Into<ItemId>,
        before_id: Option<ItemId>,
        after_id: Option<ItemId>,
    ) -> Self {
        Self {
            moved_id: moved_id.into(),
            before_id,
            after_id,
        }
    }
}

/// One rank write-back for the remote store: `{ "id": .., "order": .. }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankAssignment {
    pub id: ItemId,
    #[serde(rename = "order")]
    pub rank: Rank,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_id_untagged() {
        let text: ItemId = serde_json::from_value(json!("abc")).unwrap();
        assert_eq!(text, ItemId::Text("abc".to_string()));

        let number: ItemId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(number, ItemId::Number(42));
        assert_eq!(number.to_string(), "42");
    }

    #[test]
    fn test_ranked_item_accepts_rank_or_order() {
        let a: RankedItem = serde_json::from_value(json!({"id": 1, "rank": "a"})).unwrap();
        let b: RankedItem = serde_json::from_value(json!({"id": 2, "order": "b"})).unwrap();
        let c: RankedItem = serde_json::from_value(json!({"id": 3})).unwrap();

        assert_eq!(a.raw_rank(), Some("a"));
        assert_eq!(b.raw_rank(), Some("b"));
        assert_eq!(c.raw_rank(), None);
        assert!(c.data.is_empty());
    }

    #[test]
    fn test_parsed_rank() {
        let ok: RankedItem = RankedItem::with_rank("a", "m");
        assert_eq!(ok.parsed_rank().unwrap().unwrap().as_str(), "m");

        let missing: RankedItem = RankedItem::unranked("b");
        assert_eq!(missing.parsed_rank().unwrap(), None);

        let bad: RankedItem = RankedItem::with_rank("c", "M!");
        assert!(bad.parsed_rank().is_err());
    }

    #[test]
    fn test_empty_rank_counts_as_unranked() {
        let empty: RankedItem = RankedItem::with_rank("a", "");
        assert_eq!(empty.display_rank(), None);
        assert!(empty.is_unranked());

        let missing: RankedItem = RankedItem::unranked("b");
        assert!(missing.is_unranked());

        let ranked: RankedItem = RankedItem::with_rank("c", "m");
        assert_eq!(ranked.display_rank(), Some("m"));
        assert!(!ranked.is_unranked());
    }

    #[test]
    fn test_set_rank() {
        let mut item: RankedItem = RankedItem::unranked("a");
        item.set_rank(&Rank::middle());
        assert_eq!(item.raw_rank(), Some("i"));
    }

    #[test]
    fn test_move_request_camel_case() {
        let request: MoveRequest = serde_json::from_value(json!({
            "movedId": "c",
            "beforeId": "a"
        }))
        .unwrap();
        assert_eq!(request.moved_id, ItemId::from("c"));
        assert_eq!(request.before_id, Some(ItemId::from("a")));
        assert_eq!(request.after_id, None);
    }

    #[test]
    fn test_assignment_wire_shape() {
        let assignment = RankAssignment {
            id: ItemId::from("tab-1"),
            rank: Rank::middle(),
        };
        assert_eq!(
            serde_json::to_value(&assignment).unwrap(),
            json!({"id": "tab-1", "order": "i"})
        );
    }
}
