//! Dense Rank Strings
//!
//! A [`Rank`] is a position in a dense total order over strings. Ranks are
//! compared purely lexicographically; no numeric interpretation of a rank
//! string happens anywhere in this crate.
//!
//! # Format
//!
//! - Non-empty sequence of base-36 digits `0-9a-z`
//! - Never ends in `'0'`, so there is always room below any rank
//!
//! Read as a base-36 fraction `0.d1d2d3...`, lexicographic order on
//! well-formed ranks coincides with numeric order of those fractions, which is
//! what makes `between` always possible: a midpoint either exists at the
//! current length or one digit longer.
//!
//! # Examples
//!
//! ```rust
//! use dysperse_core::Rank;
//!
//! let first = Rank::middle();
//! let second = first.next();
//! let wedged = Rank::between(&first, &second).unwrap();
//!
//! assert!(first < wedged && wedged < second);
//! ```

mod alphabet;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RankError, Result};
use alphabet::{char_of, digit, digit_unchecked, BASE, MAX_CHAR, MID_DIGIT, MIN_CHAR};

/// Lexicographically ordered, infinitely subdividable position marker
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rank(String);

impl Rank {
    /// Validate a rank string
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(RankError::malformed(s, "rank cannot be empty"));
        }

        if let Some((pos, c)) = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii() || digit(*c as u8).is_none())
        {
            return Err(RankError::malformed(
                s,
                format!("invalid character '{}' at position {}", c, pos),
            ));
        }

        if s.as_bytes().last() == Some(&MIN_CHAR) {
            return Err(RankError::malformed(
                s,
                "rank cannot end with the minimum digit '0'",
            ));
        }

        Ok(Self(s.to_string()))
    }

    /// Canonical seed rank for an empty list (`"i"`)
    pub fn middle() -> Self {
        Self::from_digits(vec![char_of(MID_DIGIT)])
    }

    /// Total order over ranks: plain lexicographic string comparison
    pub fn compare(a: &Rank, b: &Rank) -> Ordering {
        a.0.as_bytes().cmp(b.0.as_bytes())
    }

    /// A rank strictly greater than `self`
    ///
    /// Increments the first digit that is not already `'z'` and drops the
    /// rest. If every digit is `'z'` the rank grows by one middle digit
    /// instead of wrapping, so repeated calls never fail.
    ///
    /// Intended for the current maximum of a list: the result may coincide
    /// with a rank that already sorts above `self`.
    pub fn next(&self) -> Self {
        let bytes = self.0.as_bytes();
        match bytes.iter().position(|&c| c != MAX_CHAR) {
            Some(i) => {
                let mut out = bytes[..i].to_vec();
                out.push(char_of(digit_unchecked(bytes[i]) + 1));
                Self::from_digits(out)
            }
            None => {
                let mut out = bytes.to_vec();
                out.push(char_of(MID_DIGIT));
                Self::from_digits(out)
            }
        }
    }

    /// A rank strictly less than `self`
    ///
    /// Decrements the first digit that is not `'0'` and drops the rest. A
    /// `'1'` becomes `'0'` followed by a middle digit so the result still
    /// never ends in `'0'`.
    ///
    /// Intended for the current minimum of a list.
    pub fn prev(&self) -> Self {
        let bytes = self.0.as_bytes();
        // A well-formed rank always ends in a non-zero digit
        let i = bytes
            .iter()
            .position(|&c| c != MIN_CHAR)
            .unwrap_or(bytes.len().saturating_sub(1));

        let mut out = bytes[..i].to_vec();
        match bytes.get(i).map(|&c| digit_unchecked(c)) {
            Some(d) if d > 1 => out.push(char_of(d - 1)),
            _ => {
                out.push(MIN_CHAR);
                out.push(char_of(MID_DIGIT));
            }
        }
        Self::from_digits(out)
    }

    /// A rank strictly between `lower` and `upper`
    ///
    /// # Errors
    ///
    /// - [`RankError::DuplicateRankDetected`] when `lower == upper`
    /// - [`RankError::InvalidRankOrder`] when `lower > upper`
    pub fn between(lower: &Rank, upper: &Rank) -> Result<Self> {
        match Self::compare(lower, upper) {
            Ordering::Less => Ok(Self::from_digits(midpoint(
                lower.0.as_bytes(),
                upper.0.as_bytes(),
            ))),
            Ordering::Equal => Err(RankError::duplicate(lower.as_str())),
            Ordering::Greater => Err(RankError::invalid_order(lower.as_str(), upper.as_str())),
        }
    }

    /// `count` strictly increasing ranks spread evenly over the alphabet
    ///
    /// Uses the shortest digit length that can hold `count` distinct ranks.
    ///
    /// # Example
    /// Input:  3
    /// Output: ["9", "i", "r"]
    pub fn evenly_spaced(count: usize) -> Vec<Self> {
        if count == 0 {
            return Vec::new();
        }

        let count = count as u128;
        let mut width = 1usize;
        let mut span: u128 = BASE as u128;
        while span <= count {
            span *= BASE as u128;
            width += 1;
        }

        let step = span / (count + 1);
        (1..=count)
            .map(|k| Self::from_value(k * step, width))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a well-formed rank
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_digits(bytes: Vec<u8>) -> Self {
        Self(bytes.into_iter().map(char::from).collect())
    }

    /// Encode `value` as `width` base-36 digits, dropping trailing zeros
    fn from_value(mut value: u128, width: usize) -> Self {
        let mut out = vec![MIN_CHAR; width];
        for slot in out.iter_mut().rev() {
            *slot = char_of((value % BASE as u128) as u8);
            value /= BASE as u128;
        }
        while out.len() > 1 && out.last() == Some(&MIN_CHAR) {
            out.pop();
        }
        Self::from_digits(out)
    }
}

/// Digits strictly between `lower` and `upper`, given `lower < upper`
///
/// Walks the common prefix (a missing digit of `lower` reads as `'0'`). At the
/// first differing position, a gap of two or more takes the middle digit. An
/// adjacent pair either stops at `upper`'s digit when `upper` continues past
/// it, or keeps `lower`'s digit and searches above the rest of `lower` with no
/// upper bound.
fn midpoint(lower: &[u8], upper: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(lower.len().max(upper.len()) + 1);
    let mut bounded = true;
    let mut i = 0;

    loop {
        let lo = lower.get(i).map_or(0, |&c| digit_unchecked(c));
        let hi = if bounded {
            upper.get(i).map_or(BASE, |&c| digit_unchecked(c))
        } else {
            BASE
        };

        if lo == hi {
            out.push(char_of(lo));
        } else if hi - lo > 1 {
            out.push(char_of(lo + (hi - lo) / 2));
            return out;
        } else if bounded && i + 1 < upper.len() {
            out.push(char_of(hi));
            return out;
        } else {
            out.push(char_of(lo));
            bounded = false;
        }

        i += 1;
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rank {
    type Error = RankError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl AsRef<str> for Rank {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Rank for an item placed between two optional neighbors
///
/// `(None, None)` seeds an empty list with [`Rank::middle`]; a missing
/// neighbor on one side extends past the other with [`Rank::next`] or
/// [`Rank::prev`].
pub fn rank_between(before: Option<&Rank>, after: Option<&Rank>) -> Result<Rank> {
    match (before, after) {
        (None, None) => Ok(Rank::middle()),
        (Some(before), None) => Ok(before.next()),
        (None, Some(after)) => Ok(after.prev()),
        (Some(before), Some(after)) => Rank::between(before, after),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(s: &str) -> Rank {
        Rank::parse(s).unwrap()
    }

    #[test]
    fn test_parse_valid() {
        assert_eq!(rank("a").as_str(), "a");
        assert_eq!(rank("0i").as_str(), "0i");
        assert_eq!(rank("z9").as_str(), "z9");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            Rank::parse(""),
            Err(RankError::MalformedRank { .. })
        ));
        assert!(matches!(
            Rank::parse("aB"),
            Err(RankError::MalformedRank { .. })
        ));
        assert!(matches!(
            Rank::parse("0|hzzzzz:"),
            Err(RankError::MalformedRank { .. })
        ));
        assert!(matches!(
            Rank::parse("a0"),
            Err(RankError::MalformedRank { .. })
        ));
        assert!(matches!(
            Rank::parse("é"),
            Err(RankError::MalformedRank { .. })
        ));
    }

    #[test]
    fn test_compare_is_lexicographic() {
        assert_eq!(Rank::compare(&rank("a"), &rank("b")), Ordering::Less);
        assert_eq!(Rank::compare(&rank("a"), &rank("a1")), Ordering::Less);
        assert_eq!(Rank::compare(&rank("b"), &rank("az")), Ordering::Greater);
        // Numerically 10 > 9, lexicographically "10" < "9"
        assert_eq!(Rank::compare(&rank("11"), &rank("9")), Ordering::Less);
        assert_eq!(Rank::compare(&rank("m"), &rank("m")), Ordering::Equal);
    }

    #[test]
    fn test_middle() {
        assert_eq!(Rank::middle().as_str(), "i");
    }

    #[test]
    fn test_next() {
        assert_eq!(rank("m").next().as_str(), "n");
        assert_eq!(rank("a5").next().as_str(), "b");
        assert_eq!(rank("9").next().as_str(), "a");
        assert_eq!(rank("zk").next().as_str(), "zl");
        assert_eq!(rank("z").next().as_str(), "zi");
        assert_eq!(rank("zzz").next().as_str(), "zzzi");
    }

    #[test]
    fn test_prev() {
        assert_eq!(rank("m").prev().as_str(), "l");
        assert_eq!(rank("ab").prev().as_str(), "9");
        assert_eq!(rank("1").prev().as_str(), "0i");
        assert_eq!(rank("05").prev().as_str(), "04");
        assert_eq!(rank("01").prev().as_str(), "00i");
    }

    #[test]
    fn test_next_and_prev_never_bound() {
        let mut up = Rank::middle();
        let mut down = Rank::middle();
        for _ in 0..500 {
            let next = up.next();
            assert!(next > up);
            up = next;

            let prev = down.prev();
            assert!(prev < down);
            assert!(Rank::parse(prev.as_str()).is_ok());
            down = prev;
        }
    }

    #[test]
    fn test_between_with_room() {
        let r = Rank::between(&rank("a"), &rank("m")).unwrap();
        assert_eq!(r.as_str(), "g");
        assert!(rank("a") < r && r < rank("m"));
    }

    #[test]
    fn test_between_adjacent_extends_length() {
        let r = Rank::between(&rank("a"), &rank("b")).unwrap();
        assert_eq!(r.as_str(), "ai");
        assert!(rank("a") < r && r < rank("b"));
    }

    #[test]
    fn test_between_prefix_cases() {
        // lower is a prefix of upper
        let r = Rank::between(&rank("a"), &rank("a05")).unwrap();
        assert_eq!(r.as_str(), "a02");

        // upper continues past an adjacent digit
        let r = Rank::between(&rank("a"), &rank("b5")).unwrap();
        assert_eq!(r.as_str(), "b");

        // lower runs through max digits
        let r = Rank::between(&rank("az"), &rank("b")).unwrap();
        assert_eq!(r.as_str(), "azi");
        assert!(rank("az") < r && r < rank("b"));
    }

    #[test]
    fn test_between_errors() {
        assert_eq!(
            Rank::between(&rank("m"), &rank("a")),
            Err(RankError::invalid_order("m", "a"))
        );
        assert_eq!(
            Rank::between(&rank("m"), &rank("m")),
            Err(RankError::duplicate("m"))
        );
    }

    #[test]
    fn test_repeated_bisection_stays_ordered() {
        let lower = rank("a");
        let mut upper = rank("b");
        for _ in 0..1000 {
            let mid = Rank::between(&lower, &upper).unwrap();
            assert!(lower < mid && mid < upper);
            upper = mid;
        }

        let mut lower = rank("a");
        let upper = rank("b");
        for _ in 0..1000 {
            let mid = Rank::between(&lower, &upper).unwrap();
            assert!(lower < mid && mid < upper);
            lower = mid;
        }
    }

    #[test]
    fn test_evenly_spaced() {
        assert!(Rank::evenly_spaced(0).is_empty());

        let ranks: Vec<String> = Rank::evenly_spaced(3)
            .into_iter()
            .map(Rank::into_string)
            .collect();
        assert_eq!(ranks, vec!["9", "i", "r"]);

        let many = Rank::evenly_spaced(1000);
        assert_eq!(many.len(), 1000);
        assert!(many.windows(2).all(|w| w[0] < w[1]));
        assert!(many.iter().all(|r| r.len() <= 2));
        assert!(many.iter().all(|r| Rank::parse(r.as_str()).is_ok()));
    }

    #[test]
    fn test_rank_between_case_table() {
        let a = rank("a");
        let m = rank("m");
        assert_eq!(rank_between(None, None).unwrap(), Rank::middle());
        assert_eq!(rank_between(Some(&m), None).unwrap(), rank("n"));
        assert_eq!(rank_between(None, Some(&m)).unwrap(), rank("l"));
        assert_eq!(rank_between(Some(&a), Some(&m)).unwrap(), rank("g"));
        assert!(rank_between(Some(&m), Some(&a)).is_err());
    }

    #[test]
    fn test_serde_transparent_and_validated() {
        let json = serde_json::to_string(&rank("am")).unwrap();
        assert_eq!(json, "\"am\"");

        let parsed: Rank = serde_json::from_str("\"am\"").unwrap();
        assert_eq!(parsed, rank("am"));

        assert!(serde_json::from_str::<Rank>("\"a0\"").is_err());
    }
}
