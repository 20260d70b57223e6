//! Base-36 digit alphabet shared by every rank operation
//!
//! Digits are ordered by ASCII value (`0-9` then `a-z`), so byte-wise string
//! comparison of two ranks agrees with digit-wise comparison.

pub(crate) const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of digits in the alphabet
pub(crate) const BASE: u8 = 36;

/// Index of the middle digit (`'i'`)
pub(crate) const MID_DIGIT: u8 = BASE / 2;

pub(crate) const MIN_CHAR: u8 = ALPHABET[0];
pub(crate) const MAX_CHAR: u8 = ALPHABET[(BASE - 1) as usize];

/// Digit value of an alphabet character, `None` outside the alphabet
pub(crate) fn digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'z' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Character for a digit value; callers keep `d < BASE`
pub(crate) fn char_of(d: u8) -> u8 {
    ALPHABET[d as usize]
}

/// Digit value of a character already known to be in the alphabet
pub(crate) fn digit_unchecked(c: u8) -> u8 {
    digit(c).unwrap_or(0)
}
