//! Listing order key

use crate::error::{Result, TipcheckError};
use std::cmp::Ordering;
use std::fmt;

const EXPECTED: &str = "a decimal number";

/// Sort key for listings.
///
/// Keeps the string exactly as written but compares by its numeric value,
/// so `"9"` sorts before `"10"` and `"7"` equals `"7.0"`. Any finite decimal
/// (`-3`, `1.5`, `007`, arbitrarily long) is accepted; the value is held as
/// normalized digits rather than a float, so comparison is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderKey {
    raw: String,
    negative: bool,
    /// Integer digits without leading zeros ("0" for zero)
    int: String,
    /// Fraction digits without trailing zeros
    frac: String,
}

impl OrderKey {
    /// Parse an order value. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self> {
        let mismatch = || TipcheckError::mismatch("order", raw, EXPECTED);

        let trimmed = raw.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (int, frac) = digits.split_once('.').unwrap_or((digits, ""));
        if int.is_empty() && frac.is_empty() {
            return Err(mismatch());
        }
        if !int.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(mismatch());
        }

        let int = match int.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };
        let frac = frac.trim_end_matches('0');
        let is_zero = int == "0" && frac.is_empty();

        Ok(OrderKey {
            raw: raw.to_string(),
            negative: negative && !is_zero,
            int: int.to_string(),
            frac: frac.to_string(),
        })
    }

    /// The value as written in the document
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Canonical spelling of the number; equal for numerically equal keys
    pub fn normalized(&self) -> String {
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        out.push_str(&self.int);
        if !self.frac.is_empty() {
            out.push('.');
            out.push_str(&self.frac);
        }
        out
    }

    /// The value as an integer, when it is whole and fits
    pub fn integer(&self) -> Option<i64> {
        if !self.frac.is_empty() {
            return None;
        }
        self.normalized().parse().ok()
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.int
            .len()
            .cmp(&other.int.len())
            .then_with(|| self.int.cmp(&other.int))
            .then_with(|| self.frac.cmp(&other.frac))
    }

    /// Compare by numeric value only
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
