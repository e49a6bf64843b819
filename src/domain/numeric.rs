//! Arbitrary-precision version numbers
//!
//! Version fields are kept as canonical decimal strings so that values like
//! `99999999999999999999999` survive parsing, bumping and formatting without
//! hitting a machine-word ceiling.

use crate::error::{Result, SemverTagError};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A non-negative integer stored as a canonical decimal string
///
/// Canonical means `"0"` or a digit run without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeric(String);

impl Numeric {
    /// The value zero
    pub fn zero() -> Self {
        Numeric("0".to_string())
    }

    /// Parse a canonical decimal string
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Check whether `s` is a canonical decimal string
    pub fn is_canonical(s: &str) -> bool {
        !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Add one, carrying through the decimal digits
    pub fn increment(&mut self) {
        let mut digits = std::mem::take(&mut self.0).into_bytes();
        let mut carry = true;

        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }

        if carry {
            digits.insert(0, b'1');
        }

        // only ASCII digits were written
        self.0 = digits.into_iter().map(char::from).collect();
    }

    /// Return a copy incremented by one
    pub fn incremented(&self) -> Self {
        let mut next = self.clone();
        next.increment();
        next
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Numeric::zero()
    }
}

impl FromStr for Numeric {
    type Err = SemverTagError;

    fn from_str(s: &str) -> Result<Self> {
        if Numeric::is_canonical(s) {
            Ok(Numeric(s.to_string()))
        } else {
            Err(SemverTagError::invalid_version(s))
        }
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        Numeric(value.to_string())
    }
}

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        // canonical form: a longer digit run is always the larger value
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
