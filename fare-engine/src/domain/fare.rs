//! Fare amounts in Hong Kong dollars.
//!
//! The MTR feed publishes fares as decimal strings ("59.5", "4.9", "0").
//! Binary floats are the wrong representation for money, so fares are
//! stored as an integer number of cents and only formatted as dollars at
//! the display boundary.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// A fare amount, stored as whole cents.
///
/// Fares are non-negative and exact to two decimal places. Arithmetic is
/// plain integer arithmetic, so comparing and summing fares never loses
/// precision.
///
/// # Examples
///
/// ```
/// use fare_engine::domain::Fare;
///
/// let fare = Fare::parse("10.5").unwrap();
/// assert_eq!(fare, Fare::from_cents(1050));
/// assert_eq!(fare.to_string(), "10.50");
///
/// // Non-numeric text is not a fare
/// assert!(Fare::parse("N/A").is_none());
/// assert!(Fare::parse("").is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fare(u32);

impl Fare {
    /// A zero fare. Zero is a legitimate published amount, distinct from
    /// "no fare published at all".
    pub const ZERO: Fare = Fare(0);

    /// Create a fare from a whole number of cents.
    pub const fn from_cents(cents: u32) -> Self {
        Fare(cents)
    }

    /// Returns the amount in whole cents.
    pub const fn cents(&self) -> u32 {
        self.0
    }

    /// Returns true for a zero amount.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a decimal fare string with at most two fractional digits.
    ///
    /// Accepts the forms the feed uses: `"12"`, `"12.5"`, `"12.50"`,
    /// `".5"`. Returns `None` for anything else (signs, letters, more than
    /// two decimal places, empty input). Surrounding whitespace is
    /// tolerated.
    ///
    /// # Examples
    ///
    /// ```
    /// use fare_engine::domain::Fare;
    ///
    /// assert_eq!(Fare::parse("4.9"), Some(Fare::from_cents(490)));
    /// assert_eq!(Fare::parse("0"), Some(Fare::ZERO));
    /// assert_eq!(Fare::parse(" 27.00 "), Some(Fare::from_cents(2700)));
    ///
    /// assert!(Fare::parse("-1").is_none());
    /// assert!(Fare::parse("1.234").is_none());
    /// assert!(Fare::parse("1,5").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let (whole, frac) = match s.split_once('.') {
            Some(parts) => parts,
            None => (s, ""),
        };

        // "." alone carries no digits at all
        if whole.is_empty() && frac.is_empty() {
            return None;
        }

        let dollars = if whole.is_empty() {
            0u32
        } else {
            parse_digits(whole)?
        };

        let cents_part = match frac.len() {
            0 => 0,
            1 => parse_digits(frac)? * 10,
            2 => parse_digits(frac)?,
            _ => return None,
        };

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_part))
            .map(Fare)
    }

    /// Add two fares, returning `None` on overflow.
    pub fn checked_add(&self, rhs: Fare) -> Option<Fare> {
        self.0.checked_add(rhs.0).map(Fare)
    }

    /// Subtract a fare, returning `None` if the result would be negative.
    pub fn checked_sub(&self, rhs: Fare) -> Option<Fare> {
        self.0.checked_sub(rhs.0).map(Fare)
    }
}

/// Parse a run of ASCII digits into a u32. Rejects empty input, signs and
/// any non-digit byte (unlike `str::parse`, which accepts a leading `+`).
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, rhs: Fare) -> Fare {
        self.checked_add(rhs).expect("fare overflow")
    }
}

impl Sub for Fare {
    type Output = Fare;

    fn sub(self, rhs: Fare) -> Fare {
        self.checked_sub(rhs).expect("fare underflow")
    }
}

impl Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Fare {
        iter.fold(Fare::ZERO, Add::add)
    }
}

impl Ord for Fare {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Fare {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fare({}.{:02})", self.0 / 100, self.0 % 100)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse returns the original amount
        #[test]
        fn display_parse_roundtrip(cents in 0u32..10_000_000) {
            let fare = Fare::from_cents(cents);
            prop_assert_eq!(Fare::parse(&fare.to_string()), Some(fare));
        }

        /// Any one-decimal feed-style string parses to the exact cents
        #[test]
        fn feed_style_parses(dollars in 0u32..1000, tenths in 0u32..10) {
            let s = format!("{}.{}", dollars, tenths);
            prop_assert_eq!(
                Fare::parse(&s),
                Some(Fare::from_cents(dollars * 100 + tenths * 10))
            );
        }

        /// Parsing never panics on arbitrary input
        #[test]
        fn parse_total(s in ".*") {
            let _ = Fare::parse(&s);
        }

        /// Addition agrees with cent arithmetic
        #[test]
        fn add_is_cent_addition(a in 0u32..1_000_000, b in 0u32..1_000_000) {
            prop_assert_eq!(
                Fare::from_cents(a) + Fare::from_cents(b),
                Fare::from_cents(a + b)
            );
        }

        /// Ordering agrees with cent ordering
        #[test]
        fn ordering_matches_cents(a in 0u32..1_000_000, b in 0u32..1_000_000) {
            prop_assert_eq!(
                Fare::from_cents(a).cmp(&Fare::from_cents(b)),
                a.cmp(&b)
            );
        }
    }
}
