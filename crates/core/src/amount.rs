//! Amount - integer amounts in the smallest currency unit
//!
//! All financial amounts in VerseBank are non-negative integers.
//! This is enforced at the type level; arithmetic is checked, never wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative integer amount in the smallest currency unit.
///
/// # Invariant
/// Negative amounts are unrepresentable. Operations that require a strictly
/// positive amount reject zero at the call site with `InvalidAmount`.
///
/// # Example
/// ```
/// use versebank_core::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(30);
/// assert_eq!(a.checked_sub(&b), Some(Amount::new(70)));
///
/// // Subtraction below zero is rejected
/// assert_eq!(b.checked_sub(&a), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(0);

    /// Largest representable amount
    pub const MAX: Self = Self(u64::MAX);

    /// Create a new Amount from a raw value in the smallest unit.
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value in the smallest unit
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition - returns None if the sum exceeds `Amount::MAX`
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Checked subtraction - returns None if the result would be negative
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        self.0.checked_sub(other.0).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
