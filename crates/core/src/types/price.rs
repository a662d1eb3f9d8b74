//! Type-safe price representation.
//!
//! Prices are whole numbers of a single, currency-agnostic unit (the
//! storefront sells in one local currency and never does sub-unit math), so
//! the representation is an integer rather than a decimal.

use serde::{Deserialize, Serialize};

/// A price in whole currency-agnostic units.
///
/// Serializes transparently as a JSON number, matching the stored layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Get the underlying unit count.
    #[must_use]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Whether this price is zero or positive.
    ///
    /// Drafts with negative option prices are rejected at create time.
    #[must_use]
    pub const fn is_non_negative(&self) -> bool {
        self.0 >= 0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Price {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}
