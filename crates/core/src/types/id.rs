//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are prefixed
//! millisecond tokens (`prod-1714070000000`) so stored data stays readable
//! and ordering roughly follows creation time.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - A `PREFIX` constant and `generate()` for stamping new tokens
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use topup_core::{define_id, IdGenerator};
/// define_id!(WidgetId, "widget");
///
/// let ids = IdGenerator::new();
/// let id = WidgetId::generate(&ids);
/// assert!(id.as_str().starts_with("widget-"));
///
/// // Fixed tokens (e.g. seed data) are plain strings:
/// let seeded = WidgetId::new("widget-1");
/// assert_ne!(id, seeded);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Token prefix for this entity type.
            pub const PREFIX: &'static str = $prefix;

            /// Create an ID from an existing token.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Stamp a fresh ID from the generator's next millisecond token.
            #[must_use]
            pub fn generate(ids: &$crate::IdGenerator) -> Self {
                Self(format!("{}-{}", $prefix, ids.next_token()))
            }

            /// Get the token as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner token.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId, "prod");
define_id!(OptionId, "opt");
define_id!(CategoryId, "cat");
define_id!(OrderId, "order");
define_id!(UserId, "user");
define_id!(SubmissionId, "contact");

/// Monotonic millisecond token source for ID generation.
///
/// Tokens are wall-clock milliseconds, bumped past the previous token when
/// two generations land in the same millisecond. Within one process a token
/// is never handed out twice, which keeps IDs unique even in tight loops.
#[derive(Debug)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Create a generator starting from the current wall clock.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    /// Next unique millisecond token.
    pub fn next_token(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(if now > last { now } else { last + 1 })
            }) {
            Ok(prev) | Err(prev) => {
                if now > prev {
                    now
                } else {
                    prev + 1
                }
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_prefix() {
        let ids = IdGenerator::new();
        let id = ProductId::generate(&ids);
        assert!(id.as_str().starts_with("prod-"));
    }

    #[test]
    fn test_tokens_are_unique_in_tight_loop() {
        let ids = IdGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_token()));
        }
    }

    #[test]
    fn test_tokens_are_monotonic() {
        let ids = IdGenerator::new();
        let a = ids.next_token();
        let b = ids.next_token();
        assert!(b > a);
    }

    #[test]
    fn test_serde_transparent() {
        let id = CategoryId::new("cat-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cat-1\"");

        let parsed: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_fixed_seed_tokens() {
        let product = ProductId::new("prod-1");
        assert_eq!(product.as_str(), "prod-1");
        assert_eq!(product.to_string(), "prod-1");
    }
}
