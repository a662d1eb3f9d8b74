//! Error taxonomy for the data layer.
//!
//! Three failure classes surface to callers: validation failures on create,
//! backend storage failures, and quota exhaustion that survives the
//! degradation retry. Corrupt stored values are *not* errors - reads log a
//! warning and recover with the empty collection.

use thiserror::Error;

use topup_core::{OrderId, OrderStatus};

use crate::kv::KvError;

/// Errors surfaced by [`Repository`](crate::repository::Repository)
/// operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A create rejected its input; carries the first violated rule.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The backend refused a write and the degradation retry also failed.
    #[error("storage quota exhausted; clear stored data or use smaller images")]
    StorageExhausted,

    /// Backend storage failure on a path with no degradation policy.
    #[error("storage error: {0}")]
    Storage(#[from] KvError),

    /// A record failed to serialize before the write.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Rules checked on create operations, first violation wins.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Product title is empty.
    #[error("product title is required")]
    MissingTitle,

    /// Product category reference is empty.
    #[error("product category is required")]
    MissingCategory,

    /// Product has no purchase options.
    #[error("at least one product option is required")]
    NoOptions,

    /// A product option has an empty name.
    #[error("product option {index} needs a name")]
    OptionMissingName {
        /// Zero-based position in the draft's option list.
        index: usize,
    },

    /// A product option has a negative price.
    #[error("product option {index} has a negative price")]
    OptionNegativePrice {
        /// Zero-based position in the draft's option list.
        index: usize,
    },

    /// A user with this email is already registered.
    #[error("an account with this email already exists")]
    EmailTaken,

    /// Admin credential update with an empty username or password.
    #[error("admin username and password are both required")]
    MissingAdminCredentials,

    /// Explicit status transition out of a terminal state, or to pending.
    #[error("order {id} cannot move from {from} to {to}")]
    IllegalStatusTransition {
        /// Order being transitioned.
        id: OrderId,
        /// Status the order currently holds.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
    },
}
