//! Topup Store data layer.
//!
//! A synchronous facade over a key-value persistence medium, providing
//! collection-style CRUD for the storefront's record types (products,
//! categories, orders, users, contact submissions), two singleton config
//! blobs (site config, admin credentials), and session handling for the
//! admin back office and end customers.
//!
//! # Architecture
//!
//! - [`kv`] - the [`KvStore`](kv::KvStore) backend trait with in-memory and
//!   file-backed implementations; backends enforce a per-key byte quota
//! - [`models`] - stored record types plus draft/patch types for writes
//! - [`policy`] - the [`CapacityPolicy`](policy::CapacityPolicy) that keeps
//!   product writes inside the quota (image capping, retention, reduced
//!   retry)
//! - [`repository`] - the [`Repository`](repository::Repository) facade
//!   itself
//!
//! # Example
//!
//! ```
//! use topup_store::kv::MemoryKv;
//! use topup_store::repository::Repository;
//!
//! let mut repo = Repository::open(MemoryKv::new()).expect("seed");
//! // Opening seeds the default catalog.
//! assert_eq!(repo.categories().len(), 2);
//! assert_eq!(repo.products().len(), 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod keys;
pub mod kv;
pub mod models;
pub mod policy;
pub mod repository;
pub mod seed;
pub mod session;

pub use error::{StoreError, ValidationError};
pub use kv::{FileKv, KvError, KvStore, MemoryKv};
pub use policy::{CapacityPolicy, PLACEHOLDER_IMAGE};
pub use repository::Repository;
