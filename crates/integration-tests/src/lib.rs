//! Integration tests for the Topup Store persistence layer.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p topup-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_lifecycle` - File persistence, wire layout, reset semantics
//! - `capacity` - Quota-aware degradation of product writes
//! - `admin_auth` - Admin credentials and session lifecycle
//! - `storefront_flow` - End-to-end catalog, account, and order flows
//!
//! The tests themselves live under `tests/`; this crate intentionally
//! exports nothing.

#![cfg_attr(not(test), forbid(unsafe_code))]
