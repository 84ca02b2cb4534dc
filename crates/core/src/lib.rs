//! Commerce Bridge Core - Shared types library.
//!
//! This crate provides common types used across all Commerce Bridge components:
//! - `storefront` - Storefront API adapter (transport, reshaping, domain operations)
//! - `cli` - Command-line tool for running storefront operations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps it
//! lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Paginated connections, money, and newtype wrappers for IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
