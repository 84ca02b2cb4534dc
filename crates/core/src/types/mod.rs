//! Core types for Commerce Bridge.
//!
//! This module provides the shared building blocks of the storefront domain
//! model: paginated connections, money, and type-safe IDs.

pub mod connection;
pub mod id;
pub mod money;

pub use connection::{Connection, Edge};
pub use id::*;
pub use money::{Money, MoneyError};
