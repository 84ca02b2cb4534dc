//! Commerce Bridge storefront adapter.
//!
//! Typed access to a storefront GraphQL API: products, collections, carts,
//! menus and content pages, reshaped into flat domain values.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod commerce;
pub mod config;
