//! Reshaping of raw Storefront API responses into domain types.
//!
//! Every paginated field goes through [`Connection::into_nodes`] and each entity
//! gets its own normalization rules (tax defaulting, derived paths, hidden
//! filtering, menu URL rewriting).
//!
//! [`Connection::into_nodes`]: crate::commerce::types::Connection::into_nodes

pub mod cart;
pub mod collections;
pub mod menu;
pub mod products;

#[cfg(test)]
pub(crate) mod fixtures;

pub use cart::reshape_cart;
pub use collections::{
    HIDDEN_COLLECTION_PREFIX, all_products_collection, is_hidden_collection, reshape_collection,
    reshape_collections,
};
pub use menu::{reshape_menu_item, rewrite_menu_url};
pub use products::{HIDDEN_PRODUCT_TAG, reshape_product, reshape_products};
