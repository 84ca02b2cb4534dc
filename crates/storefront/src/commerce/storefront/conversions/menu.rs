//! Menu reshaping.

use crate::commerce::types::MenuItem;

use super::super::queries::RawMenuItem;

/// Reshape a menu entry, turning its absolute store URL into a storefront path.
#[must_use]
pub fn reshape_menu_item(item: RawMenuItem, store_origin: &str) -> MenuItem {
    MenuItem {
        path: rewrite_menu_url(&item.url, store_origin),
        title: item.title,
    }
}

/// Rewrite a store URL into a storefront path.
///
/// Strips the store origin, maps the first `/collections` segment to
/// `/search` and removes the first `/pages` segment. URLs pointing elsewhere
/// keep everything except those segment rewrites.
#[must_use]
pub fn rewrite_menu_url(url: &str, store_origin: &str) -> String {
    url.replacen(store_origin, "", 1)
        .replacen("/collections", "/search", 1)
        .replacen("/pages", "", 1)
}
