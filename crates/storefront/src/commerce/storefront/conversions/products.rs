//! Product reshaping and visibility filtering.

use crate::commerce::types::{HiddenProducts, Product};

use super::super::queries::RawProduct;

/// Tag marking a product as hidden from listings, search and recommendations.
pub const HIDDEN_PRODUCT_TAG: &str = "nextjs-frontend-hidden";

/// Reshape a single product, applying the hidden-product policy.
///
/// Returns `None` when the product is absent, or when `hidden` is
/// [`HiddenProducts::Exclude`] and the product carries [`HIDDEN_PRODUCT_TAG`].
/// With [`HiddenProducts::Include`] only an absent product yields `None`.
#[must_use]
pub fn reshape_product(product: Option<RawProduct>, hidden: HiddenProducts) -> Option<Product> {
    let product = product?;

    if hidden == HiddenProducts::Exclude && is_hidden(&product) {
        return None;
    }

    Some(flatten_product(product))
}

/// Reshape a list of products, dropping absent and hidden entries.
///
/// Accepts both `Vec<RawProduct>` and `Vec<Option<RawProduct>>`. Order is
/// preserved.
pub fn reshape_products<I, P>(products: I) -> Vec<Product>
where
    I: IntoIterator<Item = P>,
    P: Into<Option<RawProduct>>,
{
    products
        .into_iter()
        .filter_map(|product| reshape_product(product.into(), HiddenProducts::Exclude))
        .collect()
}

fn is_hidden(product: &RawProduct) -> bool {
    product.tags.iter().any(|tag| tag == HIDDEN_PRODUCT_TAG)
}

/// Unwrap the image and variant connections without any filtering.
pub(super) fn flatten_product(product: RawProduct) -> Product {
    Product {
        id: product.id,
        handle: product.handle,
        available_for_sale: product.available_for_sale,
        title: product.title,
        description: product.description,
        description_html: product.description_html,
        options: product.options,
        price_range: product.price_range,
        featured_image: product.featured_image,
        seo: product.seo,
        tags: product.tags,
        updated_at: product.updated_at,
        variants: product.variants.into_nodes(),
        images: product.images.into_nodes(),
    }
}
