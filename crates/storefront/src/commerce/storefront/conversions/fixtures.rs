//! Raw response builders shared by the reshaping tests.

use crate::commerce::types::{
    CartId, CartItemCost, CartLineId, Connection, Image, Money, PriceRange, ProductId,
    ProductVariant, SelectedOption, Seo, VariantId,
};

use super::super::queries::{
    RawCart, RawCartCost, RawCartItem, RawCollection, RawMerchandise, RawProduct,
};

fn image(url: &str) -> Image {
    Image {
        url: url.to_string(),
        alt_text: None,
        width: Some(800),
        height: Some(600),
    }
}

fn variant(handle: &str, title: &str) -> ProductVariant {
    ProductVariant {
        id: VariantId::new(format!("gid://shopify/ProductVariant/{handle}-{title}")),
        title: title.to_string(),
        available_for_sale: true,
        selected_options: vec![SelectedOption {
            name: "Size".to_string(),
            value: title.to_string(),
        }],
        price: Money::new("25.00", "USD"),
    }
}

pub fn raw_product(handle: &str) -> RawProduct {
    raw_product_with(handle, &[])
}

pub fn raw_product_with(handle: &str, tags: &[&str]) -> RawProduct {
    RawProduct {
        id: ProductId::new(format!("gid://shopify/Product/{handle}")),
        handle: handle.to_string(),
        available_for_sale: true,
        title: handle.to_uppercase(),
        description: String::new(),
        description_html: String::new(),
        options: vec![],
        price_range: PriceRange {
            max_variant_price: Money::new("25.00", "USD"),
            min_variant_price: Money::new("25.00", "USD"),
        },
        variants: [variant(handle, "Small"), variant(handle, "Large")]
            .into_iter()
            .collect(),
        featured_image: Some(image(&format!("https://cdn.example/{handle}-front.jpg"))),
        images: [
            image(&format!("https://cdn.example/{handle}-front.jpg")),
            image(&format!("https://cdn.example/{handle}-back.jpg")),
        ]
        .into_iter()
        .collect(),
        seo: Seo::default(),
        tags: tags.iter().map(ToString::to_string).collect(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

pub fn raw_collection(handle: &str) -> RawCollection {
    RawCollection {
        handle: handle.to_string(),
        title: handle.to_uppercase(),
        description: String::new(),
        seo: Seo::default(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

pub fn raw_cart_item(line: &str, product: RawProduct) -> RawCartItem {
    RawCartItem {
        id: CartLineId::new(format!("gid://shopify/CartLine/{line}")),
        quantity: 1,
        cost: CartItemCost {
            total_amount: Money::new("25.00", "USD"),
        },
        merchandise: RawMerchandise {
            id: VariantId::new(format!("gid://shopify/ProductVariant/{line}")),
            title: "Small".to_string(),
            selected_options: vec![],
            product,
        },
    }
}

pub fn raw_cart(tax: Option<Money>, lines: Vec<RawCartItem>) -> RawCart {
    let total_quantity = i64::try_from(lines.len()).unwrap_or(i64::MAX);
    RawCart {
        id: CartId::new("gid://shopify/Cart/1"),
        checkout_url: "https://store.example/cart/c/1".to_string(),
        cost: RawCartCost {
            subtotal_amount: Money::new("50.00", "USD"),
            total_amount: Money::new("50.00", "USD"),
            total_tax_amount: tax,
        },
        lines: lines.into_iter().collect::<Connection<_>>(),
        total_quantity,
    }
}
