//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! cb-cli cart create
//! cb-cli cart get gid://shopify/Cart/abc
//! cb-cli cart add gid://shopify/Cart/abc -v gid://shopify/ProductVariant/1 -q 2
//! cb-cli cart update gid://shopify/Cart/abc -l gid://shopify/CartLine/1 -v gid://shopify/ProductVariant/1 -q 3
//! cb-cli cart remove gid://shopify/Cart/abc gid://shopify/CartLine/1
//! ```

use commerce_bridge_storefront::commerce::{
    CartId, CartLineId, CartLineInput, CartLineUpdateInput, StorefrontClient, VariantId,
};

use super::{CommandError, print_json};

/// Create an empty cart.
pub async fn create(client: &StorefrontClient) -> Result<(), CommandError> {
    let cart = client.create_cart().await?;
    tracing::info!(cart_id = %cart.id, "Created cart");
    print_json(&cart)
}

/// Show a cart.
pub async fn get(client: &StorefrontClient, cart_id: String) -> Result<(), CommandError> {
    let cart = client.get_cart(&CartId::new(cart_id)).await?;
    print_json(&cart)
}

/// Add a single variant to a cart.
pub async fn add(
    client: &StorefrontClient,
    cart_id: String,
    variant: String,
    quantity: i64,
) -> Result<(), CommandError> {
    let lines = vec![CartLineInput {
        merchandise_id: VariantId::new(variant),
        quantity,
    }];
    let cart = client.add_to_cart(&CartId::new(cart_id), lines).await?;
    print_json(&cart)
}

/// Remove lines from a cart.
pub async fn remove(
    client: &StorefrontClient,
    cart_id: String,
    line_ids: Vec<String>,
) -> Result<(), CommandError> {
    let line_ids = line_ids.into_iter().map(CartLineId::new).collect();
    let cart = client
        .remove_from_cart(&CartId::new(cart_id), line_ids)
        .await?;
    print_json(&cart)
}

/// Update a single cart line.
pub async fn update(
    client: &StorefrontClient,
    cart_id: String,
    line: String,
    variant: String,
    quantity: i64,
) -> Result<(), CommandError> {
    let lines = vec![CartLineUpdateInput {
        id: CartLineId::new(line),
        merchandise_id: VariantId::new(variant),
        quantity,
    }];
    let cart = client.update_cart(&CartId::new(cart_id), lines).await?;
    print_json(&cart)
}
