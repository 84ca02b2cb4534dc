//! Collection and product commands.

use commerce_bridge_storefront::commerce::{ProductId, ProductsQuery, StorefrontClient};

use super::{CommandError, print_json};

/// Show a collection by handle.
pub async fn collection(client: &StorefrontClient, handle: &str) -> Result<(), CommandError> {
    print_json(&client.get_collection(handle).await?)
}

/// List the visible products of a collection.
pub async fn collection_products(
    client: &StorefrontClient,
    handle: &str,
) -> Result<(), CommandError> {
    print_json(&client.get_collection_products(handle).await?)
}

/// List collections.
pub async fn collections(client: &StorefrontClient) -> Result<(), CommandError> {
    print_json(&client.get_collections().await?)
}

/// Show a product by handle.
pub async fn product(client: &StorefrontClient, handle: &str) -> Result<(), CommandError> {
    print_json(&client.get_product(handle).await?)
}

/// Search and list products.
pub async fn products(client: &StorefrontClient, query: ProductsQuery) -> Result<(), CommandError> {
    let products = client.get_products(query).await?;
    tracing::info!(count = products.len(), "Fetched products");
    print_json(&products)
}

/// List recommendations for a product.
pub async fn recommendations(
    client: &StorefrontClient,
    product_id: String,
) -> Result<(), CommandError> {
    print_json(
        &client
            .get_product_recommendations(&ProductId::new(product_id))
            .await?,
    )
}
