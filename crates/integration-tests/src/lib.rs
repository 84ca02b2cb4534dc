//! Integration test harness for Commerce Bridge.
//!
//! Tests run the storefront client against a `wiremock` server standing in
//! for the Storefront GraphQL endpoint; no network access or real store is
//! needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p commerce-bridge-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let server = MockServer::start().await;
//! mock_operation(&server, "GetProduct", data(json!({ "product": product_json("tee", &[]) })))
//!     .await;
//!
//! let client = client_for(&server);
//! let product = client.get_product("tee").await?;
//! ```

use std::time::Duration;

use commerce_bridge_storefront::commerce::StorefrontClient;
use commerce_bridge_storefront::config::{DEFAULT_API_VERSION, StorefrontConfig};
use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Access token configured on every test client.
pub const TEST_ACCESS_TOKEN: &str = "8c1f4e2ab97d3065fa4c2e81d7b09e3f";

/// Path of the GraphQL endpoint for the default API version.
#[must_use]
pub fn graphql_path() -> String {
    format!("/api/{DEFAULT_API_VERSION}/graphql.json")
}

/// Build a client pointed at the mock server.
///
/// # Panics
///
/// Panics if the mock server URI is not a valid store URL.
#[must_use]
pub fn client_for(server: &MockServer) -> StorefrontClient {
    let config = StorefrontConfig::new(&server.uri(), SecretString::from(TEST_ACCESS_TOKEN))
        .expect("mock server URI is a valid store URL")
        .with_revalidate(Duration::from_secs(60));
    StorefrontClient::new(&config)
}

/// Respond to one named operation with the given template.
pub async fn mock_operation(server: &MockServer, operation: &str, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(body_partial_json(json!({ "operationName": operation })))
        .respond_with(response)
        .mount(server)
        .await;
}

/// A 200 response carrying `data`.
#[must_use]
pub fn data(value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": value }))
}

/// A response carrying GraphQL errors.
#[must_use]
pub fn errors(status: u16, errors: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({ "errors": errors }))
}

fn connection(nodes: Vec<Value>) -> Value {
    let edges: Vec<Value> = nodes.into_iter().map(|node| json!({ "node": node })).collect();
    json!({ "edges": edges })
}

fn money(amount: &str) -> Value {
    json!({ "amount": amount, "currencyCode": "USD" })
}

fn image(url: &str) -> Value {
    json!({ "url": url, "altText": null, "width": 800, "height": 600 })
}

/// A product as the API returns it.
#[must_use]
pub fn product_json(handle: &str, tags: &[&str]) -> Value {
    json!({
        "id": format!("gid://shopify/Product/{handle}"),
        "handle": handle,
        "availableForSale": true,
        "title": handle.to_uppercase(),
        "description": "",
        "descriptionHtml": "",
        "options": [{ "id": "gid://shopify/ProductOption/1", "name": "Size", "values": ["Small"] }],
        "priceRange": { "maxVariantPrice": money("25.00"), "minVariantPrice": money("25.00") },
        "variants": connection(vec![json!({
            "id": format!("gid://shopify/ProductVariant/{handle}"),
            "title": "Small",
            "availableForSale": true,
            "selectedOptions": [{ "name": "Size", "value": "Small" }],
            "price": money("25.00")
        })]),
        "featuredImage": image(&format!("https://cdn.example/{handle}.jpg")),
        "images": connection(vec![image(&format!("https://cdn.example/{handle}.jpg"))]),
        "seo": { "title": null, "description": null },
        "tags": tags,
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

/// A product connection as the API returns it.
#[must_use]
pub fn products_json(products: Vec<Value>) -> Value {
    connection(products)
}

/// A collection as the API returns it.
#[must_use]
pub fn collection_json(handle: &str) -> Value {
    json!({
        "handle": handle,
        "title": handle.to_uppercase(),
        "description": "",
        "seo": { "title": null, "description": null },
        "updatedAt": "2024-01-01T00:00:00Z"
    })
}

/// A collection connection as the API returns it.
#[must_use]
pub fn collections_json(handles: &[&str]) -> Value {
    connection(handles.iter().map(|handle| collection_json(handle)).collect())
}

/// A cart with one line per product handle, as the API returns it.
#[must_use]
pub fn cart_json(tax: Option<&str>, product_handles: &[&str]) -> Value {
    let lines: Vec<Value> = product_handles
        .iter()
        .enumerate()
        .map(|(index, handle)| {
            json!({
                "id": format!("gid://shopify/CartLine/{}", index + 1),
                "quantity": 1,
                "cost": { "totalAmount": money("25.00") },
                "merchandise": {
                    "id": format!("gid://shopify/ProductVariant/{handle}"),
                    "title": "Small",
                    "selectedOptions": [{ "name": "Size", "value": "Small" }],
                    "product": product_json(handle, &[])
                }
            })
        })
        .collect();

    json!({
        "id": "gid://shopify/Cart/1",
        "checkoutUrl": "https://store.example/cart/c/1",
        "cost": {
            "subtotalAmount": money("25.00"),
            "totalAmount": money("25.00"),
            "totalTaxAmount": tax.map(money)
        },
        "lines": connection(lines),
        "totalQuantity": product_handles.len()
    })
}
