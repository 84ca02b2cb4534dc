//! Integration tests for cart operations against a mock Storefront API.

use commerce_bridge_integration_tests::{cart_json, client_for, data, graphql_path, mock_operation};
use commerce_bridge_storefront::commerce::storefront::queries::CreateCart;
use commerce_bridge_storefront::commerce::{
    CartId, CartLineId, CartLineInput, CartLineUpdateInput, CommerceError, Money, VariantId,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer};

fn cart_id() -> CartId {
    CartId::new("gid://shopify/Cart/1")
}

// =============================================================================
// Reads
// =============================================================================

#[tokio::test]
async fn test_get_cart_not_found() {
    let server = MockServer::start().await;
    mock_operation(&server, "GetCart", data(json!({ "cart": null }))).await;

    let cart = client_for(&server)
        .get_cart(&cart_id())
        .await
        .expect("missing cart is not an error");

    assert!(cart.is_none());
}

#[tokio::test]
async fn test_get_cart_flattens_lines_and_defaults_tax() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetCart",
        data(json!({ "cart": cart_json(None, &["tee", "mug"]) })),
    )
    .await;

    let cart = client_for(&server)
        .get_cart(&cart_id())
        .await
        .expect("cart request succeeds")
        .expect("cart exists");

    assert_eq!(cart.id, cart_id());
    assert_eq!(cart.total_quantity, 2);
    assert_eq!(cart.cost.total_tax_amount, Money::new("0.0", "USD"));

    let handles: Vec<&str> = cart
        .lines
        .iter()
        .map(|line| line.merchandise.product.handle.as_str())
        .collect();
    assert_eq!(handles, vec!["tee", "mug"]);
    assert_eq!(cart.lines[0].merchandise.product.images.len(), 1);
    assert_eq!(cart.lines[0].merchandise.product.variants.len(), 1);
}

#[tokio::test]
async fn test_get_cart_keeps_reported_tax() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetCart",
        data(json!({ "cart": cart_json(Some("2.50"), &["tee"]) })),
    )
    .await;

    let cart = client_for(&server)
        .get_cart(&cart_id())
        .await
        .expect("cart request succeeds")
        .expect("cart exists");

    assert_eq!(cart.cost.total_tax_amount, Money::new("2.50", "USD"));
}

#[tokio::test]
async fn test_get_cart_is_never_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(body_partial_json(json!({ "operationName": "GetCart" })))
        .respond_with(data(json!({ "cart": cart_json(None, &[]) })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get_cart(&cart_id()).await.expect("first read");
    client.get_cart(&cart_id()).await.expect("second read");
}

// =============================================================================
// Mutations
// =============================================================================

#[tokio::test]
async fn test_create_cart() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "CreateCart",
        data(json!({ "cartCreate": { "cart": cart_json(None, &[]) } })),
    )
    .await;

    let cart = client_for(&server)
        .create_cart()
        .await
        .expect("cart is created");

    assert!(cart.lines.is_empty());
    assert_eq!(cart.checkout_url, "https://store.example/cart/c/1");
}

#[tokio::test]
async fn test_create_cart_without_cart_is_unclassified() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "CreateCart",
        data(json!({ "cartCreate": { "cart": null } })),
    )
    .await;

    let err = client_for(&server)
        .create_cart()
        .await
        .expect_err("a mutation without a cart fails");

    assert!(matches!(err, CommerceError::Unclassified { .. }));
    assert_eq!(err.query(), CreateCart::DOCUMENT);
}

#[tokio::test]
async fn test_add_to_cart_sends_lines() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(body_partial_json(json!({
            "operationName": "AddToCart",
            "variables": {
                "cartId": "gid://shopify/Cart/1",
                "lines": [{ "merchandiseId": "gid://shopify/ProductVariant/tee", "quantity": 2 }]
            }
        })))
        .respond_with(data(
            json!({ "cartLinesAdd": { "cart": cart_json(None, &["tee"]) } }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let cart = client_for(&server)
        .add_to_cart(
            &cart_id(),
            vec![CartLineInput {
                merchandise_id: VariantId::new("gid://shopify/ProductVariant/tee"),
                quantity: 2,
            }],
        )
        .await
        .expect("line is added");

    assert_eq!(cart.lines.len(), 1);
}

#[tokio::test]
async fn test_remove_from_cart_sends_line_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(body_partial_json(json!({
            "operationName": "RemoveFromCart",
            "variables": { "cartId": "gid://shopify/Cart/1", "lineIds": ["gid://shopify/CartLine/1"] }
        })))
        .respond_with(data(
            json!({ "cartLinesRemove": { "cart": cart_json(None, &[]) } }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let cart = client_for(&server)
        .remove_from_cart(&cart_id(), vec![CartLineId::new("gid://shopify/CartLine/1")])
        .await
        .expect("line is removed");

    assert!(cart.lines.is_empty());
    assert_eq!(cart.total_quantity, 0);
}

#[tokio::test]
async fn test_update_cart_sends_lines() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(body_partial_json(json!({
            "operationName": "UpdateCartLines",
            "variables": {
                "cartId": "gid://shopify/Cart/1",
                "lines": [{
                    "id": "gid://shopify/CartLine/1",
                    "merchandiseId": "gid://shopify/ProductVariant/tee",
                    "quantity": 3
                }]
            }
        })))
        .respond_with(data(
            json!({ "cartLinesUpdate": { "cart": cart_json(None, &["tee"]) } }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let cart = client_for(&server)
        .update_cart(
            &cart_id(),
            vec![CartLineUpdateInput {
                id: CartLineId::new("gid://shopify/CartLine/1"),
                merchandise_id: VariantId::new("gid://shopify/ProductVariant/tee"),
                quantity: 3,
            }],
        )
        .await
        .expect("line is updated");

    assert_eq!(cart.lines.len(), 1);
}
