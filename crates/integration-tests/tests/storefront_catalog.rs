//! Integration tests for collections, products, menus and pages against a
//! mock Storefront API.

use commerce_bridge_integration_tests::{
    client_for, collection_json, collections_json, data, graphql_path, mock_operation,
    product_json, products_json,
};
use commerce_bridge_storefront::commerce::storefront::conversions::HIDDEN_PRODUCT_TAG;
use commerce_bridge_storefront::commerce::{ProductId, ProductSortKey, ProductsQuery};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request};

// =============================================================================
// Collections
// =============================================================================

#[tokio::test]
async fn test_get_collections_lists_all_first_without_hidden() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetCollections",
        data(json!({
            "collections": collections_json(&["shoes", "hidden-homepage", "hats", "hiddenstaff"])
        })),
    )
    .await;

    let collections = client_for(&server)
        .get_collections()
        .await
        .expect("collections load");

    let handles: Vec<&str> = collections.iter().map(|c| c.handle.as_str()).collect();
    assert_eq!(handles, vec!["", "shoes", "hats"]);

    let all = &collections[0];
    assert_eq!(all.title, "All");
    assert_eq!(all.description, "All products");
    assert_eq!(all.path, "/search");
    assert_eq!(all.seo.title.as_deref(), Some("All"));
    assert!(!all.updated_at.is_empty());

    assert_eq!(collections[1].path, "/search/shoes");
    assert_eq!(
        collections.iter().filter(|c| c.handle.is_empty()).count(),
        1
    );
}

#[tokio::test]
async fn test_get_collections_skips_empty_handles_and_null_nodes() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetCollections",
        data(json!({
            "collections": {
                "edges": [
                    { "node": collection_json("shoes") },
                    { "node": collection_json("") },
                    { "node": null }
                ]
            }
        })),
    )
    .await;

    let collections = client_for(&server)
        .get_collections()
        .await
        .expect("collections load");

    let handles: Vec<&str> = collections.iter().map(|c| c.handle.as_str()).collect();
    assert_eq!(handles, vec!["", "shoes"]);
    assert_eq!(collections[0].title, "All");
}

#[tokio::test]
async fn test_get_collection() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetCollection",
        data(json!({ "collection": collection_json("shoes") })),
    )
    .await;

    let collection = client_for(&server)
        .get_collection("shoes")
        .await
        .expect("collection request succeeds")
        .expect("collection exists");

    assert_eq!(collection.path, "/search/shoes");
}

#[tokio::test]
async fn test_get_collection_keeps_hidden_handles() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetCollection",
        data(json!({ "collection": collection_json("hidden-homepage") })),
    )
    .await;

    let collection = client_for(&server)
        .get_collection("hidden-homepage")
        .await
        .expect("collection request succeeds");

    assert!(collection.is_some());
}

#[tokio::test]
async fn test_get_collection_not_found() {
    let server = MockServer::start().await;
    mock_operation(&server, "GetCollection", data(json!({ "collection": null }))).await;

    let collection = client_for(&server)
        .get_collection("missing")
        .await
        .expect("missing collection is not an error");

    assert!(collection.is_none());
}

#[tokio::test]
async fn test_get_collection_products_missing_collection_is_empty() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetCollectionProducts",
        data(json!({ "collection": null })),
    )
    .await;

    let products = client_for(&server)
        .get_collection_products("missing-handle")
        .await
        .expect("missing collection is not an error");

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_get_collection_products_excludes_hidden() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetCollectionProducts",
        data(json!({
            "collection": {
                "products": products_json(vec![
                    product_json("tee", &[]),
                    product_json("secret", &[HIDDEN_PRODUCT_TAG]),
                ])
            }
        })),
    )
    .await;

    let products = client_for(&server)
        .get_collection_products("shirts")
        .await
        .expect("collection products load");

    let handles: Vec<&str> = products.iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles, vec!["tee"]);
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_get_products_excludes_hidden_but_get_product_includes_it() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetProducts",
        data(json!({
            "products": products_json(vec![
                product_json("tee", &["summer"]),
                product_json("secret", &["summer", HIDDEN_PRODUCT_TAG]),
                product_json("mug", &[]),
            ])
        })),
    )
    .await;
    mock_operation(
        &server,
        "GetProduct",
        data(json!({ "product": product_json("secret", &[HIDDEN_PRODUCT_TAG]) })),
    )
    .await;

    let client = client_for(&server);

    let products = client
        .get_products(ProductsQuery::default())
        .await
        .expect("products load");
    let handles: Vec<&str> = products.iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles, vec!["tee", "mug"]);

    let product = client
        .get_product("secret")
        .await
        .expect("product request succeeds")
        .expect("hidden product is returned by handle");
    assert_eq!(product.handle, "secret");
    assert_eq!(product.variants.len(), 1);
    assert_eq!(product.images.len(), 1);
}

#[tokio::test]
async fn test_get_product_not_found() {
    let server = MockServer::start().await;
    mock_operation(&server, "GetProduct", data(json!({ "product": null }))).await;

    let product = client_for(&server)
        .get_product("missing")
        .await
        .expect("missing product is not an error");

    assert!(product.is_none());
}

#[tokio::test]
async fn test_get_products_skips_null_nodes() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetProducts",
        data(json!({
            "products": products_json(vec![product_json("tee", &[]), Value::Null])
        })),
    )
    .await;

    let products = client_for(&server)
        .get_products(ProductsQuery::default())
        .await
        .expect("a null node does not fail the listing");

    let handles: Vec<&str> = products.iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles, vec!["tee"]);
}

#[tokio::test]
async fn test_get_collection_products_skips_null_nodes() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetCollectionProducts",
        data(json!({
            "collection": { "products": products_json(vec![Value::Null, product_json("tee", &[])]) }
        })),
    )
    .await;

    let products = client_for(&server)
        .get_collection_products("shirts")
        .await
        .expect("a null node does not fail the listing");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].handle, "tee");
}

fn variables_of(request: &Request) -> Value {
    request
        .body_json::<Value>()
        .map(|body| body["variables"].clone())
        .unwrap_or(Value::Null)
}

#[tokio::test]
async fn test_get_products_omits_unset_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(|request: &Request| variables_of(request) == json!({ "query": "shirt" }))
        .respond_with(data(json!({ "products": products_json(vec![]) })))
        .expect(1)
        .mount(&server)
        .await;

    let products = client_for(&server)
        .get_products(ProductsQuery {
            query: Some("shirt".to_string()),
            ..ProductsQuery::default()
        })
        .await
        .expect("products load");

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_get_products_sends_sort_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(|request: &Request| {
            variables_of(request) == json!({ "reverse": true, "sortKey": "PRICE" })
        })
        .respond_with(data(
            json!({ "products": products_json(vec![product_json("tee", &[])]) }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let products = client_for(&server)
        .get_products(ProductsQuery {
            query: None,
            reverse: Some(true),
            sort_key: Some(ProductSortKey::Price),
        })
        .await
        .expect("products load");

    assert_eq!(products.len(), 1);
}

#[tokio::test]
async fn test_get_product_recommendations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(graphql_path()))
        .and(body_partial_json(json!({
            "operationName": "GetProductRecommendations",
            "variables": { "productId": "gid://shopify/Product/tee" }
        })))
        .respond_with(data(json!({
            "productRecommendations": [
                product_json("mug", &[]),
                product_json("secret", &[HIDDEN_PRODUCT_TAG]),
            ]
        })))
        .mount(&server)
        .await;

    let products = client_for(&server)
        .get_product_recommendations(&ProductId::new("gid://shopify/Product/tee"))
        .await
        .expect("recommendations load");

    let handles: Vec<&str> = products.iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles, vec!["mug"]);
}

#[tokio::test]
async fn test_get_product_recommendations_null_is_empty() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetProductRecommendations",
        data(json!({ "productRecommendations": null })),
    )
    .await;

    let products = client_for(&server)
        .get_product_recommendations(&ProductId::new("gid://shopify/Product/missing"))
        .await
        .expect("missing recommendations are not an error");

    assert!(products.is_empty());
}

#[tokio::test]
async fn test_get_product_recommendations_skips_null_entries() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetProductRecommendations",
        data(json!({ "productRecommendations": [product_json("tee", &[]), null] })),
    )
    .await;

    let products = client_for(&server)
        .get_product_recommendations(&ProductId::new("gid://shopify/Product/mug"))
        .await
        .expect("a null entry does not fail the listing");

    let handles: Vec<&str> = products.iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles, vec!["tee"]);
}

// =============================================================================
// Menus and Pages
// =============================================================================

#[tokio::test]
async fn test_get_menu_rewrites_store_urls() {
    let server = MockServer::start().await;
    let origin = server.uri();
    mock_operation(
        &server,
        "GetMenu",
        data(json!({
            "menu": {
                "items": [
                    { "title": "Shoes", "url": format!("{origin}/collections/shoes") },
                    { "title": "About", "url": format!("{origin}/pages/about") },
                    { "title": "Blog", "url": "https://blog.example/posts" }
                ]
            }
        })),
    )
    .await;

    let items = client_for(&server)
        .get_menu("main-menu")
        .await
        .expect("menu loads");

    let paths: Vec<&str> = items.iter().map(|item| item.path.as_str()).collect();
    assert_eq!(paths, vec!["/search/shoes", "/about", "https://blog.example/posts"]);
    assert_eq!(items[0].title, "Shoes");
}

#[tokio::test]
async fn test_get_menu_not_found_is_empty() {
    let server = MockServer::start().await;
    mock_operation(&server, "GetMenu", data(json!({ "menu": null }))).await;

    let items = client_for(&server)
        .get_menu("missing")
        .await
        .expect("missing menu is not an error");

    assert!(items.is_empty());
}

fn page_json(handle: &str) -> Value {
    json!({
        "id": format!("gid://shopify/Page/{handle}"),
        "title": handle.to_uppercase(),
        "handle": handle,
        "body": "<p>Hello</p>",
        "bodySummary": "Hello",
        "seo": { "title": null, "description": null },
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    })
}

#[tokio::test]
async fn test_get_page() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetPage",
        data(json!({ "pageByHandle": page_json("about") })),
    )
    .await;

    let page = client_for(&server)
        .get_page("about")
        .await
        .expect("page request succeeds")
        .expect("page exists");

    assert_eq!(page.handle, "about");
    assert_eq!(page.body_summary, "Hello");
}

#[tokio::test]
async fn test_get_page_not_found() {
    let server = MockServer::start().await;
    mock_operation(&server, "GetPage", data(json!({ "pageByHandle": null }))).await;

    let page = client_for(&server)
        .get_page("missing")
        .await
        .expect("missing page is not an error");

    assert!(page.is_none());
}

#[tokio::test]
async fn test_get_pages() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "GetPages",
        data(json!({
            "pages": {
                "edges": [
                    { "node": page_json("about") },
                    { "node": null },
                    { "node": page_json("faq") }
                ]
            }
        })),
    )
    .await;

    let pages = client_for(&server).get_pages().await.expect("pages load");

    let handles: Vec<&str> = pages.iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles, vec!["about", "faq"]);
}
