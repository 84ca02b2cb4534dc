//! Storefront API client implementation.
//!
//! Requests are built from hand-written `graphql_client` operations and sent
//! with `reqwest` 0.13. Successful responses of non-cart operations are cached
//! with `moka` for the configured revalidation window (15 minutes by default).

mod cache;
pub mod conversions;
pub mod queries;

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use graphql_client::{GraphQLQuery, Response};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::commerce::{CommerceError, DEFAULT_ERROR_STATUS};
use crate::commerce::types::{
    Cart, CartId, CartLineId, CartLineInput, CartLineUpdateInput, Collection, HiddenProducts,
    MenuItem, Page, Product, ProductId, ProductsQuery,
};
use crate::config::StorefrontConfig;

pub use cache::CacheMode;
use cache::{CachedResponse, ResponseCache};
use conversions::{
    all_products_collection, is_hidden_collection, reshape_cart, reshape_collection,
    reshape_collections, reshape_menu_item, reshape_product, reshape_products,
};
use queries::{
    AddToCart, CartPayload, CreateCart, GetCart, GetCollection, GetCollectionProducts,
    GetCollections, GetMenu, GetPage, GetPages, GetProduct, GetProductRecommendations,
    GetProducts, HandleVariables, NoVariables, RemoveFromCart, UpdateCartLines,
    add_to_cart, get_cart, get_product_recommendations, remove_from_cart, update_cart_lines,
};

/// Header carrying the storefront access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Longest response excerpt written to logs.
const LOG_BODY_LIMIT: usize = 500;

/// Longest response excerpt carried in an error message.
const ERROR_BODY_LIMIT: usize = 200;

// =============================================================================
// Request / Response Types
// =============================================================================

/// Decoded response together with the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T> {
    /// HTTP status of the response (the original status for cache hits).
    pub status: u16,
    /// Decoded `data` payload.
    pub body: T,
}

/// Per-request options for [`StorefrontClient::execute`].
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Extra headers; these override the default headers on conflict.
    pub headers: HeaderMap,
    /// Cache interaction for this request.
    pub cache: CacheMode,
}

impl FetchOptions {
    /// Options for a request that bypasses the cache.
    #[must_use]
    pub fn no_store() -> Self {
        Self {
            headers: HeaderMap::new(),
            cache: CacheMode::NoStore,
        }
    }
}

// =============================================================================
// StorefrontClient
// =============================================================================

/// Client for the Storefront API.
///
/// Cheap to clone; clones share the HTTP connection pool and the response
/// cache.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    store_origin: String,
    access_token: SecretString,
    cache: ResponseCache,
}

impl std::fmt::Debug for StorefrontClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontClient")
            .field("endpoint", &self.inner.endpoint)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint(),
                store_origin: config.store_origin(),
                access_token: config.access_token.clone(),
                cache: cache::response_cache(config.revalidate),
            }),
        }
    }

    /// GraphQL endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Execute a GraphQL operation.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Api`] for transport failures and API-reported
    /// errors (first error only), and [`CommerceError::Unclassified`] for
    /// responses that cannot be interpreted.
    pub async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        options: FetchOptions,
    ) -> Result<Envelope<Q::ResponseData>, CommerceError> {
        let request_body = Q::build_query(variables);
        let query = request_body.query;
        let payload = serde_json::to_string(&request_body)
            .map_err(|e| CommerceError::unclassified(e, query))?;

        let key = options
            .cache
            .uses_cache()
            .then(|| cache_key(&payload, &options.headers));

        if let Some(key) = &key
            && let Some(cached) = self.inner.cache.get(key).await
        {
            debug!(operation = request_body.operation_name, "Cache hit");
            let body = decode_response(cached.status, &cached.body, query)?;
            return Ok(Envelope {
                status: cached.status,
                body,
            });
        }

        let (status, text) = self.send(payload, options.headers, query).await?;
        let body = decode_response(status, &text, query)?;

        if let Some(key) = key
            && is_success(status)
        {
            self.inner
                .cache
                .insert(
                    key,
                    CachedResponse {
                        status,
                        body: Arc::from(text),
                    },
                )
                .await;
        }

        Ok(Envelope { status, body })
    }

    /// POST a serialized request and read the raw response body.
    async fn send(
        &self,
        payload: String,
        headers: HeaderMap,
        query: &'static str,
    ) -> Result<(u16, String), CommerceError> {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCESS_TOKEN_HEADER, self.inner.access_token.expose_secret())
            .headers(headers)
            .body(payload)
            .send()
            .await
            .map_err(|e| CommerceError::from_transport(&e, query))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CommerceError::from_transport(&e, query))?;

        if !status.is_success() {
            error!(
                status = %status,
                body = %excerpt(&text, LOG_BODY_LIMIT),
                "Storefront API returned non-success status"
            );
        }

        Ok((status.as_u16(), text))
    }

    /// Run a cart mutation and reshape the cart it returns.
    async fn mutate_cart<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
        document: &'static str,
        payload: impl FnOnce(Q::ResponseData) -> Option<CartPayload>,
    ) -> Result<Cart, CommerceError> {
        let data = self
            .execute::<Q>(variables, FetchOptions::no_store())
            .await?
            .body;

        payload(data)
            .and_then(|payload| payload.cart)
            .map(reshape_cart)
            .ok_or_else(|| {
                CommerceError::unclassified("cart mutation returned no cart", document)
            })
    }

    // =========================================================================
    // Cart Methods
    // =========================================================================

    /// Create an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or no cart is returned.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<Cart, CommerceError> {
        self.mutate_cart::<CreateCart>(NoVariables {}, CreateCart::DOCUMENT, |data| {
            data.cart_create
        })
        .await
    }

    /// Add lines to a cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or no cart is returned.
    #[instrument(skip(self, lines), fields(cart_id = %cart_id))]
    pub async fn add_to_cart(
        &self,
        cart_id: &CartId,
        lines: Vec<CartLineInput>,
    ) -> Result<Cart, CommerceError> {
        let variables = add_to_cart::Variables {
            cart_id: cart_id.clone(),
            lines,
        };
        self.mutate_cart::<AddToCart>(variables, AddToCart::DOCUMENT, |data| data.cart_lines_add)
            .await
    }

    /// Remove lines from a cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or no cart is returned.
    #[instrument(skip(self, line_ids), fields(cart_id = %cart_id))]
    pub async fn remove_from_cart(
        &self,
        cart_id: &CartId,
        line_ids: Vec<CartLineId>,
    ) -> Result<Cart, CommerceError> {
        let variables = remove_from_cart::Variables {
            cart_id: cart_id.clone(),
            line_ids,
        };
        self.mutate_cart::<RemoveFromCart>(variables, RemoveFromCart::DOCUMENT, |data| {
            data.cart_lines_remove
        })
        .await
    }

    /// Update quantities or merchandise of existing cart lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or no cart is returned.
    #[instrument(skip(self, lines), fields(cart_id = %cart_id))]
    pub async fn update_cart(
        &self,
        cart_id: &CartId,
        lines: Vec<CartLineUpdateInput>,
    ) -> Result<Cart, CommerceError> {
        let variables = update_cart_lines::Variables {
            cart_id: cart_id.clone(),
            lines,
        };
        self.mutate_cart::<UpdateCartLines>(variables, UpdateCartLines::DOCUMENT, |data| {
            data.cart_lines_update
        })
        .await
    }

    /// Get a cart by ID. `None` when the cart does not exist (or expired).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(cart_id = %cart_id))]
    pub async fn get_cart(&self, cart_id: &CartId) -> Result<Option<Cart>, CommerceError> {
        let variables = get_cart::Variables {
            cart_id: cart_id.clone(),
        };
        let data = self
            .execute::<GetCart>(variables, FetchOptions::no_store())
            .await?
            .body;

        Ok(data.cart.map(reshape_cart))
    }

    // =========================================================================
    // Collection Methods
    // =========================================================================

    /// Get a collection by its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_collection(&self, handle: &str) -> Result<Option<Collection>, CommerceError> {
        let data = self
            .execute::<GetCollection>(handle_variables(handle), FetchOptions::default())
            .await?
            .body;

        Ok(reshape_collection(data.collection))
    }

    /// Get the visible products of a collection.
    ///
    /// An unknown collection yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_collection_products(&self, handle: &str) -> Result<Vec<Product>, CommerceError> {
        let data = self
            .execute::<GetCollectionProducts>(handle_variables(handle), FetchOptions::default())
            .await?
            .body;

        let Some(collection) = data.collection else {
            info!("No collection found for handle");
            return Ok(Vec::new());
        };

        Ok(reshape_products(collection.products.into_nodes()))
    }

    /// List collections for navigation.
    ///
    /// The synthetic "All" collection comes first and is the only entry with
    /// an empty handle; collections whose handle starts with `hidden` are
    /// left out.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_collections(&self) -> Result<Vec<Collection>, CommerceError> {
        let data = self
            .execute::<GetCollections>(NoVariables {}, FetchOptions::default())
            .await?
            .body;

        let updated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut collections = vec![all_products_collection(updated_at)];
        collections.extend(
            reshape_collections(data.collections.into_nodes())
                .into_iter()
                .filter(|collection| {
                    !collection.handle.is_empty() && !is_hidden_collection(collection)
                }),
        );

        Ok(collections)
    }

    // =========================================================================
    // Content Methods
    // =========================================================================

    /// Get the items of a navigation menu. Empty when the menu does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_menu(&self, handle: &str) -> Result<Vec<MenuItem>, CommerceError> {
        let data = self
            .execute::<GetMenu>(handle_variables(handle), FetchOptions::default())
            .await?
            .body;

        Ok(data
            .menu
            .map(|menu| {
                menu.items
                    .into_iter()
                    .map(|item| reshape_menu_item(item, &self.inner.store_origin))
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Get a content page by its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_page(&self, handle: &str) -> Result<Option<Page>, CommerceError> {
        let data = self
            .execute::<GetPage>(handle_variables(handle), FetchOptions::default())
            .await?
            .body;

        Ok(data.page_by_handle)
    }

    /// List content pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_pages(&self) -> Result<Vec<Page>, CommerceError> {
        let data = self
            .execute::<GetPages>(NoVariables {}, FetchOptions::default())
            .await?
            .body;

        Ok(data.pages.into_nodes().into_iter().flatten().collect())
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get a product by its handle.
    ///
    /// Hidden products are returned too; only listings filter them.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn get_product(&self, handle: &str) -> Result<Option<Product>, CommerceError> {
        let data = self
            .execute::<GetProduct>(handle_variables(handle), FetchOptions::default())
            .await?
            .body;

        Ok(reshape_product(data.product, HiddenProducts::Include))
    }

    /// Get visible recommendations for a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product_recommendations(
        &self,
        product_id: &ProductId,
    ) -> Result<Vec<Product>, CommerceError> {
        let variables = get_product_recommendations::Variables {
            product_id: product_id.clone(),
        };
        let data = self
            .execute::<GetProductRecommendations>(variables, FetchOptions::default())
            .await?
            .body;

        Ok(data
            .product_recommendations
            .map(reshape_products)
            .unwrap_or_default())
    }

    /// Search, sort and list visible products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self, query: ProductsQuery) -> Result<Vec<Product>, CommerceError> {
        let data = self
            .execute::<GetProducts>(query, FetchOptions::default())
            .await?
            .body;

        Ok(reshape_products(data.products.into_nodes()))
    }

    // =========================================================================
    // Cache Management
    // =========================================================================

    /// Drop every cached response.
    pub fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn handle_variables(handle: &str) -> HandleVariables {
    HandleVariables {
        handle: handle.to_string(),
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Cache key for a request: the serialized payload followed by the caller's
/// headers in sorted order.
fn cache_key(payload: &str, headers: &HeaderMap) -> String {
    let mut pairs: Vec<(&str, &HeaderValue)> = headers
        .iter()
        .map(|(name, value)| (name.as_str(), value))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.as_bytes().cmp(b.1.as_bytes())));

    let mut key = payload.to_string();
    for (name, value) in pairs {
        // Serialized JSON never contains a raw newline
        let _ = write!(key, "\n{name}:{value:?}");
    }
    key
}

fn excerpt(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Status of a GraphQL error: `extensions.status` when numeric, else the HTTP
/// status when it is not a success, else 500.
fn graphql_error_status(error: &graphql_client::Error, http_status: u16) -> u16 {
    error
        .extensions
        .as_ref()
        .and_then(|extensions| extensions.get("status"))
        .and_then(serde_json::Value::as_u64)
        .and_then(|status| u16::try_from(status).ok())
        .unwrap_or(if is_success(http_status) {
            DEFAULT_ERROR_STATUS
        } else {
            http_status
        })
}

/// Classify a raw response body and decode its `data`.
fn decode_response<T: DeserializeOwned>(
    status: u16,
    text: &str,
    query: &'static str,
) -> Result<T, CommerceError> {
    let response: Response<serde_json::Value> = match serde_json::from_str(text) {
        Ok(response) => response,
        Err(e) => {
            error!(
                error = %e,
                body = %excerpt(text, LOG_BODY_LIMIT),
                "Failed to parse Storefront GraphQL response"
            );
            if is_success(status) {
                return Err(CommerceError::unclassified(e, query));
            }
            return Err(http_error(status, text, query));
        }
    };

    if let Some(first) = response.errors.and_then(|errors| errors.into_iter().next()) {
        debug!(message = %first.message, "GraphQL error in response");
        return Err(CommerceError::Api {
            status: graphql_error_status(&first, status),
            message: first.message,
            query,
        });
    }

    let Some(data) = response.data.filter(|data| !data.is_null()) else {
        error!(
            body = %excerpt(text, LOG_BODY_LIMIT),
            "Storefront GraphQL response has no data and no errors"
        );
        if is_success(status) {
            return Err(CommerceError::unclassified(
                "response carried neither data nor errors",
                query,
            ));
        }
        return Err(http_error(status, text, query));
    };

    serde_json::from_value(data).map_err(|e| {
        error!(error = %e, "Storefront GraphQL data did not match the expected shape");
        CommerceError::unclassified(e, query)
    })
}

fn http_error(status: u16, text: &str, query: &'static str) -> CommerceError {
    CommerceError::Api {
        status,
        message: format!("HTTP {status}: {}", excerpt(text, ERROR_BODY_LIMIT)),
        query,
    }
}
