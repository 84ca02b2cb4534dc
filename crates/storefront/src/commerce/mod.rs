//! Storefront API adapter.
//!
//! # Architecture
//!
//! - Hand-written operations implement `graphql_client::GraphQLQuery`
//! - The platform is the source of truth; nothing is persisted locally
//! - Raw responses are reshaped into flat domain values (`types`)
//! - Optional in-memory response caching via `moka` (`ForceCache` / `NoStore`)
//!
//! # Errors
//!
//! Every failure is one of two shapes:
//!
//! - [`CommerceError::Api`]: the platform (or the transport) reported a
//!   recognizable error with a status and a message
//! - [`CommerceError::Unclassified`]: anything else, with the cause attached
//!
//! Both carry the GraphQL document that was sent. "Not found" is never an
//! error: operations return `None` or an empty `Vec` instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use commerce_bridge_storefront::commerce::StorefrontClient;
//! use commerce_bridge_storefront::config::StorefrontConfig;
//!
//! let config = StorefrontConfig::from_env()?;
//! let client = StorefrontClient::new(&config);
//!
//! // Get a product (hidden products are still returned by handle)
//! let product = client.get_product("my-product").await?;
//!
//! // Create a cart and add items
//! let cart = client.create_cart().await?;
//! let cart = client.add_to_cart(&cart.id, vec![CartLineInput {
//!     merchandise_id: product.unwrap().variants[0].id.clone(),
//!     quantity: 1,
//! }]).await?;
//! ```

pub mod storefront;
pub mod types;

pub use storefront::{CacheMode, Envelope, FetchOptions, StorefrontClient};
pub use types::*;

use thiserror::Error;

/// Boxed cause of an [`CommerceError::Unclassified`] failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Status reported when a recognizable failure carries none.
pub const DEFAULT_ERROR_STATUS: u16 = 500;

/// Errors that can occur when talking to the Storefront API.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// The API (or the transport) reported a recognizable error.
    ///
    /// When the response lists several GraphQL errors only the first one is
    /// kept.
    #[error("Storefront API error ({status}): {message}")]
    Api {
        /// Status reported for the error, 500 when unavailable.
        status: u16,
        /// Human-readable error message.
        message: String,
        /// GraphQL document that was sent.
        query: &'static str,
    },

    /// Any other failure, wrapped opaquely.
    #[error("Unclassified storefront error: {cause}")]
    Unclassified {
        /// Underlying failure.
        #[source]
        cause: BoxError,
        /// GraphQL document that was sent.
        query: &'static str,
    },
}

impl CommerceError {
    /// Wrap an unrecognized failure.
    pub fn unclassified(cause: impl Into<BoxError>, query: &'static str) -> Self {
        Self::Unclassified {
            cause: cause.into(),
            query,
        }
    }

    /// Classify a transport failure.
    ///
    /// Transport failures are recognizable API errors: they keep the HTTP
    /// status when one was received and default to 500 otherwise.
    #[must_use]
    pub fn from_transport(error: &reqwest::Error, query: &'static str) -> Self {
        Self::Api {
            status: error
                .status()
                .map_or(DEFAULT_ERROR_STATUS, |status| status.as_u16()),
            message: error.to_string(),
            query,
        }
    }

    /// Status of an API error; `None` for unclassified failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unclassified { .. } => None,
        }
    }

    /// GraphQL document that was sent when the failure happened.
    #[must_use]
    pub const fn query(&self) -> &'static str {
        match self {
            Self::Api { query, .. } | Self::Unclassified { query, .. } => query,
        }
    }
}
