//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `COMMERCE_STORE_DOMAIN` - Store domain (e.g., your-store.myshopify.com)
//! - `COMMERCE_STOREFRONT_ACCESS_TOKEN` - Storefront API access token
//!
//! ## Optional
//! - `COMMERCE_API_VERSION` - API version (default: 2023-01)
//! - `COMMERCE_REVALIDATE_SECONDS` - Response cache window in seconds (default: 900)

use std::collections::HashMap;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Storefront API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2023-01";

/// Response cache window used when none is configured.
pub const DEFAULT_REVALIDATE_SECONDS: u64 = 900;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
    #[error("Invalid store domain {0}: {1}")]
    InvalidStoreDomain(String, String),
}

/// Storefront API configuration.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct StorefrontConfig {
    /// Store URL (scheme and host, e.g. `https://your-store.myshopify.com`)
    pub store_url: Url,
    /// Storefront API version (e.g., 2023-01)
    pub api_version: String,
    /// Storefront API access token
    pub access_token: SecretString,
    /// How long successful responses are reused
    pub revalidate: Duration,
}

impl std::fmt::Debug for StorefrontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontConfig")
            .field("store_url", &self.store_url.as_str())
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .field("revalidate", &self.revalidate)
            .finish()
    }
}

impl StorefrontConfig {
    /// Build a configuration with the default API version and cache window.
    ///
    /// `store_domain` may be a bare domain (`https://` is prepended) or a
    /// full `http(s)://` URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStoreDomain` if the domain does not form a
    /// valid URL with a host.
    pub fn new(store_domain: &str, access_token: SecretString) -> Result<Self, ConfigError> {
        Ok(Self {
            store_url: parse_store_domain(store_domain)?,
            api_version: DEFAULT_API_VERSION.to_string(),
            access_token,
            revalidate: Duration::from_secs(DEFAULT_REVALIDATE_SECONDS),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the access token fails validation (placeholder detection, entropy
    /// check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let store_url = parse_store_domain(&get_required_env("COMMERCE_STORE_DOMAIN")?)?;
        let access_token = get_validated_secret("COMMERCE_STOREFRONT_ACCESS_TOKEN")?;
        let api_version = get_env_or_default("COMMERCE_API_VERSION", DEFAULT_API_VERSION);
        let revalidate_seconds = get_env_or_default(
            "COMMERCE_REVALIDATE_SECONDS",
            &DEFAULT_REVALIDATE_SECONDS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("COMMERCE_REVALIDATE_SECONDS".to_string(), e.to_string())
        })?;

        Ok(Self {
            store_url,
            api_version,
            access_token,
            revalidate: Duration::from_secs(revalidate_seconds),
        })
    }

    /// Use a specific API version.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Use a specific response cache window.
    #[must_use]
    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = revalidate;
        self
    }

    /// Store origin without a trailing slash (e.g. `https://your-store.myshopify.com`).
    #[must_use]
    pub fn store_origin(&self) -> String {
        self.store_url.origin().ascii_serialization()
    }

    /// GraphQL endpoint for the configured API version.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/api/{}/graphql.json",
            self.store_origin(),
            self.api_version
        )
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a store domain, prepending `https://` when no scheme is given.
fn parse_store_domain(domain: &str) -> Result<Url, ConfigError> {
    let domain = domain.trim();
    let candidate = if domain.starts_with("https://") || domain.starts_with("http://") {
        domain.to_string()
    } else {
        format!("https://{domain}")
    };

    let url = Url::parse(&candidate)
        .map_err(|e| ConfigError::InvalidStoreDomain(domain.to_string(), e.to_string()))?;
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidStoreDomain(
            domain.to_string(),
            "missing host".to_string(),
        ));
    }

    Ok(url)
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Real access tokens are random hex or base64
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Copy the token from the store admin."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}
