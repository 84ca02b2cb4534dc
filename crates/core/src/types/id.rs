//! Newtype IDs for type-safe entity references.
//!
//! The Storefront API identifies entities with opaque global ID strings
//! (e.g. `gid://shopify/Cart/abc`). Use the `define_id!` macro to create
//! wrappers that prevent passing a cart line ID where a cart ID is expected.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use commerce_bridge_core::define_id;
/// define_id!(CartId);
/// define_id!(CartLineId);
///
/// let cart_id = CartId::new("gid://shopify/Cart/1");
/// let line_id = CartLineId::new("gid://shopify/CartLine/1");
///
/// // These are different types, so this won't compile:
/// // let _: CartId = line_id;
/// assert_eq!(cart_id.as_str(), "gid://shopify/Cart/1");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from its upstream string form.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the upstream string form.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Take the upstream string form.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(CartId);
define_id!(CartLineId);
define_id!(VariantId);
define_id!(ProductId);
define_id!(PageId);
