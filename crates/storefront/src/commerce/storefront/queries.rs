//! GraphQL operation definitions for the Storefront API.
//!
//! Each operation implements [`GraphQLQuery`] by hand: the document is compiled
//! in from `graphql/storefront/` and the variables and response data are plain
//! serde types mirroring the upstream field shapes. Per-operation modules follow
//! the `graphql_client` layout (`get_cart::Variables`, `get_cart::ResponseData`).

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

use crate::commerce::types::{
    CartId, CartItemCost, CartLineId, Connection, Image, Money, PriceRange, ProductId,
    ProductOption, ProductVariant, SelectedOption, Seo, VariantId,
};

/// Concatenate an operation file with the fragment files it spreads.
macro_rules! document {
    ($operation:literal $(, $fragment:literal)* $(,)?) => {
        concat!(
            include_str!(concat!("../../../graphql/storefront/queries/", $operation)),
            $(include_str!(concat!("../../../graphql/storefront/fragments/", $fragment)),)*
        )
    };
}

/// Declare an operation type implementing `GraphQLQuery`.
macro_rules! operation {
    ($(#[$meta:meta])* $name:ident => $module:ident, $operation_name:literal, $document:expr) => {
        $(#[$meta])*
        pub struct $name;

        impl $name {
            /// GraphQL document sent for this operation.
            pub const DOCUMENT: &'static str = $document;
        }

        impl GraphQLQuery for $name {
            type Variables = $module::Variables;
            type ResponseData = $module::ResponseData;

            fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                QueryBody {
                    variables,
                    query: Self::DOCUMENT,
                    operation_name: $operation_name,
                }
            }
        }
    };
}

// =============================================================================
// Documents
// =============================================================================

const CREATE_CART: &str = document!(
    "create_cart.graphql",
    "cart.graphql",
    "product.graphql",
    "image.graphql",
    "seo.graphql",
);
const ADD_TO_CART: &str = document!(
    "add_to_cart.graphql",
    "cart.graphql",
    "product.graphql",
    "image.graphql",
    "seo.graphql",
);
const REMOVE_FROM_CART: &str = document!(
    "remove_from_cart.graphql",
    "cart.graphql",
    "product.graphql",
    "image.graphql",
    "seo.graphql",
);
const UPDATE_CART_LINES: &str = document!(
    "update_cart_lines.graphql",
    "cart.graphql",
    "product.graphql",
    "image.graphql",
    "seo.graphql",
);
const GET_CART: &str = document!(
    "get_cart.graphql",
    "cart.graphql",
    "product.graphql",
    "image.graphql",
    "seo.graphql",
);
const GET_COLLECTION: &str =
    document!("get_collection.graphql", "collection.graphql", "seo.graphql");
const GET_COLLECTIONS: &str =
    document!("get_collections.graphql", "collection.graphql", "seo.graphql");
const GET_COLLECTION_PRODUCTS: &str = document!(
    "get_collection_products.graphql",
    "product.graphql",
    "image.graphql",
    "seo.graphql",
);
const GET_MENU: &str = document!("get_menu.graphql");
const GET_PAGE: &str = document!("get_page.graphql", "page.graphql", "seo.graphql");
const GET_PAGES: &str = document!("get_pages.graphql", "page.graphql", "seo.graphql");
const GET_PRODUCT: &str = document!(
    "get_product.graphql",
    "product.graphql",
    "image.graphql",
    "seo.graphql",
);
const GET_PRODUCTS: &str = document!(
    "get_products.graphql",
    "product.graphql",
    "image.graphql",
    "seo.graphql",
);
const GET_PRODUCT_RECOMMENDATIONS: &str = document!(
    "get_product_recommendations.graphql",
    "product.graphql",
    "image.graphql",
    "seo.graphql",
);

// =============================================================================
// Raw Response Shapes
// =============================================================================

/// Operation without variables. Serializes as an empty object.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoVariables {}

/// Cart as returned by the API, lines still wrapped in a connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCart {
    pub id: CartId,
    pub checkout_url: String,
    pub cost: RawCartCost,
    pub lines: Connection<RawCartItem>,
    pub total_quantity: i64,
}

/// Cart cost summary; the platform may omit the tax amount.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCartCost {
    pub subtotal_amount: Money,
    pub total_amount: Money,
    pub total_tax_amount: Option<Money>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCartItem {
    pub id: CartLineId,
    pub quantity: i64,
    pub cost: CartItemCost,
    pub merchandise: RawMerchandise,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMerchandise {
    pub id: VariantId,
    pub title: String,
    pub selected_options: Vec<SelectedOption>,
    pub product: RawProduct,
}

/// Product as returned by the API, images and variants still wrapped.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: ProductId,
    pub handle: String,
    pub available_for_sale: bool,
    pub title: String,
    pub description: String,
    pub description_html: String,
    pub options: Vec<ProductOption>,
    pub price_range: PriceRange,
    pub variants: Connection<ProductVariant>,
    pub featured_image: Option<Image>,
    pub images: Connection<Image>,
    pub seo: Seo,
    pub tags: Vec<String>,
    pub updated_at: String,
}

/// Collection as returned by the API, before its path is derived.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
    pub handle: String,
    pub title: String,
    pub description: String,
    pub seo: Seo,
    pub updated_at: String,
}

/// Menu entry with an absolute store URL.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMenuItem {
    pub title: String,
    pub url: String,
}

/// Payload shared by every cart mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct CartPayload {
    pub cart: Option<RawCart>,
}

// =============================================================================
// Cart Operations
// =============================================================================

pub mod create_cart {
    use super::{CartPayload, Deserialize};

    pub type Variables = super::NoVariables;

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub cart_create: Option<CartPayload>,
    }
}

pub mod add_to_cart {
    use super::{CartPayload, Deserialize, Serialize};
    use crate::commerce::types::{CartId, CartLineInput};

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub cart_id: CartId,
        pub lines: Vec<CartLineInput>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub cart_lines_add: Option<CartPayload>,
    }
}

pub mod remove_from_cart {
    use super::{CartPayload, Deserialize, Serialize};
    use crate::commerce::types::{CartId, CartLineId};

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub cart_id: CartId,
        pub line_ids: Vec<CartLineId>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub cart_lines_remove: Option<CartPayload>,
    }
}

pub mod update_cart_lines {
    use super::{CartPayload, Deserialize, Serialize};
    use crate::commerce::types::{CartId, CartLineUpdateInput};

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub cart_id: CartId,
        pub lines: Vec<CartLineUpdateInput>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub cart_lines_update: Option<CartPayload>,
    }
}

pub mod get_cart {
    use super::{Deserialize, RawCart, Serialize};
    use crate::commerce::types::CartId;

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub cart_id: CartId,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub cart: Option<RawCart>,
    }
}

// =============================================================================
// Collection Operations
// =============================================================================

/// Variables for operations keyed by a URL handle.
#[derive(Debug, Clone, Serialize)]
pub struct HandleVariables {
    pub handle: String,
}

pub mod get_collection {
    use super::{Deserialize, RawCollection};

    pub type Variables = super::HandleVariables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub collection: Option<RawCollection>,
    }
}

pub mod get_collections {
    use super::{Connection, Deserialize, RawCollection};

    pub type Variables = super::NoVariables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub collections: Connection<Option<RawCollection>>,
    }
}

pub mod get_collection_products {
    use super::{Connection, Deserialize, RawProduct};

    pub type Variables = super::HandleVariables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct CollectionProducts {
        pub products: Connection<Option<RawProduct>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub collection: Option<CollectionProducts>,
    }
}

// =============================================================================
// Content Operations
// =============================================================================

pub mod get_menu {
    use super::{Deserialize, RawMenuItem};

    pub type Variables = super::HandleVariables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Menu {
        pub items: Vec<RawMenuItem>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub menu: Option<Menu>,
    }
}

pub mod get_page {
    use super::Deserialize;
    use crate::commerce::types::Page;

    pub type Variables = super::HandleVariables;

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub page_by_handle: Option<Page>,
    }
}

pub mod get_pages {
    use super::{Connection, Deserialize};
    use crate::commerce::types::Page;

    pub type Variables = super::NoVariables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub pages: Connection<Option<Page>>,
    }
}

// =============================================================================
// Product Operations
// =============================================================================

pub mod get_product {
    use super::{Deserialize, RawProduct};

    pub type Variables = super::HandleVariables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub product: Option<RawProduct>,
    }
}

pub mod get_products {
    use super::{Connection, Deserialize, RawProduct};

    pub type Variables = crate::commerce::types::ProductsQuery;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: Connection<Option<RawProduct>>,
    }
}

pub mod get_product_recommendations {
    use super::{Deserialize, ProductId, RawProduct, Serialize};

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub product_id: ProductId,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_recommendations: Option<Vec<Option<RawProduct>>>,
    }
}

// =============================================================================
// Operations
// =============================================================================

operation!(CreateCart => create_cart, "CreateCart", CREATE_CART);
operation!(AddToCart => add_to_cart, "AddToCart", ADD_TO_CART);
operation!(RemoveFromCart => remove_from_cart, "RemoveFromCart", REMOVE_FROM_CART);
operation!(UpdateCartLines => update_cart_lines, "UpdateCartLines", UPDATE_CART_LINES);
operation!(GetCart => get_cart, "GetCart", GET_CART);
operation!(GetCollection => get_collection, "GetCollection", GET_COLLECTION);
operation!(GetCollections => get_collections, "GetCollections", GET_COLLECTIONS);
operation!(
    GetCollectionProducts => get_collection_products,
    "GetCollectionProducts",
    GET_COLLECTION_PRODUCTS
);
operation!(GetMenu => get_menu, "GetMenu", GET_MENU);
operation!(GetPage => get_page, "GetPage", GET_PAGE);
operation!(GetPages => get_pages, "GetPages", GET_PAGES);
operation!(GetProduct => get_product, "GetProduct", GET_PRODUCT);
operation!(GetProducts => get_products, "GetProducts", GET_PRODUCTS);
operation!(
    GetProductRecommendations => get_product_recommendations,
    "GetProductRecommendations",
    GET_PRODUCT_RECOMMENDATIONS
);
