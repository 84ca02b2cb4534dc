//! Collection reshaping.

use crate::commerce::types::{Collection, Seo};

use super::super::queries::RawCollection;

/// Handle prefix of collections kept off the collection listing.
pub const HIDDEN_COLLECTION_PREFIX: &str = "hidden";

/// Reshape a collection, deriving its storefront path.
#[must_use]
pub fn reshape_collection(collection: Option<RawCollection>) -> Option<Collection> {
    let collection = collection?;
    let path = format!("/search/{}", collection.handle);

    Some(Collection {
        handle: collection.handle,
        title: collection.title,
        description: collection.description,
        seo: collection.seo,
        updated_at: collection.updated_at,
        path,
    })
}

/// Reshape a list of collections, dropping absent entries.
///
/// Hidden collections are NOT removed here; the listing operation filters
/// them with [`is_hidden_collection`].
pub fn reshape_collections<I, C>(collections: I) -> Vec<Collection>
where
    I: IntoIterator<Item = C>,
    C: Into<Option<RawCollection>>,
{
    collections
        .into_iter()
        .filter_map(|collection| reshape_collection(collection.into()))
        .collect()
}

/// Whether a collection is hidden from the collection listing.
#[must_use]
pub fn is_hidden_collection(collection: &Collection) -> bool {
    collection.handle.starts_with(HIDDEN_COLLECTION_PREFIX)
}

/// The synthetic "All" collection listed ahead of the platform's collections.
#[must_use]
pub fn all_products_collection(updated_at: String) -> Collection {
    Collection {
        handle: String::new(),
        title: "All".to_string(),
        description: "All products".to_string(),
        seo: Seo {
            title: Some("All".to_string()),
            description: Some("All products".to_string()),
        },
        updated_at,
        path: "/search".to_string(),
    }
}
