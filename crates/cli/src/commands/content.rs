//! Menu and page commands.

use commerce_bridge_storefront::commerce::StorefrontClient;

use super::{CommandError, print_json};

/// Show the items of a navigation menu.
pub async fn menu(client: &StorefrontClient, handle: &str) -> Result<(), CommandError> {
    print_json(&client.get_menu(handle).await?)
}

/// Show a page by handle.
pub async fn page(client: &StorefrontClient, handle: &str) -> Result<(), CommandError> {
    print_json(&client.get_page(handle).await?)
}

/// List pages.
pub async fn pages(client: &StorefrontClient) -> Result<(), CommandError> {
    print_json(&client.get_pages().await?)
}
