//! Commerce Bridge CLI - query a storefront from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List collections (synthetic "All" first)
//! cb-cli collection list
//!
//! # Search products, best sellers first
//! cb-cli product list --query shirt --sort-key best-selling
//!
//! # Create a cart and add a variant to it
//! cb-cli cart create
//! cb-cli cart add gid://shopify/Cart/abc -v gid://shopify/ProductVariant/1 -q 2
//!
//! # Resolve a navigation menu into storefront paths
//! cb-cli menu main-menu
//! ```
//!
//! Results are printed to stdout as pretty JSON; logs go to stderr.
//!
//! # Commands
//!
//! - `cart` - Create, read and modify carts
//! - `collection` - Read collections and their products
//! - `menu` - Read a navigation menu
//! - `page` - Read content pages
//! - `product` - Read, search and recommend products

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand, ValueEnum};
use commerce_bridge_storefront::commerce::{ProductSortKey, ProductsQuery, StorefrontClient};
use commerce_bridge_storefront::config::StorefrontConfig;
use tracing_subscriber::EnvFilter;

mod commands;

const DEFAULT_LOG_FILTER: &str = "commerce_bridge_storefront=info,cb_cli=info";

#[derive(Parser)]
#[command(name = "cb-cli")]
#[command(author, version, about = "Commerce Bridge storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, read and modify carts
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Read collections
    Collection {
        #[command(subcommand)]
        action: CollectionAction,
    },
    /// Read a navigation menu
    Menu {
        /// Menu handle (e.g. `main-menu`)
        handle: String,
    },
    /// Read content pages
    Page {
        #[command(subcommand)]
        action: PageAction,
    },
    /// Read products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Create an empty cart
    Create,
    /// Show a cart (prints `null` when it does not exist)
    Get {
        /// Cart ID
        cart_id: String,
    },
    /// Add a variant to a cart
    Add {
        /// Cart ID
        cart_id: String,

        /// Product variant ID
        #[arg(short, long)]
        variant: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },
    /// Remove lines from a cart
    Remove {
        /// Cart ID
        cart_id: String,

        /// Cart line IDs to remove
        #[arg(required = true)]
        line_ids: Vec<String>,
    },
    /// Change the merchandise or quantity of a cart line
    Update {
        /// Cart ID
        cart_id: String,

        /// Cart line ID
        #[arg(short, long)]
        line: String,

        /// Product variant ID
        #[arg(short, long)]
        variant: String,

        /// New quantity
        #[arg(short, long)]
        quantity: i64,
    },
}

#[derive(Subcommand)]
enum CollectionAction {
    /// Show a collection (prints `null` when it does not exist)
    Get {
        /// Collection handle
        handle: String,
    },
    /// List the visible products of a collection
    Products {
        /// Collection handle
        handle: String,
    },
    /// List collections
    List,
}

#[derive(Subcommand)]
enum PageAction {
    /// Show a page (prints `null` when it does not exist)
    Get {
        /// Page handle
        handle: String,
    },
    /// List pages
    List,
}

#[derive(Subcommand)]
enum ProductAction {
    /// Show a product, hidden products included
    Get {
        /// Product handle
        handle: String,
    },
    /// Search and list visible products
    List {
        /// Search query
        #[arg(long)]
        query: Option<String>,

        /// Sort key
        #[arg(long, value_enum)]
        sort_key: Option<SortKey>,

        /// Reverse the sort direction (`--reverse` alone means true)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        reverse: Option<bool>,
    },
    /// List visible recommendations for a product
    Recommendations {
        /// Product ID
        product_id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKey {
    Title,
    ProductType,
    Vendor,
    UpdatedAt,
    CreatedAt,
    BestSelling,
    Price,
    Id,
    Relevance,
}

impl From<SortKey> for ProductSortKey {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Title => Self::Title,
            SortKey::ProductType => Self::ProductType,
            SortKey::Vendor => Self::Vendor,
            SortKey::UpdatedAt => Self::UpdatedAt,
            SortKey::CreatedAt => Self::CreatedAt,
            SortKey::BestSelling => Self::BestSelling,
            SortKey::Price => Self::Price,
            SortKey::Id => Self::Id,
            SortKey::Relevance => Self::Relevance,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing on stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let client = StorefrontClient::new(&config);

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Create => commands::cart::create(&client).await?,
            CartAction::Get { cart_id } => commands::cart::get(&client, cart_id).await?,
            CartAction::Add {
                cart_id,
                variant,
                quantity,
            } => commands::cart::add(&client, cart_id, variant, quantity).await?,
            CartAction::Remove { cart_id, line_ids } => {
                commands::cart::remove(&client, cart_id, line_ids).await?;
            }
            CartAction::Update {
                cart_id,
                line,
                variant,
                quantity,
            } => commands::cart::update(&client, cart_id, line, variant, quantity).await?,
        },
        Commands::Collection { action } => match action {
            CollectionAction::Get { handle } => {
                commands::catalog::collection(&client, &handle).await?;
            }
            CollectionAction::Products { handle } => {
                commands::catalog::collection_products(&client, &handle).await?;
            }
            CollectionAction::List => commands::catalog::collections(&client).await?,
        },
        Commands::Menu { handle } => commands::content::menu(&client, &handle).await?,
        Commands::Page { action } => match action {
            PageAction::Get { handle } => commands::content::page(&client, &handle).await?,
            PageAction::List => commands::content::pages(&client).await?,
        },
        Commands::Product { action } => match action {
            ProductAction::Get { handle } => commands::catalog::product(&client, &handle).await?,
            ProductAction::List {
                query,
                sort_key,
                reverse,
            } => {
                let query = ProductsQuery {
                    query,
                    reverse,
                    sort_key: sort_key.map(Into::into),
                };
                commands::catalog::products(&client, query).await?;
            }
            ProductAction::Recommendations { product_id } => {
                commands::catalog::recommendations(&client, product_id).await?;
            }
        },
    }
    Ok(())
}
