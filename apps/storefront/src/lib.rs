//! # Aura Storefront Library
//!
//! Application layer of the Aura storefront: state holders for the
//! catalog, cart, wishlist and session, and the commands the UI calls.
//!
//! ## Module Organization
//! ```text
//! aura_storefront/
//! ├── lib.rs          ◄─── You are here (bootstrap & tracing)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── catalog.rs  ◄─── Read-only catalog
//! │   ├── cart.rs     ◄─── Cart state
//! │   ├── wishlist.rs ◄─── Wishlist state
//! │   ├── session.rs  ◄─── Session store + SessionStorage
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog listing/search/filter
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── wishlist.rs ◄─── Wishlist manipulation
//! │   ├── session.rs  ◄─── Login/register/logout/profile
//! │   └── config.rs   ◄─── Config and price formatting
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! aura_storefront::init_tracing();
//!
//! let config = ConfigState::load_or_default(None);
//! let store = Storefront::bootstrap(config).await?;
//!
//! commands::cart::add_to_cart(&store.catalog, &store.cart, &store.config, "1", None, None, None)?;
//! commands::session::login(&store.session, "admin@aura.com", "admin123").await?;
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aura_db::{Database, DbConfig, SessionRepository};
use error::ApiError;
use state::{CartState, CatalogState, ConfigState, DbState, SessionState, WishlistState};

/// Every state holder of a running storefront.
#[derive(Debug)]
pub struct Storefront {
    pub config: ConfigState,
    pub db: DbState,
    pub catalog: CatalogState,
    pub cart: CartState,
    pub wishlist: WishlistState,
    pub session: SessionState<SessionRepository>,
}

impl Storefront {
    /// Opens the configured database and builds the storefront.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │                       Storefront Startup                                │
    /// │                                                                         │
    /// │  1. Determine Database Path ──────────────────────────────────────────► │
    /// │     • AURA_DB_PATH / database_path, else the platform data dir          │
    /// │                                                                         │
    /// │  2. Connect to Database ──────────────────────────────────────────────► │
    /// │     • SQLite with WAL mode                                              │
    /// │     • Run pending migrations                                            │
    /// │                                                                         │
    /// │  3. Load Catalog ─────────────────────────────────────────────────────► │
    /// │     • products table, validated into a Catalog                          │
    /// │                                                                         │
    /// │  4. Initialize State Objects ─────────────────────────────────────────► │
    /// │     • CartState, WishlistState: empty                                   │
    /// │     • SessionState: restored from the persisted record                  │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub async fn bootstrap(config: ConfigState) -> Result<Self, ApiError> {
        let db_path = config.resolve_database_path()?;
        info!(?db_path, "Database path determined");

        let db = Database::new(DbConfig::new(db_path)).await?;
        info!("Database connected and migrations applied");

        Self::with_database(config, db).await
    }

    /// Builds the storefront on an already opened database.
    pub async fn with_database(config: ConfigState, db: Database) -> Result<Self, ApiError> {
        let catalog = CatalogState::from_products(db.products().list_all().await?)?;
        if catalog.inner().is_empty() {
            warn!("Catalog is empty; run the seed binary to load the demo products");
        }

        let session = SessionState::restore(db.sessions(), config.simulated_latency()).await;

        info!(
            store = %config.store_name,
            products = catalog.inner().len(),
            "Storefront initialized"
        );

        Ok(Storefront {
            config,
            db: DbState::new(db),
            catalog,
            cart: CartState::new(),
            wishlist: WishlistState::new(),
            session,
        })
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=aura=trace` - Show trace for aura crates only
/// - Default: `info,aura=debug,sqlx=warn`
///
/// Calling it twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,aura=debug,sqlx=warn"));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        warn!("Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::{Product, ProductFlags};

    fn hoodie(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Hoodie {}", id),
            price_cents,
            description: "Heavyweight cotton".to_string(),
            category: "hoodies".to_string(),
            image: "/images/products/hoodie1/main.jpg".to_string(),
            images: vec!["/images/products/hoodie1/main.jpg".to_string()],
            colors: vec!["#000000".to_string()],
            sizes: vec!["M".to_string(), "L".to_string()],
            flags: ProductFlags::default(),
        }
    }

    fn config() -> ConfigState {
        ConfigState {
            simulated_latency_ms: 0,
            ..ConfigState::default()
        }
    }

    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products().insert(&hoodie("1", 7999)).await.unwrap();
        db.products().insert(&hoodie("2", 8999)).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_loads_catalog_from_database() {
        let store = Storefront::with_database(config(), seeded_db().await)
            .await
            .unwrap();

        assert_eq!(store.catalog.inner().len(), 2);
        assert!(store.cart.with_cart(|c| c.is_empty()));
        assert!(!store.session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let db = seeded_db().await;

        let store = Storefront::with_database(config(), db.clone()).await.unwrap();
        commands::session::login(&store.session, "jane@example.com", "pw")
            .await
            .unwrap();
        drop(store);

        let store = Storefront::with_database(config(), db).await.unwrap();
        let session = commands::session::get_session(&store.session).await;
        assert_eq!(session.user.unwrap().email, "jane@example.com");

        commands::session::logout(&store.session).await.unwrap();
        assert!(store.db.inner().sessions().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_shopping_flow() {
        let store = Storefront::with_database(config(), seeded_db().await)
            .await
            .unwrap();

        commands::wishlist::toggle_wishlist(&store.catalog, &store.wishlist, "2").unwrap();
        commands::cart::add_to_cart(
            &store.catalog,
            &store.cart,
            &store.config,
            "1",
            Some(1),
            Some("L".to_string()),
            None,
        )
        .unwrap();

        let cart = commands::wishlist::move_wishlist_to_cart(&store.wishlist, &store.cart, &store.config);

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.totals.total.cents(), 7999 + 8999);
        assert!(cart.totals.shipping.is_zero());
        assert_eq!(store.config.format_currency(cart.totals.grand_total.cents()), "$169.98");
    }
}
