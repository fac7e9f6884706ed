//! # Product Repository
//!
//! Database operations for catalog products.
//!
//! ## Row Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products row                         aura_core::Product                │
//! │  ────────────                         ──────────────────                │
//! │  id, name, price_cents, ...  ───────► plain fields                      │
//! │  images  '["a.jpg","b.jpg"]' ───────► Vec<String>  (serde_json)         │
//! │  colors  '["#000000"]'       ───────► Vec<String>                       │
//! │  sizes   '["S","M"]'         ───────► Vec<String>                       │
//! │  is_new, featured, bestseller ──────► ProductFlags                      │
//! │  position                    ───────► catalog order (not on Product)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The storefront loads the whole table once at startup and builds an
//! in-memory `Catalog`; the queries here never filter by price or text.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use aura_core::{Product, ProductFlags};

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, price_cents, description, category, image,
           images, colors, sizes, is_new, featured, bestseller
    FROM products
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let all = repo.list_all().await?;
/// let tee = repo.get_by_id("1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// All products in catalog order.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("{} ORDER BY position, id", SELECT_COLUMNS);

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let products = rows.iter().map(product_from_row).collect::<DbResult<Vec<_>>>()?;

        debug!(count = products.len(), "Loaded products");
        Ok(products)
    }

    /// Products in one category, in catalog order.
    pub async fn list_by_category(&self, category: &str) -> DbResult<Vec<Product>> {
        let sql = format!("{} WHERE category = ?1 ORDER BY position, id", SELECT_COLUMNS);

        let rows = sqlx::query(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(product_from_row).collect()
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let sql = format!("{} WHERE id = ?1", SELECT_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(product_from_row).transpose()
    }

    /// Inserts a new product at the end of the catalog.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - id already exists
    pub async fn insert(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, name = %product.name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (
                id, name, price_cents, description, category, image,
                images, colors, sizes, is_new, featured, bestseller,
                position
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6,
                ?7, ?8, ?9, ?10, ?11, ?12,
                (SELECT COALESCE(MAX(position), 0) + 1 FROM products)
            )
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.image)
        .bind(serde_json::to_string(&product.images)?)
        .bind(serde_json::to_string(&product.colors)?)
        .bind(serde_json::to_string(&product.sizes)?)
        .bind(product.flags.is_new)
        .bind(product.flags.featured)
        .bind(product.flags.bestseller)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => match DbError::from(e) {
                DbError::UniqueViolation { field, .. } => Err(DbError::duplicate(field, &product.id)),
                other => Err(other),
            },
        }
    }

    /// Replaces every column of an existing product, keeping its position.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    pub async fn update(&self, product: &Product) -> DbResult<()> {
        debug!(id = %product.id, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price_cents = ?3,
                description = ?4,
                category = ?5,
                image = ?6,
                images = ?7,
                colors = ?8,
                sizes = ?9,
                is_new = ?10,
                featured = ?11,
                bestseller = ?12
            WHERE id = ?1
            "#,
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(&product.description)
        .bind(&product.category)
        .bind(&product.image)
        .bind(serde_json::to_string(&product.images)?)
        .bind(serde_json::to_string(&product.colors)?)
        .bind(serde_json::to_string(&product.sizes)?)
        .bind(product.flags.is_new)
        .bind(product.flags.featured)
        .bind(product.flags.bestseller)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", &product.id));
        }

        Ok(())
    }

    /// Counts total products (for diagnostics and the seed guard).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

fn product_from_row(row: &SqliteRow) -> DbResult<Product> {
    let images: String = row.try_get("images")?;
    let colors: String = row.try_get("colors")?;
    let sizes: String = row.try_get("sizes")?;

    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price_cents: row.try_get("price_cents")?,
        description: row.try_get("description")?,
        category: row.try_get("category")?,
        image: row.try_get("image")?,
        images: serde_json::from_str(&images)?,
        colors: serde_json::from_str(&colors)?,
        sizes: serde_json::from_str(&sizes)?,
        flags: ProductFlags {
            is_new: row.try_get("is_new")?,
            featured: row.try_get("featured")?,
            bestseller: row.try_get("bestseller")?,
        },
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    fn product(id: &str, category: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents,
            description: "Premium cotton".to_string(),
            category: category.to_string(),
            image: format!("/images/{}.jpg", id),
            images: vec![format!("/images/{}.jpg", id), format!("/images/{}-b.jpg", id)],
            colors: vec!["#000000".to_string(), "#FFFFFF".to_string()],
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            flags: ProductFlags {
                is_new: true,
                featured: false,
                bestseller: true,
            },
        }
    }

    async fn repo() -> ProductRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trips_all_columns() {
        let repo = repo().await;
        let original = product("1", "t-shirts", 4999);

        repo.insert(&original).await.unwrap();

        let loaded = repo.get_by_id("1").await.unwrap().unwrap();
        assert_eq!(loaded, original);
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_keeps_insertion_order() {
        let repo = repo().await;
        for id in ["3", "1", "2"] {
            repo.insert(&product(id, "hoodies", 7999)).await.unwrap();
        }

        let ids: Vec<String> = repo.list_all().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let repo = repo().await;
        repo.insert(&product("1", "t-shirts", 4999)).await.unwrap();
        repo.insert(&product("2", "hoodies", 7999)).await.unwrap();
        repo.insert(&product("3", "t-shirts", 5499)).await.unwrap();

        let tees = repo.list_by_category("t-shirts").await.unwrap();
        assert_eq!(tees.len(), 2);
        assert!(tees.iter().all(|p| p.category == "t-shirts"));
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let repo = repo().await;
        repo.insert(&product("1", "t-shirts", 4999)).await.unwrap();

        let err = repo.insert(&product("1", "hoodies", 100)).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_update() {
        let repo = repo().await;
        let mut tee = product("1", "t-shirts", 4999);
        repo.insert(&tee).await.unwrap();

        tee.price_cents = 3999;
        tee.sizes.push("XL".to_string());
        repo.update(&tee).await.unwrap();
        assert_eq!(repo.get_by_id("1").await.unwrap().unwrap(), tee);

        let missing = product("9", "t-shirts", 1);
        assert!(matches!(repo.update(&missing).await, Err(DbError::NotFound { .. })));
    }
}
