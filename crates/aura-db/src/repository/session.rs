//! # Session Repository
//!
//! The one durable record the storefront keeps: the logged-in user,
//! serialized as JSON under the `user` key of the `local_storage` table.
//!
//! ```text
//!   login / register / update_profile ──► save(&user)   (overwrite wholesale)
//!   logout ─────────────────────────────► clear()
//!   startup ────────────────────────────► load()        (None when absent)
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use aura_core::User;

/// Storage key of the persisted session record.
pub const SESSION_KEY: &str = "user";

/// Repository for the persisted session record.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: SqlitePool,
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SessionRepository { pool }
    }

    /// Loads the persisted user.
    ///
    /// ## Returns
    /// * `Ok(None)` - nobody is logged in
    /// * `Err(DbError::Serialization)` - the stored record is unreadable
    pub async fn load(&self) -> DbResult<Option<User>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM local_storage WHERE key = ?1")
                .bind(SESSION_KEY)
                .fetch_optional(&self.pool)
                .await?;

        match value {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Persists the user, replacing any previous record.
    pub async fn save(&self, user: &User) -> DbResult<()> {
        debug!(user_id = %user.id, "Persisting session");

        let json = serde_json::to_string(user)?;

        sqlx::query(
            r#"
            INSERT INTO local_storage (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(SESSION_KEY)
        .bind(json)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes the persisted user. A no-op when nothing is stored.
    pub async fn clear(&self) -> DbResult<()> {
        debug!("Clearing persisted session");

        sqlx::query("DELETE FROM local_storage WHERE key = ?1")
            .bind(SESSION_KEY)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig, DbError};
    use aura_core::Role;

    async fn setup() -> (Database, SessionRepository) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.sessions();
        (db, repo)
    }

    #[tokio::test]
    async fn test_load_empty() {
        let (_db, repo) = setup().await;
        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_wholesale() {
        let (_db, repo) = setup().await;

        let mut user = User::customer("2", "Customer", "a@b.c");
        repo.save(&user).await.unwrap();

        user.name = "Renamed".to_string();
        user.role = Role::Admin;
        repo.save(&user).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_clear() {
        let (_db, repo) = setup().await;
        repo.save(&User::customer("2", "Customer", "a@b.c")).await.unwrap();

        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());

        // Clearing twice is fine.
        repo.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_corrupt_record_is_serialization_error() {
        let (db, repo) = setup().await;

        sqlx::query("INSERT INTO local_storage (key, value, updated_at) VALUES (?1, '{oops', '')")
            .bind(SESSION_KEY)
            .execute(db.pool())
            .await
            .unwrap();

        assert!(matches!(repo.load().await, Err(DbError::Serialization(_))));
    }
}
