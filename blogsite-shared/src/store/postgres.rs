/// PostgreSQL-backed account store
///
/// One row per account; the post sequence is embedded in the row as a JSONB
/// array, so every read returns the full record and every save rewrites it.
///
/// # Example
///
/// ```no_run
/// use blogsite_shared::store::postgres::{PgStore, StoreConfig};
/// use blogsite_shared::store::AccountStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = PgStore::connect(StoreConfig {
///     url: std::env::var("DATABASE_URL")?,
///     ..Default::default()
/// })
/// .await?;
///
/// store.migrate().await?;
/// let account = store.find_by_email("ada@example.com").await?;
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use super::{AccountStore, StoreError};
use crate::models::account::{Account, Post};

/// Configuration for the Postgres connection pool
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Timeout for acquiring a connection from the pool (seconds)
    pub connect_timeout_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            connect_timeout_seconds: 30,
        }
    }
}

/// Account store backed by a PostgreSQL pool
///
/// The pool is safe for concurrent use; a single `PgStore` is shared across
/// all request handlers.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

/// Row shape for the accounts table
#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    credential: String,
    posts: Json<Vec<Post>>,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            name: row.name,
            email: row.email,
            credential: row.credential,
            posts: row.posts.0,
            created_at: row.created_at,
        }
    }
}

const SELECT_ACCOUNT: &str =
    "SELECT id, name, email, credential, posts, created_at FROM accounts";

impl PgStore {
    /// Connects to the database and verifies it is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the database cannot be
    /// reached, or the health check fails.
    pub async fn connect(config: StoreConfig) -> Result<Self, StoreError> {
        info!(
            max_connections = config.max_connections,
            connect_timeout_seconds = config.connect_timeout_seconds,
            "Creating database connection pool"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect(&config.url)
            .await?;

        let store = Self { pool };
        store.health().await?;

        info!("Database connection pool created successfully");
        Ok(store)
    }

    /// Runs all pending schema migrations
    ///
    /// Migration files live in the `migrations/` directory at the workspace
    /// root and are embedded at compile time.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        info!("Running database migrations");
        sqlx::migrate!("../migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, credential, posts, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.credential)
        .bind(Json(&account.posts))
        .bind(account.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) => {
                // The unique index on email surfaces as a constraint violation.
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return Err(StoreError::DuplicateEmail);
                    }
                }
                Err(StoreError::Database(sqlx::Error::Database(db_err)))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!("{SELECT_ACCOUNT} WHERE email = $1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Account::from))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        credential: &str,
    ) -> Result<Option<Account>, StoreError> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "{SELECT_ACCOUNT} WHERE email = $1 AND credential = $2"
        ))
        .bind(email)
        .bind(credential)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Account::from))
    }

    async fn save(&self, account: &Account) -> Result<(), StoreError> {
        // Whole-record write; concurrent saves for the same email race and
        // the last write wins.
        sqlx::query(
            r#"
            INSERT INTO accounts (id, name, email, credential, posts, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO UPDATE
            SET name = EXCLUDED.name,
                credential = EXCLUDED.credential,
                posts = EXCLUDED.posts
            "#,
        )
        .bind(account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.credential)
        .bind(Json(&account.posts))
        .bind(account.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        let rows = sqlx::query_as::<_, AccountRow>(SELECT_ACCOUNT)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    async fn health(&self) -> Result<(), StoreError> {
        debug!("Performing database health check");

        let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&self.pool).await?;

        if result.0 == 1 {
            Ok(())
        } else {
            Err(StoreError::Database(sqlx::Error::Protocol(
                "Health check returned unexpected value".into(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.connect_timeout_seconds, 30);
    }

    // Integration tests against a live database run the same AccountStore
    // scenarios as the in-memory store; see blogsite-api/tests.
}
