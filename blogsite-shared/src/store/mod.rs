/// Persistence service handle
///
/// The store is treated as an opaque persistence service behind the
/// [`AccountStore`] trait. Handlers receive a shared handle
/// (`Arc<dyn AccountStore>`) injected at startup instead of reaching for
/// process-global state.
///
/// # Implementations
///
/// - `postgres`: [`postgres::PgStore`], one row per account with the post
///   sequence embedded as JSONB
/// - `memory`: [`memory::MemoryStore`], used by the integration tests
///
/// # Concurrency
///
/// `save` rewrites the whole account record. Two concurrent append flows for
/// the same account can both read, both append locally, and the second write
/// wins, losing the first append. This is the documented behavior of the
/// system, not a bug in a store implementation.

use async_trait::async_trait;

use crate::models::account::Account;

pub mod memory;
pub mod postgres;

/// Error type for persistence operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An account with the same email already exists
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence operations over account records
///
/// All operations are whole-record: `find_*` return a complete account
/// including its posts, and `save` writes the complete record back.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts a new account
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if the email is taken.
    async fn insert(&self, account: Account) -> Result<(), StoreError>;

    /// Looks up an account by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError>;

    /// Looks up an account whose email AND credential both match exactly
    ///
    /// The credential is compared as an opaque, case-sensitive value.
    async fn find_by_credentials(
        &self,
        email: &str,
        credential: &str,
    ) -> Result<Option<Account>, StoreError>;

    /// Persists the whole account record, replacing any stored version
    async fn save(&self, account: &Account) -> Result<(), StoreError>;

    /// Fetches every account, in store iteration order
    ///
    /// The order across accounts is whatever the store returns; it is not
    /// guaranteed stable between calls.
    async fn list(&self) -> Result<Vec<Account>, StoreError>;

    /// Verifies the store is reachable
    async fn health(&self) -> Result<(), StoreError>;
}
