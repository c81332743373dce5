/// In-memory account store
///
/// Keeps accounts in a `Vec` guarded by an async lock, preserving insertion
/// order for `list`. Used by the integration tests so the full request
/// pipeline can run without a database.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AccountStore, StoreError};
use crate::models::account::Account;

/// Account store holding records in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: RwLock<Vec<Account>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn insert(&self, account: Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(StoreError::DuplicateEmail);
        }
        accounts.push(account);
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        credential: &str,
    ) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| a.email == email && a.credential == credential)
            .cloned())
    }

    async fn save(&self, account: &Account) -> Result<(), StoreError> {
        let mut accounts = self.accounts.write().await;
        match accounts.iter_mut().find(|a| a.email == account.email) {
            Some(existing) => *existing = account.clone(),
            None => accounts.push(account.clone()),
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Account>, StoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.clone())
    }

    async fn health(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
