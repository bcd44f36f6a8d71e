use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use gatehouse_core::{Account, AccountStore, AccountStoreError, Email, NewAccount};

/// In-memory account store for tests and local runs. The single write lock
/// makes check-then-insert atomic, so the email uniqueness contract matches
/// the Postgres store.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl HashMapAccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn insert(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(account.email()) {
            return Err(AccountStoreError::AlreadyExists);
        }
        let (name, email, password_hash) = account.into_parts();
        let created = Account::new(Uuid::new_v4(), name, email.clone(), password_hash);
        accounts.insert(email, created.clone());
        Ok(created)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(email).cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().cloned().collect())
    }

    async fn delete_by_email(&self, email: &Email) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts
            .remove(email)
            .map(|_| ())
            .ok_or(AccountStoreError::NotFound)
    }
}
