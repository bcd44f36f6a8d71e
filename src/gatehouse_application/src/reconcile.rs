use gatehouse_core::{
    Account, AccountStore, AccountStoreError, Email, NewAccount, ProviderIdentity,
};

/// Maps a verified external identity onto a durable account.
///
/// Lookup happens before insert, so a concurrent first login for the same
/// email can lose the insert race; the store's email uniqueness turns the
/// losing insert into [`AccountStoreError::AlreadyExists`] and the
/// reconciler re-resolves once against the winner's row.
pub struct IdentityReconciler<'a, S>
where
    S: AccountStore,
{
    accounts: &'a S,
}

impl<'a, S> IdentityReconciler<'a, S>
where
    S: AccountStore,
{
    pub fn new(accounts: &'a S) -> Self {
        Self { accounts }
    }

    /// Find the account for a provider identity, creating it on first login.
    ///
    /// An existing account is returned unchanged: the stored name wins over
    /// whatever the assertion carries (first-write-wins).
    #[tracing::instrument(name = "IdentityReconciler::resolve", skip_all)]
    pub async fn resolve(&self, identity: &ProviderIdentity) -> Result<Account, AccountStoreError> {
        if let Some(existing) = self.accounts.find_by_email(&identity.email).await? {
            return Ok(existing);
        }

        let fresh = NewAccount::federated(identity.display_name(), identity.email.clone());
        match self.accounts.insert(fresh).await {
            Ok(created) => Ok(created),
            Err(AccountStoreError::AlreadyExists) => self
                .accounts
                .find_by_email(&identity.email)
                .await?
                .ok_or_else(|| {
                    AccountStoreError::Unexpected(
                        "account missing after insert conflict".to_string(),
                    )
                }),
            Err(e) => Err(e),
        }
    }

    /// Registration uniqueness check: fails with
    /// [`AccountStoreError::AlreadyExists`] when any account holds the email,
    /// whether password-backed or created by a federated login.
    #[tracing::instrument(name = "IdentityReconciler::ensure_unregistered", skip_all)]
    pub async fn ensure_unregistered(&self, email: &Email) -> Result<(), AccountStoreError> {
        match self.accounts.find_by_email(email).await? {
            Some(_) => Err(AccountStoreError::AlreadyExists),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use secrecy::Secret;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    use super::*;

    fn email(s: &str) -> Email {
        Email::try_from(Secret::from(s.to_owned())).unwrap()
    }

    fn identity(addr: &str, name: Option<&str>) -> ProviderIdentity {
        ProviderIdentity {
            email: email(addr),
            name: name.map(str::to_owned),
        }
    }

    /// In-memory store that can simulate losing an insert race: when armed,
    /// the next insert reports `AlreadyExists` and materializes a competing
    /// row, as if another request committed first.
    #[derive(Default, Clone)]
    struct RacingStore {
        accounts: Arc<RwLock<HashMap<Email, Account>>>,
        lose_next_insert: Arc<AtomicBool>,
    }

    #[async_trait::async_trait]
    impl AccountStore for RacingStore {
        async fn insert(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(account.email()) {
                return Err(AccountStoreError::AlreadyExists);
            }
            let (name, email, password_hash) = account.into_parts();
            if self.lose_next_insert.swap(false, Ordering::SeqCst) {
                let winner = Account::new(
                    Uuid::new_v4(),
                    "concurrent-winner".to_string(),
                    email.clone(),
                    None,
                );
                accounts.insert(email, winner);
                return Err(AccountStoreError::AlreadyExists);
            }
            let created = Account::new(Uuid::new_v4(), name, email.clone(), password_hash);
            accounts.insert(email, created.clone());
            Ok(created)
        }

        async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError> {
            Ok(self.accounts.read().await.get(email).cloned())
        }

        async fn list(&self) -> Result<Vec<Account>, AccountStoreError> {
            Ok(self.accounts.read().await.values().cloned().collect())
        }

        async fn delete_by_email(&self, email: &Email) -> Result<(), AccountStoreError> {
            self.accounts
                .write()
                .await
                .remove(email)
                .map(|_| ())
                .ok_or(AccountStoreError::NotFound)
        }
    }

    #[tokio::test]
    async fn first_resolve_creates_account_without_credential() {
        let store = RacingStore::default();
        let reconciler = IdentityReconciler::new(&store);

        let account = reconciler
            .resolve(&identity("new@x.com", Some("New User")))
            .await
            .unwrap();

        assert_eq!(account.name(), "New User");
        assert!(account.password_hash().is_none());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn second_resolve_returns_same_account_unchanged() {
        let store = RacingStore::default();
        let reconciler = IdentityReconciler::new(&store);

        let first = reconciler
            .resolve(&identity("repeat@x.com", Some("Original Name")))
            .await
            .unwrap();
        let second = reconciler
            .resolve(&identity("repeat@x.com", Some("Renamed Since")))
            .await
            .unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(second.name(), "Original Name");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_name_falls_back_to_local_part() {
        let store = RacingStore::default();
        let reconciler = IdentityReconciler::new(&store);

        let account = reconciler
            .resolve(&identity("nameless@x.com", None))
            .await
            .unwrap();

        assert_eq!(account.name(), "nameless");
    }

    #[tokio::test]
    async fn lost_insert_race_resolves_to_the_winner() {
        let store = RacingStore::default();
        store.lose_next_insert.store(true, Ordering::SeqCst);
        let reconciler = IdentityReconciler::new(&store);

        let account = reconciler
            .resolve(&identity("raced@x.com", Some("Loser")))
            .await
            .unwrap();

        assert_eq!(account.name(), "concurrent-winner");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn ensure_unregistered_rejects_any_existing_account() {
        let store = RacingStore::default();
        let reconciler = IdentityReconciler::new(&store);

        // Account created without a password (federated) still blocks
        // password registration for the same email.
        reconciler
            .resolve(&identity("taken@x.com", None))
            .await
            .unwrap();

        assert_eq!(
            reconciler.ensure_unregistered(&email("taken@x.com")).await,
            Err(AccountStoreError::AlreadyExists)
        );
        assert!(
            reconciler
                .ensure_unregistered(&email("free@x.com"))
                .await
                .is_ok()
        );
    }
}
