use gatehouse_core::{Account, AccountStore, AccountStoreError};

/// List accounts use case - administrative pass-through, no credential
/// logic involved.
pub struct ListAccountsUseCase<'a, S>
where
    S: AccountStore,
{
    accounts: &'a S,
}

impl<'a, S> ListAccountsUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(accounts: &'a S) -> Self {
        Self { accounts }
    }

    #[tracing::instrument(name = "ListAccountsUseCase::execute", skip_all)]
    pub async fn execute(&self) -> Result<Vec<Account>, AccountStoreError> {
        self.accounts.list().await
    }
}
