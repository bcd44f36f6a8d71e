use gatehouse_core::{AccountStore, AccountStoreError, Email};

/// Delete account use case - removes the account with the given email.
pub struct DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    accounts: &'a S,
}

impl<'a, S> DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(accounts: &'a S) -> Self {
        Self { accounts }
    }

    /// Fails with [`AccountStoreError::NotFound`] when no account holds the
    /// email.
    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip_all)]
    pub async fn execute(&self, email: &Email) -> Result<(), AccountStoreError> {
        self.accounts.delete_by_email(email).await
    }
}
