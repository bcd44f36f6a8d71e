use gatehouse_core::{
    AccountStore, AccountStoreError, IdentityProvider, IdentityProviderError, TokenError,
    TokenIssuer,
};

use crate::{reconcile::IdentityReconciler, session::IssuedSession};

/// Error types specific to the federated login use case
#[derive(Debug, thiserror::Error)]
pub enum FederatedLoginError {
    #[error("{0}")]
    Provider(#[from] IdentityProviderError),
    #[error("Account store error: {0}")]
    Store(#[from] AccountStoreError),
    #[error("Token issuance failed: {0}")]
    Token(#[from] TokenError),
}

/// Federated login use case - exchanges an authorization code for a
/// provider-verified identity, reconciles it to an account and issues a
/// session token. A provider failure short-circuits before any store write.
pub struct FederatedLoginUseCase<'a, P, S, T>
where
    P: IdentityProvider,
    S: AccountStore,
    T: TokenIssuer,
{
    provider: &'a P,
    accounts: &'a S,
    tokens: &'a T,
}

impl<'a, P, S, T> FederatedLoginUseCase<'a, P, S, T>
where
    P: IdentityProvider,
    S: AccountStore,
    T: TokenIssuer,
{
    pub fn new(provider: &'a P, accounts: &'a S, tokens: &'a T) -> Self {
        Self {
            provider,
            accounts,
            tokens,
        }
    }

    #[tracing::instrument(name = "FederatedLoginUseCase::execute", skip_all)]
    pub async fn execute(&self, code: &str) -> Result<IssuedSession, FederatedLoginError> {
        let identity = self.provider.exchange_code(code).await?;

        let account = IdentityReconciler::new(self.accounts)
            .resolve(&identity)
            .await?;

        let token = self.tokens.issue(&account)?;

        Ok(IssuedSession { account, token })
    }
}
