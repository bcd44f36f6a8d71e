use gatehouse_core::{
    AccountStore, AccountStoreError, Email, NewAccount, Password, PasswordHashError,
    PasswordHasher, TokenError, TokenIssuer,
};

use crate::{reconcile::IdentityReconciler, session::IssuedSession};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Email already exists.")]
    EmailTaken,
    #[error("Password hashing failed: {0}")]
    Hashing(#[from] PasswordHashError),
    #[error("Token issuance failed: {0}")]
    Token(#[from] TokenError),
    #[error("Account store error: {0}")]
    Store(AccountStoreError),
}

/// Register use case - creates a password-backed account and issues a
/// session token.
pub struct RegisterUseCase<'a, S, H, T>
where
    S: AccountStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    accounts: &'a S,
    hasher: &'a H,
    tokens: &'a T,
}

impl<'a, S, H, T> RegisterUseCase<'a, S, H, T>
where
    S: AccountStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(accounts: &'a S, hasher: &'a H, tokens: &'a T) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    /// Execute the register use case.
    ///
    /// The email and password arrive already validated; this checks
    /// uniqueness, hashes the password, persists the account and mints a
    /// token. The store's uniqueness constraint backstops the read-then-
    /// insert window, so a concurrent registration for the same email still
    /// surfaces as [`RegisterError::EmailTaken`].
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        name: String,
        email: Email,
        password: Password,
    ) -> Result<IssuedSession, RegisterError> {
        let reconciler = IdentityReconciler::new(self.accounts);
        match reconciler.ensure_unregistered(&email).await {
            Ok(()) => {}
            Err(AccountStoreError::AlreadyExists) => return Err(RegisterError::EmailTaken),
            Err(e) => return Err(RegisterError::Store(e)),
        }

        let password_hash = self.hasher.hash(password).await?;

        let account = match self
            .accounts
            .insert(NewAccount::registered(name, email, password_hash))
            .await
        {
            Ok(account) => account,
            Err(AccountStoreError::AlreadyExists) => return Err(RegisterError::EmailTaken),
            Err(e) => return Err(RegisterError::Store(e)),
        };

        let token = self.tokens.issue(&account)?;

        Ok(IssuedSession { account, token })
    }
}
