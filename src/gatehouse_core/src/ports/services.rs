use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{account::Account, email::Email, password::Password};

// PasswordHasher port trait and errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

/// One-way password hashing.
///
/// Hashing is CPU-bound by design, so implementations must isolate it from
/// the async executor (worker thread pool).
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash with a fresh random salt; the output is a self-contained PHC
    /// string (two calls on the same input produce different hashes).
    async fn hash(&self, password: Password) -> Result<Secret<String>, PasswordHashError>;

    /// Verify a candidate against a stored hash. A stored value that does
    /// not parse as a hash is a verification failure, not an error.
    async fn verify(
        &self,
        candidate: Password,
        stored: Secret<String>,
    ) -> Result<bool, PasswordHashError>;
}

// TokenIssuer port trait and errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    Malformed,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Expired, Self::Expired) => true,
            (Self::InvalidSignature, Self::InvalidSignature) => true,
            (Self::Malformed, Self::Malformed) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

/// The claim set carried by a session token.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub email: Secret<String>,
    pub account_id: Uuid,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Signed, self-contained session tokens. Pure function of secret, claims
/// and clock; nothing is stored server-side.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, account: &Account) -> Result<String, TokenError>;

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError>;
}

// IdentityProvider port trait and errors
#[derive(Debug, Error)]
pub enum IdentityProviderError {
    #[error("Provider code exchange failed: {0}")]
    ExchangeFailed(String),
    #[error("Provider identity token invalid: {0}")]
    InvalidIdentityToken(String),
}

/// A provider-verified identity, extracted from the identity token after
/// signature and audience checks. Discarded once reconciled to an account.
#[derive(Debug, Clone)]
pub struct ProviderIdentity {
    pub email: Email,
    pub name: Option<String>,
}

impl ProviderIdentity {
    /// Display name for a freshly created account; providers may omit the
    /// name claim, in which case the email local part stands in.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.email.local_part().to_owned())
    }
}

/// External OAuth2 identity provider: exchanges an authorization code for a
/// verified identity assertion.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn exchange_code(&self, code: &str) -> Result<ProviderIdentity, IdentityProviderError>;
}
