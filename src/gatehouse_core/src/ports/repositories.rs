use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount},
    email::Email,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AlreadyExists,
    #[error("Account not found")]
    NotFound,
    #[error("Unexpected error {0}")]
    Unexpected(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AlreadyExists, Self::AlreadyExists) => true,
            (Self::NotFound, Self::NotFound) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account and return it with its assigned id.
    ///
    /// Must fail with [`AccountStoreError::AlreadyExists`] when an account
    /// with the same email is already stored; concurrent first logins rely
    /// on this to detect a lost insert race.
    async fn insert(&self, account: NewAccount) -> Result<Account, AccountStoreError>;

    /// Exact-match lookup by email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountStoreError>;

    async fn list(&self) -> Result<Vec<Account>, AccountStoreError>;

    /// Remove the account with the given email; [`AccountStoreError::NotFound`]
    /// when no such account exists.
    async fn delete_by_email(&self, email: &Email) -> Result<(), AccountStoreError>;
}
