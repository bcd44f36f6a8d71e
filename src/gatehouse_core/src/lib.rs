pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, NewAccount},
    email::{Email, EmailError},
    password::{Password, PasswordError},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{
        IdentityProvider, IdentityProviderError, PasswordHashError, PasswordHasher,
        ProviderIdentity, SessionClaims, TokenError, TokenIssuer,
    },
};
