pub mod config;
pub mod federation;
pub mod persistence;
pub mod security;

// Re-export commonly used adapters for convenience
pub use config::settings::{PostgresConfig, ServerConfig, Settings, SettingsError};
pub use federation::google::{GoogleConfig, GoogleFederator};
pub use persistence::{
    hashmap_account_store::HashMapAccountStore, postgres_account_store::PostgresAccountStore,
};
pub use security::{password::Argon2PasswordHasher, token::{JwtConfig, JwtTokenIssuer}};
