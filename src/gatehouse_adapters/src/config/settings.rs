use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use crate::{federation::google::GoogleConfig, security::token::JwtConfig};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,
    #[error("GOOGLE_CLIENT_ID, GOOGLE_CLIENT_SECRET and REDIRECT_URI must be set")]
    IncompleteGoogleCredentials,
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub url: Secret<String>,
}

/// Immutable process configuration, read from the environment exactly once
/// at startup and passed into components at construction. Business logic
/// never touches the process environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub google: GoogleConfig,
    pub postgres: PostgresConfig,
}

impl Settings {
    /// Load and validate configuration from the environment (and `.env`,
    /// when present).
    ///
    /// Missing signing secret or provider credentials is a hard error: the
    /// service refuses to start rather than issue unsigned tokens or run a
    /// broken federation flow.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let raw: RawSettings = config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;

        raw.validate()
    }
}

fn default_port() -> u16 {
    5000
}

fn default_token_ttl() -> i64 {
    3600
}

fn default_token_url() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_certs_url() -> String {
    "https://www.googleapis.com/oauth2/v3/certs".to_string()
}

fn default_provider_timeout_ms() -> u64 {
    10_000
}

/// Environment shape before validation; field names match the (lowercased)
/// environment variable names.
#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default = "default_port")]
    port: u16,
    jwt_secret: Option<Secret<String>>,
    #[serde(default = "default_token_ttl")]
    token_ttl_seconds: i64,
    google_client_id: Option<String>,
    google_client_secret: Option<Secret<String>>,
    redirect_uri: Option<String>,
    #[serde(default = "default_token_url")]
    google_token_url: String,
    #[serde(default = "default_certs_url")]
    google_certs_url: String,
    #[serde(default = "default_provider_timeout_ms")]
    provider_timeout_ms: u64,
    database_url: Option<Secret<String>>,
}

impl RawSettings {
    fn validate(self) -> Result<Settings, SettingsError> {
        let jwt_secret = self.jwt_secret.ok_or(SettingsError::MissingJwtSecret)?;

        let (client_id, client_secret, redirect_uri) = match (
            self.google_client_id,
            self.google_client_secret,
            self.redirect_uri,
        ) {
            (Some(id), Some(secret), Some(uri)) => (id, secret, uri),
            _ => return Err(SettingsError::IncompleteGoogleCredentials),
        };

        let database_url = self.database_url.ok_or(SettingsError::MissingDatabaseUrl)?;

        Ok(Settings {
            server: ServerConfig { port: self.port },
            jwt: JwtConfig {
                secret: jwt_secret,
                token_ttl_seconds: self.token_ttl_seconds,
            },
            google: GoogleConfig {
                client_id,
                client_secret,
                redirect_uri,
                token_url: self.google_token_url,
                certs_url: self.google_certs_url,
                timeout: std::time::Duration::from_millis(self.provider_timeout_ms),
            },
            postgres: PostgresConfig { url: database_url },
        })
    }
}
