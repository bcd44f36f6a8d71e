pub mod settings;

pub use settings::{PostgresConfig, ServerConfig, Settings, SettingsError};
