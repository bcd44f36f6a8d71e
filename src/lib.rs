//! # Gatehouse - Identity and Credential-Issuance Service Library
//!
//! This is a facade crate that re-exports all public APIs from the gatehouse
//! components. Use this crate to get access to the full service in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, etc.
//! - **Ports**: `AccountStore`, `PasswordHasher`, `TokenIssuer`, `IdentityProvider`
//! - **Use cases**: `RegisterUseCase`, `FederatedLoginUseCase`, etc.
//! - **Adapters**: `PostgresAccountStore`, `Argon2PasswordHasher`, `JwtTokenIssuer`, `GoogleFederator`
//! - **Service**: `AuthService` - The main entry point for the auth service

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use gatehouse_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatehouse_core::{
    Account, Email, EmailError, NewAccount, Password, PasswordError, ProviderIdentity,
    SessionClaims,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use gatehouse_core::{
        AccountStore, AccountStoreError, IdentityProvider, IdentityProviderError,
        PasswordHashError, PasswordHasher, TokenError, TokenIssuer,
    };
}

// Re-export port traits at root level
pub use gatehouse_core::{
    AccountStore, AccountStoreError, IdentityProvider, IdentityProviderError, PasswordHashError,
    PasswordHasher, TokenError, TokenIssuer,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use gatehouse_application::*;
}

// Re-export use cases at root level
pub use gatehouse_application::{
    DeleteAccountUseCase, FederatedLoginUseCase, IdentityReconciler, IssuedSession,
    ListAccountsUseCase, RegisterUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use gatehouse_adapters::persistence::*;
    }

    /// Password hashing and session tokens
    pub mod security {
        pub use gatehouse_adapters::security::*;
    }

    /// OAuth2 federation
    pub mod federation {
        pub use gatehouse_adapters::federation::*;
    }

    /// Configuration
    pub mod config {
        pub use gatehouse_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use gatehouse_adapters::{
    Argon2PasswordHasher, GoogleConfig, GoogleFederator, HashMapAccountStore, JwtConfig,
    JwtTokenIssuer, PostgresAccountStore, Settings, SettingsError,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

/// Main auth service
pub use gatehouse_auth_service::{AuthService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
