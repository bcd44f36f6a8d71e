use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password must be at least 6 characters long and contain at least one number.")]
    TooWeak,
}

/// A plaintext password that passed the registration policy.
///
/// Exists only for the duration of a request; only the argon2 hash of it is
/// ever persisted.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let raw = value.expose_secret();
        if raw.chars().count() >= 6 && raw.chars().any(|c| c.is_ascii_digit()) {
            Ok(Self(value))
        } else {
            Err(PasswordError::TooWeak)
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
