use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{PasswordHasher as _, SaltString, rand_core},
};
use gatehouse_core::{Password, PasswordHashError, PasswordHasher};
use secrecy::{ExposeSecret, Secret};

/// Argon2id password hashing.
///
/// The PHC output string embeds algorithm, version, salt and cost
/// parameters, so verification stays self-contained and keeps working for
/// hashes produced under older parameter choices. Hashing and verification
/// are CPU-bound and run on the blocking pool.
#[derive(Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<Secret<String>, PasswordHashError> {
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(rand_core::OsRng);
                hasher()
                    .map_err(PasswordHashError::Unexpected)?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|hash| Secret::from(hash.to_string()))
                    .map_err(|e| PasswordHashError::Unexpected(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHashError::Unexpected(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: Password,
        stored: Secret<String>,
    ) -> Result<bool, PasswordHashError> {
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                // A stored value that does not parse as a PHC hash counts as
                // a mismatch, not an error.
                let Ok(expected) = PasswordHash::new(stored.expose_secret()) else {
                    return Ok(false);
                };

                Ok(hasher()
                    .map_err(PasswordHashError::Unexpected)?
                    .verify_password(
                        candidate.as_ref().expose_secret().as_bytes(),
                        &expected,
                    )
                    .is_ok())
            })
        })
        .await
        .map_err(|e| PasswordHashError::Unexpected(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn password(s: &str) -> Password {
        Password::try_from(Secret::from(s.to_owned())).unwrap()
    }

    #[tokio::test]
    async fn hash_then_verify_round_trips() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash(password("abc123")).await.unwrap();

        assert!(hasher.verify(password("abc123"), hash).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_password_does_not_verify() {
        let hasher = Argon2PasswordHasher::new();
        let hash = hasher.hash(password("abc123")).await.unwrap();

        assert!(!hasher.verify(password("abc124"), hash).await.unwrap());
    }

    #[tokio::test]
    async fn same_password_hashes_differently_each_time() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash(password("abc123")).await.unwrap();
        let second = hasher.hash(password("abc123")).await.unwrap();

        assert_ne!(first.expose_secret(), second.expose_secret());
        assert!(first.expose_secret().starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_a_mismatch() {
        let hasher = Argon2PasswordHasher::new();

        let verified = hasher
            .verify(password("abc123"), Secret::from("not-a-phc-string".to_owned()))
            .await
            .unwrap();

        assert!(!verified);
    }
}
