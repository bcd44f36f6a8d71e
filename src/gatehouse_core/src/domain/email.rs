use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

// Permissive local@domain.tld shape; real validation happens when the
// address is actually used (provider login or delivery).
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Invalid email format.")]
    InvalidFormat,
}

/// A syntactically valid email address.
///
/// Wrapped in [`Secret`] so the address never shows up in debug output or
/// traces. Stores key accounts by email, hence the manual `Eq`/`Hash` over
/// the exposed value.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    /// The part before the `@`, used as a display-name fallback for
    /// federated accounts.
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0
            .expose_secret()
            .split_once('@')
            .map_or(self.0.expose_secret().as_str(), |(local, _)| local)
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = EmailError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if EMAIL_REGEX.is_match(value.expose_secret()) {
            Ok(Self(value))
        } else {
            Err(EmailError::InvalidFormat)
        }
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
