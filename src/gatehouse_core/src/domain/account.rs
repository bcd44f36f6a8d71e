use secrecy::Secret;
use uuid::Uuid;

use crate::domain::email::Email;

/// A durable account row.
///
/// `email` is the natural key: reconciliation and registration both look
/// accounts up by it, and the store enforces its uniqueness. `password_hash`
/// is present only for password-registered accounts; accounts created by a
/// federated first login carry `None`.
#[derive(Debug, Clone)]
pub struct Account {
    id: Uuid,
    name: String,
    email: Email,
    password_hash: Option<Secret<String>>,
}

impl Account {
    #[must_use]
    pub fn new(id: Uuid, name: String, email: Email, password_hash: Option<Secret<String>>) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn password_hash(&self) -> Option<&Secret<String>> {
        self.password_hash.as_ref()
    }
}

/// An account that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    name: String,
    email: Email,
    password_hash: Option<Secret<String>>,
}

impl NewAccount {
    /// A password-registered account.
    #[must_use]
    pub fn registered(name: String, email: Email, password_hash: Secret<String>) -> Self {
        Self {
            name,
            email,
            password_hash: Some(password_hash),
        }
    }

    /// An account created by a first federated login; no local credential.
    #[must_use]
    pub fn federated(name: String, email: Email) -> Self {
        Self {
            name,
            email,
            password_hash: None,
        }
    }

    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    #[must_use]
    pub fn into_parts(self) -> (String, Email, Option<Secret<String>>) {
        (self.name, self.email, self.password_hash)
    }
}
