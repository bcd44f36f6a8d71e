use chrono::Utc;
use gatehouse_core::{Account, SessionClaims, TokenError, TokenIssuer};
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode, errors::ErrorKind};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, ser::SerializeStruct};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub token_ttl_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// HS256 session tokens carrying `{sub, uid, iat, exp}`.
///
/// Pure function of secret, claims and clock; the server keeps no record of
/// issued tokens. The constructor takes the already-validated configuration,
/// so an issuer without a signing secret cannot exist.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, account: &Account) -> Result<String, TokenError> {
        let delta = chrono::Duration::try_seconds(self.config.token_ttl_seconds).ok_or(
            TokenError::Unexpected("failed to create token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenError::Unexpected("duration out of range".to_string()))?
            .timestamp();

        let iat: usize = now
            .timestamp()
            .try_into()
            .map_err(|_| TokenError::Unexpected("failed to cast i64 to usize".to_string()))?;
        let exp: usize = exp
            .try_into()
            .map_err(|_| TokenError::Unexpected("failed to cast i64 to usize".to_string()))?;

        let claims = Claims {
            sub: Clone::clone(account.email().as_ref()),
            uid: account.id(),
            iat,
            exp,
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map_err(|e| TokenError::Unexpected(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        })?;

        Ok(SessionClaims {
            email: claims.sub,
            account_id: claims.uid,
            issued_at: claims.iat as i64,
            expires_at: claims.exp as i64,
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    pub sub: Secret<String>,
    pub uid: Uuid,
    pub iat: usize,
    pub exp: usize,
}

impl Serialize for Claims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Claims", 4)?;
        state.serialize_field("sub", &self.sub.expose_secret())?;
        state.serialize_field("uid", &self.uid)?;
        state.serialize_field("iat", &self.iat)?;
        state.serialize_field("exp", &self.exp)?;
        state.end()
    }
}
