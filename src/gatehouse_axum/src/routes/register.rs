//! Axum-specific registration route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use gatehouse_application::{RegisterError, RegisterUseCase};
use gatehouse_core::{AccountStore, Email, Password, PasswordHasher, TokenIssuer};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::SERVER_ERROR_MESSAGE;

/// Axum registration route.
///
/// Email and password are validated here, before the use case touches any
/// collaborator; a rejected credential never reaches the store.
#[tracing::instrument(name = "Register", skip(accounts, hasher, tokens, request))]
pub async fn register<S, H, T>(
    State((accounts, hasher, tokens)): State<(S, H, T)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, RegisterRouteError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    // Parse domain entities
    let email = Email::try_from(request.email)
        .map_err(|e| RegisterRouteError::Validation(e.to_string()))?;
    let password = Password::try_from(request.password)
        .map_err(|e| RegisterRouteError::Validation(e.to_string()))?;

    let use_case = RegisterUseCase::new(&accounts, &hasher, &tokens);

    let session = use_case
        .execute(request.name, email, password)
        .await
        .map_err(|e| match e {
            RegisterError::EmailTaken => RegisterRouteError::EmailTaken,
            other => RegisterRouteError::Internal(other.to_string()),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "User registered successfully",
            "token": session.token,
        })),
    ))
}

/// Axum-specific request body for registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name stored on the account
    pub name: String,

    /// User's email address
    pub email: Secret<String>,

    /// User's password
    pub password: Secret<String>,
}

/// Errors that can occur during registration
#[derive(Debug, Error)]
pub enum RegisterRouteError {
    #[error("{0}")]
    Validation(String),

    #[error("Email already exists.")]
    EmailTaken,

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for RegisterRouteError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            RegisterRouteError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            RegisterRouteError::EmailTaken => {
                (StatusCode::BAD_REQUEST, "Email already exists.".to_string())
            }
            RegisterRouteError::Internal(detail) => {
                tracing::error!(error = %detail, "registration failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}
