//! Axum-specific user deletion route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use gatehouse_application::DeleteAccountUseCase;
use gatehouse_core::{AccountStore, AccountStoreError, Email};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::SERVER_ERROR_MESSAGE;

/// Axum user deletion route.
#[tracing::instrument(name = "Delete user", skip_all)]
pub async fn delete_user<S>(
    State(accounts): State<S>,
    Json(request): Json<DeleteUserRequest>,
) -> Result<impl IntoResponse, DeleteUserError>
where
    S: AccountStore + Clone + 'static,
{
    // An address that cannot parse matches no stored account.
    let email = Email::try_from(request.email).map_err(|_| DeleteUserError::NotFound)?;

    DeleteAccountUseCase::new(&accounts)
        .execute(&email)
        .await
        .map_err(|e| match e {
            AccountStoreError::NotFound => DeleteUserError::NotFound,
            other => DeleteUserError::Internal(other.to_string()),
        })?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "message": "User deleted successfully." })),
    ))
}

/// Axum-specific request body for user deletion
#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub email: Secret<String>,
}

/// Errors that can occur during user deletion
#[derive(Debug, Error)]
pub enum DeleteUserError {
    #[error("User not found.")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for DeleteUserError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            DeleteUserError::NotFound => (StatusCode::NOT_FOUND, "User not found.".to_string()),
            DeleteUserError::Internal(detail) => {
                tracing::error!(error = %detail, "user deletion failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}
