//! Axum-specific user listing route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use gatehouse_application::ListAccountsUseCase;
use gatehouse_core::{Account, AccountStore};
use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::SERVER_ERROR_MESSAGE;

/// Axum user listing route - administrative pass-through.
#[tracing::instrument(name = "List users", skip_all)]
pub async fn list_users<S>(
    State(accounts): State<S>,
) -> Result<impl IntoResponse, ListUsersError>
where
    S: AccountStore + Clone + 'static,
{
    let accounts = ListAccountsUseCase::new(&accounts)
        .execute()
        .await
        .map_err(|e| ListUsersError::Failed(e.to_string()))?;

    let users: Vec<UserSummary> = accounts.iter().map(UserSummary::from).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Listing entry; the stored password hash stays out of the response.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&Account> for UserSummary {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id(),
            name: account.name().to_string(),
            email: account.email().as_ref().expose_secret().clone(),
        }
    }
}

/// Errors that can occur while listing users
#[derive(Debug, Error)]
pub enum ListUsersError {
    #[error("{0}")]
    Failed(String),
}

impl IntoResponse for ListUsersError {
    fn into_response(self) -> axum::response::Response {
        let ListUsersError::Failed(detail) = self;
        tracing::error!(error = %detail, "listing users failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "message": SERVER_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
