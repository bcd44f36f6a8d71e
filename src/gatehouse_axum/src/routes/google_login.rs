//! Axum-specific Google login route.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use gatehouse_application::FederatedLoginUseCase;
use gatehouse_core::{AccountStore, IdentityProvider, TokenIssuer};
use serde::Deserialize;
use thiserror::Error;

use super::SERVER_ERROR_MESSAGE;

/// Axum Google login route.
///
/// The whole flow - code exchange, identity-token verification,
/// reconciliation, token issuance - lives in the use case; any failure
/// surfaces as a generic 500 since none of it is user-correctable.
#[tracing::instrument(name = "Google login", skip_all)]
pub async fn google_login<P, S, T>(
    State((provider, accounts, tokens)): State<(P, S, T)>,
    Json(request): Json<GoogleLoginRequest>,
) -> Result<impl IntoResponse, GoogleLoginError>
where
    P: IdentityProvider + Clone + 'static,
    S: AccountStore + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    let use_case = FederatedLoginUseCase::new(&provider, &accounts, &tokens);

    let session = use_case
        .execute(&request.code)
        .await
        .map_err(|e| GoogleLoginError::Failed(e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({ "token": session.token })),
    ))
}

/// Axum-specific request body for Google login
#[derive(Debug, Deserialize)]
pub struct GoogleLoginRequest {
    /// Authorization code from the provider redirect
    pub code: String,
}

/// Errors that can occur during federated login
#[derive(Debug, Error)]
pub enum GoogleLoginError {
    #[error("{0}")]
    Failed(String),
}

impl IntoResponse for GoogleLoginError {
    fn into_response(self) -> axum::response::Response {
        let GoogleLoginError::Failed(detail) = self;
        tracing::error!(error = %detail, "google login failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "message": SERVER_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
