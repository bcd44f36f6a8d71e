use axum::{
    Router,
    http::{HeaderName, HeaderValue},
    routing::{get, post},
};
use gatehouse_axum::routes::{delete_user, google_login, list_users, register};
use gatehouse_core::{AccountStore, IdentityProvider, PasswordHasher, TokenIssuer};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Main authentication service that provides all auth-related routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService with the provided collaborators
    ///
    /// # Arguments
    /// * `account_store` - Store for account rows (must be Clone)
    /// * `password_hasher` - One-way password hashing (must be Clone)
    /// * `token_issuer` - Session token signing/verification (must be Clone)
    /// * `identity_provider` - OAuth2 code exchange + identity verification (must be Clone)
    ///
    /// # Note on Architecture
    /// Collaborators implement Clone via internal Arc sharing where they
    /// hold state. Each route is given only the state it needs.
    pub fn new<S, H, T, P>(
        account_store: S,
        password_hasher: H,
        token_issuer: T,
        identity_provider: P,
    ) -> Self
    where
        S: AccountStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
        P: IdentityProvider + Clone + 'static,
    {
        let router = Router::new()
            // Registration needs the store, the hasher and the issuer
            .route("/api/register", post(register::<S, H, T>))
            .with_state((
                account_store.clone(),
                password_hasher,
                token_issuer.clone(),
            ))
            // Google login swaps the hasher for the identity provider
            .route("/api/google-login", post(google_login::<P, S, T>))
            .with_state((identity_provider, account_store.clone(), token_issuer))
            // Listing and deletion only need the store
            .route(
                "/api/users",
                get(list_users::<S>).delete(delete_user::<S>),
            )
            .with_state(account_store);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Finalize the router: permissive CORS plus the cross-origin isolation
    /// headers carried on every response.
    pub fn into_router(mut self) -> Router {
        self.router = self
            .router
            .layer(CorsLayer::permissive())
            .layer(SetResponseHeaderLayer::overriding(
                HeaderName::from_static("cross-origin-opener-policy"),
                HeaderValue::from_static("same-origin"),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                HeaderName::from_static("cross-origin-resource-policy"),
                HeaderValue::from_static("same-origin"),
            ));

        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router.into_make_service()).await
    }
}
