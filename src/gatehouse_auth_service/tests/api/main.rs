use gatehouse_adapters::{
    Argon2PasswordHasher, GoogleConfig, GoogleFederator, HashMapAccountStore, JwtConfig,
    JwtTokenIssuer,
};
use gatehouse_auth_service::AuthService;
use gatehouse_core::TokenIssuer;
use secrecy::{ExposeSecret, Secret};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JWT_SECRET: &str = "api-test-secret";

struct TestApp {
    address: String,
    client: reqwest::Client,
    provider: MockServer,
}

impl TestApp {
    /// Boot the full router on an ephemeral port, with the in-memory store
    /// and the provider pointed at a local mock server.
    async fn spawn() -> Self {
        let provider = MockServer::start().await;

        let google = GoogleFederator::new(
            GoogleConfig {
                client_id: "api-test-client".to_string(),
                client_secret: Secret::from("api-test-secret".to_owned()),
                redirect_uri: "http://localhost:5000/callback".to_string(),
                token_url: format!("{}/token", provider.uri()),
                certs_url: format!("{}/certs", provider.uri()),
                timeout: std::time::Duration::from_secs(2),
            },
            reqwest::Client::new(),
        );

        let service = AuthService::new(
            HashMapAccountStore::new(),
            Argon2PasswordHasher::new(),
            token_issuer(),
            google,
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, service.into_router())
                .await
                .expect("Server task failed");
        });

        Self {
            address,
            client: reqwest::Client::new(),
            provider,
        }
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/api/register", self.address))
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute register request")
    }
}

fn token_issuer() -> JwtTokenIssuer {
    JwtTokenIssuer::new(JwtConfig {
        secret: Secret::from(JWT_SECRET.to_owned()),
        token_ttl_seconds: 3600,
    })
}

#[tokio::test]
async fn register_issues_a_verifiable_token_and_rejects_duplicates() {
    let app = TestApp::spawn().await;

    let created = app.register("Alice", "alice@x.com", "abc123").await;
    assert_eq!(created.status(), 201);
    let body: serde_json::Value = created.json().await.unwrap();
    assert_eq!(body["message"], "User registered successfully");

    let claims = token_issuer()
        .verify(body["token"].as_str().unwrap())
        .expect("Issued token should verify");
    assert_eq!(claims.email.expose_secret(), "alice@x.com");

    // Same email again, different password: still rejected.
    let duplicate = app.register("Alice Again", "alice@x.com", "xyz789").await;
    assert_eq!(duplicate.status(), 400);
    let body: serde_json::Value = duplicate.json().await.unwrap();
    assert_eq!(body["message"], "Email already exists.");
}

#[tokio::test]
async fn register_validates_email_and_password_first() {
    let app = TestApp::spawn().await;

    let bad_email = app.register("Alice", "not-an-email", "abc123").await;
    assert_eq!(bad_email.status(), 400);
    let body: serde_json::Value = bad_email.json().await.unwrap();
    assert_eq!(body["message"], "Invalid email format.");

    let weak_password = app.register("Alice", "alice@x.com", "abc12").await;
    assert_eq!(weak_password.status(), 400);

    // Nothing was persisted by the rejected attempts.
    let users: serde_json::Value = app
        .client
        .get(format!("{}/api/users", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn users_can_be_listed_and_deleted() {
    let app = TestApp::spawn().await;

    app.register("Alice", "alice@x.com", "abc123").await;
    app.register("Bob", "bob@x.com", "def456").await;

    let listed: serde_json::Value = app
        .client
        .get(format!("{}/api/users", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let users = listed.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user["id"].is_string());
        assert!(user["name"].is_string());
        assert!(user["email"].is_string());
        assert!(user.get("password_hash").is_none());
    }

    let missing = app
        .client
        .delete(format!("{}/api/users", app.address))
        .json(&serde_json::json!({ "email": "ghost@x.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
    let body: serde_json::Value = missing.json().await.unwrap();
    assert_eq!(body["message"], "User not found.");

    let deleted = app
        .client
        .delete(format!("{}/api/users", app.address))
        .json(&serde_json::json!({ "email": "alice@x.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), 200);

    let remaining: serde_json::Value = app
        .client
        .get(format!("{}/api/users", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["email"], "bob@x.com");
}

#[tokio::test]
async fn google_login_surfaces_provider_failure_as_server_error() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "invalid_grant" })),
        )
        .mount(&app.provider)
        .await;

    let response = app
        .client
        .post(format!("{}/api/google-login", app.address))
        .json(&serde_json::json!({ "code": "stale-code" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Server error. Please try again later.");

    // The failed exchange must not have created an account.
    let users: serde_json::Value = app
        .client
        .get(format!("{}/api/users", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn every_response_carries_the_cross_origin_headers() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/users", app.address))
        .header("Origin", "http://elsewhere.example")
        .send()
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
    assert_eq!(headers["cross-origin-resource-policy"], "same-origin");
    assert!(headers.contains_key("access-control-allow-origin"));
}
