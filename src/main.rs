use color_eyre::eyre::Result;
use gatehouse::{
    Argon2PasswordHasher, AuthService, ExposeSecret, GoogleFederator, JwtTokenIssuer,
    PostgresAccountStore, Settings, configure_postgresql,
};
use reqwest::Client as HttpClient;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration; a missing signing secret or incomplete provider
    // credentials aborts startup here, before the listener binds.
    let settings = Settings::load()?;

    // Setup database connection pool and run migrations
    let pg_pool = configure_postgresql(settings.postgres.url.expose_secret()).await;
    let account_store = PostgresAccountStore::new(pg_pool);

    // Credential components
    let password_hasher = Argon2PasswordHasher::new();
    let token_issuer = JwtTokenIssuer::new(settings.jwt.clone());

    // Provider client with a bounded timeout
    let http_client = HttpClient::builder()
        .timeout(settings.google.timeout)
        .build()?;
    let identity_provider = GoogleFederator::new(settings.google.clone(), http_client);

    let auth_service = AuthService::new(
        account_store,
        password_hasher,
        token_issuer,
        identity_provider,
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.server.port)).await?;
    tracing::info!("Starting gatehouse on port {}...", settings.server.port);

    auth_service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
