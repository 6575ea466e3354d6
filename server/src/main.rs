mod config;
mod db;
mod routes;
mod services;
mod state;

use config::ServerConfig;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("config: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database init failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;

    if config.dev_auth_bypass {
        tracing::warn!("DEV_AUTH_BYPASS enabled; /api/dev/session creates sessions without sign-in");
    }
    if config.sign_in_url.is_none() {
        tracing::info!("SIGN_IN_URL not set; /auth/signin will answer 503");
    }

    let port = config.port;
    let state = state::AppState::new(pool, config);
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, public_base_url = %client::net::api::public_base_url(), "twitter feed listening");
    axum::serve(listener, app).await?;
    Ok(())
}
