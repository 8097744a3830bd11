mod config;
mod db;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // .env is optional.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    let state = state::AppState::new(pool);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "panel listening");
    axum::serve(listener, app).await.expect("server failed");
}
