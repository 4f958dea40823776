mod config;
mod db;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "server exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = config::ServerConfig::from_env().map_err(|e| format!("config: {e}"))?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .map_err(|e| format!("database init failed: {e}"))?;
    let store: Arc<dyn store::Store> = Arc::new(store::postgres::PgStore::new(pool));

    if let Some(admin) = &config.admin {
        services::auth::ensure_admin(store.as_ref(), admin)
            .await
            .map_err(|e| format!("admin bootstrap failed: {e}"))?;
        tracing::info!(email = %admin.email, "admin account ensured");
    }

    let state = state::AppState::new(store, state::AuthSettings::from_config(&config));
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| format!("failed to bind: {e}"))?;

    tracing::info!(port = config.port, "stuff tracker listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server failed: {e}"))
}
