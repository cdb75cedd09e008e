use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use users_api::shell::config::AppConfig;
use users_api::shell::http::router;
use users_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("users_api=info,tower_http=info"));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;
    let app = router(AppState::in_memory());

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("users API listening on http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
