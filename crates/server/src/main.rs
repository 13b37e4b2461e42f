use std::sync::Arc;

use tracing::info;

use flick_server::config::{self, ServerConfig};
use flick_server::router::build_router;
use flick_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    config::load_dotenv();
    let config = ServerConfig::from_env();
    config.log_summary();

    let state = Arc::new(AppState::new());
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
