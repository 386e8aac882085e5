use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tracing::{error, info};

/// Routes answering external uptime probes.
pub fn router() -> Router {
    Router::new().route("/", get(|| async { "Bot is running" }))
}

/// Serve the liveness route on its own OS thread and runtime, detached
/// from the bot's event loop.
pub fn spawn(bind: String) -> Result<std::thread::JoinHandle<()>> {
    std::thread::Builder::new()
        .name("liveness".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    error!("Failed to start liveness runtime: {}", e);
                    return;
                }
            };
            if let Err(e) = runtime.block_on(serve(&bind)) {
                error!("Liveness server stopped: {:#}", e);
            }
        })
        .context("Failed to spawn liveness thread")
}

async fn serve(bind: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind to {bind}"))?;

    info!("Liveness endpoint listening on http://{}", bind);

    axum::serve(listener, router())
        .await
        .context("Server error")?;
    Ok(())
}
