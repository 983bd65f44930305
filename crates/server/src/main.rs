use anyhow::Context;
use server::config::ServerConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = ServerConfig::from_env();
    let app = server::create_app();

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    tracing::info!(port = config.port, "accepting arena updates");

    axum::serve(listener, app).await.context("Server stopped unexpectedly")?;
    Ok(())
}
