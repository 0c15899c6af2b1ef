use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use termcast_web::config::Config;
use termcast_web::{app, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_default().unwrap_or_else(|err| {
        warn!(%err, "failed to load config, using defaults");
        Config::default()
    });

    // The table is built exactly once, before any request-serving
    // capacity exists; afterwards it is read-only.
    let table = routes::draw().context("route table failed to build")?;

    info!("registered {} routes", table.len());
    for route in table.routes() {
        info!("  {:6} {} -> {}", route.method().as_str(), route.pattern(), route.handler());
    }

    let app = app::build_app(Arc::new(table));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("listening on {addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
