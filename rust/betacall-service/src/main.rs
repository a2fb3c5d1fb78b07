use std::sync::Arc;

use anyhow::Context;
use betacall_service::{build_router, config::Config, tts::HttpTextToSpeech, AppState};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cfg = Config::from_env()?;
    let tts = HttpTextToSpeech::new(&cfg.tts_url, cfg.tts_timeout).context("building text to speech client")?;
    tracing::info!(
        tts_endpoint = %tts.endpoint(),
        panel_height = cfg.route.panel_height,
        cell_edge_size = cfg.route.cell_edge_size,
        "route config loaded"
    );

    let state = AppState { route: Arc::new(cfg.route.clone()), tts: Arc::new(tts) };
    let app = build_router(state);
    let addr = cfg.addr()?;
    tracing::info!(core_version = %betacall_core::version(), addr = %addr, "starting betacall-service");
    let listener = tokio::net::TcpListener::bind(addr).await.context("bind failed")?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
