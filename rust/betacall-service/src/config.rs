use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use betacall_core::RouteConfig;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub tts_url: String,
    pub tts_timeout: Duration,
    pub route: RouteConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("BETACALL_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("BETACALL_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3001);
        let tts_url = env::var("BETACALL_TTS_URL").unwrap_or_else(|_| "http://localhost:8443".to_string());
        let tts_timeout_ms = env::var("BETACALL_TTS_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30_000);

        let mut route = match env::var("BETACALL_CELL_EDGE_SIZE") {
            Ok(v) => RouteConfig::with_cell_edge(v.parse().context("BETACALL_CELL_EDGE_SIZE must be an integer")?),
            Err(_) => RouteConfig::default(),
        };
        if let Ok(v) = env::var("BETACALL_PANEL_HEIGHT") {
            route.panel_height = v.parse().context("BETACALL_PANEL_HEIGHT must be an integer")?;
        }

        Ok(Self {
            host,
            port,
            tts_url,
            tts_timeout: Duration::from_millis(tts_timeout_ms),
            route,
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}
