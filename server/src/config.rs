use clap::Parser;

/// Process-lifetime configuration for the seed-scan service.
#[derive(Debug, Clone, Parser)]
#[command(name = "seedscan-server", about = "Parallel Minecraft seed-scan service")]
pub struct ServiceConfig {
    /// Address to bind the HTTP/WebSocket listener to.
    #[arg(long, env = "SEEDSCAN_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, env = "SEEDSCAN_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Soft cap on in-flight searches the service will run concurrently;
    /// additional requests are rejected with 503 rather than queued
    /// indefinitely. This bounds total worker-thread fan-out, which is
    /// otherwise only capped per-request by `MAX_WORKERS`.
    #[arg(long, env = "SEEDSCAN_MAX_CONCURRENT_SEARCHES", default_value_t = 4)]
    pub max_concurrent_searches: usize,

    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or
    /// "seedscan_server=debug,tower_http=info".
    #[arg(long, env = "SEEDSCAN_LOG_FILTER", default_value = "info")]
    pub log_filter: String,
}

impl ServiceConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
