use std::net::SocketAddr;

use heartbeat::{api, config};
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).compact().init();

    let cfg = config::AppConfig::from_env()?;
    let app = api::router(&cfg);

    let addr: SocketAddr = cfg.bind_addr.parse()?;
    tracing::info!(%addr, env = cfg.heartbeat().status().env(), "heartbeat starting");
    let listener = TcpListener::bind(addr).await?;
    api::serve(listener, app).await?;
    Ok(())
}
