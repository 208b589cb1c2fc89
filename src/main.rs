use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

use infomercado::config::Config;
use infomercado::news::{spawn_refresher, NewsService};
use infomercado::server::{self, AppState, EXTENDED_HEALTH_PATH, HEALTH_PATH, NEWS_PATH};

#[derive(Parser, Debug)]
#[command(name = "infomercado", about = "Cached JSON API over an economy news feed")]
struct Args {
    /// TOML configuration file (optional; defaults apply when missing)
    #[arg(long, value_name = "FILE", default_value = "infomercado.toml")]
    config: PathBuf,

    /// Listen port, overrides the config file
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Feed URL, overrides the config file
    #[arg(long, env = "FEED_URL")]
    feed_url: Option<String>,
}

fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from '{}'", args.config.display()))?;

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(feed_url) = &args.feed_url {
        config.feed_url = feed_url.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    let service = Arc::new(
        NewsService::from_config(&config).context("Failed to build HTTP client for feed")?,
    );

    // Keep the handle alive for the lifetime of the server
    let _refresher = spawn_refresher(Arc::clone(&service), config.refresh_interval());

    let app = server::router(AppState::new(service), &config.static_dir);

    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(address = %addr, "InfoMercado listening");
    tracing::info!(feed = %config.feed_url, "Feed source");
    tracing::info!(
        news = %format!("http://{}{}", addr, NEWS_PATH),
        health = %format!("http://{}{}", addr, HEALTH_PATH),
        extended = %format!("http://{}{}", addr, EXTENDED_HEALTH_PATH),
        "API endpoints"
    );

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
