//! Strillone
//!
//! Receives DNSimple webhook events, turns each into a one-line message and
//! relays it to a Slack channel, skipping deliveries already relayed within
//! the cache TTL.

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use strillone_relay::{
    api,
    cache::{CacheSweeper, DeliveryCache},
    config::{self, PROGRAM},
    dispatch::Dispatcher,
    message::{MessageFormatter, UrlBuilder},
    slack::SlackClient,
    state::AppState,
};
use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SWEEPER_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to STRILLONE_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!(program = PROGRAM, version = env!("CARGO_PKG_VERSION"), "Starting");
    info!(
        listen_addr = %config.listen_addr,
        dnsimple_url = %config.dnsimple_url,
        cache_ttl_secs = config.cache_ttl.as_secs(),
        "Configuration loaded"
    );

    let slack = SlackClient::new(&config.slack_url, config.delivery_timeout)?;
    let cache = Arc::new(DeliveryCache::new(config.cache_ttl));
    let formatter = MessageFormatter::new(UrlBuilder::new(&config.dnsimple_url));
    let dispatcher = Dispatcher::new(formatter, Arc::clone(&cache), Arc::new(slack));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let sweeper = CacheSweeper::new(Arc::clone(&cache), config.cache_sweep_interval);
    let sweeper_handle = tokio::spawn(sweeper.run(shutdown_rx));

    let app = api::create_router(AppState::new(dispatcher));
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Received shutdown signal");
        })
        .await;

    let _ = shutdown_tx.send(true);
    if tokio::time::timeout(SWEEPER_SHUTDOWN_TIMEOUT, sweeper_handle)
        .await
        .is_err()
    {
        warn!("Cache sweeper did not shut down in time");
    }

    served?;
    info!("Shutdown complete");
    Ok(())
}
