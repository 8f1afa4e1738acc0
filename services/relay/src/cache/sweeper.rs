use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, instrument};

use super::DeliveryCache;

/// Background task that periodically drops expired cache entries.
pub struct CacheSweeper {
    cache: Arc<DeliveryCache>,
    interval: Duration,
}

impl CacheSweeper {
    pub fn new(cache: Arc<DeliveryCache>, interval: Duration) -> Self {
        Self { cache, interval }
    }

    /// Sweeps every interval until `shutdown` turns true or its sender is
    /// dropped.
    #[instrument(skip(self, shutdown))]
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_secs = self.interval.as_secs(),
            ttl_secs = self.cache.ttl().as_secs(),
            "Starting cache sweeper"
        );

        let mut interval = tokio::time::interval(self.interval);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.cache.sweep().await;
                }
                _ = async { shutdown.wait_for(|stop| *stop).await.is_ok() } => {
                    info!("Cache sweeper shutting down");
                    break;
                }
            }
        }
    }
}
