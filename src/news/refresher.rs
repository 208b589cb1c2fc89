use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::service::{NewsService, ServedFrom};

/// Starts the periodic background refresh.
///
/// The first tick fires immediately, so the task also performs the initial
/// cache load. Every tick goes through [`NewsService::refresh`], the same
/// path as a forced refresh from the API. Failures are logged and the
/// previous cache is kept; the loop never exits on its own.
///
/// Returns `None` when `interval` is zero (on-demand refresh only).
pub fn spawn_refresher(service: Arc<NewsService>, interval: Duration) -> Option<JoinHandle<()>> {
    if interval.is_zero() {
        tracing::info!("Background refresh disabled");
        return None;
    }

    tracing::info!(
        interval_secs = interval.as_secs(),
        "Starting background feed refresh"
    );

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match service.refresh().await {
                Ok(outcome) if outcome.served_from == ServedFrom::Fresh => {
                    tracing::info!(
                        count = outcome.snapshot.count(),
                        "Background refresh updated cache"
                    );
                }
                Ok(outcome) => {
                    tracing::warn!(
                        warning = outcome.warning.as_deref().unwrap_or_default(),
                        count = outcome.snapshot.count(),
                        "Background refresh failed, keeping cached articles"
                    );
                }
                Err(e) => {
                    tracing::error!(error = %e, "Background refresh failed, cache still empty");
                }
            }
        }
    }))
}
