//! Expired Entry Purge Task
//!
//! Background task that periodically drops expired cache entries so they no
//! longer occupy capacity or show up in `keys()`.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::lookup::SharedCache;

/// Spawns a background task that purges expired entries every `interval`.
///
/// The returned handle is aborted during graceful shutdown.
pub fn spawn_cleanup_task(cache: SharedCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(?interval, "starting expired entry purge task");

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.write().await.purge_expired();

            if removed > 0 {
                info!(removed, "purged expired cache entries");
            } else {
                debug!("no expired cache entries to purge");
            }
        }
    })
}
