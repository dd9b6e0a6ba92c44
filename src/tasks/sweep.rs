//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheEngine;

/// Handle to the running sweep loop.
///
/// Created by [`SweepTask::start`]; the loop runs until [`SweepTask::stop`]
/// is called or the handle is dropped.
#[derive(Debug)]
pub struct SweepTask {
    handle: JoinHandle<()>,
}

impl SweepTask {
    /// Spawns a task that calls [`CacheEngine::evict_expired`] every
    /// `check_period` of the given engine.
    ///
    /// # Example
    /// ```ignore
    /// let engine = Arc::new(CacheEngine::new(ttl, check_period));
    /// let sweeper = SweepTask::start(engine.clone());
    /// // Later, during shutdown:
    /// sweeper.stop();
    /// ```
    pub fn start(engine: Arc<CacheEngine>) -> Self {
        // interval() panics on a zero period
        let period = engine.check_period().max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            info!("Starting TTL sweep task with period of {:?}", period);

            let mut ticker = tokio::time::interval(period);
            // The first tick completes immediately
            ticker.tick().await;

            loop {
                ticker.tick().await;

                let removed = engine.evict_expired();

                if removed > 0 {
                    info!("TTL sweep: removed {} expired entries", removed);
                } else {
                    debug!("TTL sweep: no expired entries found");
                }
            }
        });

        Self { handle }
    }

    /// Stops the sweep loop.
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Returns true once the loop has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for SweepTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
