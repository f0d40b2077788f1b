use onair_core::{Clock, SystemClock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::CliContext;
use crate::commands;

/// Spawn the periodic refresh task using the configured interval
pub async fn start(ctx: &CliContext) -> JoinHandle<()> {
    let interval = ctx.config.read().await.station().refresh_interval();
    tracing::debug!(seconds = interval.as_secs(), "starting refresh timer");

    // Clone context for the spawned task
    let task_ctx = ctx.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if task_ctx.payload_path.read().await.is_none() {
                continue;
            }
            commands::run_refresh(&task_ctx, SystemClock.now()).await;
        }
    })
}

/// Replace the running refresh task, e.g. after the interval changed
pub async fn restart(ctx: &CliContext) {
    let handle = start(ctx).await;
    if let Some(previous) = ctx.tasks.lock().await.refresh.replace(handle) {
        previous.abort();
    }
}

pub async fn stop(ctx: &CliContext) {
    if let Some(handle) = ctx.tasks.lock().await.refresh.take() {
        handle.abort();
    }
}
