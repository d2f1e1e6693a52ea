use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info};

use crate::state::AppState;

/// Spawn the periodic reminder sweep. The task runs for the life of the
/// process and stops when the shutdown flag flips; each cycle is
/// fire-and-forget with no caller to report to.
pub fn spawn_reminder_sweep(
    state: Arc<AppState>,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let period = Duration::from_secs(state.config.sweep_interval_secs);
    tokio::spawn(run(state, period, shutdown))
}

async fn run(state: Arc<AppState>, period: Duration, mut shutdown: watch::Receiver<bool>) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick completes immediately; wait a full period instead
    ticker.tick().await;

    info!(period_secs = period.as_secs(), "reminder sweep started");
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let today = chrono::Utc::now().date_naive();
                match state.sweep.run(today).await {
                    Ok(sent) if sent > 0 => info!(sent, "reminder sweep cycle complete"),
                    Ok(_) => {}
                    Err(err) => error!(error = %err, "reminder sweep cycle failed"),
                }
            }
            _ = shutdown.changed() => {
                info!("reminder sweep stopped");
                break;
            }
        }
    }
}
