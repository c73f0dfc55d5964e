//! Periodic display refresh.
//!
//! A single cooperative task ticks on a fixed period and re-renders the status
//! item for today. The task stops when its cancellation token fires: on Ctrl-C,
//! or when the owning `RefreshTimer` is dropped.

use crate::core::clock::Clock;
use crate::core::tracker::DailyTracker;
use crate::db::store::KeyValueStore;
use crate::errors::AppResult;
use crate::models::remaining::Remaining;
use crate::ui::status_bar::StatusBarItem;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Scoped handle on the refresh loop: dropping it cancels the loop.
pub struct RefreshTimer {
    token: CancellationToken,
}

impl RefreshTimer {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Recompute today's remaining time and push it into the status item.
pub fn refresh_status<S: KeyValueStore, C: Clock>(
    tracker: &mut DailyTracker<S, C>,
    status: &mut StatusBarItem,
) -> AppResult<Remaining> {
    let record = tracker.today_record()?;
    let now = tracker.clock().now_ms();
    let remaining = tracker.remaining(&record, now);

    status.update(&record, remaining);
    Ok(remaining)
}

/// Cancel `token` on Ctrl-C. Returns as soon as the token is cancelled either way.
pub async fn detect_shutdown(token: CancellationToken) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => token.cancel(),
        _ = token.cancelled() => {}
    }
}

/// Tick every `period` (the first tick fires immediately) until `shutdown` is
/// cancelled or `max_ticks` renders happened. Returns the number of renders.
pub async fn run_refresh_loop<S: KeyValueStore, C: Clock>(
    tracker: &mut DailyTracker<S, C>,
    status: &mut StatusBarItem,
    period: Duration,
    shutdown: CancellationToken,
    max_ticks: Option<u64>,
) -> AppResult<u64> {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut ticks = 0u64;

    loop {
        tokio::select! {
            biased;

            _ = shutdown.cancelled() => break,
            _ = ticker.tick() => {
                refresh_status(tracker, status)?;
                status.show();

                ticks += 1;
                if max_ticks.is_some_and(|max| ticks >= max) {
                    break;
                }
            }
        }
    }

    Ok(ticks)
}
