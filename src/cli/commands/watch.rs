use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::refresh::{RefreshTimer, detect_shutdown, run_refresh_loop};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::ui::status_bar::StatusBarItem;
use std::time::Duration;

/// Handle the `watch` command: refresh the status line every
/// `refresh_interval_secs` until Ctrl-C.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { ticks } = cmd {
        let mut tracker = open_tracker(cfg)?;
        let period = Duration::from_secs(cfg.refresh_interval_secs);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let rendered = runtime.block_on(async {
            let timer = RefreshTimer::new();
            let mut status = StatusBarItem::new();

            let watcher = tokio::spawn(detect_shutdown(timer.token()));
            let result =
                run_refresh_loop(&mut tracker, &mut status, period, timer.token(), *ticks).await;

            // releasing the timer cancels the token, which also ends the watcher
            drop(timer);
            if let Err(e) = watcher.await {
                warning(format!("Shutdown watcher ended abnormally: {}", e));
            }

            result
        })?;

        info(format!("Refresh stopped after {} update(s).", rendered));
    }

    Ok(())
}
