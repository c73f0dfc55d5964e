use super::{CliTracker, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::refresh::refresh_status;
use crate::errors::AppResult;
use crate::models::break_state::BreakState;
use crate::ui::messages::info;
use crate::ui::status_bar::StatusBarItem;
use crate::utils::time::format_clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Status) {
        let mut tracker = open_tracker(cfg)?;
        render(&mut tracker)?;
    }

    Ok(())
}

/// Print the status line for today, plus a hint while a break is open.
pub fn render(tracker: &mut CliTracker) -> AppResult<()> {
    let mut status = StatusBarItem::new();
    refresh_status(tracker, &mut status)?;
    status.show();

    let record = tracker.today_record()?;
    if record.break_state() == BreakState::OnBreak {
        let since = record.breaks.last().map(|b| b.start);
        info(format!("On break since {}", format_clock(since)));
    }

    Ok(())
}
