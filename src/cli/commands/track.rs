use super::{CliTracker, open_tracker};
use crate::cli::parser::{BreakCommand, Commands};
use crate::config::Config;
use crate::core::refresh::refresh_status;
use crate::core::track::{TrackAction, TrackLogic};
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::Millis;
use crate::models::break_state::BreakState;
use crate::ui::messages::{success, warning};
use crate::ui::status_bar::StatusBarItem;
use crate::utils::time::parse_time_on;

/// Handle `arrival`, `departure`, `lunch-start`, `lunch-end` and `break`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (action, time) = match cmd {
        Commands::Arrival { time } => (TrackAction::Arrival, time.as_deref()),
        Commands::Departure { time } => (TrackAction::Departure, time.as_deref()),
        Commands::LunchStart { time } => (TrackAction::LunchStart, time.as_deref()),
        Commands::LunchEnd { time } => (TrackAction::LunchEnd, time.as_deref()),
        Commands::Break { action } => match action {
            BreakCommand::Start => (TrackAction::BreakStart, None),
            BreakCommand::End => (TrackAction::BreakEnd, None),
        },
        _ => return Ok(()),
    };

    let mut tracker = open_tracker(cfg)?;
    let at = parse_time_on(time, tracker.today())?;

    perform(&mut tracker, action, at)
}

/// Apply one action, audit it, confirm it and refresh the status line.
pub fn perform(tracker: &mut CliTracker, action: TrackAction, at: Option<Millis>) -> AppResult<()> {
    if action == TrackAction::BreakEnd
        && tracker.today_record()?.break_state() == BreakState::Idle
    {
        warning("No break in progress.");
    }

    let record = TrackLogic::apply(tracker, action, at)?;

    let key = tracker.key_for(tracker.today())?;
    let message = action.describe(&record);
    audit(&tracker.store().conn, action.operation(), &key, &message);
    success(&message);

    let mut status = StatusBarItem::new();
    refresh_status(tracker, &mut status)?;
    status.show();

    Ok(())
}
