use crate::core::clock::Clock;
use crate::core::tracker::DailyTracker;
use crate::db::store::KeyValueStore;
use crate::errors::AppResult;
use crate::models::Millis;
use crate::models::daily_record::DailyRecord;
use crate::utils::time::format_clock_secs;

/// The user-facing tracking actions, shared by the CLI commands and the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackAction {
    Arrival,
    Departure,
    LunchStart,
    LunchEnd,
    BreakStart,
    BreakEnd,
}

impl TrackAction {
    /// Name written in the audit log.
    pub fn operation(&self) -> &'static str {
        match self {
            TrackAction::Arrival => "arrival",
            TrackAction::Departure => "departure",
            TrackAction::LunchStart => "lunch_start",
            TrackAction::LunchEnd => "lunch_end",
            TrackAction::BreakStart => "break_start",
            TrackAction::BreakEnd => "break_end",
        }
    }

    /// Whether the action takes an explicit HH:MM instant.
    pub fn takes_time(&self) -> bool {
        !matches!(self, TrackAction::BreakStart | TrackAction::BreakEnd)
    }

    /// Confirmation shown after the record was saved.
    pub fn describe(&self, record: &DailyRecord) -> String {
        let at = |ms: Option<Millis>| ms.map(format_clock_secs).unwrap_or_else(|| "--".into());

        match self {
            TrackAction::Arrival => {
                format!("Arrival time set to {}", format_clock_secs(record.arrival))
            }
            TrackAction::Departure => format!("Departure time set to {}", at(record.departure)),
            TrackAction::LunchStart => format!("Lunch start set to {}", at(record.lunch_start)),
            TrackAction::LunchEnd => format!("Lunch end set to {}", at(record.lunch_end)),
            TrackAction::BreakStart => match record.breaks.last() {
                Some(b) => format!("Break started at {}", format_clock_secs(b.start)),
                None => "Break started".to_string(),
            },
            TrackAction::BreakEnd => match record.breaks.last() {
                Some(b) => format!("Break ended at {}", at(b.end)),
                None => "Break list is empty".to_string(),
            },
        }
    }
}

pub struct TrackLogic;

impl TrackLogic {
    /// Run one action against today's record. `at` is ignored by break actions.
    pub fn apply<S: KeyValueStore, C: Clock>(
        tracker: &mut DailyTracker<S, C>,
        action: TrackAction,
        at: Option<Millis>,
    ) -> AppResult<DailyRecord> {
        match action {
            TrackAction::Arrival => tracker.set_arrival(at),
            TrackAction::Departure => tracker.set_departure(at),
            TrackAction::LunchStart => tracker.set_lunch_start(at),
            TrackAction::LunchEnd => tracker.set_lunch_end(at),
            TrackAction::BreakStart => tracker.start_break(),
            TrackAction::BreakEnd => tracker.end_break(),
        }
    }
}
