use super::break_interval::BreakInterval;
use super::break_state::BreakState;
use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

/// Everything tracked for one calendar day.
///
/// Serialized in camelCase:
/// `{"arrival":..,"departure":null,"lunchStart":..,"lunchEnd":..,"breaks":[{"start":..,"end":null}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub arrival: Millis,
    #[serde(default)]
    pub departure: Option<Millis>,
    #[serde(default)]
    pub lunch_start: Option<Millis>,
    #[serde(default)]
    pub lunch_end: Option<Millis>,
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
}

impl DailyRecord {
    /// Fresh record: only the arrival is known.
    pub fn new(arrival: Millis) -> Self {
        Self {
            arrival,
            departure: None,
            lunch_start: None,
            lunch_end: None,
            breaks: Vec::new(),
        }
    }

    pub fn break_state(&self) -> BreakState {
        match self.breaks.last() {
            Some(b) if b.is_open() => BreakState::OnBreak,
            _ => BreakState::Idle,
        }
    }

    pub fn open_breaks(&self) -> usize {
        self.breaks.iter().filter(|b| b.is_open()).count()
    }
}
